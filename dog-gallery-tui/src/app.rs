//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时 App 的状态：
//!
//! App {
//!     should_quit: false,
//!     focus: FocusPanel::List,
//!     page: PageState { current_page: 1, pending_input: "1" },
//!     fetch: FetchState { is_loading: true, .. },     // 第 1 页的请求已签发
//!     alerts: 空,
//!     ..
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }
//!     while let Ok(done) = rx.try_recv() {             // 收取已完成的抓取任务
//!         update(&mut app, FetchCompleted(done))           // 过期的结果在这里被丢弃
//!     }
//!     for ticket in app.take_fetch_requests() {        // 派发新签发的请求
//!         fetcher.dispatch(ticket)
//!     }
//!     if let Some(event) = poll_event() {              // 等待输入，最多 100ms
//!         let msg = handle_event(event, &app);
//!         update(&mut app, msg)
//!     }
//! }
//!
//! 网络请求只在 tokio 任务里执行；Model 只在这个线程里被修改。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Fetcher;
use crate::event;
use crate::message::AppMessage;
use crate::model::{App, FetchCompleted};
use crate::update;
use crate::util::Term;
use crate::view;

/// 轮询输入的超时
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    fetcher: &Fetcher,
    results: &mut UnboundedReceiver<FetchCompleted>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 收取抓取结果，派发新请求
        pump(app, fetcher, results);

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK)? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    tracing::info!("main loop finished");
    Ok(())
}

/// 应用已到达的结果，并把新签发的请求交给派发器
fn pump(app: &mut App, fetcher: &Fetcher, results: &mut UnboundedReceiver<FetchCompleted>) {
    while let Ok(outcome) = results.try_recv() {
        update::update(app, AppMessage::FetchCompleted(outcome));
    }
    for ticket in app.take_fetch_requests() {
        fetcher.dispatch(ticket);
    }
}
