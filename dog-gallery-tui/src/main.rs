//! Dog Gallery TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与抓取任务派发 (`backend/`)
//!
//!
//! main.rs 的执行顺序：
//!
//!     init_logging()            // 日志写文件，guard 活到 main 结束
//!     load_or_init() + 环境变量  // <config_dir>/dog-gallery/config.json
//!     set_theme()
//!     Runtime::new()            // 抓取任务跑在 tokio 多线程运行时上
//!     create_source()           // http 或 demo 数据源
//!     init_terminal()
//!     App::new()                // 第 1 页的请求已签发
//!     app::run()                // 主循环
//!     restore_terminal()        // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use dog_gallery_client::create_source;

use backend::{Fetcher, LocalConfigService};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志
    let _log_guard = init_logging().context("failed to initialise logging")?;
    tracing::info!("starting dog-gallery-tui v{}", env!("CARGO_PKG_VERSION"));

    // 2. 配置（文件 + 环境变量）
    let config_service = LocalConfigService::new();
    let mut config = config_service
        .load_or_init()
        .with_context(|| format!("failed to load {}", config_service.path().display()))?;
    config.apply_overrides(|key| std::env::var(key).ok());
    config.validate()?;
    view::theme::set_theme(config.theme);

    // 3. 运行时与数据源
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let source = create_source(config.source_settings())?;
    let (fetcher, mut results) = Fetcher::new(source, runtime.handle().clone());
    tracing::info!(source = fetcher.source_id(), "data source ready");

    // 4. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(&config);

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &fetcher, &mut results);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("exiting with error: {e:#}");
    }

    // 8. 返回结果
    result
}
