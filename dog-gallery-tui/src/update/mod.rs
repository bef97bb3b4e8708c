//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!     pub fn update(app: &mut App, msg: AppMessage)
//!
//! 页码发生变化时调用 `App::request_fetch()`：每次变化恰好签发一个请求。
//! 提示框打开时，除关闭、退出与抓取结果以外的消息全部忽略。
//!
//! 有模块结构：
//!     mod pagination;   // 上一页 / 下一页 / 页码按钮
//!     mod page_jump;    // 跳页输入框
//!     mod fetch;        // 抓取结果（序号过滤）

mod fetch;
mod page_jump;
mod pagination;

use crate::message::{AppMessage, ListMessage};
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    if app.alerts.is_open() && !passes_alert(&msg) {
        return;
    }

    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Pagination(pagination_msg) => {
            pagination::update(app, pagination_msg);
        }

        AppMessage::PageJump(page_jump_msg) => {
            page_jump::update(app, page_jump_msg);
        }

        AppMessage::List(list_msg) => match list_msg {
            ListMessage::SelectPrevious => app.fetch.select_previous(),
            ListMessage::SelectNext => app.fetch.select_next(),
            ListMessage::SelectFirst => app.fetch.select_first(),
            ListMessage::SelectLast => app.fetch.select_last(),
        },

        AppMessage::Refresh => {
            let ticket = app.request_fetch();
            app.set_status(format!("Refreshing page {}...", ticket.page));
        }

        AppMessage::FetchCompleted(outcome) => {
            fetch::update(app, outcome);
        }

        AppMessage::DismissAlert => {
            app.alerts.dismiss();
        }

        AppMessage::Noop => {}
    }
}

/// 提示框打开时仍然放行的消息
fn passes_alert(msg: &AppMessage) -> bool {
    matches!(
        msg,
        AppMessage::Quit | AppMessage::DismissAlert | AppMessage::FetchCompleted(_) | AppMessage::Noop
    )
}

/// 导航结束后的统一处理：页码变了就抓取
fn after_navigation(app: &mut App, changed: bool) {
    if changed {
        app.request_fetch();
        app.clear_status();
    }
}
