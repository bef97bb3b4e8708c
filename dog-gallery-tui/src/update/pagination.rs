//! 翻页更新逻辑

use crate::message::PaginationMessage;
use crate::model::App;

use super::after_navigation;

/// 处理翻页消息
pub fn update(app: &mut App, msg: PaginationMessage) {
    let changed = match msg {
        PaginationMessage::Previous => app.page.go_to_previous(),
        PaginationMessage::Next => app.page.go_to_next(),
        PaginationMessage::GoTo(page) => app.page.go_to_page(page),
    };
    after_navigation(app, changed);
}
