//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::backend::PaginationStyle;
use crate::event::keymap::{matches_any, DefaultKeymap};
use crate::message::{AppMessage, ListMessage, PageJumpMessage, PaginationMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 提示框是阻塞的：只响应关闭
    if app.alerts.is_open() {
        return handle_alert_keys(key);
    }

    if app.focus.is_page_jump() {
        handle_page_jump_keys(key)
    } else {
        handle_list_keys(key, app)
    }
}

/// 提示框打开时的按键
fn handle_alert_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => AppMessage::DismissAlert,
        _ => AppMessage::Noop,
    }
}

/// 跳页输入框聚焦时的按键：按键即文本
fn handle_page_jump_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::PageJump(PageJumpMessage::Commit),
        // 失焦即提交
        KeyCode::Tab | KeyCode::BackTab => AppMessage::PageJump(PageJumpMessage::CommitAndBlur),
        KeyCode::Esc => AppMessage::PageJump(PageJumpMessage::Cancel),
        KeyCode::Backspace => AppMessage::PageJump(PageJumpMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::PageJump(PageJumpMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 列表聚焦时的按键
fn handle_list_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if matches_any(&DefaultKeymap::PAGE_PREV, &key) {
        return AppMessage::Pagination(PaginationMessage::Previous);
    }
    if matches_any(&DefaultKeymap::PAGE_NEXT, &key) {
        return AppMessage::Pagination(PaginationMessage::Next);
    }
    // 页码按钮样式下没有跳页输入框
    if app.pagination_style == PaginationStyle::PageJump
        && matches_any(&DefaultKeymap::FOCUS_PAGE_JUMP, &key)
    {
        return AppMessage::PageJump(PageJumpMessage::Focus);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        // 数字键：页码按钮（0 表示第 10 页）
        KeyCode::Char(c) if c.is_ascii_digit() && key.modifiers.is_empty() => {
            numbered_page(c, app)
        }
        _ => AppMessage::Noop,
    }
}

/// 数字键对应的页码按钮；不在窗口内或不是页码按钮样式时忽略
fn numbered_page(c: char, app: &App) -> AppMessage {
    if app.pagination_style != PaginationStyle::Numbered {
        return AppMessage::Noop;
    }
    let page = match c.to_digit(10) {
        Some(0) => 10,
        Some(d) => d,
        None => return AppMessage::Noop,
    };
    if page > app.page_window {
        return AppMessage::Noop;
    }
    AppMessage::Pagination(PaginationMessage::GoTo(page))
}
