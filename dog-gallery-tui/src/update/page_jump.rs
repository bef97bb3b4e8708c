//! 跳页输入框更新逻辑

use crate::backend::PaginationStyle;
use crate::message::PageJumpMessage;
use crate::model::{App, FocusPanel};

use super::after_navigation;

/// 处理跳页输入框消息
pub fn update(app: &mut App, msg: PageJumpMessage) {
    match msg {
        PageJumpMessage::Focus => {
            // 页码按钮样式不绘制输入框
            if app.pagination_style != PaginationStyle::PageJump {
                return;
            }
            app.focus = FocusPanel::PageJump;
            // 聚焦即全选：直接输入新页码
            app.page.clear_input();
        }

        PageJumpMessage::Input(c) => {
            if app.focus.is_page_jump() && !c.is_control() {
                app.page.push_char(c);
            }
        }

        PageJumpMessage::Backspace => {
            if app.focus.is_page_jump() {
                app.page.pop_char();
            }
        }

        PageJumpMessage::Commit => {
            let changed = app.page.commit_input();
            after_navigation(app, changed);
        }

        PageJumpMessage::CommitAndBlur => {
            let changed = app.page.commit_input();
            app.focus = FocusPanel::List;
            after_navigation(app, changed);
        }

        PageJumpMessage::Cancel => {
            app.page.discard_input();
            app.focus = FocusPanel::List;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::PaginationMessage;
    use crate::update::tests::mounted;

    fn type_text(app: &mut App, text: &str) {
        update(app, PageJumpMessage::Focus);
        for c in text.chars() {
            update(app, PageJumpMessage::Input(c));
        }
    }

    #[test]
    fn commit_five_from_page_two_fetches_page_five_once() {
        let mut app = mounted();
        crate::update::update(
            &mut app,
            crate::message::AppMessage::Pagination(PaginationMessage::Next),
        );
        app.take_fetch_requests();
        assert_eq!(app.page.current_page(), 2);

        type_text(&mut app, "5");
        update(&mut app, PageJumpMessage::Commit);

        assert_eq!(app.page.current_page(), 5);
        let tickets = app.take_fetch_requests();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].page, 5);
        assert!(app.focus.is_page_jump(), "Enter keeps focus in the field");
    }

    #[test]
    fn invalid_commit_reverts_silently() {
        for bad in ["abc", "0"] {
            let mut app = mounted();
            app.page.go_to_page(2);
            type_text(&mut app, bad);
            update(&mut app, PageJumpMessage::Commit);

            assert_eq!(app.page.current_page(), 2);
            assert_eq!(app.page.pending_input(), "2");
            assert!(app.take_fetch_requests().is_empty());
            assert!(!app.alerts.is_open());
        }
    }

    #[test]
    fn focus_loss_commits() {
        let mut app = mounted();
        type_text(&mut app, "12");
        update(&mut app, PageJumpMessage::CommitAndBlur);
        assert_eq!(app.page.current_page(), 12);
        assert!(app.focus.is_list());
        assert_eq!(app.take_fetch_requests().len(), 1);
    }

    #[test]
    fn blur_without_typing_changes_nothing() {
        let mut app = mounted();
        update(&mut app, PageJumpMessage::Focus);
        update(&mut app, PageJumpMessage::CommitAndBlur);
        assert_eq!(app.page.current_page(), 1);
        assert_eq!(app.page.pending_input(), "1");
        assert!(app.take_fetch_requests().is_empty());
    }

    #[test]
    fn cancel_discards_edit() {
        let mut app = mounted();
        type_text(&mut app, "77");
        update(&mut app, PageJumpMessage::Cancel);
        assert_eq!(app.page.pending_input(), "1");
        assert_eq!(app.page.current_page(), 1);
        assert!(app.focus.is_list());
    }

    #[test]
    fn focus_ignored_in_numbered_style() {
        let mut app = mounted();
        app.pagination_style = PaginationStyle::Numbered;
        update(&mut app, PageJumpMessage::Focus);
        assert!(app.focus.is_list());
        assert_eq!(app.page.pending_input(), "1");
    }

    #[test]
    fn typing_ignored_without_focus() {
        let mut app = mounted();
        update(&mut app, PageJumpMessage::Input('9'));
        update(&mut app, PageJumpMessage::Backspace);
        assert_eq!(app.page.pending_input(), "1");
    }

    #[test]
    fn backspace_edits_field() {
        let mut app = mounted();
        type_text(&mut app, "34");
        update(&mut app, PageJumpMessage::Backspace);
        assert_eq!(app.page.pending_input(), "3");
    }
}
