//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::backend::PaginationStyle;
use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 当前页 / 请求状态
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::raw(page_summary(app)));

    // 当前选中的记录
    if let Some(record) = app.fetch.selected_record() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("▸ {}", record.breed)));
    }

    // 如果有状态消息，显示在最右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn page_summary(app: &App) -> String {
    let page = app.page.current_page();
    if app.fetch.is_loading {
        format!("Page {page} · loading")
    } else if app.fetch.last_error.is_some() {
        format!("Page {page} · failed")
    } else {
        format!("Page {page} · {} dogs", app.fetch.records.len())
    }
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.alerts.is_open() {
        return vec![("Enter/Esc", "Dismiss")];
    }

    let mut hints = Vec::new();
    match app.focus {
        FocusPanel::List => {
            hints.push(("←→", "Page"));
            hints.push(("↑↓", "Select"));
            match app.pagination_style {
                PaginationStyle::Numbered => hints.push(("1-9,0", "Go to")),
                PaginationStyle::PageJump => hints.push(("Tab", "Jump")),
            }
            hints.push(("r", "Refresh"));
            hints.push(("q", "Quit"));
        }
        FocusPanel::PageJump => {
            hints.push(("Enter", "Go"));
            hints.push(("Tab", "Go & Leave"));
            hints.push(("Esc", "Cancel"));
        }
    }
    hints
}
