//! 分页控件
//!
//! `◀ Previous` | 页码按钮 或 跳页输入框 | `Next ▶`

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::backend::PaginationStyle;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub const PREVIOUS_LABEL: &str = "◀ Previous";
pub const NEXT_LABEL: &str = "Next ▶";

/// 渲染分页栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let jump_focused = app.focus.is_page_jump();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(jump_focused));

    let mut spans = vec![Span::raw(" ")];
    spans.push(previous_button(app.page.has_previous()));
    spans.push(Span::raw("  "));

    match app.pagination_style {
        PaginationStyle::Numbered => spans.extend(numbered_buttons(app)),
        PaginationStyle::PageJump => spans.extend(page_jump_field(app, jump_focused)),
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(NEXT_LABEL, button_style()));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn button_style() -> Style {
    Style::default().fg(colors().highlight).add_modifier(Modifier::BOLD)
}

/// 第 1 页时 Previous 不可用
fn previous_button(enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(PREVIOUS_LABEL, button_style())
    } else {
        Span::styled(PREVIOUS_LABEL, Styles::disabled())
    }
}

/// 固定窗口 1..=page_window 的页码按钮，当前页高亮
fn numbered_buttons(app: &App) -> Vec<Span<'static>> {
    let c = colors();
    let current = app.page.current_page();
    (1..=app.page_window)
        .map(|n| {
            if n == current {
                Span::styled(format!("[{n}]"), Styles::selected())
            } else {
                Span::styled(format!(" {n} "), Style::default().fg(c.fg))
            }
        })
        .collect()
}

/// 跳页输入框
fn page_jump_field(app: &App, focused: bool) -> Vec<Span<'static>> {
    let c = colors();
    let input = app.page.pending_input();
    let field_style = if focused {
        Style::default().fg(c.selected_fg).bg(c.selected_bg)
    } else {
        Style::default().fg(c.fg).add_modifier(Modifier::UNDERLINED)
    };
    let cursor = if focused { "▏" } else { "" };

    vec![
        Span::styled("Page ", Style::default().fg(c.muted)),
        Span::styled(format!(" {input}{cursor} "), field_style),
    ]
}
