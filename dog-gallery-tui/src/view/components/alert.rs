//! 阻塞式提示框

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

const ALERT_WIDTH: u16 = 50;

/// 计算居中的区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染提示框（若有）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(message) = app.alerts.current() else {
        return;
    };
    let c = colors();

    // 按宽度估算正文行数：边框 2 行 + 空行 + 提示 1 行
    let text_width = usize::from(ALERT_WIDTH.saturating_sub(4)).max(1);
    let body_lines = u16::try_from(message.chars().count().div_ceil(text_width).max(1))
        .unwrap_or(u16::MAX);
    let height = body_lines.saturating_add(5);
    let area = centered_rect(ALERT_WIDTH, height, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let queued = app.alerts.queued();
    let title = if queued > 0 {
        format!(" Error (+{queued} more) ")
    } else {
        " Error ".to_string()
    };

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(c.error).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error));

    let content = vec![
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Enter / Esc to dismiss", Styles::hint_desc().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
