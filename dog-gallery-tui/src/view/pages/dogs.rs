//! 狗狗列表视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 加载中的提示
pub const LOADING_TEXT: &str = "Loading dogs...";
/// 空页面的提示
pub const EMPTY_TEXT: &str = "No dogs found.";

/// 品种列宽度上限
const MAX_BREED_WIDTH: usize = 28;

/// 渲染列表区域
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 加载中只显示指示器
    if app.fetch.is_loading {
        render_loading(app, frame, area);
    } else if app.fetch.records.is_empty() {
        render_empty(frame, area);
    } else {
        render_list(app, frame, area);
    }
}

fn render_loading(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {LOADING_TEXT}"), Style::default().fg(c.warning)),
        Line::styled(
            format!("  page {}", app.page.current_page()),
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {EMPTY_TEXT}"), Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            "  Press ← to go back a page.",
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染记录列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let records = &app.fetch.records;

    // 品种列按本页最长的名字对齐
    let breed_width = records
        .iter()
        .map(|r| r.breed.width())
        .max()
        .unwrap_or(0)
        .min(MAX_BREED_WIDTH);

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let is_selected = i == app.fetch.selected;
            let breed = pad_to_width(&record.breed, breed_width);

            let image_style = if record.uses_placeholder() {
                Style::default().fg(c.muted).add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(c.success)
            };

            let line = Line::from(vec![
                Span::raw(if is_selected { "▸ " } else { "  " }),
                Span::styled(breed, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(record.image_url().to_string(), image_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.fetch.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 按显示宽度截断并补齐
fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_to_width_pads_and_truncates() {
        assert_eq!(pad_to_width("Pug", 6), "Pug   ");
        assert_eq!(pad_to_width("Labrador", 4), "Labr");
        assert_eq!(pad_to_width("柴犬", 5), "柴犬 ");
    }
}
