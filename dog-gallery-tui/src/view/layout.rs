//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 列表区 + 分页栏 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(3),    // 列表区
            Constraint::Length(3), // 分页栏
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_list_area(app, frame, main_layout[1]);
    components::pagination::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 提示框（在最上层）
    components::alert::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " Dog Gallery v{} · {}",
        env!("CARGO_PKG_VERSION"),
        app.source_label
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染列表区域（带边框）
fn render_list_area(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" Dogs · Page {} ", app.page.current_page()))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_list()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::dogs::render(app, frame, inner_area);
}

#[cfg(test)]
mod tests {
    use dog_gallery_client::{ClientError, DogRecord, PLACEHOLDER_IMAGE_URL, SERVER_ERROR_MESSAGE};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::backend::{AppConfig, PaginationStyle};
    use crate::message::AppMessage;
    use crate::model::FetchCompleted;
    use crate::update::update;
    use crate::view::components::pagination::PREVIOUS_LABEL;
    use crate::view::pages::dogs::{EMPTY_TEXT, LOADING_TEXT};

    fn draw(app: &App) -> Buffer {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen(app: &App) -> String {
        lines(&draw(app)).join("\n")
    }

    /// 用给定结果完成最新请求
    fn finish(app: &mut App, result: Result<Vec<DogRecord>, ClientError>) {
        let seq = app.fetch.latest_seq();
        let page = app.page.current_page();
        update(app, AppMessage::FetchCompleted(FetchCompleted { seq, page, result }));
    }

    #[test]
    fn loading_replaces_list_but_keeps_pagination() {
        let app = App::default();
        let text = screen(&app);
        assert!(text.contains(LOADING_TEXT));
        assert!(text.contains(PREVIOUS_LABEL));
        assert!(text.contains("Next"));
    }

    #[test]
    fn records_render_in_order() {
        let mut app = App::default();
        finish(
            &mut app,
            Ok(vec![
                DogRecord::new("Beagle", "https://img/beagle.jpg"),
                DogRecord::new("Akita", "https://img/akita.jpg"),
                DogRecord::new("Pug", "https://img/pug.jpg"),
            ]),
        );
        let rows = lines(&draw(&app));
        let row_of = |needle: &str| rows.iter().position(|l| l.contains(needle)).unwrap();

        assert!(row_of("Beagle") < row_of("Akita"));
        assert!(row_of("Akita") < row_of("Pug"));
        assert!(rows[row_of("Beagle")].contains("https://img/beagle.jpg"));
        assert!(!screen(&app).contains(LOADING_TEXT));
    }

    #[test]
    fn empty_image_shows_placeholder() {
        let mut app = App::default();
        finish(&mut app, Ok(vec![DogRecord::new("Mystery", "")]));
        let rows = lines(&draw(&app));
        let row = rows.iter().find(|l| l.contains("Mystery")).unwrap();
        assert!(row.contains(PLACEHOLDER_IMAGE_URL));
    }

    #[test]
    fn empty_page_shows_no_dogs_found() {
        let mut app = App::default();
        finish(&mut app, Ok(vec![]));
        assert!(screen(&app).contains(EMPTY_TEXT));
    }

    #[test]
    fn failure_shows_alert_text() {
        let mut app = App::default();
        finish(&mut app, Err(ClientError::Server));
        let text = screen(&app);
        assert!(text.contains(SERVER_ERROR_MESSAGE));
        assert!(text.contains("Error"));
        // 列表本身只看记录：失败后同样是空状态
        assert!(text.contains(EMPTY_TEXT));
        assert!(text.contains("failed"));

        update(&mut app, AppMessage::DismissAlert);
        let text = screen(&app);
        assert!(!text.contains(SERVER_ERROR_MESSAGE));
        assert!(text.contains(EMPTY_TEXT));
    }

    /// Previous 按钮是否以不可用样式绘制
    fn previous_is_dim(app: &App) -> bool {
        let buffer = draw(app);
        let rows = lines(&buffer);
        let y = rows.iter().position(|l| l.contains(PREVIOUS_LABEL)).unwrap();
        let x = rows[y].find("Previous").unwrap();
        // 该行字符均为单列宽
        let col = u16::try_from(rows[y][..x].chars().count()).unwrap();
        buffer[(col, u16::try_from(y).unwrap())]
            .modifier
            .contains(Modifier::DIM)
    }

    #[test]
    fn previous_is_disabled_on_first_page() {
        let mut app = App::default();
        assert!(previous_is_dim(&app));

        update(
            &mut app,
            AppMessage::Pagination(crate::message::PaginationMessage::Next),
        );
        assert!(!previous_is_dim(&app));
    }

    #[test]
    fn numbered_style_highlights_current_page() {
        let app = App::new(&AppConfig {
            pagination_style: PaginationStyle::Numbered,
            page_window: 5,
            ..AppConfig::default()
        });
        let text = screen(&app);
        assert!(text.contains("[1]"));
        assert!(text.contains(" 5 "));
        assert!(!text.contains(" 6 "));
    }

    #[test]
    fn page_jump_style_shows_pending_input() {
        let app = App::default();
        let rows = lines(&draw(&app));
        let bar = rows.iter().find(|l| l.contains(PREVIOUS_LABEL)).unwrap();
        assert!(bar.contains("Page  1 "));
    }
}
