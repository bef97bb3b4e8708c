//! 应用主状态结构

use crate::backend::{AppConfig, PaginationStyle};

use super::{AlertState, FetchState, FetchTicket, FocusPanel, PageState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: FocusPanel,

    /// 分页状态（唯一能改变当前页的地方）
    pub page: PageState,

    /// 抓取状态
    pub fetch: FetchState,

    /// 阻塞式提示框
    pub alerts: AlertState,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 显示选项 ===
    /// 页码按钮 / 跳页输入框
    pub pagination_style: PaginationStyle,
    /// 页码按钮窗口大小（1..=page_window）
    pub page_window: u32,
    /// 数据源描述（标题栏显示）
    pub source_label: String,

    /// 等待主循环派发的请求
    outbox: Vec<FetchTicket>,
}

impl App {
    /// 创建新的应用实例，并为第 1 页签发首个请求
    pub fn new(config: &AppConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::List,
            page: PageState::new(),
            fetch: FetchState::new(),
            alerts: AlertState::new(),
            status_message: None,
            pagination_style: config.pagination_style,
            page_window: config.page_window.max(1),
            source_label: config.source_label(),
            outbox: Vec::new(),
        };

        app.request_fetch();

        app
    }

    /// 为当前页签发请求
    pub fn request_fetch(&mut self) -> FetchTicket {
        let ticket = self.fetch.begin(self.page.current_page());
        self.outbox.push(ticket);
        ticket
    }

    /// 取出待派发的请求（由主循环调用）
    pub fn take_fetch_requests(&mut self) -> Vec<FetchTicket> {
        std::mem::take(&mut self.outbox)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
