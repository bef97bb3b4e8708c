//! 抓取状态
//!
//! 每次页码变化签发一张带递增序号的 `FetchTicket`；
//! 结果回来时只接受序号等于最新序号的那一个，旧结果直接丢弃。

use dog_gallery_client::{ClientError, DogRecord};

/// 一次已签发的请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub page: u32,
}

/// 抓取任务的结果（由后台任务发回主循环）
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCompleted {
    pub seq: u64,
    pub page: u32,
    pub result: Result<Vec<DogRecord>, ClientError>,
}

/// 结果被应用后的分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// 已被更新的请求取代，丢弃
    Stale,
    /// 成功，有记录
    Loaded(usize),
    /// 成功，但页面为空
    Empty,
    /// 失败，附带面向用户的消息
    Failed(String),
}

/// 抓取状态
#[derive(Debug, Default)]
pub struct FetchState {
    /// 最新请求是否尚未返回
    pub is_loading: bool,
    /// 当前显示的记录
    pub records: Vec<DogRecord>,
    /// 最近一次失败的消息
    pub last_error: Option<String>,
    /// 当前记录对应的页码
    pub loaded_page: Option<u32>,
    /// 当前选中的行
    pub selected: usize,
    /// 最近签发的序号（0 表示尚未签发）
    latest_seq: u64,
}

impl FetchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// 为 `page` 签发新请求，并进入加载状态
    pub fn begin(&mut self, page: u32) -> FetchTicket {
        self.latest_seq += 1;
        self.is_loading = true;
        FetchTicket {
            seq: self.latest_seq,
            page,
        }
    }

    /// 应用一个结果
    ///
    /// 结果整体替换记录列表，不做合并。
    pub fn complete(&mut self, outcome: FetchCompleted) -> Completion {
        if outcome.seq != self.latest_seq {
            return Completion::Stale;
        }

        self.is_loading = false;
        self.selected = 0;
        self.loaded_page = Some(outcome.page);

        match outcome.result {
            Ok(records) if records.is_empty() => {
                self.records.clear();
                self.last_error = None;
                Completion::Empty
            }
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.last_error = None;
                Completion::Loaded(count)
            }
            Err(err) => {
                let message = err.to_string();
                self.records.clear();
                self.last_error = Some(message.clone());
                Completion::Failed(message)
            }
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.records.len() {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.records.len().saturating_sub(1);
    }

    /// 获取当前选中的记录
    pub fn selected_record(&self) -> Option<&DogRecord> {
        self.records.get(self.selected)
    }
}
