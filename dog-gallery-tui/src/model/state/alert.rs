//! 阻塞式提示框状态
//!
//! 提示框打开时，除关闭键以外的所有输入都被忽略。
//! 多条提示按到达顺序排队，逐条关闭。

use std::collections::VecDeque;

/// 提示框队列
#[derive(Debug, Default)]
pub struct AlertState {
    queue: VecDeque<String>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有提示框打开
    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    /// 当前显示的提示
    pub fn current(&self) -> Option<&str> {
        self.queue.front().map(String::as_str)
    }

    /// 排队等待显示的提示数（不含当前）
    pub fn queued(&self) -> usize {
        self.queue.len().saturating_sub(1)
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.queue.push_back(message.into());
    }

    /// 关闭当前提示
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }
}
