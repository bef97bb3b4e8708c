//! 应用主消息枚举

use super::{ListMessage, PageJumpMessage, PaginationMessage};
use crate::model::FetchCompleted;

/// 应用主消息
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 翻页相关消息
    Pagination(PaginationMessage),

    /// 跳页输入框相关消息
    PageJump(PageJumpMessage),

    /// 列表选择相关消息
    List(ListMessage),

    /// 重新抓取当前页
    Refresh,

    /// 后台抓取任务返回
    FetchCompleted(FetchCompleted),

    /// 关闭当前提示框
    DismissAlert,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
