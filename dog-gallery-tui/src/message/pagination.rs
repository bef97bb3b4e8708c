//! 翻页消息

/// 翻页消息（改变当前页的唯一入口之一）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMessage {
    /// 上一页
    Previous,
    /// 下一页
    Next,
    /// 页码按钮
    GoTo(u32),
}
