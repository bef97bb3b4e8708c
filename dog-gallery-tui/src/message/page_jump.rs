//! 跳页输入框消息

/// 跳页输入框消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageJumpMessage {
    /// 聚焦输入框
    Focus,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 提交（Enter），焦点保持
    Commit,
    /// 提交并离开输入框（失焦即提交）
    CommitAndBlur,
    /// 放弃编辑并离开输入框
    Cancel,
}
