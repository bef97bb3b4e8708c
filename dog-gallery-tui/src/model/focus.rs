//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 记录列表（翻页快捷键生效）
    #[default]
    List,
    /// 跳页输入框（按键作为文本输入）
    PageJump,
}

impl FocusPanel {
    /// 是否是列表
    pub fn is_list(self) -> bool {
        matches!(self, FocusPanel::List)
    }

    /// 是否是跳页输入框
    pub fn is_page_jump(self) -> bool {
        matches!(self, FocusPanel::PageJump)
    }
}
