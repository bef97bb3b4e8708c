//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));

    // 翻页
    pub const PAGE_PREV: [KeyBinding; 3] = [
        KeyBinding::key(KeyCode::Left),
        KeyBinding::key(KeyCode::Char('h')),
        KeyBinding::key(KeyCode::PageUp),
    ];
    pub const PAGE_NEXT: [KeyBinding; 3] = [
        KeyBinding::key(KeyCode::Right),
        KeyBinding::key(KeyCode::Char('l')),
        KeyBinding::key(KeyCode::PageDown),
    ];

    // 跳页输入框
    pub const FOCUS_PAGE_JUMP: [KeyBinding; 3] = [
        KeyBinding::key(KeyCode::Tab),
        KeyBinding::key(KeyCode::Char('/')),
        KeyBinding::key(KeyCode::Char('g')),
    ];
}

/// 是否匹配一组绑定中的任意一个
pub fn matches_any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|b| b.matches(key))
}
