//! src/event/mod.rs
//! Event 层：把终端输入翻译成 AppMessage
//!
//! 翻译规则取决于当前状态：
//!     · 提示框打开     → 只有 Enter / Esc / Space（关闭）与 Ctrl+C（退出）
//!     · 跳页输入框聚焦 → 按键作为文本，Enter 提交，Tab 提交并失焦，Esc 放弃
//!     · 列表聚焦       → 翻页、行选择、刷新、页码数字键

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
