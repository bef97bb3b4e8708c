//! src/message/mod.rs
//! Message 层：Event 层与 Update 层之间的“语言”
//!
//!     按键 ──▶ Event 层 ──▶ AppMessage ──▶ Update 层
//!     抓取任务结果 ─────────▶ AppMessage::FetchCompleted ──▶ Update 层
//!
//! 有模块结构：
//!     mod app;          // AppMessage：顶层消息
//!     mod pagination;   // 上一页 / 下一页 / 页码按钮
//!     mod page_jump;    // 跳页输入框编辑与提交
//!     mod list;         // 列表行选择

mod app;
mod list;
mod page_jump;
mod pagination;

pub use app::AppMessage;
pub use list::ListMessage;
pub use page_jump::PageJumpMessage;
pub use pagination::PaginationMessage;
