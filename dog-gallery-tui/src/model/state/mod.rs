//! 各部分状态定义

mod alert;
mod fetch;
mod page;

pub use alert::AlertState;
pub use fetch::{Completion, FetchCompleted, FetchState, FetchTicket};
pub use page::PageState;
