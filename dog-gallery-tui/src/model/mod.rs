//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 只保存数据，不做 I/O。
//!
//!     App
//!      ├── page: PageState        当前页 + 跳页输入框
//!      ├── fetch: FetchState      加载标记 / 记录 / 错误 / 请求序号
//!      ├── alerts: AlertState     阻塞式提示框队列
//!      └── focus: FocusPanel      列表 或 跳页输入框
//!
//! 页码变化时，Update 层调用 `App::request_fetch()` 签发带序号的请求，
//! 请求先放进 App 内部的发件箱，再由主循环交给 Backend 层执行。

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{
    AlertState, Completion, FetchCompleted, FetchState, FetchTicket, PageState,
};
