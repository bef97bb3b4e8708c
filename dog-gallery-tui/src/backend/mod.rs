//! src/backend/mod.rs
//! Backend 层：与 UI 解耦的服务
//!
//!     ┌──────────┐  FetchTicket   ┌──────────┐  fetch_page()  ┌───────────────────┐
//!     │  主循环   │ ─────────────▶ │ Fetcher  │ ─────────────▶ │ dog-gallery-client│
//!     │ (app.rs) │ ◀───────────── │ (tokio)  │ ◀───────────── │   DogSource       │
//!     └──────────┘ FetchCompleted └──────────┘                └───────────────────┘
//!
//! 有模块结构：
//!     mod config_service;   // 配置文件 + 环境变量覆盖
//!     mod fetcher;          // 每个请求一个 tokio 任务，结果经 mpsc 通道送回

mod config_service;
mod fetcher;

pub use config_service::{AppConfig, LocalConfigService, PaginationStyle, APP_DIR_NAME};
pub use fetcher::Fetcher;
