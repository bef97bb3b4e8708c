//! src/view/mod.rs
//! View 层：只读 Model，绘制一帧
//!
//!     ┌──────────────────────────────────────────┐
//!     │ 标题栏：Dog Gallery · 数据源              │
//!     ├──────────────────────────────────────────┤
//!     │ 列表区：加载中 / 记录 / 空 / 失败          │
//!     ├──────────────────────────────────────────┤
//!     │ 分页栏：◀ Previous  …  Next ▶             │
//!     ├──────────────────────────────────────────┤
//!     │ 状态栏：快捷键提示 · 页码 · 状态消息        │
//!     └──────────────────────────────────────────┘
//!
//! 提示框打开时在最上层居中绘制。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
