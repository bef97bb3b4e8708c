//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务无关的代码：终端的初始化与恢复，以及日志。
//!
//!     src/util/mod.rs
//!         mod logging;        // tracing 订阅者，写入缓存目录的日志文件
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显
//!         - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!     · Alternate Screen（备用屏幕）
//!         - 退出后恢复主屏幕内容，类似 vim、htop
//!
//!     · 日志不能写 stdout（会弄花界面），因此写文件：
//!         <cache_dir>/dog-gallery/dog-gallery.log.YYYY-MM-DD
//!       级别由 DOG_GALLERY_LOG 控制（EnvFilter 语法，默认 info）。
//!
//! 无论 app::run 成功与否，main 都要先 restore_terminal 再返回结果；
//! panic 时由 install_panic_hook 负责恢复。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
