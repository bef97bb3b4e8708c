//! 日志初始化
//!
//! 终端界面占用 stdout，日志写入缓存目录下的按天滚动文件。
//! 客户端库使用 `log` 门面，经 tracing-log 桥接到同一个订阅者。

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::APP_DIR_NAME;

/// 控制日志级别的环境变量
pub const ENV_LOG: &str = "DOG_GALLERY_LOG";

const LOG_FILE_PREFIX: &str = "dog-gallery.log";

/// 日志目录：`<cache_dir>/dog-gallery/`
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

/// 初始化全局订阅者
///
/// 返回的 guard 必须活到程序结束，否则缓冲中的日志会丢失。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    tracing::debug!("logging to {}", dir.display());
    Ok(guard)
}
