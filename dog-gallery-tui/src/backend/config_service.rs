//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dog_gallery_client::SourceSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::theme::Theme;

/// 配置文件所在子目录
pub const APP_DIR_NAME: &str = "dog-gallery";
/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 覆盖 `api_base_url` 的环境变量
pub const ENV_API_URL: &str = "DOG_GALLERY_API_URL";
/// 覆盖 `source` 的环境变量（`http` / `demo`）
pub const ENV_SOURCE: &str = "DOG_GALLERY_SOURCE";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_PAGE_WINDOW: u32 = 10;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// 数据源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Http,
    Demo,
}

impl SourceKind {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "http" => Some(Self::Http),
            "demo" => Some(Self::Demo),
            _ => None,
        }
    }
}

/// 分页控件样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStyle {
    /// 跳页输入框
    #[default]
    PageJump,
    /// 固定窗口的页码按钮
    Numbered,
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub source: SourceKind,
    pub pagination_style: PaginationStyle,
    pub page_window: u32,
    pub theme: Theme,
    /// 请求超时（秒）；不设置则不超时
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// 演示数据源的模拟延迟（毫秒）
    pub demo_latency_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            source: SourceKind::default(),
            pagination_style: PaginationStyle::default(),
            page_window: DEFAULT_PAGE_WINDOW,
            theme: Theme::Dark,
            request_timeout_secs: None,
            demo_latency_ms: 300,
        }
    }
}

impl AppConfig {
    /// 检查配置是否可用
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_window == 0 {
            return Err(ConfigError::Invalid("page_window must be at least 1".into()));
        }
        if self.source == SourceKind::Http {
            let url = self.api_base_url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "api_base_url must start with http:// or https://, got {url:?}"
                )));
            }
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be positive when set".into(),
            ));
        }
        Ok(())
    }

    /// 用环境变量覆盖配置
    ///
    /// `lookup` 通常是 `std::env::var(..).ok()`，测试时可替换。
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_SOURCE) {
            match SourceKind::from_env_value(&raw) {
                Some(kind) => self.source = kind,
                None => tracing::warn!("ignoring unknown {ENV_SOURCE} value {raw:?}"),
            }
        }
    }

    /// 转换为客户端库的数据源参数
    pub fn source_settings(&self) -> SourceSettings {
        match self.source {
            SourceKind::Http => SourceSettings::Http {
                base_url: self.api_base_url.clone(),
                timeout: self.request_timeout_secs.map(Duration::from_secs),
            },
            SourceKind::Demo => SourceSettings::Demo {
                latency: Duration::from_millis(self.demo_latency_ms),
            },
        }
    }

    /// 标题栏中的数据源描述
    pub fn source_label(&self) -> String {
        match self.source {
            SourceKind::Http => self.api_base_url.trim_end_matches('/').to_string(),
            SourceKind::Demo => "demo data".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置（不校验：环境变量覆盖之后再调用 `AppConfig::validate`）
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用平台配置目录：`<config_dir>/dog-gallery/config.json`
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 使用指定路径
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载配置；文件不存在时尝试写入默认配置，方便用户编辑
    ///
    /// 写入失败不影响启动，仍使用默认配置。
    pub fn load_or_init(&self) -> Result<AppConfig, ConfigError> {
        if self.path.exists() {
            return self.load();
        }
        let config = AppConfig::default();
        match self.save(&config) {
            Ok(()) => tracing::info!("wrote default config to {}", self.path.display()),
            Err(e) => tracing::warn!("using default config, could not write it: {e}"),
        }
        Ok(config)
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let config = match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(io_err)
    }
}
