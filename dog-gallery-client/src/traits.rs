use async_trait::async_trait;

use crate::error::Result;
use crate::types::DogRecord;

/// 分页狗狗数据源 Trait
///
/// 每次调用只请求一页，不做缓存、重试或取消。
#[async_trait]
pub trait DogSource: Send + Sync {
    /// 数据源标识符（用于日志与标题栏）
    fn id(&self) -> &'static str;

    /// 获取第 `page` 页（从 1 开始）
    ///
    /// 成功但为空的页面返回 `Ok(vec![])`，不是错误。
    async fn fetch_page(&self, page: u32) -> Result<Vec<DogRecord>>;
}
