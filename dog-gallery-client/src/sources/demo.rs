//! 内置演示数据源（无需网络）

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::DogSource;
use crate::types::DogRecord;

/// 演示数据源每页条数
pub const DEMO_PAGE_SIZE: usize = 5;

const SAMPLE_IMAGE: &str = "https://picsum.photos/536/354";

const CATALOGUE: &[(&str, &str)] = &[
    ("Labrador Retriever", SAMPLE_IMAGE),
    ("German Shepherd", SAMPLE_IMAGE),
    ("Golden Retriever", SAMPLE_IMAGE),
    ("Bulldog", SAMPLE_IMAGE),
    ("Poodle", SAMPLE_IMAGE),
    ("Beagle", SAMPLE_IMAGE),
    ("Rottweiler", ""),
    ("Dachshund", SAMPLE_IMAGE),
    ("Yorkshire Terrier", SAMPLE_IMAGE),
    ("Boxer", SAMPLE_IMAGE),
    ("Siberian Husky", SAMPLE_IMAGE),
    ("Shih Tzu", ""),
    ("Doberman Pinscher", SAMPLE_IMAGE),
    ("Great Dane", SAMPLE_IMAGE),
    ("Border Collie", SAMPLE_IMAGE),
    ("Pembroke Welsh Corgi", SAMPLE_IMAGE),
    ("Australian Shepherd", SAMPLE_IMAGE),
    ("Bernese Mountain Dog", ""),
    ("Cavalier King Charles Spaniel", SAMPLE_IMAGE),
    ("Shiba Inu", SAMPLE_IMAGE),
    ("Pug", SAMPLE_IMAGE),
    ("Chihuahua", SAMPLE_IMAGE),
    ("Samoyed", SAMPLE_IMAGE),
];

/// 演示数据源
///
/// 按 [`DEMO_PAGE_SIZE`] 切分固定目录；超出范围的页返回空列表。
/// `latency` 用于模拟网络延迟，便于观察加载状态。
#[derive(Debug, Clone, Default)]
pub struct DemoDogSource {
    latency: Duration,
}

impl DemoDogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置模拟延迟
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// 目录总条数
    pub fn len(&self) -> usize {
        CATALOGUE.len()
    }

    pub fn is_empty(&self) -> bool {
        CATALOGUE.is_empty()
    }

    fn page(page: u32) -> Vec<DogRecord> {
        let index = usize::try_from(page.saturating_sub(1)).unwrap_or(usize::MAX);
        let start = index.saturating_mul(DEMO_PAGE_SIZE);
        CATALOGUE
            .iter()
            .skip(start)
            .take(DEMO_PAGE_SIZE)
            .map(|(breed, image)| DogRecord::new(*breed, *image))
            .collect()
    }
}

#[async_trait]
impl DogSource for DemoDogSource {
    fn id(&self) -> &'static str {
        "demo"
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<DogRecord>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let dogs = Self::page(page);
        log::debug!("[demo] page {page}: {} records", dogs.len());
        Ok(dogs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_page_is_full() {
        let dogs = DemoDogSource::new().fetch_page(1).await.unwrap();
        assert_eq!(dogs.len(), DEMO_PAGE_SIZE);
        assert_eq!(dogs[0].breed, "Labrador Retriever");
    }

    #[tokio::test]
    async fn pages_do_not_overlap() {
        let source = DemoDogSource::new();
        let first = source.fetch_page(1).await.unwrap();
        let second = source.fetch_page(2).await.unwrap();
        assert_eq!(second[0].breed, "Beagle");
        assert!(first.iter().all(|d| !second.contains(d)));
    }

    #[tokio::test]
    async fn last_page_is_partial() {
        let source = DemoDogSource::new();
        let last = u32::try_from(source.len().div_ceil(DEMO_PAGE_SIZE)).unwrap();
        let dogs = source.fetch_page(last).await.unwrap();
        assert_eq!(dogs.len(), source.len() - (last as usize - 1) * DEMO_PAGE_SIZE);
    }

    #[tokio::test]
    async fn page_past_catalogue_is_empty() {
        let dogs = DemoDogSource::new().fetch_page(1_000).await.unwrap();
        assert!(dogs.is_empty());
        let dogs = DemoDogSource::new().fetch_page(u32::MAX).await.unwrap();
        assert!(dogs.is_empty());
    }

    #[tokio::test]
    async fn catalogue_contains_placeholder_entries() {
        let dogs = DemoDogSource::new().fetch_page(2).await.unwrap();
        assert!(dogs.iter().any(DogRecord::uses_placeholder));
    }
}
