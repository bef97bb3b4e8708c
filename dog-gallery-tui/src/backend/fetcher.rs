//! 抓取任务派发

use std::sync::Arc;

use dog_gallery_client::DogSource;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::model::{FetchCompleted, FetchTicket};

/// 抓取任务派发器
///
/// 每张 `FetchTicket` 对应一个 tokio 任务；任务不接触 Model，
/// 只把结果连同序号发回主循环。没有取消，也没有重试。
pub struct Fetcher {
    source: Arc<dyn DogSource>,
    runtime: Handle,
    tx: mpsc::UnboundedSender<FetchCompleted>,
}

impl Fetcher {
    /// 创建派发器，返回结果接收端
    pub fn new(
        source: Arc<dyn DogSource>,
        runtime: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<FetchCompleted>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                source,
                runtime,
                tx,
            },
            rx,
        )
    }

    /// 数据源标识符
    pub fn source_id(&self) -> &'static str {
        self.source.id()
    }

    /// 派发一个请求
    pub fn dispatch(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tracing::debug!(seq = ticket.seq, page = ticket.page, "dispatching fetch");

        self.runtime.spawn(async move {
            let result = source.fetch_page(ticket.page).await;
            if let Err(ref e) = result {
                tracing::warn!(seq = ticket.seq, page = ticket.page, "fetch failed: {e}");
            }
            // 接收端已关闭说明应用正在退出
            let _ = tx.send(FetchCompleted {
                seq: ticket.seq,
                page: ticket.page,
                result,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use dog_gallery_client::{ClientError, DemoDogSource, DogRecord};

    use super::*;

    /// 按页码决定延迟的假数据源，用于制造乱序返回
    struct SlowFirstPage;

    #[async_trait]
    impl DogSource for SlowFirstPage {
        fn id(&self) -> &'static str {
            "slow"
        }

        async fn fetch_page(&self, page: u32) -> Result<Vec<DogRecord>, ClientError> {
            if page == 1 {
                tokio::time::sleep(Duration::from_millis(150)).await;
            }
            Ok(vec![DogRecord::new(format!("page {page}"), "")])
        }
    }

    #[tokio::test]
    async fn dispatch_sends_outcome_with_ticket_identity() {
        let (fetcher, mut rx) = Fetcher::new(Arc::new(DemoDogSource::new()), Handle::current());
        assert_eq!(fetcher.source_id(), "demo");

        fetcher.dispatch(FetchTicket { seq: 4, page: 2 });
        let outcome = rx.recv().await.unwrap();

        assert_eq!(outcome.seq, 4);
        assert_eq!(outcome.page, 2);
        assert_eq!(outcome.result.unwrap()[0].breed, "Beagle");
    }

    #[tokio::test]
    async fn overlapping_fetches_may_finish_out_of_order() {
        let (fetcher, mut rx) = Fetcher::new(Arc::new(SlowFirstPage), Handle::current());

        fetcher.dispatch(FetchTicket { seq: 1, page: 1 });
        fetcher.dispatch(FetchTicket { seq: 2, page: 2 });

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.seq, 2);
        assert_eq!(second.seq, 1);
    }
}
