//! 抓取结果更新逻辑

use crate::model::{App, Completion, FetchCompleted};

/// 应用一个抓取结果
///
/// 过期结果（序号不是最新）直接丢弃；失败时弹出阻塞式提示框。
pub fn update(app: &mut App, outcome: FetchCompleted) {
    let seq = outcome.seq;
    let page = outcome.page;

    let completion = app.fetch.complete(outcome);
    if completion != Completion::Stale {
        app.clear_status();
    }

    match completion {
        Completion::Stale => {
            tracing::debug!(seq, page, latest = app.fetch.latest_seq(), "discarding stale response");
        }
        Completion::Loaded(count) => {
            tracing::info!(seq, page, count, "page loaded");
        }
        Completion::Empty => {
            tracing::info!(seq, page, "page is empty");
        }
        Completion::Failed(message) => {
            tracing::error!(seq, page, "fetch failed: {message}");
            app.alerts.push(message);
        }
    }
}
