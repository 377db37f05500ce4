use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::StatsView;

/// Pure read over the other collections. Deliberately infallible: a
/// collection that cannot be read contributes zero instead of failing
/// the whole summary.
#[async_trait]
pub trait GetStatsUseCase: Send + Sync {
    async fn execute(&self) -> StatsView;
}
