use crate::error::IceResult;
use crate::model::responses::Sample;
use async_trait::async_trait;

/// Interface for physical samples
#[async_trait]
pub trait SampleService: Send + Sync {
    /// Gets the samples of an entry; empty when none are registered
    async fn get_samples(&self, entry_id: u64) -> IceResult<Vec<Sample>>;
}
