use crate::application::client::IceClient;
use crate::application::interfaces::sample::SampleService;
use crate::error::IceResult;
use crate::model::http::IceTransport;
use crate::model::responses::Sample;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl<T: IceTransport + 'static> SampleService for IceClient<T> {
    async fn get_samples(&self, entry_id: u64) -> IceResult<Vec<Sample>> {
        let samples: Option<Vec<Sample>> = self.get(&format!("parts/{entry_id}/samples")).await?;
        let samples = samples.unwrap_or_default();
        debug!("Samples obtained: {} for entry {}", samples.len(), entry_id);
        Ok(samples)
    }
}
