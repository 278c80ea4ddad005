use crate::common::*;

use crate::model::reading::weight_reading::*;

#[async_trait]
pub trait WeightRepository: Send + Sync {
    #[doc = "Creates the store with its header row if it is missing or empty. Idempotent."]
    async fn initialize_store(&self) -> anyhow::Result<()>;
    async fn append_reading(&self, reading: &WeightReading) -> anyhow::Result<()>;
    #[doc = "Every stored reading, in insertion order."]
    async fn load_readings(&self) -> anyhow::Result<Vec<WeightReading>>;
}
