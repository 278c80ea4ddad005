use crate::common::*;

use crate::dto::stats::weight_stats::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render the weight chart for `stats` as a PNG image
        # Arguments
        * `stats` - computed statistics, including the window readings
        * `output_path` - where the image will be written
    "]
    async fn generate_weight_chart(
        &self,
        stats: &WeightStats,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
