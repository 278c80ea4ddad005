use crate::common::*;

use crate::utils_modules::{time_utils::*, traits::*};

#[doc = "One weight observation as stored in the log."]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct WeightReading {
    pub timestamp: DateTime<Tz>,
    pub weight: f64,
}

#[doc = "Raw CSV row, header `timestamp,weight`."]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRecord {
    pub timestamp: String,
    pub weight: f64,
}

impl FromStoreRecord<WeightRecord> for WeightReading {
    fn from_store_record(record: WeightRecord, tz: &Tz) -> anyhow::Result<Self> {
        let timestamp: DateTime<Tz> = parse_store_timestamp(&record.timestamp, tz)?;

        if !record.weight.is_finite() {
            return Err(anyhow!(
                "[WeightReading->from_store_record] weight is not a finite number: {}",
                record.weight
            ));
        }

        Ok(WeightReading::new(timestamp, record.weight))
    }
}

impl ToStoreRecord<WeightRecord> for WeightReading {
    fn to_store_record(&self) -> WeightRecord {
        WeightRecord {
            timestamp: format_store_timestamp(&self.timestamp),
            weight: self.weight,
        }
    }
}
