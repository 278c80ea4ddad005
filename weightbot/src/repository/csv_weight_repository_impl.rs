use crate::common::*;

use crate::model::{configs::storage_config::*, reading::weight_reading::*};

use crate::traits::repository_traits::weight_repository::*;

use crate::utils_modules::{io_utils::*, traits::*};

pub const CSV_HEADER: [&str; 2] = ["timestamp", "weight"];

#[doc = r#"
    Append-only CSV weight log.

    Writers are serialized through `write_lock` so concurrent chats cannot
    interleave rows or race on header creation. Reads take no lock: rows are
    appended whole and a reader simply sees the log as of its open.
    All file work runs on the blocking pool, never on a runtime worker.
"#]
#[derive(Debug)]
pub struct CsvWeightRepositoryImpl {
    csv_path: PathBuf,
    timezone: Tz,
    write_lock: Mutex<()>,
}

impl CsvWeightRepositoryImpl {
    pub fn new(storage_config: &StorageConfig, timezone: Tz) -> Self {
        CsvWeightRepositoryImpl {
            csv_path: storage_config.csv_path().clone(),
            timezone,
            write_lock: Mutex::new(()),
        }
    }
}

#[doc = "Writes the header row when the file is missing or empty. Caller holds the write lock."]
fn write_header_if_needed(csv_path: &Path) -> anyhow::Result<bool> {
    if !is_missing_or_empty(csv_path) {
        return Ok(false);
    }

    ensure_parent_dir(csv_path)?;

    let mut writer: csv::Writer<fs::File> =
        csv::Writer::from_path(csv_path).with_context(|| {
            format!(
                "[CsvWeightRepositoryImpl->write_header_if_needed] Failed to create {:?}",
                csv_path
            )
        })?;

    writer.write_record(CSV_HEADER)?;
    writer.flush()?;

    Ok(true)
}

fn append_record(csv_path: &Path, record: &WeightRecord) -> anyhow::Result<()> {
    write_header_if_needed(csv_path)?;

    let file: fs::File = fs::OpenOptions::new()
        .append(true)
        .open(csv_path)
        .with_context(|| {
            format!(
                "[CsvWeightRepositoryImpl->append_reading] Failed to open {:?} for append",
                csv_path
            )
        })?;

    let mut writer: csv::Writer<fs::File> = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

fn read_readings(csv_path: &Path, timezone: &Tz) -> anyhow::Result<Vec<WeightReading>> {
    let mut reader: csv::Reader<fs::File> = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| {
            format!(
                "[CsvWeightRepositoryImpl->load_readings] Failed to open {:?}",
                csv_path
            )
        })?;

    let mut readings: Vec<WeightReading> = Vec::new();

    for (row_idx, row) in reader.deserialize::<WeightRecord>().enumerate() {
        /* +2: one for the header, one for 1-based line numbers */
        let line_no: usize = row_idx + 2;

        let record: WeightRecord = row.with_context(|| {
            format!(
                "[CsvWeightRepositoryImpl->load_readings] malformed row at line {}",
                line_no
            )
        })?;

        let reading: WeightReading = WeightReading::from_store_record(record, timezone)
            .with_context(|| {
                format!(
                    "[CsvWeightRepositoryImpl->load_readings] invalid row at line {}",
                    line_no
                )
            })?;

        readings.push(reading);
    }

    Ok(readings)
}

#[async_trait]
impl WeightRepository for CsvWeightRepositoryImpl {
    async fn initialize_store(&self) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;

        let csv_path: PathBuf = self.csv_path.clone();
        let created: bool = tokio::task::spawn_blocking(move || write_header_if_needed(&csv_path))
            .await
            .context(
                "[CsvWeightRepositoryImpl->initialize_store] blocking task join failed (panic/cancelled)",
            )??;

        if created {
            info!("Created weight log {:?}", self.csv_path);
        } else {
            info!("Using existing weight log {:?}", self.csv_path);
        }

        Ok(())
    }

    async fn append_reading(&self, reading: &WeightReading) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;

        let csv_path: PathBuf = self.csv_path.clone();
        let record: WeightRecord = reading.to_store_record();

        tokio::task::spawn_blocking(move || append_record(&csv_path, &record))
            .await
            .context(
                "[CsvWeightRepositoryImpl->append_reading] blocking task join failed (panic/cancelled)",
            )??;

        info!("Stored {}kg at {}", reading.weight, reading.timestamp);

        Ok(())
    }

    async fn load_readings(&self) -> anyhow::Result<Vec<WeightReading>> {
        let csv_path: PathBuf = self.csv_path.clone();
        let timezone: Tz = self.timezone;

        tokio::task::spawn_blocking(move || read_readings(&csv_path, &timezone))
            .await
            .context(
                "[CsvWeightRepositoryImpl->load_readings] blocking task join failed (panic/cancelled)",
            )?
    }
}
