use crate::common::*;

#[doc = "Line format: `2025-01-01 10:00:00.123 - weightbot::controller - INFO - message`"]
fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} - {} - {} - {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.target(),
        record.level(),
        &record.args()
    )
}

#[doc = r#"
    Installs the global logger.

    Log lines go to daily rotated files under `LOG_DIRECTORY` (default `./logs`),
    keeping the last 10 files, and are duplicated to stdout. The level comes from
    `RUST_LOG` and defaults to `info`.

    The returned handle must stay alive for the lifetime of the process.
"#]
pub fn set_global_logger() -> anyhow::Result<LoggerHandle> {
    let log_directory: String = env::var("LOG_DIRECTORY").unwrap_or_else(|_| "logs".to_string());

    let handle: LoggerHandle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory(log_directory).basename("weightbot"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(log_format)
        .format_for_stdout(log_format)
        .duplicate_to_stdout(Duplicate::All)
        .start()
        .map_err(|e| anyhow!("[set_global_logger] Failed to start logger: {:?}", e))?;

    Ok(handle)
}
