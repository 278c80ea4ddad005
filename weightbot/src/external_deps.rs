pub use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, TimeZone, Utc};
pub use chrono_tz::Tz;
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::{multipart, Client};
pub use tempfile::NamedTempFile;
