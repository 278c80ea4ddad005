use crate::common::*;

/* CSV row -> domain type, converted into the configured zone */
pub trait FromStoreRecord<R>
where
    R: DeserializeOwned,
    Self: Sized,
{
    fn from_store_record(record: R, tz: &Tz) -> Result<Self, anyhow::Error>;
}

/* domain type -> CSV row */
pub trait ToStoreRecord<R>
where
    R: Serialize,
{
    fn to_store_record(&self) -> R;
}
