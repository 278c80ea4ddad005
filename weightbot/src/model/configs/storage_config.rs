use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct StorageConfig {
    pub csv_path: PathBuf,
}
