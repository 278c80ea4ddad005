use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into `T`.

    # Arguments
    * `file_path` - path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>` - the parsed structure

    # Errors
    - the file does not exist or cannot be read
    - the TOML is malformed or does not match the fields of `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "Creates the parent directory of `file_path` if it has one and it is missing."]
pub fn ensure_parent_dir(file_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("[ensure_parent_dir] Failed to create directory {:?}", parent)
            })?;
        }
    }

    Ok(())
}

#[doc = "True when the file is missing or has zero length."]
pub fn is_missing_or_empty(file_path: &Path) -> bool {
    match fs::metadata(file_path) {
        Ok(meta) => !meta.is_file() || meta.len() == 0,
        Err(_) => true,
    }
}
