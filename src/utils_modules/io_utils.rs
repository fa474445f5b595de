use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into `T`.

    # Arguments
    * `file_path` - path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>` - parsed struct, or an error if the file cannot
      be read or does not match `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] Failed to read {}", file_path))?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Path of the scratch file a chart is drawn into before it replaces `target`.

    It sits next to the target so the final rename stays on one filesystem, and
    keeps the target's extension because the bitmap backend picks the image
    format from it: `out/trend.png` -> `out/.trend.partial.png`.
"#]
pub fn staging_path_for(target: &Path) -> PathBuf {
    let stem: String = target
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("chart"));

    let file_name: String = match target.extension() {
        Some(ext) => format!(".{}.partial.{}", stem, ext.to_string_lossy()),
        None => format!(".{}.partial", stem),
    };

    target.with_file_name(file_name)
}

#[doc = "Creates `dir` and its parents if needed; an existing directory is fine"]
pub async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("[ensure_dir] Failed to create {}", dir.display()))
}
