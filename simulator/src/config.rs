use std::path::Path;

use anyhow::{bail, Context, Result};
use houseline_types::casino::RtpTable;
use tracing::info;

/// Load RTP overrides from a YAML or JSON file (by extension) and merge them over the defaults.
pub fn load_rtp_table(path: &Path) -> Result<RtpTable> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rtp config {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let overrides = match extension.as_deref() {
        Some("yaml") | Some("yml") => RtpTable::from_yaml_str(&raw),
        Some("json") => RtpTable::from_json_str(&raw),
        _ => bail!(
            "unsupported rtp config extension for {} (expected .yaml, .yml or .json)",
            path.display()
        ),
    }
    .with_context(|| format!("invalid rtp config {}", path.display()))?;

    info!(path = %path.display(), overrides = overrides.len(), "loaded rtp config");
    Ok(RtpTable::default().merge(&overrides))
}

/// Default table, or the defaults merged with `path` when given.
pub fn resolve_rtp_table(path: Option<&Path>) -> Result<RtpTable> {
    match path {
        Some(path) => load_rtp_table(path),
        None => Ok(RtpTable::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use houseline_types::casino::GameId;
    use std::io::Write;

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn loads_yaml_overrides() {
        let file = write_config(".yaml", "dice: 0.99\nkeno: 0.9\n");
        let table = load_rtp_table(file.path()).unwrap();
        assert_eq!(table.target(GameId::Dice).unwrap(), 0.99);
        assert_eq!(table.target(GameId::Keno).unwrap(), 0.9);
        assert_eq!(table.target(GameId::Mines).unwrap(), 0.94);
    }

    #[test]
    fn loads_json_overrides() {
        let file = write_config(".json", r#"{"plinko": 0.97}"#);
        let table = load_rtp_table(file.path()).unwrap();
        assert_eq!(table.target(GameId::Plinko).unwrap(), 0.97);
        assert_eq!(table.len(), GameId::ALL.len());
    }

    #[test]
    fn rejects_bad_configs() {
        let file = write_config(".yaml", "dice: 1.5\n");
        let err = load_rtp_table(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid rtp config"), "{err}");

        let file = write_config(".toml", "dice = 0.9\n");
        let err = load_rtp_table(file.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported"), "{err}");

        assert!(load_rtp_table(Path::new("/nonexistent/rtp.yaml")).is_err());
    }

    #[test]
    fn no_path_uses_defaults() {
        assert_eq!(resolve_rtp_table(None).unwrap(), RtpTable::default());
    }
}
