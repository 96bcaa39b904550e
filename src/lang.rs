//! Language catalog loading.
//!
//! A catalog is `lang/<code>/core.json` merged at the top level, plus every
//! `lang/<code>/components/<name>.json` nested under `components.<name>`.
//! Missing files yield an empty catalog, never an error, so a bare install
//! still renders.

use std::path::Path;

use serde_json::{Map, Value};

pub const DEFAULT_LANG: &str = "cs_CZ";

/// Load the catalog for a language code. Best-effort; unreadable or
/// malformed files are skipped.
pub fn load_catalog(lang_dir: &Path, code: &str) -> Value {
    let base = lang_dir.join(code);
    let mut catalog = Map::new();

    if let Ok(raw) = std::fs::read_to_string(base.join("core.json")) {
        if let Ok(Value::Object(map)) = serde_json::from_str(&raw) {
            catalog.extend(map);
        }
    }

    if let Ok(entries) = std::fs::read_dir(base.join("components")) {
        let mut components = Map::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Ok(raw) = std::fs::read_to_string(&path) {
                if let Ok(value) = serde_json::from_str::<Value>(&raw) {
                    components.insert(name.to_string(), value);
                }
            }
        }
        catalog.insert("components".to_string(), Value::Object(components));
    }

    Value::Object(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn merges_core_and_components() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("cs_CZ");
        std::fs::create_dir_all(base.join("components")).unwrap();
        std::fs::write(
            base.join("core.json"),
            r#"{"title": "KLUCON PRIME", "welcome": "Vítejte"}"#,
        )
        .unwrap();
        std::fs::write(
            base.join("components").join("movies.json"),
            r#"{"heading": "Filmy"}"#,
        )
        .unwrap();

        let catalog = load_catalog(tmp.path(), "cs_CZ");
        assert_eq!(catalog["title"], "KLUCON PRIME");
        assert_eq!(catalog["components"]["movies"]["heading"], "Filmy");
    }

    #[test]
    fn missing_language_yields_empty_catalog() {
        let tmp = TempDir::new().unwrap();
        let catalog = load_catalog(tmp.path(), "xx_XX");
        assert_eq!(catalog, Value::Object(Map::new()));
    }

    #[test]
    fn malformed_component_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("cs_CZ");
        std::fs::create_dir_all(base.join("components")).unwrap();
        std::fs::write(base.join("components").join("broken.json"), "{oops").unwrap();
        std::fs::write(base.join("components").join("ok.json"), r#"{"k": 1}"#).unwrap();

        let catalog = load_catalog(tmp.path(), "cs_CZ");
        assert!(catalog["components"].get("broken").is_none());
        assert_eq!(catalog["components"]["ok"]["k"], 1);
    }
}
