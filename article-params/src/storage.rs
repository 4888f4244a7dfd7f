use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::OptionCatalog;
use crate::errors::CatalogError;

/// Environment variable overriding the catalog file location.
pub const CATALOG_PATH_ENV: &str = "ARTICLE_PARAMS_CATALOG";

/// Status describing how the option catalog was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the option catalog from disk.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    catalog: OptionCatalog,
    status: CatalogLoadStatus,
}

impl CatalogLoad {
    /// Build a catalog load result from explicit parts.
    pub fn new(catalog: OptionCatalog, status: CatalogLoadStatus) -> Self {
        Self { catalog, status }
    }

    /// Return where the catalog came from.
    pub fn status(&self) -> &CatalogLoadStatus {
        &self.status
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (OptionCatalog, CatalogLoadStatus) {
        (self.catalog, self.status)
    }
}

/// Load the catalog from its configured location.
pub fn load_catalog() -> Result<CatalogLoad, CatalogError> {
    load_catalog_from_path(&catalog_path())
}

/// Load the catalog, falling back to the built-in one on any failure.
pub fn load_catalog_or_default() -> OptionCatalog {
    match load_catalog() {
        Ok(load) => {
            let (catalog, status) = load.into_parts();
            match status {
                CatalogLoadStatus::Loaded => {
                    log::info!("option catalog loaded from disk");
                },
                CatalogLoadStatus::Missing => {
                    log::debug!("no catalog file, using built-in options");
                },
                CatalogLoadStatus::Invalid(message) => {
                    log::warn!("catalog file invalid: {message}");
                },
            }
            catalog
        },
        Err(err) => {
            log::warn!("catalog read failed: {err}");
            OptionCatalog::default()
        },
    }
}

/// Load the catalog from `path`.
///
/// A missing file or a file that does not describe a valid catalog yields
/// the built-in catalog together with a status explaining why.
pub fn load_catalog_from_path(
    path: &Path,
) -> Result<CatalogLoad, CatalogError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CatalogLoad::new(
                OptionCatalog::default(),
                CatalogLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = serde_json::from_str::<serde_json::Value>(&data)
        .map_err(CatalogError::from)
        .and_then(|value| OptionCatalog::from_json(&value));

    match parsed {
        Ok(catalog) => {
            Ok(CatalogLoad::new(catalog, CatalogLoadStatus::Loaded))
        },
        Err(err) => Ok(CatalogLoad::new(
            OptionCatalog::default(),
            CatalogLoadStatus::Invalid(invalid_message(&err)),
        )),
    }
}

/// Resolve the catalog file location.
pub fn catalog_path() -> PathBuf {
    if let Ok(path) = std::env::var(CATALOG_PATH_ENV) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("article-params")
            .join("catalog.json");
    }

    std::env::temp_dir()
        .join("article-params")
        .join("catalog.json")
}

fn invalid_message(err: &CatalogError) -> String {
    match err {
        CatalogError::Json(inner) => format!("{err}: {inner}"),
        other => format!("{other}"),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{CatalogLoadStatus, load_catalog_from_path};
    use crate::catalog::OptionCatalog;
    use crate::model::OptionCategory;

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("catalog.json");

        let loaded = load_catalog_from_path(&path)
            .expect("missing catalog should not be an io error");
        let (catalog, status) = loaded.into_parts();

        assert_eq!(status, CatalogLoadStatus::Missing);
        assert_eq!(catalog, OptionCatalog::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_catalog_is_loaded() {
        let root = test_temp_dir("valid");
        let path = root.join("catalog.json");
        let payload = r#"{
            "fontFamily": [{ "title": "Sans", "value": "sans" }],
            "fontSize": [
                { "title": "M", "value": "M" },
                { "title": "L", "value": "L" }
            ],
            "fontColor": [{ "title": "Black", "value": "black" }],
            "backgroundColor": [{ "title": "White", "value": "white" }],
            "contentWidth": [{ "title": "800px", "value": "800px" }]
        }"#;
        fs::write(&path, payload).expect("catalog payload should be written");

        let loaded = load_catalog_from_path(&path)
            .expect("catalog should load successfully");
        let (catalog, status) = loaded.into_parts();

        assert_eq!(status, CatalogLoadStatus::Loaded);
        assert_eq!(catalog.defaults().font_family().value(), "sans");
        assert_eq!(catalog.options(OptionCategory::FontSize).len(), 2);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("catalog.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_catalog_from_path(&path)
            .expect("loading invalid catalog should not fail with io error");
        let (catalog, status) = loaded.into_parts();

        assert_eq!(catalog, OptionCatalog::default());
        match status {
            CatalogLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_empty_category_when_load_then_returns_invalid_status() {
        let root = test_temp_dir("empty_category");
        let path = root.join("catalog.json");
        let payload = r#"{
            "fontFamily": [],
            "fontSize": [{ "title": "M", "value": "M" }],
            "fontColor": [{ "title": "Black", "value": "black" }],
            "backgroundColor": [{ "title": "White", "value": "white" }],
            "contentWidth": [{ "title": "800px", "value": "800px" }]
        }"#;
        fs::write(&path, payload).expect("catalog payload should be written");

        let loaded = load_catalog_from_path(&path)
            .expect("loading invalid catalog should not fail with io error");

        match loaded.status() {
            CatalogLoadStatus::Invalid(message) => {
                assert!(message.contains("fontFamily"));
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "article-params-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
