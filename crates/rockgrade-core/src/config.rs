//! Catalog discovery.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::model::Catalog;
use crate::parser::{default_catalog, parse_catalog};

/// File name searched for in the current directory.
pub const LOCAL_CATALOG_FILE: &str = "rockgrade.toml";

/// Load the catalog from well-known paths.
///
/// Search order:
/// 1. `$ROCKGRADE_CATALOG`
/// 2. `rockgrade.toml` in the current directory
/// 3. `~/.config/rockgrade/catalog.toml`
///
/// Falls back to the built-in catalog when none exists.
pub fn load_catalog() -> Result<Catalog> {
    load_catalog_from(None)
}

/// Load the catalog from an explicit path, or search the default locations.
pub fn load_catalog_from(path: Option<&Path>) -> Result<Catalog> {
    let catalog_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("catalog file not found: {}", p.display());
        }
    } else {
        search_default_paths()
    };

    match catalog_path {
        Some(path) => {
            tracing::debug!("loading catalog from {}", path.display());
            parse_catalog(&path)
        }
        None => {
            tracing::debug!("no catalog file found, using built-in catalog");
            default_catalog()
        }
    }
}

fn search_default_paths() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var("ROCKGRADE_CATALOG") {
        let env_path = PathBuf::from(env_path);
        if env_path.exists() {
            return Some(env_path);
        }
        tracing::warn!(
            "ROCKGRADE_CATALOG points to {}, which does not exist",
            env_path.display()
        );
    }

    let local = PathBuf::from(LOCAL_CATALOG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs_path()
        .map(|home| home.join("catalog.toml"))
        .filter(|global| global.exists())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("rockgrade"))
}
