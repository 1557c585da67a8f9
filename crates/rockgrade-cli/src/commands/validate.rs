//! The `rockgrade validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalogs = if catalog_path.is_dir() {
        rockgrade_core::parser::load_catalog_directory(&catalog_path)?
    } else {
        vec![rockgrade_core::parser::parse_catalog(&catalog_path)?]
    };

    if catalogs.is_empty() {
        anyhow::bail!("no valid catalogs found in {}", catalog_path.display());
    }

    let mut total_warnings = 0;

    for catalog in &catalogs {
        println!(
            "Catalog: {} ({} criteria, {} groups, {} score tiers)",
            catalog.name(),
            catalog.criteria().len(),
            catalog.groups().len(),
            catalog.score_mapping().len()
        );

        let warnings = rockgrade_core::parser::validate_catalog(catalog);
        for w in &warnings {
            let prefix = w
                .subject
                .as_ref()
                .map(|subject| format!("  [{subject}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All catalogs valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
