//! The `rockgrade init` command.

use anyhow::Result;

use rockgrade_core::config::LOCAL_CATALOG_FILE;
use rockgrade_core::parser::DEFAULT_CATALOG_TOML;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new(LOCAL_CATALOG_FILE);
    if path.exists() {
        println!("{LOCAL_CATALOG_FILE} already exists, skipping.");
    } else {
        std::fs::write(path, DEFAULT_CATALOG_TOML)?;
        println!("Created {LOCAL_CATALOG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {LOCAL_CATALOG_FILE} with your criteria, score tiers and rock groups");
    println!("  2. Run: rockgrade validate --catalog {LOCAL_CATALOG_FILE}");
    println!("  3. Run: rockgrade evaluate --select superExcavation=value2");

    Ok(())
}
