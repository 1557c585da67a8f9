//! The `rockgrade classify` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use rockgrade_core::config::load_catalog_from;
use rockgrade_core::rock_types::{parse_rock_records_json, rock_groups_from_records};
use rockgrade_core::GroupSelector;

use super::Pair;

pub fn execute(
    catalog_path: Option<PathBuf>,
    records_path: Option<PathBuf>,
    selections: Vec<Pair>,
) -> Result<()> {
    let mut selector = match records_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read rock types: {}", path.display()))?;
            let records = parse_rock_records_json(&content)?;
            GroupSelector::new(rock_groups_from_records(&records)?)?
        }
        None => GroupSelector::from_catalog(&load_catalog_from(catalog_path.as_deref())?),
    };

    for pair in &selections {
        selector
            .select(&pair.key, &pair.value)
            .with_context(|| format!("rejected --select {}={}", pair.key, pair.value))?;
    }

    match selector.current_selection() {
        Some(active) => {
            let label = selector.current_label().unwrap_or(active.value.as_str());
            println!("Classification: {} / {}", active.group_id, label);
        }
        None => {
            println!("Classification: none");
            println!("Groups:");
            for group in selector.groups() {
                let values: Vec<&str> = group.options().iter().map(|o| o.value.as_str()).collect();
                println!("  {}: {}", group.id(), values.join(", "));
            }
        }
    }

    Ok(())
}
