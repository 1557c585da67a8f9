//! The `rockgrade evaluate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use rockgrade_core::config::load_catalog_from;
use rockgrade_core::EvaluationEngine;

use super::Pair;

pub fn execute(catalog_path: Option<PathBuf>, selections: Vec<Pair>, format: String) -> Result<()> {
    let catalog = load_catalog_from(catalog_path.as_deref())?;

    let mut engine = EvaluationEngine::new();
    engine.initialize(&catalog)?;

    for pair in &selections {
        engine
            .set_selection(&pair.key, &pair.value)
            .with_context(|| format!("rejected --select {}={}", pair.key, pair.value))?;
    }

    let result = engine.evaluate();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Criterion", "Choice", "Rank", "Score", "Grade"]);

            for (outcome, criterion) in result.criteria.iter().zip(engine.criteria()) {
                let choice = criterion
                    .options()
                    .iter()
                    .find(|o| o.value == outcome.value)
                    .map(|o| o.label.as_str())
                    .unwrap_or(outcome.value.as_str());
                table.add_row(vec![
                    Cell::new(&outcome.title),
                    Cell::new(choice),
                    Cell::new(outcome.rank),
                    Cell::new(format!("{}", outcome.score)),
                    Cell::new(&outcome.label),
                ]);
            }

            println!("Catalog: {}", catalog.name());
            println!("{table}");
            println!("Aggregate score: {:.2}", result.aggregate_score);
            let radar: Vec<String> = result.radar_vector.iter().map(|s| s.to_string()).collect();
            println!("Radar vector: [{}]", radar.join(", "));
        }
    }

    Ok(())
}
