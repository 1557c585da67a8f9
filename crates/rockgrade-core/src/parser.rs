//! TOML catalog parser.
//!
//! Loads assessment catalogs from TOML files and directories, and validates
//! them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Catalog, Choice, Criterion, Group, ScoreMapping, ScoreTier};

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    score_mapping: Option<Vec<TomlScoreTier>>,
    #[serde(default)]
    criteria: Vec<TomlCriterion>,
    #[serde(default)]
    groups: Vec<TomlGroup>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlScoreTier {
    score: f64,
    label: String,
}

#[derive(Debug, Deserialize)]
struct TomlCriterion {
    name: String,
    #[serde(default)]
    title: Option<String>,
    options: Vec<TomlOption>,
}

#[derive(Debug, Deserialize)]
struct TomlGroup {
    id: String,
    #[serde(default)]
    options: Vec<TomlOption>,
}

#[derive(Debug, Deserialize)]
struct TomlOption {
    value: String,
    label: String,
}

fn choices(options: Vec<TomlOption>) -> Vec<Choice> {
    options
        .into_iter()
        .map(|o| Choice::new(o.value, o.label))
        .collect()
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let score_mapping = match parsed.score_mapping {
        Some(tiers) => ScoreMapping::new(
            tiers
                .into_iter()
                .map(|t| ScoreTier::new(t.score, t.label))
                .collect(),
        )
        .with_context(|| format!("invalid score mapping in {}", source_path.display()))?,
        None => ScoreMapping::default(),
    };

    let criteria = parsed
        .criteria
        .into_iter()
        .map(|c| {
            let title = c.title.unwrap_or_else(|| c.name.clone());
            Criterion::new(c.name, title, choices(c.options))
        })
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid criterion in {}", source_path.display()))?;

    let groups = parsed
        .groups
        .into_iter()
        .map(|g| Group::new(g.id, choices(g.options)))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid group in {}", source_path.display()))?;

    Catalog::new(
        parsed.catalog.id,
        parsed.catalog.name,
        score_mapping,
        criteria,
        groups,
    )
    .with_context(|| format!("invalid catalog: {}", source_path.display()))
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// The built-in catalog: the observed score table, the blast quality
/// criteria and the three rock families.
pub fn default_catalog() -> Result<Catalog> {
    parse_catalog_str(DEFAULT_CATALOG_TOML, Path::new("<built-in>"))
}

/// A non-fatal finding from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The criterion name or group id (if applicable).
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a catalog for suspicious but legal definitions.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.criteria().is_empty() {
        warnings.push(ValidationWarning {
            subject: None,
            message: "catalog defines no criteria; the aggregate will always be the best score"
                .into(),
        });
    }

    let tiers = catalog.score_mapping().len();
    for criterion in catalog.criteria() {
        if criterion.options().len() < tiers {
            warnings.push(ValidationWarning {
                subject: Some(criterion.name().to_string()),
                message: format!(
                    "uses {} of {} score tiers; its worst option scores {}",
                    criterion.options().len(),
                    tiers,
                    catalog.score_mapping().tier(criterion.options().len()).score
                ),
            });
        }
    }

    for group in catalog.groups() {
        if group.options().is_empty() {
            warnings.push(ValidationWarning {
                subject: Some(group.id().to_string()),
                message: "group has no options and can never be selected".into(),
            });
        }
    }

    warnings
}

pub const DEFAULT_CATALOG_TOML: &str = r#"# rockgrade assessment catalog

[catalog]
id = "blast-quality"
name = "Blast quality assessment"

# One tier per rank, best first.
[[score_mapping]]
score = 100
label = "Excellent"

[[score_mapping]]
score = 85
label = "Good"

[[score_mapping]]
score = 75
label = "Fair"

[[score_mapping]]
score = 65
label = "Poor"

[[score_mapping]]
score = 55
label = "Bad"

# Criteria are listed in radar axis order. Options run best to worst.
[[criteria]]
name = "superExcavation"
title = "Over-break value"
options = [
    { value = "value1", label = "Under 10 cm" },
    { value = "value2", label = "10 to 15 cm" },
    { value = "value3", label = "15 to 20 cm" },
    { value = "value4", label = "20 to 25 cm" },
    { value = "value5", label = "Over 25 cm" },
]

[[criteria]]
name = "underExcavation"
title = "Under-break value"
options = [
    { value = "value1", label = "None" },
    { value = "value2", label = "Isolated points under 5 cm" },
    { value = "value3", label = "Scattered points 5 to 10 cm" },
    { value = "value4", label = "Continuous under-break under 10 cm" },
    { value = "value5", label = "Continuous under-break over 10 cm" },
]

[[criteria]]
name = "halfHoleRate"
title = "Half-cast factor"
options = [
    { value = "value1", label = "Over 90%" },
    { value = "value2", label = "80 to 90%" },
    { value = "value3", label = "70 to 80%" },
    { value = "value4", label = "60 to 70%" },
    { value = "value5", label = "Under 60%" },
]

[[criteria]]
name = "vibrationSpeed"
title = "Peak particle velocity"
options = [
    { value = "value1", label = "Under 2 cm/s" },
    { value = "value2", label = "2 to 5 cm/s" },
    { value = "value3", label = "5 to 8 cm/s" },
    { value = "value4", label = "8 to 12 cm/s" },
    { value = "value5", label = "Over 12 cm/s" },
]

[[criteria]]
name = "blockSize"
title = "Fragment size"
options = [
    { value = "value1", label = "Uniform, under 30 cm" },
    { value = "value2", label = "Mostly under 30 cm" },
    { value = "value3", label = "Some blocks 30 to 50 cm" },
    { value = "value4", label = "Frequent blocks over 50 cm" },
    { value = "value5", label = "Boulders requiring secondary breaking" },
]

[[criteria]]
name = "flatness"
title = "Contour smoothness"
options = [
    { value = "value1", label = "Smooth, steps under 10 cm" },
    { value = "value2", label = "Steps 10 to 15 cm" },
    { value = "value3", label = "Steps 15 to 20 cm" },
    { value = "value4", label = "Steps 20 to 25 cm" },
    { value = "value5", label = "Steps over 25 cm" },
]

[[groups]]
id = "igneous"
options = [
    { value = "basalt", label = "Basalt" },
    { value = "granite", label = "Granite" },
    { value = "diorite", label = "Diorite" },
    { value = "gabbro", label = "Gabbro" },
    { value = "andesite", label = "Andesite" },
]

[[groups]]
id = "sedimentary"
options = [
    { value = "limestone", label = "Limestone" },
    { value = "sandstone", label = "Sandstone" },
    { value = "shale", label = "Shale" },
    { value = "conglomerate", label = "Conglomerate" },
]

[[groups]]
id = "metamorphic"
options = [
    { value = "marble", label = "Marble" },
    { value = "quartzite", label = "Quartzite" },
    { value = "gneiss", label = "Gneiss" },
    { value = "schist", label = "Schist" },
    { value = "slate", label = "Slate" },
]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MINIMAL_TOML: &str = r#"
[catalog]
id = "minimal"
name = "Minimal"

[[criteria]]
name = "superExcavation"
options = [
    { value = "value1", label = "One" },
    { value = "value2", label = "Two" },
    { value = "value3", label = "Three" },
    { value = "value4", label = "Four" },
    { value = "value5", label = "Five" },
]
"#;

    #[test]
    fn parse_default_catalog() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.id(), "blast-quality");
        assert_eq!(catalog.criteria().len(), 6);
        assert_eq!(catalog.criteria()[0].name(), "superExcavation");
        assert_eq!(catalog.criteria()[0].title(), "Over-break value");
        assert_eq!(catalog.groups().len(), 3);
        assert_eq!(catalog.score_mapping(), &ScoreMapping::default());
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn parse_missing_optional_fields() {
        let catalog = parse_catalog_str(MINIMAL_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(catalog.score_mapping(), &ScoreMapping::default());
        assert_eq!(catalog.criteria()[0].title(), "superExcavation");
        assert!(catalog.groups().is_empty());
    }

    #[test]
    fn parse_custom_mapping() {
        let toml = r#"
[catalog]
id = "three-tier"
name = "Three tier"

[[score_mapping]]
score = 90
label = "High"

[[score_mapping]]
score = 50
label = "Medium"

[[score_mapping]]
score = 10
label = "Low"

[[criteria]]
name = "flatness"
title = "Flatness"
options = [
    { value = "a", label = "A" },
    { value = "b", label = "B" },
]
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(catalog.score_mapping().len(), 3);
        assert_eq!(catalog.score_mapping().best().label, "High");

        let warnings = validate_catalog(&catalog);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].subject.as_deref(), Some("flatness"));
        assert!(warnings[0].message.contains("2 of 3"));
    }

    #[test]
    fn reject_increasing_scores() {
        let toml = r#"
[catalog]
id = "bad"
name = "Bad"

[[score_mapping]]
score = 50
label = "Low"

[[score_mapping]]
score = 80
label = "High"
"#;
        let err = parse_catalog_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("higher than the score for rank 1"));
    }

    #[test]
    fn reject_duplicate_criteria() {
        let toml = format!(
            "{MINIMAL_TOML}\n{}",
            r#"
[[criteria]]
name = "superExcavation"
options = [{ value = "value1", label = "One" }]
"#
        );
        let err = parse_catalog_str(&toml, &PathBuf::from("dupe.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate criterion name"));
    }

    #[test]
    fn warn_on_empty_group_and_no_criteria() {
        let toml = r#"
[catalog]
id = "groups-only"
name = "Groups only"

[[groups]]
id = "igneous"
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("no criteria")));
        assert!(warnings
            .iter()
            .any(|w| w.subject.as_deref() == Some("igneous")));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_catalog_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_directory_skips_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.toml"), MINIMAL_TOML).unwrap();
        std::fs::write(dir.path().join("bad.toml"), "not = [valid").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("default.toml"), DEFAULT_CATALOG_TOML).unwrap();

        let mut catalogs = load_catalog_directory(dir.path()).unwrap();
        catalogs.sort_by(|a, b| a.id().cmp(b.id()));
        let ids: Vec<&str> = catalogs.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["blast-quality", "minimal"]);
    }
}
