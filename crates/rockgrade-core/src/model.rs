//! Core data model types for rockgrade.
//!
//! Options, exclusivity groups, criteria and the shared rank-to-score table.
//! All of these are static configuration: they are built once through
//! validating constructors and are read-only afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single selectable option: a stable code plus display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Code reported in selection events.
    pub value: String,
    /// Human-readable label.
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

fn check_unique_values(owner: &str, options: &[Choice]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.value.as_str()) {
            return Err(CatalogError::DuplicateOption {
                owner: owner.to_string(),
                value: option.value.clone(),
            });
        }
    }
    Ok(())
}

/// A named set of mutually exclusive options (e.g. igneous rocks).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    id: String,
    options: Vec<Choice>,
}

impl Group {
    /// Build a group. An empty option list is allowed: some rock families
    /// may have no records yet.
    pub fn new(id: impl Into<String>, options: Vec<Choice>) -> Result<Self, CatalogError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyIdentifier { kind: "group" });
        }
        check_unique_values(&id, &options)?;
        Ok(Self { id, options })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[Choice] {
        &self.options
    }

    /// Look up an option by value.
    pub fn option(&self, value: &str) -> Option<&Choice> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// One evaluation axis with options ordered best to worst.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    name: String,
    title: String,
    options: Vec<Choice>,
}

impl Criterion {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        options: Vec<Choice>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyIdentifier { kind: "criterion" });
        }
        if options.is_empty() {
            return Err(CatalogError::NoOptions(name));
        }
        check_unique_values(&name, &options)?;
        Ok(Self {
            name,
            title: title.into(),
            options,
        })
    }

    /// Key used in selection events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title, also the radar chart axis label.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[Choice] {
        &self.options
    }

    /// The rank-1 option, selected before any user interaction.
    pub fn default_choice(&self) -> &Choice {
        // Construction rejects empty option lists.
        &self.options[0]
    }

    /// 1-based position of `value` in the option list.
    pub fn rank_of(&self, value: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.value == value)
            .map(|idx| idx + 1)
    }
}

/// Score and label assigned to one rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTier {
    pub score: f64,
    pub label: String,
}

impl ScoreTier {
    pub fn new(score: f64, label: impl Into<String>) -> Self {
        Self {
            score,
            label: label.into(),
        }
    }
}

/// Rank-to-score table shared by every criterion.
///
/// Tier `i` (0-based) scores the option at rank `i + 1`. Scores lie in
/// `0..=100` and never increase with rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMapping {
    tiers: Vec<ScoreTier>,
}

impl ScoreMapping {
    pub fn new(tiers: Vec<ScoreTier>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::EmptyScoreMapping);
        }
        for (idx, tier) in tiers.iter().enumerate() {
            let rank = idx + 1;
            if !tier.score.is_finite() || !(0.0..=100.0).contains(&tier.score) {
                return Err(CatalogError::ScoreOutOfRange {
                    rank,
                    score: tier.score,
                });
            }
            if idx > 0 && tier.score > tiers[idx - 1].score {
                return Err(CatalogError::ScoresNotMonotonic { rank });
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[ScoreTier] {
        &self.tiers
    }

    /// Number of ranks the table can score.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Tier for a 1-based rank, if the table covers it.
    pub fn get(&self, rank: usize) -> Option<&ScoreTier> {
        rank.checked_sub(1).and_then(|idx| self.tiers.get(idx))
    }

    /// Tier for a 1-based rank, clamped into the table.
    pub fn tier(&self, rank: usize) -> &ScoreTier {
        let idx = rank.saturating_sub(1).min(self.tiers.len() - 1);
        &self.tiers[idx]
    }

    /// The rank-1 tier.
    pub fn best(&self) -> &ScoreTier {
        &self.tiers[0]
    }
}

impl Default for ScoreMapping {
    fn default() -> Self {
        Self {
            tiers: vec![
                ScoreTier::new(100.0, "Excellent"),
                ScoreTier::new(85.0, "Good"),
                ScoreTier::new(75.0, "Fair"),
                ScoreTier::new(65.0, "Poor"),
                ScoreTier::new(55.0, "Bad"),
            ],
        }
    }
}

/// A complete, validated assessment catalog: the score table, the ordered
/// criteria and the exclusivity groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    id: String,
    name: String,
    score_mapping: ScoreMapping,
    criteria: Vec<Criterion>,
    groups: Vec<Group>,
}

impl Catalog {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        score_mapping: ScoreMapping,
        criteria: Vec<Criterion>,
        groups: Vec<Group>,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyIdentifier { kind: "catalog" });
        }

        let mut names = HashSet::new();
        for criterion in &criteria {
            if !names.insert(criterion.name()) {
                return Err(CatalogError::DuplicateCriterion(criterion.name().to_string()));
            }
            if criterion.options().len() > score_mapping.len() {
                return Err(CatalogError::TooManyOptions {
                    criterion: criterion.name().to_string(),
                    options: criterion.options().len(),
                    tiers: score_mapping.len(),
                });
            }
        }

        let mut ids = HashSet::new();
        for group in &groups {
            if !ids.insert(group.id()) {
                return Err(CatalogError::DuplicateGroup(group.id().to_string()));
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            score_mapping,
            criteria,
            groups,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score_mapping(&self) -> &ScoreMapping {
        &self.score_mapping
    }

    /// Criteria in declaration order. The order fixes the radar chart axes.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_options() -> Vec<Choice> {
        (1..=5)
            .map(|i| Choice::new(format!("value{i}"), format!("Option {i}")))
            .collect()
    }

    #[test]
    fn rank_is_one_based_position() {
        let c = Criterion::new("superExcavation", "Over-break", five_options()).unwrap();
        assert_eq!(c.rank_of("value1"), Some(1));
        assert_eq!(c.rank_of("value5"), Some(5));
        assert_eq!(c.rank_of("value6"), None);
        assert_eq!(c.default_choice().value, "value1");
    }

    #[test]
    fn criterion_requires_options() {
        let err = Criterion::new("empty", "Empty", vec![]).unwrap_err();
        assert_eq!(err, CatalogError::NoOptions("empty".into()));
    }

    #[test]
    fn duplicate_option_values_rejected() {
        let options = vec![Choice::new("a", "A"), Choice::new("a", "Again")];
        assert!(matches!(
            Group::new("igneous", options),
            Err(CatalogError::DuplicateOption { .. })
        ));
    }

    #[test]
    fn default_mapping_matches_observed_table() {
        let mapping = ScoreMapping::default();
        let scores: Vec<f64> = mapping.tiers().iter().map(|t| t.score).collect();
        assert_eq!(scores, vec![100.0, 85.0, 75.0, 65.0, 55.0]);
        assert_eq!(mapping.best().score, 100.0);
        assert_eq!(mapping.get(0), None);
        assert_eq!(mapping.get(3).map(|t| t.score), Some(75.0));
        assert_eq!(mapping.tier(9).score, 55.0);
    }

    #[test]
    fn mapping_rejects_bad_scores() {
        assert_eq!(
            ScoreMapping::new(vec![]).unwrap_err(),
            CatalogError::EmptyScoreMapping
        );
        assert!(matches!(
            ScoreMapping::new(vec![ScoreTier::new(120.0, "Too high")]),
            Err(CatalogError::ScoreOutOfRange { rank: 1, .. })
        ));
        assert!(matches!(
            ScoreMapping::new(vec![ScoreTier::new(f64::NAN, "NaN")]),
            Err(CatalogError::ScoreOutOfRange { .. })
        ));
        assert_eq!(
            ScoreMapping::new(vec![ScoreTier::new(50.0, "Low"), ScoreTier::new(90.0, "High")])
                .unwrap_err(),
            CatalogError::ScoresNotMonotonic { rank: 2 }
        );
    }

    #[test]
    fn catalog_rejects_criteria_the_mapping_cannot_score() {
        let mapping = ScoreMapping::new(vec![
            ScoreTier::new(100.0, "Pass"),
            ScoreTier::new(0.0, "Fail"),
        ])
        .unwrap();
        let criterion = Criterion::new("blockSize", "Block size", five_options()).unwrap();
        let err = Catalog::new("c", "C", mapping, vec![criterion], vec![]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::TooManyOptions {
                options: 5,
                tiers: 2,
                ..
            }
        ));
    }

    #[test]
    fn catalog_rejects_duplicate_names() {
        let a = Criterion::new("flatness", "Flatness", five_options()).unwrap();
        let err = Catalog::new(
            "c",
            "C",
            ScoreMapping::default(),
            vec![a.clone(), a],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCriterion("flatness".into()));

        let g = Group::new("igneous", vec![Choice::new("basalt", "Basalt")]).unwrap();
        let err = Catalog::new("c", "C", ScoreMapping::default(), vec![], vec![g.clone(), g])
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateGroup("igneous".into()));
    }
}
