//! Criteria evaluation engine.
//!
//! Owns the ordered criterion catalog and the per-criterion selection state,
//! and derives scores, labels, the aggregate score and the radar vector.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::model::{Catalog, Criterion, ScoreMapping};

/// Chosen option value per criterion. Always holds one entry per criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    choices: BTreeMap<String, String>,
}

impl SelectionState {
    /// Every criterion at its rank-1 option.
    fn defaults(criteria: &[Criterion]) -> Self {
        let choices = criteria
            .iter()
            .map(|c| (c.name().to_string(), c.default_choice().value.clone()))
            .collect();
        Self { choices }
    }

    pub fn get(&self, criterion: &str) -> Option<&str> {
        self.choices.get(criterion).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// `(criterion, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Derived result for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionOutcome {
    pub name: String,
    pub title: String,
    pub value: String,
    pub rank: usize,
    pub score: f64,
    pub label: String,
}

/// Scores derived from one selection snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Per-criterion outcomes in catalog order.
    pub criteria: Vec<CriterionOutcome>,
    /// Unweighted mean of the per-criterion scores, two decimals.
    pub aggregate_score: f64,
    /// Per-criterion scores in catalog order, one per radar axis.
    pub radar_vector: Vec<f64>,
}

impl EvaluationResult {
    fn outcome(&self, criterion: &str) -> Option<&CriterionOutcome> {
        self.criteria.iter().find(|o| o.name == criterion)
    }

    pub fn score(&self, criterion: &str) -> Option<f64> {
        self.outcome(criterion).map(|o| o.score)
    }

    pub fn label(&self, criterion: &str) -> Option<&str> {
        self.outcome(criterion).map(|o| o.label.as_str())
    }

    /// Axis labels matching `radar_vector` position by position.
    pub fn radar_axes(&self) -> Vec<&str> {
        self.criteria.iter().map(|o| o.title.as_str()).collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Maps per-criterion choices to scores through a shared [`ScoreMapping`].
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    mapping: ScoreMapping,
    criteria: Vec<Criterion>,
    selection: SelectionState,
    initialized: bool,
    cached: OnceCell<EvaluationResult>,
}

impl EvaluationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the catalog and select every criterion's rank-1 option.
    ///
    /// Fails with [`AssessmentError::AlreadyInitialized`] on a second call;
    /// use [`EvaluationEngine::reinitialize`] to swap catalogs explicitly.
    pub fn initialize(&mut self, catalog: &Catalog) -> Result<(), AssessmentError> {
        if self.initialized {
            return Err(AssessmentError::AlreadyInitialized);
        }
        self.reinitialize(catalog);
        Ok(())
    }

    /// Replace the catalog and restore defaults, whatever the current state.
    pub fn reinitialize(&mut self, catalog: &Catalog) {
        self.mapping = catalog.score_mapping().clone();
        self.criteria = catalog.criteria().to_vec();
        self.selection = SelectionState::defaults(&self.criteria);
        self.initialized = true;
        self.cached = OnceCell::new();
        tracing::debug!(
            catalog = catalog.id(),
            criteria = self.criteria.len(),
            tiers = self.mapping.len(),
            "evaluation engine initialized"
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn score_mapping(&self) -> &ScoreMapping {
        &self.mapping
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Record `value` as the choice for `criterion`.
    pub fn set_selection(&mut self, criterion: &str, value: &str) -> Result<(), AssessmentError> {
        let Some(entry) = self.criteria.iter().find(|c| c.name() == criterion) else {
            return Err(AssessmentError::UnknownCriterion(criterion.to_string()));
        };
        let Some(rank) = entry.rank_of(value) else {
            return Err(AssessmentError::InvalidOption {
                criterion: criterion.to_string(),
                value: value.to_string(),
            });
        };

        self.selection
            .choices
            .insert(criterion.to_string(), value.to_string());
        self.cached = OnceCell::new();
        tracing::debug!(criterion, value, rank, "criterion selection updated");
        Ok(())
    }

    /// Restore every criterion to its rank-1 option.
    pub fn reset(&mut self) {
        self.selection = SelectionState::defaults(&self.criteria);
        self.cached = OnceCell::new();
    }

    /// Derive the evaluation for the current selection.
    ///
    /// The result is computed once per selection state and reused until the
    /// next mutation.
    pub fn evaluate(&self) -> EvaluationResult {
        self.cached.get_or_init(|| self.compute()).clone()
    }

    fn compute(&self) -> EvaluationResult {
        let criteria: Vec<CriterionOutcome> = self
            .criteria
            .iter()
            .map(|criterion| {
                let default = criterion.default_choice();
                let value = self
                    .selection
                    .get(criterion.name())
                    .unwrap_or(default.value.as_str());
                let rank = criterion.rank_of(value).unwrap_or(1);
                let tier = self.mapping.tier(rank);
                CriterionOutcome {
                    name: criterion.name().to_string(),
                    title: criterion.title().to_string(),
                    value: value.to_string(),
                    rank,
                    score: tier.score,
                    label: tier.label.clone(),
                }
            })
            .collect();

        let radar_vector: Vec<f64> = criteria.iter().map(|o| o.score).collect();
        let aggregate_score = if radar_vector.is_empty() {
            self.mapping.best().score
        } else {
            round2(radar_vector.iter().sum::<f64>() / radar_vector.len() as f64)
        };

        EvaluationResult {
            criteria,
            aggregate_score,
            radar_vector,
        }
    }
}
