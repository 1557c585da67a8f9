//! rockgrade-core: assessment core for rock classification and blast
//! quality scoring.
//!
//! This crate defines the catalog data model, the exclusive group selector,
//! the criteria evaluation engine and the session types the rest of rockgrade
//! builds on.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod rock_types;
pub mod selector;
pub mod session;
pub mod strength;

pub use engine::{CriterionOutcome, EvaluationEngine, EvaluationResult, SelectionState};
pub use error::{AssessmentError, CatalogError};
pub use model::{Catalog, Choice, Criterion, Group, ScoreMapping, ScoreTier};
pub use selector::{ActiveSelection, GroupSelector};
pub use session::{Assessment, AssessmentSnapshot, SharedAssessment};
