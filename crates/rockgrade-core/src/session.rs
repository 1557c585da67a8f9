//! Assessment sessions.
//!
//! An [`Assessment`] pairs the group selector used for rock classification
//! with the criteria evaluation engine. UI layers hold one per user session.
//! [`SharedAssessment`] is the handle for several surfaces bound to the same
//! session: every update goes through a single lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::engine::{EvaluationEngine, EvaluationResult};
use crate::error::AssessmentError;
use crate::model::Catalog;
use crate::selector::{ActiveSelection, GroupSelector};

/// Classification and evaluation taken from the same state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub classification: Option<ActiveSelection>,
    pub evaluation: EvaluationResult,
}

/// One user's assessment session.
#[derive(Debug, Clone)]
pub struct Assessment {
    selector: GroupSelector,
    engine: EvaluationEngine,
}

impl Assessment {
    /// Start a session with every criterion at its default option and no
    /// rock classification.
    pub fn new(catalog: &Catalog) -> Self {
        let selector = GroupSelector::from_catalog(catalog);
        let mut engine = EvaluationEngine::new();
        engine.reinitialize(catalog);
        Self { selector, engine }
    }

    pub fn selector(&self) -> &GroupSelector {
        &self.selector
    }

    pub fn engine(&self) -> &EvaluationEngine {
        &self.engine
    }

    pub fn select(
        &mut self,
        group_id: &str,
        value: &str,
    ) -> Result<ActiveSelection, AssessmentError> {
        self.selector.select(group_id, value)
    }

    pub fn clear(&mut self, group_id: &str) -> bool {
        self.selector.clear(group_id)
    }

    pub fn current_selection(&self) -> Option<&ActiveSelection> {
        self.selector.current_selection()
    }

    pub fn set_selection(&mut self, criterion: &str, value: &str) -> Result<(), AssessmentError> {
        self.engine.set_selection(criterion, value)
    }

    pub fn evaluate(&self) -> EvaluationResult {
        self.engine.evaluate()
    }

    /// Restore all criteria to defaults. The rock classification is kept.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn snapshot(&self) -> AssessmentSnapshot {
        AssessmentSnapshot {
            classification: self.selector.current_selection().cloned(),
            evaluation: self.engine.evaluate(),
        }
    }
}

/// Cloneable handle applying updates to one [`Assessment`] at a time.
#[derive(Debug, Clone)]
pub struct SharedAssessment {
    inner: Arc<Mutex<Assessment>>,
}

impl SharedAssessment {
    pub fn new(assessment: Assessment) -> Self {
        Self {
            inner: Arc::new(Mutex::new(assessment)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Assessment> {
        // Mutations validate before committing; a poisoned session is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut Assessment) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn select(&self, group_id: &str, value: &str) -> Result<ActiveSelection, AssessmentError> {
        self.lock().select(group_id, value)
    }

    pub fn clear(&self, group_id: &str) -> bool {
        self.lock().clear(group_id)
    }

    pub fn set_selection(&self, criterion: &str, value: &str) -> Result<(), AssessmentError> {
        self.lock().set_selection(criterion, value)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn snapshot(&self) -> AssessmentSnapshot {
        self.lock().snapshot()
    }
}
