//! Exclusive group selector.
//!
//! Holds at most one active selection across every registered group. The
//! active selection is stored as a single value rather than one slot per
//! group, so two groups can never report a selection at the same time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AssessmentError, CatalogError};
use crate::model::{Catalog, Group};

/// The single active `{group, value}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSelection {
    pub group_id: String,
    pub value: String,
}

/// Selector over a fixed set of mutually exclusive groups.
#[derive(Debug, Clone, Default)]
pub struct GroupSelector {
    groups: Vec<Group>,
    active: Option<ActiveSelection>,
}

impl GroupSelector {
    pub fn new(groups: Vec<Group>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for group in &groups {
            if !ids.insert(group.id()) {
                return Err(CatalogError::DuplicateGroup(group.id().to_string()));
            }
        }
        Ok(Self {
            groups,
            active: None,
        })
    }

    /// Selector over the groups of an already validated catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            groups: catalog.groups().to_vec(),
            active: None,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    fn group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == group_id)
    }

    /// Select `value` in `group_id`, clearing every other group.
    ///
    /// Fails with [`AssessmentError::InvalidSelection`] without touching
    /// state if the group is unknown or does not offer `value`.
    pub fn select(
        &mut self,
        group_id: &str,
        value: &str,
    ) -> Result<ActiveSelection, AssessmentError> {
        let valid = self
            .group(group_id)
            .is_some_and(|group| group.option(value).is_some());
        if !valid {
            return Err(AssessmentError::InvalidSelection {
                group: group_id.to_string(),
                value: value.to_string(),
            });
        }

        let selection = ActiveSelection {
            group_id: group_id.to_string(),
            value: value.to_string(),
        };
        if let Some(previous) = self.active.replace(selection.clone()) {
            if previous.group_id != group_id {
                tracing::debug!(
                    cleared = %previous.group_id,
                    group = group_id,
                    value,
                    "selection moved to another group"
                );
            }
        } else {
            tracing::debug!(group = group_id, value, "selection set");
        }
        Ok(selection)
    }

    /// Clear the selection of `group_id` only. Returns `true` if something
    /// was cleared; a group without a selection is left as is.
    pub fn clear(&mut self, group_id: &str) -> bool {
        match &self.active {
            Some(active) if active.group_id == group_id => {
                self.active = None;
                tracing::debug!(group = group_id, "selection cleared");
                true
            }
            _ => false,
        }
    }

    /// Drop any active selection.
    pub fn clear_all(&mut self) {
        self.active = None;
    }

    /// The single active selection, if any.
    pub fn current_selection(&self) -> Option<&ActiveSelection> {
        self.active.as_ref()
    }

    /// The value selected in `group_id`, if that group is the active one.
    pub fn selection_for(&self, group_id: &str) -> Option<&str> {
        self.active
            .as_ref()
            .filter(|a| a.group_id == group_id)
            .map(|a| a.value.as_str())
    }

    /// Display label of the active option.
    pub fn current_label(&self) -> Option<&str> {
        let active = self.active.as_ref()?;
        self.group(&active.group_id)?
            .option(&active.value)
            .map(|o| o.label.as_str())
    }
}
