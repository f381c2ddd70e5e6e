//! Selection state for the unlock modal
//!
//! An insertion-ordered set of option identifiers.

use super::unlock_option::UnlockOptionId;

/// Options currently checked, in the order they were checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<UnlockOptionId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change
    ///
    /// Checking an option already present and unchecking one that is absent
    /// are both no-ops.
    pub fn toggle(&mut self, id: UnlockOptionId, checked: bool) {
        if checked {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        } else {
            self.selected.retain(|&selected| selected != id);
        }
    }

    pub fn contains(&self, id: UnlockOptionId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn as_slice(&self) -> &[UnlockOptionId] {
        &self.selected
    }

    /// Snapshot of the selection in selection order
    pub fn to_vec(&self) -> Vec<UnlockOptionId> {
        self.selected.clone()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
