// src/domain/selection.rs

use crate::domain::property::Property;
use std::collections::HashSet;

/// The selection as last confirmed by the server.
///
/// Never edited in place: every successful round trip produces a new
/// state via [`SelectionState::replaced`], bumping `revision`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    properties: Vec<Property>,
    revision: u64,
}

impl SelectionState {
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn ids(&self) -> HashSet<&str> {
        self.properties.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.properties.iter().any(|p| p.id == id)
    }

    pub fn replaced(&self, properties: Vec<Property>) -> Self {
        Self {
            properties,
            revision: self.revision + 1,
        }
    }
}

/// Pairs each card id with whether its select button should read as selected.
pub fn select_button_states<'a, I>(card_ids: I, state: &SelectionState) -> Vec<(&'a str, bool)>
where
    I: IntoIterator<Item = &'a str>,
{
    let selected = state.ids();
    card_ids
        .into_iter()
        .map(|id| (id, selected.contains(id)))
        .collect()
}
