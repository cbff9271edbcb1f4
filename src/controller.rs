// controller.rs
use crate::backend::Backend;
use crate::domain::{CompsPanel, Property, SearchQuery, SearchResults, SelectionState};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info};

/// Owns the selection mirrored from the backend.
///
/// Locks are held only to read or replace a value, never across a backend
/// call. Two overlapping operations therefore both reach the server and the
/// one whose response lands last wins; `SelectionState::revision` makes the
/// order observable.
///
/// Page chrome (sidebar, comps panel) is not kept here: it belongs to the
/// browser that shows it and travels with each request.
pub struct SelectionController<B: Backend> {
    backend: B,
    selection: Mutex<SelectionState>,
}

/// What a select leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Selected {
    pub state: SelectionState,
    /// Loading placeholder for the nearby-sales lookup, when one was queued.
    pub comps: Option<CompsPanel>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<B: Backend> SelectionController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            selection: Mutex::new(SelectionState::default()),
        }
    }

    pub fn selection(&self) -> SelectionState {
        lock(&self.selection).clone()
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Refreshes the selection from the server. On failure the previous
    /// state is kept.
    pub fn load_selected(&self) -> SelectionState {
        match self.backend.fetch_selected() {
            Ok(properties) => self.replace_selection(properties),
            Err(e) => {
                error!(error = %e, "Error loading selected properties");
                self.selection()
            }
        }
    }

    /// Reads the server's list without touching controller state.
    pub fn get_selected(&self) -> Vec<Property> {
        self.backend.fetch_selected().unwrap_or_else(|e| {
            error!(error = %e, "Error getting selected properties");
            Vec::new()
        })
    }

    /// Adds `property` on the server and adopts the list it answers with.
    ///
    /// When the property has coordinates a comps loading placeholder is
    /// queued; rendering it is what kicks off [`Self::load_comps_for_property`].
    pub fn select_property(&self, property: Property) -> Selected {
        match self.backend.add_selected(&property) {
            Ok(properties) => {
                let state = self.replace_selection(properties);
                info!(id = %property.id, count = state.len(), "property selected");

                let comps = property
                    .coordinates()
                    .is_some()
                    .then(|| CompsPanel::Loading { subject: property });
                Selected { state, comps }
            }
            Err(e) => {
                error!(id = %property.id, error = %e, "Error selecting property");
                Selected {
                    state: self.selection(),
                    comps: None,
                }
            }
        }
    }

    pub fn remove_selected(&self, id: &str) -> SelectionState {
        match self.backend.remove_selected(id) {
            Ok(properties) => {
                let state = self.replace_selection(properties);
                info!(%id, count = state.len(), "property removed");
                state
            }
            Err(e) => {
                error!(%id, error = %e, "Error removing property");
                self.selection()
            }
        }
    }

    /// Fetches nearby sales for `property` and returns what the panel shows
    /// afterwards. `None` for a property without coordinates.
    pub fn load_comps_for_property(&self, property: &Property) -> Option<CompsPanel> {
        let Some(at) = property.coordinates() else {
            debug!(id = %property.id, "no coordinates, skipping comps");
            return None;
        };

        let panel = match self.backend.nearby_comps(at) {
            Ok(response) => CompsPanel::from_response(property, response),
            Err(e) => {
                error!(id = %property.id, error = %e, "Error loading comps");
                CompsPanel::Failed
            }
        };
        Some(panel)
    }

    pub fn search(&self, query: &SearchQuery) -> SearchResults {
        self.backend.search_teardowns(query).unwrap_or_else(|e| {
            error!(error = %e, "Error searching teardown candidates");
            SearchResults::default()
        })
    }

    fn replace_selection(&self, properties: Vec<Property>) -> SelectionState {
        let mut current = lock(&self.selection);
        *current = current.replaced(properties);
        debug!(revision = current.revision(), count = current.len(), "selection replaced");
        current.clone()
    }
}
