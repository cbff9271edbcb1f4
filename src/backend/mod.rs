mod backend_error;
mod client;

pub use backend_error::BackendError;
pub use client::HttpBackend;

use crate::domain::{CompsResponse, Coordinates, Property, SearchQuery, SearchResults};

/// The REST endpoints the UI talks to.
///
/// Every call is a single blocking round trip. Implementations do not retry.
pub trait Backend: Send + Sync {
    /// `GET /api/selected`
    fn fetch_selected(&self) -> Result<Vec<Property>, BackendError>;

    /// `POST /api/selected`, answered with the full new list.
    fn add_selected(&self, property: &Property) -> Result<Vec<Property>, BackendError>;

    /// `DELETE /api/selected` with `{id}`, answered with the full new list.
    fn remove_selected(&self, id: &str) -> Result<Vec<Property>, BackendError>;

    /// `GET /api/comps/nearby?lat=&lng=`
    fn nearby_comps(&self, at: Coordinates) -> Result<CompsResponse, BackendError>;

    /// `GET /api/search/teardowns?max_price=&page=&city=`
    fn search_teardowns(&self, query: &SearchQuery) -> Result<SearchResults, BackendError>;
}
