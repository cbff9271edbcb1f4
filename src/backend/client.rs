// client.rs
use crate::backend::{Backend, BackendError};
use crate::domain::{CompsResponse, Coordinates, Property, SearchQuery, SearchResults};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("spec-home-analyzer/", env!("CARGO_PKG_VERSION"));

// Relative so they resolve under the base URL's path.
const SELECTED_PATH: &str = "api/selected";
const NEARBY_COMPS_PATH: &str = "api/comps/nearby";
const TEARDOWNS_PATH: &str = "api/search/teardowns";

pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// The backend keeps the selection in its cookie session, so the client
    /// holds on to whatever cookies it is handed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.base_url.join(path)?)
    }

    /// Sends the request and decodes whatever body comes back.
    ///
    /// The status code is not checked: a JSON error body that happens to
    /// match `T` is accepted, anything else fails to decode.
    fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, BackendError> {
        let response = request.send()?;
        let status = response.status();
        let bytes = response.bytes()?;

        debug!(%status, len = bytes.len(), "backend responded");
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

impl Backend for HttpBackend {
    fn fetch_selected(&self) -> Result<Vec<Property>, BackendError> {
        let url = self.endpoint(SELECTED_PATH)?;
        Self::send_json(self.client.get(url.as_str()))
    }

    fn add_selected(&self, property: &Property) -> Result<Vec<Property>, BackendError> {
        let url = self.endpoint(SELECTED_PATH)?;
        Self::send_json(self.client.post(url.as_str()).json(property))
    }

    fn remove_selected(&self, id: &str) -> Result<Vec<Property>, BackendError> {
        let url = self.endpoint(SELECTED_PATH)?;
        Self::send_json(self.client.delete(url.as_str()).json(&json!({ "id": id })))
    }

    fn nearby_comps(&self, at: Coordinates) -> Result<CompsResponse, BackendError> {
        let url = self.endpoint(NEARBY_COMPS_PATH)?;
        let request = self
            .client
            .get(url.as_str())
            .query(&[("lat", at.latitude), ("lng", at.longitude)]);

        Self::send_json(request)
    }

    fn search_teardowns(&self, query: &SearchQuery) -> Result<SearchResults, BackendError> {
        let url = self.endpoint(TEARDOWNS_PATH)?;
        Self::send_json(self.client.get(url.as_str()).query(query))
    }
}
