use crate::backend::{Backend, BackendError};
use crate::domain::{CompsResponse, Coordinates, Property, SearchQuery, SearchResults};
use astra::Response;
use serde_json::json;
use std::io::Read;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory stand-in for the backend, with the same session-list rules:
/// adds are de-duplicated by id, removes filter by id.
#[derive(Default)]
pub struct FakeBackend {
    selected: Mutex<Vec<Property>>,
    comps: Mutex<Option<Result<CompsResponse, ()>>>,
    comps_requests: Mutex<Vec<(f64, f64)>>,
    search: Mutex<SearchResults>,
    failing: AtomicBool,
    fetches: AtomicUsize,
}

impl FakeBackend {
    pub fn seed(&self, properties: Vec<Property>) {
        *self.selected.lock().unwrap() = properties;
    }

    pub fn server_list(&self) -> Vec<Property> {
        self.selected.lock().unwrap().clone()
    }

    /// Makes every call fail the way a non-JSON body would.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_comps(&self, reply: Result<CompsResponse, ()>) {
        *self.comps.lock().unwrap() = Some(reply);
    }

    pub fn set_search(&self, results: SearchResults) {
        *self.search.lock().unwrap() = results;
    }

    /// How many times the selection list was fetched.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn comps_requests(&self) -> Vec<(f64, f64)> {
        self.comps_requests.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), BackendError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(decode_error());
        }
        Ok(())
    }
}

fn decode_error() -> BackendError {
    serde_json::from_str::<serde_json::Value>("<html>502 Bad Gateway</html>")
        .unwrap_err()
        .into()
}

impl Backend for FakeBackend {
    fn fetch_selected(&self) -> Result<Vec<Property>, BackendError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.server_list())
    }

    fn add_selected(&self, property: &Property) -> Result<Vec<Property>, BackendError> {
        self.check()?;
        let mut list = self.selected.lock().unwrap();
        if !list.iter().any(|p| p.id == property.id) {
            list.push(property.clone());
        }
        Ok(list.clone())
    }

    fn remove_selected(&self, id: &str) -> Result<Vec<Property>, BackendError> {
        self.check()?;
        let mut list = self.selected.lock().unwrap();
        list.retain(|p| p.id != id);
        Ok(list.clone())
    }

    fn nearby_comps(&self, at: Coordinates) -> Result<CompsResponse, BackendError> {
        self.check()?;
        self.comps_requests
            .lock()
            .unwrap()
            .push((at.latitude, at.longitude));

        match self.comps.lock().unwrap().clone() {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(())) => Err(decode_error()),
            None => Ok(CompsResponse::default()),
        }
    }

    fn search_teardowns(&self, _query: &SearchQuery) -> Result<SearchResults, BackendError> {
        self.check()?;
        Ok(self.search.lock().unwrap().clone())
    }
}

/// A property with a street but no coordinates.
pub fn property(id: &str) -> Property {
    serde_json::from_value(json!({
        "id": id,
        "address": { "street": format!("{id} Main St"), "city": "Westmont" },
        "imgSrc": format!("https://photos.example/{id}.jpg"),
        "unformattedPrice": 615000,
    }))
    .unwrap()
}

pub fn property_at(id: &str, latitude: f64, longitude: f64) -> Property {
    let mut p = property(id);
    p.lat_long = Some(crate::domain::property::LatLong {
        latitude: Some(latitude),
        longitude: Some(longitude),
    });
    p
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
