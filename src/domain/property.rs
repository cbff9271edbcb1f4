// src/domain/property.rs

use crate::domain::format::format_price;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const NO_IMAGE_SRC: &str = "/static/img/no-image.png";

/// A listing as the backend hands it to us.
///
/// Only the fields the UI reads are typed. Everything else rides along in
/// `extra` so that posting a property back to `/api/selected` stores exactly
/// what the search returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unformatted_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat_long: Option<LatLong>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Address {
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref().filter(|s| !s.is_empty())
    }
}

impl Property {
    /// A bare property carrying only what a nearby-sales lookup and its
    /// heading need.
    pub fn comps_subject(
        id: String,
        street: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id,
            address: street.map(|street| Address {
                street: Some(street),
                extra: Map::new(),
            }),
            img_src: None,
            price: None,
            unformatted_price: None,
            lat_long: Some(LatLong {
                latitude,
                longitude,
            }),
            extra: Map::new(),
        }
    }

    pub fn street(&self) -> Option<&str> {
        self.address.as_ref().and_then(Address::street)
    }

    pub fn image_src(&self) -> &str {
        self.img_src
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(NO_IMAGE_SRC)
    }

    /// The listing's own price string wins; otherwise the raw number is formatted.
    pub fn display_price(&self) -> String {
        match self.price.as_deref().filter(|s| !s.is_empty()) {
            Some(price) => price.to_string(),
            None => format_price(self.unformatted_price),
        }
    }

    /// Coordinates usable for a nearby-sales lookup.
    ///
    /// A zero latitude counts as missing, the same way the listing feed
    /// leaves ungeocoded rows.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat_long = self.lat_long.as_ref()?;
        let latitude = lat_long.latitude.filter(|lat| *lat != 0.0)?;
        let longitude = lat_long.longitude?;

        Some(Coordinates {
            latitude,
            longitude,
        })
    }
}
