// src/domain/comps.rs

use crate::domain::format::{format_number, format_price};
use crate::domain::property::{Address, Property};
use serde::Deserialize;

/// A recently sold neighbour, as returned by `/api/comps/nearby`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comp {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub img_src: Option<String>,
    #[serde(default)]
    pub unformatted_price: Option<f64>,
    #[serde(default)]
    pub living_area: Option<f64>,
    #[serde(default)]
    pub beds: Option<f64>,
    #[serde(default)]
    pub baths: Option<f64>,
    #[serde(default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub results: Vec<Comp>,
}

/// What the comps panel is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CompsPanel {
    #[default]
    Hidden,
    Loading {
        subject: Property,
    },
    Loaded {
        subject_street: String,
        comps: Vec<Comp>,
    },
    Empty,
    Failed,
}

impl CompsPanel {
    pub fn from_response(subject: &Property, response: CompsResponse) -> Self {
        if response.success && !response.results.is_empty() {
            CompsPanel::Loaded {
                subject_street: subject.street().unwrap_or("Selected Property").to_string(),
                comps: response.results,
            }
        } else {
            CompsPanel::Empty
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, CompsPanel::Hidden)
    }
}

impl Comp {
    pub fn street(&self) -> &str {
        self.address
            .as_ref()
            .and_then(Address::street)
            .unwrap_or("N/A")
    }

    pub fn image_src(&self) -> &str {
        self.img_src.as_deref().unwrap_or("")
    }

    /// Rounded dollars per square foot; `None` when there is no living area
    /// or the result would not be positive.
    pub fn price_per_sqft(&self) -> Option<i64> {
        let area = self.living_area.filter(|a| *a > 0.0)?;
        let per_sqft = (self.unformatted_price? / area).round();

        (per_sqft > 0.0).then_some(per_sqft as i64)
    }

    pub fn display_price(&self) -> String {
        format_price(self.unformatted_price)
    }

    /// `3bd 2.5ba · 1,840sqft`; zero or missing rooms show as `?`.
    pub fn details(&self) -> String {
        let rooms = |v: Option<f64>| match v.filter(|n| *n != 0.0) {
            Some(n) => n.to_string(),
            None => "?".to_string(),
        };

        format!(
            "{}bd {}ba · {}sqft",
            rooms(self.beds),
            rooms(self.baths),
            format_number(self.living_area.unwrap_or(0.0))
        )
    }

    pub fn distance_label(&self) -> String {
        match self.distance {
            Some(d) => format!("{d} mi away"),
            None => "? mi away".to_string(),
        }
    }
}
