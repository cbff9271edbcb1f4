use crate::domain::{Property, SearchResults, SelectionState};
use crate::templates::components::selection::select_button;
use maud::{html, Markup};

pub fn property_card(property: &Property, state: &SelectionState) -> Markup {
    html! {
        div class="property-card" data-id=(property.id) {
            img class="property-image" src=(property.image_src()) alt="";
            div class="property-info" {
                div class="property-price" { (property.display_price()) }
                div class="property-address" { (property.street().unwrap_or("Unknown")) }
            }
            (select_button(property, state.contains(&property.id), false))
        }
    }
}

/// Body of `#results` for a search.
pub fn search_results(results: &SearchResults, state: &SelectionState) -> Markup {
    html! {
        @if results.results.is_empty() {
            p class="no-results" { "No properties found" }
        } @else {
            @if let Some(total) = results.total_count {
                p class="result-count" { "Showing " (results.results.len()) " of " (total) " properties" }
            }
            div class="property-grid" {
                @for property in &results.results {
                    (property_card(property, state))
                }
            }
        }
    }
}
