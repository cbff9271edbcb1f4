// templates/components/comps.rs

use crate::domain::{Comp, CompsPanel, Property};
use maud::{html, Markup};

/// `#comps-panel` wrapping `#comps-list`.
///
/// The loading placeholder fetches `/comps` as soon as htmx sees it and
/// swaps itself for the answer. Its URL carries the subject, so the lookup
/// does not depend on the property still being selected.
pub fn comps_panel(panel: &CompsPanel, oob: bool) -> Markup {
    let display = if panel.is_visible() { "display: block;" } else { "display: none;" };
    let oob = oob.then_some("true");
    let loading_url = match panel {
        CompsPanel::Loading { subject } => Some(comps_url(subject)),
        _ => None,
    };

    html! {
        @if let Some(url) = &loading_url {
            div
                id="comps-panel"
                class="comps-panel"
                style=(display)
                hx-get=(url)
                hx-trigger="load"
                hx-swap="outerHTML"
                hx-swap-oob=[oob]
            {
                h3 { "Nearby Sales" }
                div id="comps-list" { (comps_list(panel)) }
            }
        } @else {
            div id="comps-panel" class="comps-panel" style=(display) hx-swap-oob=[oob] {
                h3 { "Nearby Sales" }
                div id="comps-list" { (comps_list(panel)) }
            }
        }
    }
}

fn comps_list(panel: &CompsPanel) -> Markup {
    html! {
        @match panel {
            CompsPanel::Hidden => {},
            CompsPanel::Loading { .. } => div class="loading-comps" { "Loading nearby sales..." },
            CompsPanel::Loaded { subject_street, comps } => {
                div class="comps-for" {
                    strong { "Comps for:" } " " (subject_street)
                }
                @for comp in comps {
                    (comp_item(comp))
                }
            },
            CompsPanel::Empty => div class="no-comps" { "No nearby sales found" },
            CompsPanel::Failed => div class="error" { "Error loading comps" },
        }
    }
}

fn comp_item(comp: &Comp) -> Markup {
    html! {
        div class="comp-item" {
            div class="comp-image" {
                img src=(comp.image_src()) alt="";
            }
            div class="comp-info" {
                div class="comp-price" { (comp.display_price()) }
                div class="comp-ppsf" {
                    @if let Some(ppsf) = comp.price_per_sqft() {
                        "$" (ppsf) "/sqft"
                    }
                }
                div class="comp-address" { (comp.street()) }
                div class="comp-details" { (comp.details()) }
                div class="comp-distance" { (comp.distance_label()) }
            }
        }
    }
}

fn comps_url(subject: &Property) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("id", &subject.id);
    if let Some(street) = subject.street() {
        query.append_pair("street", street);
    }
    if let Some(at) = subject.coordinates() {
        query
            .append_pair("lat", &at.latitude.to_string())
            .append_pair("lng", &at.longitude.to_string());
    }
    format!("/comps?{}", query.finish())
}
