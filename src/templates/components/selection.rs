// templates/components/selection.rs

use crate::domain::{select_button_states, Property, SelectionState};
use maud::{html, Markup};
use serde_json::json;
use std::collections::HashMap;

fn oob_attr(oob: bool) -> Option<&'static str> {
    oob.then_some("true")
}

pub fn selected_count(state: &SelectionState, oob: bool) -> Markup {
    html! {
        span id="selected-count" class="count-badge" hx-swap-oob=[oob_attr(oob)] { (state.len()) }
    }
}

pub fn selected_list(state: &SelectionState, oob: bool) -> Markup {
    html! {
        div id="selected-list" hx-swap-oob=[oob_attr(oob)] {
            @if state.is_empty() {
                p style="color: #6b7280; font-size: 0.875rem;" { "No properties selected yet" }
            } @else {
                @for prop in state.properties() {
                    (selected_item(prop))
                }
            }
        }
    }
}

fn selected_item(prop: &Property) -> Markup {
    html! {
        div class="selected-item" {
            img src=(prop.image_src()) alt="";
            div class="selected-item-info" {
                div class="selected-item-price" { (prop.display_price()) }
                div class="selected-item-address" { (prop.street().unwrap_or("Unknown")) }
            }
            button
                class="btn btn-remove"
                hx-post="/remove"
                hx-vals=(json!({ "id": prop.id }).to_string())
                hx-swap="none"
                title="Remove"
            { "×" }
        }
    }
}

/// Submits the page-level `analyze-form`, which navigates to `/analyze`.
pub fn analyze_button(state: &SelectionState, oob: bool) -> Markup {
    html! {
        button
            id="analyze-btn"
            type="submit"
            form="analyze-form"
            class="btn btn-primary"
            disabled[state.is_empty()]
            hx-swap-oob=[oob_attr(oob)]
        { "Analyze Selected" }
    }
}

/// The `.btn-select` inside a property card. Clicking it posts the whole
/// property so the server stores what the search returned.
pub fn select_button(property: &Property, selected: bool, oob: bool) -> Markup {
    let payload = json!({
        "property": serde_json::to_string(property).unwrap_or_default(),
    });

    html! {
        button
            id=(select_button_id(&property.id))
            class=(if selected { "btn btn-select selected" } else { "btn btn-select" })
            hx-post="/select"
            hx-vals=(payload.to_string())
            hx-swap="none"
            hx-swap-oob=[oob_attr(oob)]
        {
            @if selected { "✓ Selected" } @else { "+ Select" }
        }
    }
}

pub fn select_button_id(property_id: &str) -> String {
    format!("select-{property_id}")
}

/// Everything that depends on the selection, as out-of-band swaps.
///
/// Select buttons are re-rendered for every property in either the old or
/// the new selection, which covers the card that was just toggled.
pub fn selection_update(previous: &SelectionState, current: &SelectionState) -> Markup {
    let mut touched: Vec<&Property> = Vec::new();
    let mut by_id: HashMap<&str, &Property> = HashMap::new();
    for prop in previous.properties().iter().chain(current.properties()) {
        if by_id.insert(prop.id.as_str(), prop).is_none() {
            touched.push(prop);
        }
    }
    let states = select_button_states(touched.iter().map(|p| p.id.as_str()), current);

    html! {
        (selected_count(current, true))
        (selected_list(current, true))
        (analyze_button(current, true))
        @for (prop, (_, selected)) in touched.iter().zip(states) {
            (select_button(prop, selected, true))
        }
    }
}
