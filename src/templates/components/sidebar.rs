use crate::domain::{CompsPanel, SelectionState, Sidebar};
use crate::templates::components::comps::comps_panel;
use crate::templates::components::selection::{analyze_button, selected_list};
use maud::{html, Markup};
use serde_json::json;

/// Keeps `body.sidebar-minimized` in step with the `#sidebar` that was just
/// swapped in. A failed request swaps nothing and changes nothing.
const SYNC_BODY_CLASS: &str = "htmx:afterRequest: if (event.detail.successful) \
    document.body.classList.toggle('sidebar-minimized', \
    document.getElementById('sidebar').classList.contains('minimized'))";

/// What goes inside the sidebar body.
pub enum SidebarBody<'a> {
    /// Full page render: the selection and a hidden comps panel.
    Rendered(&'a SelectionState),
    /// Toggle response: htmx keeps the live list, button and comps panel.
    Preserved,
}

/// `#sidebar`: the selection list, the analyze button and the comps panel.
///
/// The toggle posts the state it was rendered with and swaps in the flipped
/// sidebar, so nothing about it is remembered server-side.
pub fn sidebar(sidebar: Sidebar, body: SidebarBody<'_>) -> Markup {
    let toggle_vals = json!({ "minimized": sidebar.is_minimized().to_string() }).to_string();

    html! {
        aside id="sidebar" class=(sidebar.class()) {
            div class="sidebar-header" {
                h3 { "Selected Properties" }
                button
                    type="button"
                    class="sidebar-toggle"
                    title="Toggle sidebar"
                    hx-post="/sidebar/toggle"
                    hx-vals=(toggle_vals)
                    hx-target="#sidebar"
                    hx-swap="outerHTML"
                    hx-on=(SYNC_BODY_CLASS)
                {
                    span id="sidebar-toggle-icon" { (sidebar.icon()) }
                }
            }
            div class="sidebar-body" {
                @match body {
                    SidebarBody::Rendered(selection) => {
                        (selected_list(selection, false))
                        (analyze_button(selection, false))
                        (comps_panel(&CompsPanel::Hidden, false))
                    },
                    SidebarBody::Preserved => {
                        div id="selected-list" hx-preserve="true" {}
                        button id="analyze-btn" hx-preserve="true" {}
                        div id="comps-panel" hx-preserve="true" {}
                    },
                }
            }
        }
    }
}
