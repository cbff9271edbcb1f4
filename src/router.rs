use crate::backend::Backend;
use crate::controller::SelectionController;
use crate::domain::{Property, SearchQuery, Sidebar};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, stylesheet_response, ResultResp};
use crate::templates::components::{
    comps_panel, search_results, selection_update, sidebar, SidebarBody,
};
use crate::templates::{pages, ShellVm};
use astra::Request;
use maud::html;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

pub fn handle<B: Backend>(mut req: Request, ctrl: &SelectionController<B>) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let vm = ShellVm {
                selection: ctrl.load_selected(),
                sidebar: Sidebar::default(),
            };
            let query = SearchQuery::from_params(&parse_query(&req));
            html_response(pages::home_page(&vm, &query))
        }

        ("GET", "/search") => {
            let query = SearchQuery::from_params(&parse_query(&req));
            let results = ctrl.search(&query);
            html_response(search_results(&results, &ctrl.selection()))
        }

        ("POST", "/select") => {
            let form = read_form(&mut req)?;
            let raw = form
                .get("property")
                .ok_or_else(|| ServerError::BadRequest("missing property".into()))?;
            let property: Property = serde_json::from_str(raw)
                .map_err(|e| ServerError::BadRequest(format!("invalid property: {e}")))?;

            let previous = ctrl.selection();
            let selected = ctrl.select_property(property);

            html_response(html! {
                (selection_update(&previous, &selected.state))
                @if let Some(panel) = &selected.comps {
                    (comps_panel(panel, true))
                }
            })
        }

        ("POST", "/remove") => {
            let form = read_form(&mut req)?;
            let id = form
                .get("id")
                .filter(|id| !id.is_empty())
                .ok_or_else(|| ServerError::BadRequest("missing id".into()))?;

            let previous = ctrl.selection();
            let current = ctrl.remove_selected(id);
            html_response(selection_update(&previous, &current))
        }

        // The placeholder always gets a panel back, or it would sit on
        // "Loading" forever.
        ("GET", "/comps") => {
            let subject = comps_subject(&parse_query(&req));
            let panel = ctrl.load_comps_for_property(&subject).unwrap_or_default();
            html_response(comps_panel(&panel, false))
        }

        ("POST", "/sidebar/toggle") => {
            let form = read_form(&mut req)?;
            let mut state = Sidebar::new(form.get("minimized").is_some_and(|v| v == "true"));
            state.toggle();
            debug!(minimized = state.is_minimized(), "sidebar toggled");
            html_response(sidebar(state, SidebarBody::Preserved))
        }

        ("GET", "/analyze") => {
            let mut vm = ShellVm {
                selection: ctrl.load_selected(),
                sidebar: Sidebar::default(),
            };
            vm.sidebar.minimize();
            html_response(pages::analyze_page(&vm, vm.selection.properties()))
        }

        // Read-only view of the server's list for page scripts.
        ("GET", "/selected") => json_response(&ctrl.get_selected()),

        ("GET", "/static/main.css") => stylesheet_response(),

        _ => Err(ServerError::NotFound),
    }
}

/// The property a comps placeholder asked about, rebuilt from its URL.
fn comps_subject(params: &HashMap<String, String>) -> Property {
    let coordinate = |key: &str| params.get(key).and_then(|v| v.parse::<f64>().ok());

    Property::comps_subject(
        params.get("id").cloned().unwrap_or_default(),
        params.get("street").filter(|s| !s.is_empty()).cloned(),
        coordinate("lat"),
        coordinate("lng"),
    )
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
