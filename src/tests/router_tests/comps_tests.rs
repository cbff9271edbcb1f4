// src/tests/router_tests/comps_tests.rs

use crate::controller::SelectionController;
use crate::domain::{Comp, CompsResponse};
use crate::router::handle;
use crate::tests::utils::{body_string, property, property_at, FakeBackend};
use astra::Body;
use http::{Method, Request};

const LOCATED: &str = "/comps?id=7&street=7+Main+St&lat=41.81&lng=-87.95";

fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn located_controller() -> SelectionController<FakeBackend> {
    let backend = FakeBackend::default();
    backend.seed(vec![property_at("7", 41.81, -87.95), property("plain")]);
    let ctrl = SelectionController::new(backend);
    ctrl.load_selected();
    ctrl
}

#[test]
fn comps_render_cards_with_price_per_sqft() {
    let ctrl = located_controller();
    ctrl.backend().set_comps(Ok(CompsResponse {
        success: true,
        results: vec![Comp {
            unformatted_price: Some(500000.0),
            living_area: Some(1000.0),
            distance: Some(0.3),
            ..Comp::default()
        }],
    }));

    let resp = handle(get(LOCATED), &ctrl).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Comps for:"));
    assert!(body.contains("7 Main St"));
    assert!(body.contains("$500/sqft"));
    assert!(body.contains("0.3 mi away"));
    assert!(!body.contains("hx-trigger"));
    assert_eq!(ctrl.backend().comps_requests(), vec![(41.81, -87.95)]);
}

#[test]
fn empty_comps_say_no_sales() {
    let ctrl = located_controller();
    ctrl.backend().set_comps(Ok(CompsResponse {
        success: true,
        results: vec![],
    }));

    let body = body_string(handle(get(LOCATED), &ctrl).unwrap());
    assert!(body.contains("No nearby sales found"));
}

#[test]
fn unsuccessful_comps_say_no_sales() {
    let ctrl = located_controller();
    ctrl.backend().set_comps(Ok(CompsResponse {
        success: false,
        results: vec![],
    }));

    let body = body_string(handle(get(LOCATED), &ctrl).unwrap());
    assert!(body.contains("No nearby sales found"));
}

#[test]
fn failing_comps_show_the_error_state() {
    let ctrl = located_controller();
    ctrl.backend().set_comps(Err(()));

    let body = body_string(handle(get(LOCATED), &ctrl).unwrap());
    assert!(body.contains("Error loading comps"));
}

#[test]
fn comps_still_load_after_the_property_is_removed() {
    let ctrl = SelectionController::new(FakeBackend::default());
    ctrl.backend().set_comps(Ok(CompsResponse {
        success: true,
        results: vec![Comp::default()],
    }));

    // 1. Select a located property; the answer carries the loading placeholder
    let json = serde_json::to_string(&property_at("7", 41.81, -87.95)).unwrap();
    let select = Request::builder()
        .method(Method::POST)
        .uri("/select")
        .body(Body::from(
            url::form_urlencoded::Serializer::new(String::new())
                .append_pair("property", &json)
                .finish(),
        ))
        .unwrap();
    let placeholder = body_string(handle(select, &ctrl).unwrap());
    let start = placeholder.find(r#"hx-get=""#).unwrap() + r#"hx-get=""#.len();
    let end = placeholder[start..].find('"').unwrap() + start;
    let comps_url = placeholder[start..end].replace("&amp;", "&");

    // 2. Remove it before htmx gets round to the placeholder
    let remove = Request::builder()
        .method(Method::POST)
        .uri("/remove")
        .body(Body::from("id=7"))
        .unwrap();
    handle(remove, &ctrl).unwrap();
    assert!(ctrl.selection().is_empty());

    // 3. The placeholder still resolves into a real panel
    let resp = handle(get(&comps_url), &ctrl).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Comps for:"));
    assert!(body.contains("7 Main St"));
    assert!(!body.contains("Loading nearby sales..."));
    assert_eq!(ctrl.backend().comps_requests(), vec![(41.81, -87.95)]);
}

#[test]
fn comps_without_coordinates_stay_hidden() {
    let ctrl = located_controller();

    for uri in ["/comps?id=plain&street=plain+Main+St", "/comps", "/comps?id=7&lat=abc&lng=-87.95"] {
        let resp = handle(get(uri), &ctrl).expect("Handler failed");
        assert_eq!(resp.status(), 200);
        let body = body_string(resp);
        assert!(body.contains("display: none;"), "{uri}");
        assert!(!body.contains("Loading nearby sales..."), "{uri}");
    }
    assert!(ctrl.backend().comps_requests().is_empty());
}

#[test]
fn comps_heading_falls_back_without_a_street() {
    let ctrl = SelectionController::new(FakeBackend::default());
    ctrl.backend().set_comps(Ok(CompsResponse {
        success: true,
        results: vec![Comp::default()],
    }));

    let body = body_string(handle(get("/comps?id=9&lat=41.81&lng=-87.95"), &ctrl).unwrap());
    assert!(body.contains("Selected Property"));
}
