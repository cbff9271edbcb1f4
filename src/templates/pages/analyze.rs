// templates/pages/analyze.rs

use crate::domain::format::format_currency;
use crate::domain::Property;
use crate::templates::{desktop_layout, ShellVm};
use maud::{html, Markup};

pub fn analyze_page(vm: &ShellVm, properties: &[Property]) -> Markup {
    desktop_layout(
        "Analyze",
        vm,
        html! {
            h1 { "Analyze Selected" }

            @if properties.is_empty() {
                p { "Nothing selected yet. " a href="/" { "Find properties" } }
            } @else {
                table class="analyze-table" {
                    thead {
                        tr {
                            th { "Address" }
                            th { "Listed" }
                            th { "Asking" }
                            th { "Location" }
                        }
                    }
                    tbody {
                        @for prop in properties {
                            tr data-id=(prop.id) {
                                td { (prop.street().unwrap_or("Unknown")) }
                                td { (prop.display_price()) }
                                td {
                                    @match prop.unformatted_price {
                                        Some(price) => { (format_currency(price)) }
                                        None => { "N/A" }
                                    }
                                }
                                td {
                                    @match prop.coordinates() {
                                        Some(at) => { (format!("{:.4}, {:.4}", at.latitude, at.longitude)) }
                                        None => { "—" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
