// templates/pages/home.rs

use crate::domain::SearchQuery;
use crate::templates::{desktop_layout, ShellVm};
use maud::{html, Markup};

/// Search form plus an empty `#results` the form fills on load.
pub fn home_page(vm: &ShellVm, query: &SearchQuery) -> Markup {
    desktop_layout(
        "Search",
        vm,
        html! {
            h1 { "Teardown Candidates" }

            form
                class="search-form"
                hx-get="/search"
                hx-target="#results"
                hx-swap="innerHTML"
                hx-trigger="load, submit"
                hx-indicator="#search-spinner"
            {
                label for="max_price" { "Max price" }
                input type="number" id="max_price" name="max_price" min="0" step="10000" value=(query.max_price);

                label for="city" { "City" }
                input type="text" id="city" name="city" placeholder="Any city" value=[query.city.as_deref()];

                label for="page" { "Page" }
                input type="number" id="page" name="page" min="1" value=(query.page);

                button type="submit" class="btn btn-primary" { "Search" }
                span id="search-spinner" class="htmx-indicator" { "Searching..." }
            }

            div id="results" {}
        },
    )
}
