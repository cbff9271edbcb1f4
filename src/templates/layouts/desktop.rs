use crate::domain::{SelectionState, Sidebar};
use crate::templates::components::{selected_count, sidebar, SidebarBody};
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// The UI chrome every full page renders around its content.
pub struct ShellVm {
    pub selection: SelectionState,
    pub sidebar: Sidebar,
}

pub fn desktop_layout(title: &str, vm: &ShellVm, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Spec Home Analyzer" }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {};
            }
            body class=[vm.sidebar.body_class()] {
                header class="navbar" {
                    h3 class="brand" { a href="/" { "Spec Home Analyzer" } }
                    nav {
                        ul {
                            li { a href="/" { "Search" } }
                            li { a href="/analyze" { "Analyze" } }
                        }
                    }
                    div class="navbar-selected" {
                        "Selected: " (selected_count(&vm.selection, false))
                    }
                }
                form id="analyze-form" method="get" action="/analyze" {}
                div class="layout" {
                    (sidebar(vm.sidebar, SidebarBody::Rendered(&vm.selection)))
                    main class="content" {
                        (content)
                    }
                }
            }
        }
    }
}
