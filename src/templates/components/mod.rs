pub mod comps;
pub mod error;
pub mod property_card;
pub mod selection;
pub mod sidebar;

pub use comps::comps_panel;
pub use error::html_error_response;
pub use property_card::search_results;
pub use selection::{selected_count, selection_update};
pub use sidebar::{sidebar, SidebarBody};
