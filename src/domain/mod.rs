pub mod comps;
pub mod format;
pub mod property;
pub mod search;
pub mod selection;
pub mod sidebar;

pub use comps::{Comp, CompsPanel, CompsResponse};
pub use property::{Coordinates, Property};
pub use search::{SearchQuery, SearchResults};
pub use selection::{select_button_states, SelectionState};
pub use sidebar::Sidebar;
