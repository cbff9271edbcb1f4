pub mod html;
pub mod assets;
pub mod json;

use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

pub use assets::stylesheet_response;
pub use html::html_response;
pub use json::json_response;
