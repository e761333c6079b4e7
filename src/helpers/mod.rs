//! Helper functions shared by the views and templates

mod html;
mod url;

pub use html::*;
pub use url::*;
