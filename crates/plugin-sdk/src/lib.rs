//! Navigator SDK
//!
//! Types, host traits, and markup helpers shared by the admin-toolbar
//! navigator and the host adapters that drive it.

pub mod error;
pub mod escape;
pub mod host;
pub mod toolbar;
pub mod types;

pub use error::{HostError, HostResult};

pub mod prelude {
    pub use crate::error::{HostError, HostResult};
    pub use crate::escape::{esc_html, esc_url, kses_icon_label, sanitize_key};
    pub use crate::host::{AdminBar, ContentStore, Site, SiteUrls, StyleRegistry};
    pub use crate::toolbar::Toolbar;
    pub use crate::types::*;
}
