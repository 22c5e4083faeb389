//! Inline stylesheet for the toolbar menu.

use crate::assembler::ROOT_ID;
use crate::catalog::SETTINGS_ID;

/// Stylesheet handle the rule is attached to.
pub const ADMIN_BAR_HANDLE: &str = "admin-bar";

/// Rule drawing a separator under the Settings entry.
pub fn separator_css() -> String {
    format!(
        "#wp-admin-bar-{ROOT_ID} > .ab-sub-wrapper #wp-admin-bar-{SETTINGS_ID} {{\n    \
         border-bottom: 1px solid #ccc;\n    \
         margin: 0 0 5px 0;\n\
         }}\n"
    )
}
