//! HTML section renderers.
//!
//! Each renderer is a pure function from data to an HTML fragment, in the
//! same shape as the page sections of the storefront workloads: static CSS
//! lives with the section, per-render values travel as CSS custom
//! properties on the markup.

mod primitives;
mod shoe_card;
mod shoe_grid;

pub use primitives::{render_link, render_spacer};
pub use shoe_card::{card_styles, render_shoe_card};
pub use shoe_grid::{grid_styles, render_shoe_grid};

/// Escape text for interpolation into HTML.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
