//! Spacer and link primitives shared by the section renderers.

use crate::sections::html_escape;

/// Render fixed blank space of `size` pixels on both axes.
pub fn render_spacer(size: u32) -> String {
    format!(
        r#"<span class="spacer" style="display: block; width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px;"></span>"#
    )
}

/// Render an activatable link around already-rendered inner HTML.
///
/// `inner` is trusted markup; `href` and `class` are escaped.
pub fn render_link(href: &str, class: &str, inner: &str) -> String {
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        html_escape(href),
        html_escape(class),
        inner
    )
}
