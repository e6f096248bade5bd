//! Surface backends.
//!
//! - [`SvgSurface`] writes SVG markup for embedding in a page
//! - [`RecordingSurface`] keeps an ordered log of draw calls
//! - [`render_ascii`] prints the two columns as a terminal table

mod ascii;
mod recording;
mod svg;

pub use ascii::render_ascii;
pub use recording::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;

/// Escape special XML characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hello""#), "say &quot;hello&quot;");
    }
}
