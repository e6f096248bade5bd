//! SVG backend.

use super::escape_xml;
use crate::surface::{Destination, Fill, Path, PathSegment, Stroke, Surface};

/// A fixed-size SVG canvas.
///
/// Draw calls append elements in order, so later calls paint over earlier
/// ones. Rendering wraps them in an `<svg>` root and appends that markup to
/// the destination.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// The finished `<svg>` document.
    pub fn to_svg(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

impl Surface for SvgSurface {
    type Output = String;

    fn draw_path(&mut self, path: &Path, stroke: &Stroke, fill: Option<&Fill>) {
        let d: Vec<String> = path
            .segments()
            .iter()
            .map(|segment| match segment {
                PathSegment::MoveTo { x, y } => format!("M{} {}", x, y),
                PathSegment::LineTo { x, y } => format!("L{} {}", x, y),
            })
            .collect();

        self.body.push_str(&format!(
            r#"<path d="{}" {}/>"#,
            d.join(" "),
            paint_attrs(stroke, fill)
        ));
    }

    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, stroke: &Stroke, fill: Option<&Fill>) {
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            cx,
            cy,
            radius,
            paint_attrs(stroke, fill)
        ));
    }

    fn render<D>(self, dest: &mut D)
    where
        D: Destination<Child = Self::Output>,
    {
        dest.append_child(self.to_svg());
    }
}

fn paint_attrs(stroke: &Stroke, fill: Option<&Fill>) -> String {
    format!(
        r#"stroke="{}" stroke-width="{}" fill="{}""#,
        escape_xml(&stroke.color),
        stroke.width,
        fill.map(|f| escape_xml(&f.color))
            .unwrap_or_else(|| "none".to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Element;

    #[test]
    fn test_path_markup() {
        let mut surface = SvgSurface::new(200.0, 80.0);
        let mut path = surface.create_path();
        path.move_to(10.0, 20.0).line_to(110.0, 60.5);
        surface.draw_path(&path, &Stroke::new(1.0, "green"), None);

        assert_eq!(
            surface.to_svg(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="80" viewBox="0 0 200 80"><path d="M10 20 L110 60.5" stroke="green" stroke-width="1" fill="none"/></svg>"#
        );
    }

    #[test]
    fn test_circle_markup() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        surface.draw_circle(
            5.0,
            5.0,
            4.0,
            &Stroke::new(1.0, "black"),
            Some(&Fill::solid("#c3d9ff")),
        );
        assert!(surface
            .to_svg()
            .contains(r##"<circle cx="5" cy="5" r="4" stroke="black" stroke-width="1" fill="#c3d9ff"/>"##));
    }

    #[test]
    fn test_render_appends_to_destination() {
        let mut dest: Element<String> = Element::new();
        SvgSurface::new(1.0, 1.0).render(&mut dest);
        SvgSurface::new(2.0, 2.0).render(&mut dest);
        assert_eq!(dest.children.len(), 2);
        assert!(dest.children[1].contains(r#"width="2""#));
    }
}
