//! The drawing boundary.
//!
//! The renderer only talks to a [`Surface`]: it builds [`Path`]s, strokes
//! them, draws filled circles and finally hands the finished surface to a
//! [`Destination`]. Backends live in [`crate::render`].

use serde::{Deserialize, Serialize};

/// A stroke style: line width in pixels and a CSS color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub color: String,
}

impl Stroke {
    pub fn new(width: f64, color: impl Into<String>) -> Self {
        Self {
            width,
            color: color.into(),
        }
    }
}

/// A solid fill color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub color: String,
}

impl Fill {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// A single path instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathSegment {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

/// A polyline path built with `move_to` / `line_to`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::MoveTo { x, y });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::LineTo { x, y });
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A vector drawing target.
pub trait Surface {
    /// What the surface turns into once rendered into a destination.
    type Output;

    /// Start a new, empty path.
    fn create_path(&self) -> Path {
        Path::new()
    }

    /// Stroke (and optionally fill) a path.
    fn draw_path(&mut self, path: &Path, stroke: &Stroke, fill: Option<&Fill>);

    /// Draw a circle centered at `(cx, cy)`.
    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, stroke: &Stroke, fill: Option<&Fill>);

    /// Attach the finished drawing to `dest`.
    fn render<D>(self, dest: &mut D)
    where
        D: Destination<Child = Self::Output>;
}

/// An element that finished surfaces are attached to.
pub trait Destination {
    type Child;

    /// Append a rendered surface. Earlier children are left in place.
    fn append_child(&mut self, child: Self::Child);

    /// Set the element's style class.
    fn set_class_name(&mut self, class_name: &str);
}

/// A minimal in-memory element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<C> {
    pub class_name: Option<String>,
    pub children: Vec<C>,
}

impl<C> Element<C> {
    pub fn new() -> Self {
        Self {
            class_name: None,
            children: Vec::new(),
        }
    }

    /// Remove all children, e.g. before re-rendering into the same element.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn last_child(&self) -> Option<&C> {
        self.children.last()
    }
}

impl<C> Default for Element<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Destination for Element<C> {
    type Child = C;

    fn append_child(&mut self, child: C) {
        self.children.push(child);
    }

    fn set_class_name(&mut self, class_name: &str) {
        self.class_name = Some(class_name.to_string());
    }
}

impl Element<String> {
    /// Serialize as a `<div>` holding every child's markup.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div");
        if let Some(class_name) = &self.class_name {
            html.push_str(" class=\"");
            html.push_str(&crate::render::escape_xml(class_name));
            html.push('"');
        }
        html.push('>');
        for child in &self.children {
            html.push_str(child);
        }
        html.push_str("</div>");
        html
    }
}
