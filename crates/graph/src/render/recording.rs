//! In-memory backend that records draw calls.

use crate::surface::{Destination, Fill, Path, Stroke, Surface};
use serde::{Deserialize, Serialize};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DrawCommand {
    Path {
        path: Path,
        stroke: Stroke,
        fill: Option<Fill>,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        stroke: Stroke,
        fill: Option<Fill>,
    },
}

impl DrawCommand {
    pub fn stroke(&self) -> &Stroke {
        match self {
            DrawCommand::Path { stroke, .. } | DrawCommand::Circle { stroke, .. } => stroke,
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::Circle { .. })
    }
}

/// A surface whose rendered output is the list of draw calls it received.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for RecordingSurface {
    type Output = Vec<DrawCommand>;

    fn draw_path(&mut self, path: &Path, stroke: &Stroke, fill: Option<&Fill>) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            stroke: stroke.clone(),
            fill: fill.cloned(),
        });
    }

    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, stroke: &Stroke, fill: Option<&Fill>) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            radius,
            stroke: stroke.clone(),
            fill: fill.cloned(),
        });
    }

    fn render<D>(self, dest: &mut D)
    where
        D: Destination<Child = Self::Output>,
    {
        dest.append_child(self.commands);
    }
}
