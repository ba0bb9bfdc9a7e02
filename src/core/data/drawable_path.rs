use crate::core::data::scene_point::ScenePoint;
use crate::core::data::scene_rect::SceneRect;

/// A single command of a [`DrawablePath`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(ScenePoint),
    LineTo(ScenePoint),
    Rect(SceneRect),
}

/// A batched, resolution-independent path in scene units.
///
/// Holds any number of open polylines and closed rectangles so a whole
/// construction level can be handed to a renderer as one draw call. The only
/// styling it carries is an advisory stroke width applied at stroke time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawablePath {
    commands: Vec<PathCommand>,
    stroke_width: Option<f64>,
}

impl DrawablePath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
            stroke_width: None,
        }
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = Some(width);
    }

    /// Width to stroke the line pieces with, in scene units.
    #[must_use]
    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_width
    }

    pub fn move_to(&mut self, point: ScenePoint) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: ScenePoint) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn add_rect(&mut self, rect: SceneRect) {
        self.commands.push(PathCommand::Rect(rect));
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of independent shapes: one per sub-path started by `MoveTo` plus one per rectangle.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::MoveTo(_) | PathCommand::Rect(_)))
            .count()
    }

    /// Straight line pieces in drawing order, each from the current point to a `LineTo` target.
    pub fn line_pieces(&self) -> impl Iterator<Item = (ScenePoint, ScenePoint)> + '_ {
        let mut current: Option<ScenePoint> = None;

        self.commands.iter().filter_map(move |command| match *command {
            PathCommand::MoveTo(point) => {
                current = Some(point);
                None
            }
            PathCommand::LineTo(point) => {
                let from = current.replace(point)?;
                Some((from, point))
            }
            PathCommand::Rect(_) => {
                current = None;
                None
            }
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = SceneRect> + '_ {
        self.commands.iter().filter_map(|command| match command {
            PathCommand::Rect(rect) => Some(*rect),
            _ => None,
        })
    }
}
