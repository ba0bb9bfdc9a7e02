use std::fmt;

/// What the status line shows for the frame on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    pub depth: u32,
    pub item_count: u64,
    /// Only present while an animation is running.
    pub fps: Option<f64>,
}

impl Status {
    #[must_use]
    pub fn without_fps(self) -> Self {
        Self { fps: None, ..self }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Depth: {} | Items: {}", self.depth, self.item_count)?;

        if let Some(fps) = self.fps {
            write!(f, " | FPS: {fps:.1}")?;
        }

        Ok(())
    }
}
