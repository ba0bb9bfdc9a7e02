use serde::{Deserialize, Serialize};

use crate::core::data::colour::Colour;
use crate::core::fractals::fractal_kinds::FractalMode;
use crate::core::params::errors::ParamsError;
use crate::core::params::param_change::{ParamChange, ParamEffect};

pub const DEFAULT_DEPTH: u32 = 6;
pub const DEFAULT_THICKNESS: f64 = 4.0;
pub const DEFAULT_SPACING: u32 = 10;
pub const DEFAULT_SPEED_MS: u32 = 200;

/// Snapshot of everything that decides what gets drawn and how it animates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    pub mode: FractalMode,
    pub depth: u32,
    /// Stroke width in line mode, square side in dust mode.
    pub thickness: f64,
    pub fg: Colour,
    pub bg: Colour,
    /// Line mode only: stack every level from 0 to `depth`.
    pub show_all_levels: bool,
    /// Gap between stacked levels, in scene units.
    pub spacing: u32,
    #[serde(rename = "loop")]
    pub loop_animation: bool,
    pub speed_ms: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            mode: FractalMode::default(),
            depth: DEFAULT_DEPTH,
            thickness: DEFAULT_THICKNESS,
            fg: Colour::DEFAULT_FOREGROUND,
            bg: Colour::DEFAULT_BACKGROUND,
            show_all_levels: false,
            spacing: DEFAULT_SPACING,
            loop_animation: false,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

impl RenderParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        let max = self.mode.max_depth();
        if self.depth > max {
            return Err(ParamsError::DepthOutOfRange {
                depth: self.depth,
                mode: self.mode,
                max,
            });
        }

        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(ParamsError::NonPositiveThickness(self.thickness));
        }

        if self.speed_ms == 0 {
            return Err(ParamsError::NonPositiveSpeed);
        }

        Ok(())
    }

    /// Applies one change, committing it only if the result is valid.
    ///
    /// On error `self` is left exactly as it was.
    pub fn apply(&mut self, change: ParamChange) -> Result<ParamEffect, ParamsError> {
        let mut next = self.clone();
        let effect = next.assign(change)?;
        next.validate()?;

        *self = next;
        Ok(effect)
    }

    fn assign(&mut self, change: ParamChange) -> Result<ParamEffect, ParamsError> {
        match change {
            ParamChange::Mode(mode) => self.mode = mode,
            ParamChange::Depth(depth) => {
                self.depth = u32::try_from(depth).map_err(|_| ParamsError::NegativeDepth(depth))?;
            }
            ParamChange::Thickness(thickness) => self.thickness = thickness,
            ParamChange::Foreground(hex) => self.fg = Colour::from_hex(&hex)?,
            ParamChange::Background(hex) => self.bg = Colour::from_hex(&hex)?,
            ParamChange::ShowAllLevels(show) => self.show_all_levels = show,
            ParamChange::Spacing(spacing) => self.spacing = spacing,
            ParamChange::Loop(loop_animation) => {
                self.loop_animation = loop_animation;
                return Ok(ParamEffect::Silent);
            }
            ParamChange::SpeedMs(speed_ms) => {
                self.speed_ms = speed_ms;
                return Ok(ParamEffect::Retime);
            }
        }

        Ok(ParamEffect::Rebuild)
    }

    /// Applies a batch of changes in order and validates the combined result.
    ///
    /// Intermediate states may be invalid; only the final params must pass
    /// [`validate`](Self::validate). On error `self` is left untouched.
    pub fn apply_all(
        &mut self,
        changes: impl IntoIterator<Item = ParamChange>,
    ) -> Result<(), ParamsError> {
        let mut next = self.clone();
        for change in changes {
            next.assign(change)?;
        }
        next.validate()?;

        *self = next;
        Ok(())
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.mode.item_count(self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::ColourError;

    #[test]
    fn defaults_are_valid() {
        let params = RenderParams::default();

        assert_eq!(params.validate(), Ok(()));
        assert_eq!(params.mode, FractalMode::Line);
        assert_eq!(params.depth, 6);
        assert_eq!(params.fg.to_hex(), "#1b1f23");
        assert_eq!(params.bg.to_hex(), "#ffffff");
    }

    #[test]
    fn visual_changes_request_rebuild() {
        let mut params = RenderParams::default();

        assert_eq!(params.apply(ParamChange::Depth(3)), Ok(ParamEffect::Rebuild));
        assert_eq!(params.apply(ParamChange::Mode(FractalMode::Dust)), Ok(ParamEffect::Rebuild));
        assert_eq!(params.apply(ParamChange::Thickness(2.5)), Ok(ParamEffect::Rebuild));
        assert_eq!(params.apply(ParamChange::Spacing(0)), Ok(ParamEffect::Rebuild));
        assert_eq!(
            params.apply(ParamChange::Foreground("#ff0000".into())),
            Ok(ParamEffect::Rebuild)
        );

        assert_eq!(params.depth, 3);
        assert_eq!(params.mode, FractalMode::Dust);
        assert_eq!(params.fg, Colour::rgb(255, 0, 0));
    }

    #[test]
    fn animation_changes_do_not_rebuild() {
        let mut params = RenderParams::default();

        assert_eq!(params.apply(ParamChange::SpeedMs(50)), Ok(ParamEffect::Retime));
        assert_eq!(params.apply(ParamChange::Loop(true)), Ok(ParamEffect::Silent));
        assert!(params.loop_animation);
        assert_eq!(params.speed_ms, 50);
    }

    #[test]
    fn negative_depth_is_rejected_and_state_kept() {
        let mut params = RenderParams::default();

        assert_eq!(
            params.apply(ParamChange::Depth(-1)),
            Err(ParamsError::NegativeDepth(-1))
        );
        assert_eq!(params, RenderParams::default());
    }

    #[test]
    fn invalid_colour_is_rejected_and_state_kept() {
        let mut params = RenderParams::default();

        let result = params.apply(ParamChange::Background("#zzz".into()));

        assert_eq!(
            result,
            Err(ParamsError::Colour(ColourError::Invalid("#zzz".into())))
        );
        assert_eq!(params.bg, Colour::DEFAULT_BACKGROUND);

        assert_eq!(
            params.apply(ParamChange::Foreground(String::new())),
            Err(ParamsError::Colour(ColourError::Empty))
        );
    }

    #[test]
    fn depth_cap_depends_on_mode() {
        let mut params = RenderParams::default();

        assert!(params.apply(ParamChange::Depth(20)).is_ok());
        assert_eq!(
            params.apply(ParamChange::Mode(FractalMode::Dust)),
            Err(ParamsError::DepthOutOfRange {
                depth: 20,
                mode: FractalMode::Dust,
                max: 12
            })
        );
        assert_eq!(params.mode, FractalMode::Line);
    }

    #[test]
    fn thickness_and_speed_must_be_positive() {
        let mut params = RenderParams::default();

        assert_eq!(
            params.apply(ParamChange::Thickness(0.0)),
            Err(ParamsError::NonPositiveThickness(0.0))
        );
        assert!(params.apply(ParamChange::Thickness(f64::NAN)).is_err());
        assert_eq!(
            params.apply(ParamChange::SpeedMs(0)),
            Err(ParamsError::NonPositiveSpeed)
        );
        assert_eq!(params, RenderParams::default());
    }

    #[test]
    fn apply_all_is_all_or_nothing() {
        let mut params = RenderParams::default();

        let result = params.apply_all([
            ParamChange::Depth(2),
            ParamChange::Foreground("bad".into()),
            ParamChange::Depth(4),
        ]);

        assert!(result.is_err());
        assert_eq!(params, RenderParams::default());
    }

    #[test]
    fn apply_all_validates_the_final_state_only() {
        let mut params = RenderParams {
            depth: 15,
            ..RenderParams::default()
        };

        params
            .apply_all([ParamChange::Mode(FractalMode::Dust), ParamChange::Depth(4)])
            .unwrap();

        assert_eq!(params.mode, FractalMode::Dust);
        assert_eq!(params.depth, 4);

        params
            .apply_all([ParamChange::Mode(FractalMode::Line), ParamChange::Depth(13)])
            .unwrap();
        assert_eq!(
            params.apply_all([ParamChange::Mode(FractalMode::Dust)]),
            Err(ParamsError::DepthOutOfRange {
                depth: 13,
                mode: FractalMode::Dust,
                max: 12
            })
        );
        assert_eq!(params.mode, FractalMode::Line);
    }

    #[test]
    fn json_round_trip_uses_friendly_names() {
        let params = RenderParams {
            loop_animation: true,
            ..RenderParams::default()
        };

        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["mode"], "line");
        assert_eq!(json["loop"], true);
        assert_eq!(json["fg"], "#1b1f23");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: RenderParams = serde_json::from_str(r#"{"mode": "dust", "depth": 3}"#).unwrap();

        assert_eq!(params.mode, FractalMode::Dust);
        assert_eq!(params.depth, 3);
        assert_eq!(params.speed_ms, DEFAULT_SPEED_MS);
    }
}
