use thiserror::Error;

use crate::core::actions::pack_path::points_to_rects_path::points_to_rects_path;
use crate::core::actions::pack_path::segments_to_path::segments_to_path;
use crate::core::data::scene::{Paint, Scene, SceneItem};
use crate::core::data::scene_rect::SceneRect;
use crate::core::fractals::cantor_dust::algorithm::cantor_dust_points;
use crate::core::fractals::cantor_line::algorithm::{cantor_line_levels, cantor_line_segments};
use crate::core::fractals::errors::CantorError;
use crate::core::fractals::fractal_kinds::FractalMode;
use crate::core::params::render_params::RenderParams;

/// Logical scene width every mode is laid out against.
pub const SCENE_WIDTH: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("level {0} is out of range")]
    LevelOutOfRange(u32),
    #[error(transparent)]
    Cantor(#[from] CantorError),
}

/// Builds the drawable scene for `params` at construction `level`.
///
/// Pure: the same inputs always give the same scene. `item_count` always
/// describes `level` itself, even when shallower levels are drawn too.
pub fn build_scene(params: &RenderParams, level: u32) -> Result<Scene, SceneError> {
    let depth = i32::try_from(level).map_err(|_| SceneError::LevelOutOfRange(level))?;

    let (items, bounds) = match params.mode {
        FractalMode::Line if params.show_all_levels => build_line_levels(params, depth)?,
        FractalMode::Line => build_line(params, depth)?,
        FractalMode::Dust => build_dust(params, depth)?,
    };

    Ok(Scene {
        items,
        bounds,
        background: params.bg,
        level,
        item_count: params.mode.item_count(level),
    })
}

fn build_line(params: &RenderParams, depth: i32) -> Result<(Vec<SceneItem>, SceneRect), SceneError> {
    let segments = cantor_line_segments(depth)?;
    let height = (params.thickness + 2.0 * f64::from(params.spacing)).max(1.0);

    let path = segments_to_path(&segments, 0.0, SCENE_WIDTH, height / 2.0, params.thickness);
    let item = SceneItem {
        path,
        paint: Paint::Stroke(params.fg),
    };

    Ok((vec![item], SceneRect::new(0.0, 0.0, SCENE_WIDTH, height)))
}

fn build_line_levels(
    params: &RenderParams,
    depth: i32,
) -> Result<(Vec<SceneItem>, SceneRect), SceneError> {
    let levels = cantor_line_levels(depth)?;
    let spacing = f64::from(params.spacing);
    let band = params.thickness + spacing;
    let total_height = levels.len() as f64 * band + spacing;

    let mut y = spacing + params.thickness / 2.0;
    let mut items = Vec::with_capacity(levels.len());

    for segments in &levels {
        items.push(SceneItem {
            path: segments_to_path(segments, 0.0, SCENE_WIDTH, y, params.thickness),
            paint: Paint::Stroke(params.fg),
        });
        y += band;
    }

    Ok((items, SceneRect::new(0.0, 0.0, SCENE_WIDTH, total_height.max(1.0))))
}

fn build_dust(params: &RenderParams, depth: i32) -> Result<(Vec<SceneItem>, SceneRect), SceneError> {
    let points = cantor_dust_points(depth)?;
    let size = params.thickness.max(1.0);
    let height = SCENE_WIDTH;

    let path = points_to_rects_path(&points, 0.0, SCENE_WIDTH, 0.0, height, size);
    let item = SceneItem {
        path,
        paint: Paint::Fill(params.fg),
    };

    Ok((vec![item], SceneRect::new(0.0, 0.0, SCENE_WIDTH, height)))
}
