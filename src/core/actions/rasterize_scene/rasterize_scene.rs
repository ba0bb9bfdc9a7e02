use rayon::prelude::*;
use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, fill_row_span};
use crate::core::data::scene::{Paint, Scene};
use crate::core::data::scene_rect::SceneRect;

/// Rows handed to one rayon task.
const ROWS_PER_BAND: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterizeError {
    #[error("scene bounds are empty")]
    EmptyBounds,
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
}

/// Axis-aligned block of covered pixels, half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PixelSpan {
    x_start: usize,
    x_end: usize,
    y_start: usize,
    y_end: usize,
    colour: Colour,
}

/// Pixel cells `start..end` whose centres fall inside `[lo, hi)`.
///
/// A shape thinner than one pixel still covers the cell under its midpoint.
fn covered_cells(lo: f64, hi: f64, limit: usize) -> Option<(usize, usize)> {
    let mut start = (lo - 0.5).ceil();
    let mut end = (hi - 0.5).ceil();

    if end <= start {
        start = ((lo + hi) / 2.0).floor();
        end = start + 1.0;
    }

    let start = start.max(0.0);
    let end = end.min(limit as f64);
    if !(start < end) {
        return None;
    }

    Some((start as usize, end as usize))
}

struct Projection {
    origin_x: f64,
    origin_y: f64,
    scale_x: f64,
    scale_y: f64,
    width: usize,
    height: usize,
}

impl Projection {
    fn new(bounds: SceneRect, width: u32, height: u32) -> Result<Self, RasterizeError> {
        if !(bounds.width > 0.0 && bounds.height > 0.0) {
            return Err(RasterizeError::EmptyBounds);
        }

        Ok(Self {
            origin_x: bounds.x,
            origin_y: bounds.y,
            scale_x: f64::from(width) / bounds.width,
            scale_y: f64::from(height) / bounds.height,
            width: width as usize,
            height: height as usize,
        })
    }

    fn span(&self, rect: SceneRect, colour: Colour) -> Option<PixelSpan> {
        let (x_start, x_end) = covered_cells(
            (rect.x - self.origin_x) * self.scale_x,
            (rect.right() - self.origin_x) * self.scale_x,
            self.width,
        )?;
        let (y_start, y_end) = covered_cells(
            (rect.y - self.origin_y) * self.scale_y,
            (rect.bottom() - self.origin_y) * self.scale_y,
            self.height,
        )?;

        Some(PixelSpan {
            x_start,
            x_end,
            y_start,
            y_end,
            colour,
        })
    }
}

/// Turns every shape in `scene` into covered pixel blocks, in paint order.
///
/// Line pieces are stroked as rectangles with square caps, which is exact
/// for the horizontal pieces a scene is made of.
fn collect_spans(scene: &Scene, projection: &Projection) -> Vec<PixelSpan> {
    let mut spans = Vec::new();

    for item in &scene.items {
        match item.paint {
            Paint::Fill(colour) => {
                spans.extend(item.path.rects().filter_map(|rect| projection.span(rect, colour)));
            }
            Paint::Stroke(colour) => {
                let half = item.path.stroke_width().unwrap_or(1.0) / 2.0;

                spans.extend(item.path.line_pieces().filter_map(|(from, to)| {
                    let rect = SceneRect::new(
                        from.x.min(to.x) - half,
                        from.y.min(to.y) - half,
                        (to.x - from.x).abs() + 2.0 * half,
                        (to.y - from.y).abs() + 2.0 * half,
                    );
                    projection.span(rect, colour)
                }));
            }
        }
    }

    spans
}

/// Rasterizes `scene` into a `width` x `height` RGB buffer.
///
/// The scene bounds are stretched over the whole image. Rows are painted in
/// bands on the rayon pool; shapes keep their scene order within a band.
pub fn rasterize_scene(scene: &Scene, width: u32, height: u32) -> Result<PixelBuffer, RasterizeError> {
    let mut buffer = PixelBuffer::new(width, height, scene.background)?;
    let projection = Projection::new(scene.bounds, width, height)?;

    let band_count = (height as usize).div_ceil(ROWS_PER_BAND);
    let mut bands: Vec<Vec<PixelSpan>> = vec![Vec::new(); band_count];
    for span in collect_spans(scene, &projection) {
        let first = span.y_start / ROWS_PER_BAND;
        let last = (span.y_end - 1) / ROWS_PER_BAND;
        for band in &mut bands[first..=last] {
            band.push(span);
        }
    }

    let row_stride = buffer.row_stride();
    buffer
        .buffer_mut()
        .par_chunks_mut(row_stride * ROWS_PER_BAND)
        .zip(bands.par_iter())
        .enumerate()
        .for_each(|(band_index, (rows, spans))| {
            let band_top = band_index * ROWS_PER_BAND;

            for (offset, row) in rows.chunks_exact_mut(row_stride).enumerate() {
                let y = band_top + offset;
                for span in spans.iter().filter(|s| (s.y_start..s.y_end).contains(&y)) {
                    fill_row_span(row, span.x_start, span.x_end, span.colour);
                }
            }
        });

    Ok(buffer)
}
