use crate::core::data::colour::Colour;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size_for(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel buffer size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB8 image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Colour) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let buffer = fill
            .to_rgb_bytes()
            .iter()
            .copied()
            .cycle()
            .take(buffer_size_for(width, height))
            .collect();

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = y as usize * self.row_stride() + x as usize * BYTES_PER_PIXEL;
        Some(Colour::rgb(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }
}

/// Paints `colour` over the pixel columns `x_start..x_end` of one row slice.
pub(crate) fn fill_row_span(row: &mut [u8], x_start: usize, x_end: usize, colour: Colour) {
    let bytes = colour.to_rgb_bytes();

    for pixel in row[x_start * BYTES_PER_PIXEL..x_end * BYTES_PER_PIXEL].chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel.copy_from_slice(&bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Colour = Colour::rgb(0, 0, 0);

    #[test]
    fn test_new_fills_with_colour() {
        let buffer = PixelBuffer::new(10, 10, Colour::rgb(1, 2, 3)).unwrap();

        assert_eq!(buffer.buffer().len(), 300);
        assert!(buffer.buffer().chunks_exact(3).all(|p| p == [1, 2, 3]));
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(
            PixelBuffer::new(0, 5, BLACK),
            Err(PixelBufferError::InvalidSize { width: 0, height: 5 })
        );
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::new(3, 3, BLACK).unwrap();

        assert_eq!(buffer.pixel(2, 2), Some(BLACK));
        assert_eq!(buffer.pixel(3, 0), None);
        assert_eq!(buffer.pixel(0, 3), None);
    }

    #[test]
    fn test_fill_row_span_only_touches_span() {
        let mut buffer = PixelBuffer::new(4, 1, BLACK).unwrap();
        fill_row_span(buffer.buffer_mut(), 1, 3, Colour::rgb(9, 9, 9));

        assert_eq!(buffer.pixel(0, 0), Some(BLACK));
        assert_eq!(buffer.pixel(1, 0), Some(Colour::rgb(9, 9, 9)));
        assert_eq!(buffer.pixel(2, 0), Some(Colour::rgb(9, 9, 9)));
        assert_eq!(buffer.pixel(3, 0), Some(BLACK));
    }
}
