use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect must be at least 2x2 pixels: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
    #[error("pixel rect of {width}x{height} exceeds the addressable range")]
    TooLarge { width: u32, height: u32 },
}

/// Inclusive rectangle of pixel positions.
///
/// One-pixel-wide or one-pixel-tall rects are rejected: the pixel to complex
/// mapping divides by `width - 1` and `height - 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = i64::from(bottom_right.x) - i64::from(top_left.x);
        let dy = i64::from(bottom_right.y) - i64::from(top_left.y);

        let width = dx + if dx >= 0 { 1 } else { -1 };
        let height = dy + if dy >= 0 { 1 } else { -1 };

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Rect of `width` x `height` pixels anchored at the origin.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        let (Ok(right), Ok(bottom)) = (i32::try_from(width - 1), i32::try_from(height - 1)) else {
            return Err(PixelRectError::TooLarge { width, height });
        };

        Self::new(Point { x: 0, y: 0 }, Point { x: right, y: bottom })
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn width(&self) -> u32 {
        (i64::from(self.bottom_right.x) - i64::from(self.top_left.x) + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (i64::from(self.bottom_right.y) - i64::from(self.top_left.y) + 1) as u32
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}
