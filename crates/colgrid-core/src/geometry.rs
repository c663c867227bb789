// ABOUTME: Plain geometry values shared by the layout passes.
// ABOUTME: Sizes and rectangles in layout units (f32, origin top-left).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum. Width and height are compared independently,
    /// so the result may be wider than one input and taller than the other.
    /// A NaN in `other` never replaces the value in `self`.
    pub fn max(self, other: Size) -> Size {
        Size {
            width: if other.width > self.width { other.width } else { self.width },
            height: if other.height > self.height { other.height } else { self.height },
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid size {0:?}, expected WIDTHxHEIGHT")]
pub struct ParseSizeError(pub String);

impl FromStr for Size {
    type Err = ParseSizeError;

    /// Parses `WIDTHxHEIGHT`, e.g. `120x24` or `80.5X16`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSizeError(s.to_string());
        let (w, h) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(err)?;
        let width = w.trim().parse::<f32>().map_err(|_| err())?;
        let height = h.trim().parse::<f32>().map_err(|_| err())?;
        Ok(Size::new(width, height))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_is_independent_per_axis() {
        let wide = Size::new(40.0, 10.0);
        let tall = Size::new(12.0, 30.0);
        assert_eq!(wide.max(tall), Size::new(40.0, 30.0));
    }

    #[test]
    fn max_ignores_nan_candidates() {
        let running = Size::new(4.0, 6.0);
        assert_eq!(running.max(Size::new(f32::NAN, 9.0)), Size::new(4.0, 9.0));
    }

    #[test]
    fn parses_width_by_height() {
        assert_eq!("120x24".parse::<Size>().unwrap(), Size::new(120.0, 24.0));
        assert_eq!(" 8.5X16 ".parse::<Size>().unwrap(), Size::new(8.5, 16.0));
    }

    #[test]
    fn rejects_malformed_sizes() {
        assert!("120".parse::<Size>().is_err());
        assert!("ax3".parse::<Size>().is_err());
        assert!("3x".parse::<Size>().is_err());
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::from_origin_size(Point::new(5.0, 7.0), Size::new(10.0, 3.0));
        assert_eq!(rect.right(), 15.0);
        assert_eq!(rect.bottom(), 10.0);
        assert_eq!(rect.size(), Size::new(10.0, 3.0));
        assert_eq!(rect.origin(), Point::new(5.0, 7.0));
    }
}
