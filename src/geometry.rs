//! Screen-space geometry for toast placement.

use serde::Serialize;

use crate::types::Corner;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl std::str::FromStr for Size {
    type Err = String;

    /// Parses `WIDTHxHEIGHT`, e.g. `1920x1080`. Both dimensions must be
    /// finite and positive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s}"))?;
        let width = w
            .trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid width {w}: {err}"))?;
        let height = h
            .trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid height {h}: {err}"))?;
        let size = Self { width, height };
        if !size.is_drawable() {
            return Err(format!("dimensions must be finite and positive, got {s}"));
        }
        Ok(size)
    }
}

/// Window rectangle: top-left origin plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub origin: Point,
    pub size: Size,
}

/// Top-left coordinate that puts `window` flush against `corner` of `screen`.
///
/// The result is not clamped: a window larger than the screen gets a
/// negative coordinate on that axis.
#[must_use]
pub fn place(corner: Corner, screen: Size, window: Size) -> Point {
    let x = if corner.is_right() {
        screen.width - window.width
    } else {
        0.0
    };
    let y = if corner.is_bottom() {
        screen.height - window.height
    } else {
        0.0
    };
    Point { x, y }
}

/// Horizontal offset a sliding toast starts from and leaves towards.
#[must_use]
pub fn slide_offset(corner: Corner, window: Size) -> f64 {
    corner.horizontal_sign() * window.width
}

#[cfg(test)]
mod tests {
    use super::{Point, Size, place, slide_offset};
    use crate::types::Corner;

    #[test]
    fn placement_matches_corner_table() {
        let screen = Size::new(1920.0, 1080.0);
        let window = Size::new(300.0, 150.0);
        assert_eq!(place(Corner::TopLeft, screen, window), Point { x: 0.0, y: 0.0 });
        assert_eq!(
            place(Corner::TopRight, screen, window),
            Point { x: 1620.0, y: 0.0 }
        );
        assert_eq!(
            place(Corner::BottomLeft, screen, window),
            Point { x: 0.0, y: 930.0 }
        );
        assert_eq!(
            place(Corner::BottomRight, screen, window),
            Point {
                x: 1620.0,
                y: 930.0
            }
        );
    }

    #[test]
    fn placement_touches_the_anchored_edges() {
        let screens = [(1920.0, 1080.0), (800.0, 600.0), (3440.0, 1440.0), (100.0, 50.0)];
        let windows = [(300.0, 150.0), (1.0, 1.0), (799.5, 10.25), (400.0, 900.0)];
        for corner in Corner::ALL {
            for &(sw, sh) in &screens {
                for &(ww, wh) in &windows {
                    let p = place(corner, Size::new(sw, sh), Size::new(ww, wh));
                    assert_eq!(p.x + ww == sw, corner.is_right(), "{corner} x edge");
                    assert_eq!(p.x == 0.0, !corner.is_right() || ww == sw, "{corner} x origin");
                    assert_eq!(p.y + wh == sh, corner.is_bottom(), "{corner} y edge");
                    assert_eq!(p.y == 0.0, !corner.is_bottom() || wh == sh, "{corner} y origin");
                }
            }
        }
    }

    #[test]
    fn oversized_window_goes_negative() {
        let p = place(
            Corner::BottomRight,
            Size::new(800.0, 600.0),
            Size::new(1000.0, 700.0),
        );
        assert_eq!(p, Point { x: -200.0, y: -100.0 });
    }

    #[test]
    fn slide_offset_points_to_nearest_edge() {
        let window = Size::new(300.0, 150.0);
        assert_eq!(slide_offset(Corner::TopLeft, window), -300.0);
        assert_eq!(slide_offset(Corner::BottomLeft, window), -300.0);
        assert_eq!(slide_offset(Corner::TopRight, window), 300.0);
        assert_eq!(slide_offset(Corner::BottomRight, window), 300.0);
    }

    #[test]
    fn size_parses_dimensions() {
        assert_eq!("1920x1080".parse::<Size>(), Ok(Size::new(1920.0, 1080.0)));
        assert_eq!(" 800 X 600 ".parse::<Size>(), Ok(Size::new(800.0, 600.0)));
        assert!("1920".parse::<Size>().is_err());
        assert!("axb".parse::<Size>().is_err());
    }

    #[test]
    fn size_rejects_undrawable_dimensions() {
        for raw in ["NaNxNaN", "0x1080", "1920x-1", "infx600"] {
            assert!(raw.parse::<Size>().is_err(), "{raw}");
        }
        assert!(!Size::new(f64::NAN, 10.0).is_drawable());
        assert!(Size::new(0.5, 0.5).is_drawable());
    }
}
