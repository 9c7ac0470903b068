//! Divider marker silhouettes
//!
//! Each marker is a vertical bar with a triangular wedge pointing into the
//! selection: the left marker carries its wedge at the top, the right marker
//! at the bottom. Sizes are fractions of the surface width so markers scale
//! with the canvas.
//!
//! ```text
//!  ▕▀▀◣          ▕
//!  ▕             ▕
//!  ▕             ◢▄▄▕
//! left         right
//! ```

use iced::Point;

/// Bar width as a fraction of the surface width
pub const MARKER_RELATIVE_WIDTH: f32 = 0.01;

/// Wedge size as a fraction of the surface width
pub const MARKER_WEDGE_RELATIVE_SIZE: f32 = 0.04;

/// Outline of the left marker, whose outer edge sits at `x`
pub fn left_marker(x: f32, width: f32, height: f32) -> [Point; 5] {
    let bar = width * MARKER_RELATIVE_WIDTH;
    let wedge = width * MARKER_WEDGE_RELATIVE_SIZE;
    [
        Point::new(x, 0.0),
        Point::new(x + bar + wedge, 0.0),
        Point::new(x + bar, wedge),
        Point::new(x + bar, height),
        Point::new(x, height),
    ]
}

/// Outline of the right marker, whose outer edge sits at `x`
pub fn right_marker(x: f32, width: f32, height: f32) -> [Point; 5] {
    let bar = width * MARKER_RELATIVE_WIDTH;
    let wedge = width * MARKER_WEDGE_RELATIVE_SIZE;
    [
        Point::new(x, 0.0),
        Point::new(x, height),
        Point::new(x - bar - wedge, height),
        Point::new(x - bar, height - wedge),
        Point::new(x - bar, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_marker_extends_inward_with_top_wedge() {
        let points = left_marker(0.0, 1000.0, 200.0);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[1], Point::new(50.0, 0.0));
        assert_eq!(points[2], Point::new(10.0, 40.0));
        assert_eq!(points[3], Point::new(10.0, 200.0));
        assert!(points.iter().all(|p| p.x >= 0.0));
    }

    #[test]
    fn test_right_marker_extends_inward_with_bottom_wedge() {
        let points = right_marker(1000.0, 1000.0, 200.0);
        assert_eq!(points[1], Point::new(1000.0, 200.0));
        assert_eq!(points[2], Point::new(950.0, 200.0));
        assert_eq!(points[3], Point::new(990.0, 160.0));
        assert!(points.iter().all(|p| p.x <= 1000.0));
    }
}
