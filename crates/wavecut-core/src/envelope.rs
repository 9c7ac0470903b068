//! Envelope path construction
//!
//! Turns a sequence of (bottom, top) samples into one closed polygon sized to
//! a drawing surface. The outline walks the `top` values left to right, drops
//! to the last `bottom` value at the right edge, then walks the `bottom`
//! values back to the left edge. Renderers fill it with a non-zero or even-odd
//! rule, so the traversal order must stay exactly as built here.

use crate::types::Sample;

/// A point on the drawing surface, in pixels from the top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutlinePoint {
    pub x: f32,
    pub y: f32,
}

impl OutlinePoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Closed polygon describing a filled waveform envelope
///
/// The last point connects back to the first implicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    points: Vec<OutlinePoint>,
}

impl Outline {
    /// Outline that draws nothing
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Points in traversal order
    pub fn points(&self) -> &[OutlinePoint] {
        &self.points
    }

    /// Whether the outline has no drawable points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points (without the implicit closing point)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the renderer should close the polygon
    ///
    /// Every non-empty outline is closed.
    pub fn is_closed(&self) -> bool {
        !self.points.is_empty()
    }
}

/// Map a sample value in `[-1, 1]` to a vertical pixel in `[height, 0]`
#[inline]
pub fn value_to_y(value: f64, height: f32) -> f32 {
    height * ((1.0 - value) / 2.0) as f32
}

/// Build the closed envelope outline for `samples` on a `width` x `height` surface
///
/// Fewer than two samples produce an empty outline, since a single sample has
/// no horizontal extent to step over.
pub fn build_outline(samples: &[Sample], width: f32, height: f32) -> Outline {
    let n = samples.len();
    if n < 2 {
        return Outline::empty();
    }

    let step = width / (n - 1) as f32;
    let mut points = Vec::with_capacity(2 * n);

    // Upper edge, left to right
    for (index, sample) in samples.iter().enumerate() {
        points.push(OutlinePoint::new(index as f32 * step, value_to_y(sample.top, height)));
    }

    // Drop to the lower edge at the right side of the surface
    let last = samples[n - 1];
    points.push(OutlinePoint::new(width, value_to_y(last.bottom, height)));

    // Lower edge, right to left
    for index in (0..n - 1).rev() {
        points.push(OutlinePoint::new(
            index as f32 * step,
            value_to_y(samples[index].bottom, height),
        ));
    }

    Outline { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(bottom: f64, top: f64) -> Sample {
        Sample::new(bottom, top)
    }

    fn assert_point(p: OutlinePoint, x: f32, y: f32) {
        assert!(
            (p.x - x).abs() < 1e-4 && (p.y - y).abs() < 1e-4,
            "expected ({x}, {y}), got ({}, {})",
            p.x,
            p.y
        );
    }

    #[test]
    fn test_full_scale_square_corners() {
        let samples = [sample(-1.0, 1.0), sample(-1.0, 1.0)];
        let outline = build_outline(&samples, 100.0, 100.0);
        let points = outline.points();

        // top-left, top-right, bottom-right (closing edge), bottom-left
        assert_eq!(points.len(), 4);
        assert_point(points[0], 0.0, 0.0);
        assert_point(points[1], 100.0, 0.0);
        assert_point(points[2], 100.0, 100.0);
        assert_point(points[3], 0.0, 100.0);
        assert!(outline.is_closed());
    }

    #[test]
    fn test_degenerate_sequences_are_empty() {
        assert!(build_outline(&[], 100.0, 100.0).is_empty());
        assert!(build_outline(&[sample(-0.5, 0.5)], 100.0, 100.0).is_empty());
        assert!(!build_outline(&[sample(-0.5, 0.5)], 100.0, 100.0).is_closed());
    }

    #[test]
    fn test_traversal_order() {
        let samples = [sample(-0.2, 0.4), sample(-0.6, 0.8), sample(0.0, 0.0)];
        let outline = build_outline(&samples, 200.0, 100.0);
        let points = outline.points();

        // n forward points + closing edge + (n - 1) backward points
        assert_eq!(points.len(), 2 * samples.len());

        // Forward pass plots tops at index * step (step = 100)
        assert_point(points[0], 0.0, 30.0);
        assert_point(points[1], 100.0, 10.0);
        assert_point(points[2], 200.0, 50.0);
        // Closing edge at right edge, last bottom
        assert_point(points[3], 200.0, 50.0);
        // Backward pass plots bottoms from n-2 down to 0
        assert_point(points[4], 100.0, 80.0);
        assert_point(points[5], 0.0, 60.0);
    }

    #[test]
    fn test_zero_sized_surface_is_degenerate_not_error() {
        let samples = [sample(-1.0, 1.0), sample(-0.5, 0.5), sample(0.0, 0.3)];

        let flat = build_outline(&samples, 100.0, 0.0);
        assert_eq!(flat.len(), 6);
        assert!(flat.points().iter().all(|p| p.y == 0.0));

        let thin = build_outline(&samples, 0.0, 100.0);
        assert_eq!(thin.len(), 6);
        assert!(thin.points().iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn test_out_of_range_values_map_outside_surface() {
        let samples = [sample(-2.0, 2.0), sample(-2.0, 2.0)];
        let outline = build_outline(&samples, 10.0, 100.0);
        assert_point(outline.points()[0], 0.0, -50.0);
        assert_point(outline.points()[2], 10.0, 150.0);
    }

    #[test]
    fn test_deterministic_and_input_untouched() {
        let samples = vec![sample(-0.3, 0.7), sample(-0.1, 0.2), sample(-0.9, 0.9)];
        let before = samples.clone();

        let a = build_outline(&samples, 321.0, 123.0);
        let b = build_outline(&samples, 321.0, 123.0);

        assert_eq!(a, b);
        assert_eq!(samples, before);
    }
}
