//! Divider state machine for range selection
//!
//! Two draggable boundaries (`left`, `right`) are stored as normalized
//! positions in `[0, 1]`, independent of the drawing surface size, so they
//! survive resizes. Pointer events are resolved into a hit, a move, or a
//! no-op; the current positions map to an export index range on demand.
//!
//! ```text
//!  None --press near left--> Left  --release--> None
//!  None --press near right-> Right --release--> None
//!  any  --press elsewhere--> None   (caller falls back to default handling)
//! ```
//!
//! After every mutation `right - left >= MIN_GAP` holds.

use serde::{Deserialize, Serialize};

use crate::types::ExportRange;

/// Minimum normalized distance between the two dividers
pub const MIN_GAP: f32 = 0.1;

/// Normalized distance within which a press grabs a divider
pub const TOUCH_TOLERANCE: f32 = 0.05;

/// Slack allowed when validating restored positions against `MIN_GAP`
const GAP_EPSILON: f32 = 1e-5;

/// Which divider (if any) is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragTarget {
    #[default]
    None,
    Left,
    Right,
}

impl DragTarget {
    /// Whether a divider is grabbed
    pub fn is_active(&self) -> bool {
        !matches!(self, DragTarget::None)
    }
}

/// Initial divider positions applied on every reset
///
/// Loaded from the `dividers` section of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerDefaults {
    pub left: f32,
    pub right: f32,
}

impl Default for DividerDefaults {
    fn default() -> Self {
        Self {
            left: 0.0,
            right: 1.0,
        }
    }
}

impl DividerDefaults {
    /// Clamp into `[0, 1]` and fall back to full range if the gap is violated
    pub fn validate(&mut self) {
        if !self.left.is_finite() || !self.right.is_finite() {
            log::warn!("DividerDefaults: non-finite positions, using full range");
            *self = Self::default();
            return;
        }

        self.left = self.left.clamp(0.0, 1.0);
        self.right = self.right.clamp(0.0, 1.0);

        if self.right - self.left < MIN_GAP {
            log::warn!(
                "DividerDefaults: left={} right={} closer than {}, using full range",
                self.left,
                self.right,
                MIN_GAP
            );
            *self = Self::default();
        }
    }
}

/// Persistable divider positions (drag state is never persisted)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividerSnapshot {
    pub left: f32,
    pub right: f32,
}

impl DividerSnapshot {
    /// Whether the positions satisfy the divider invariant
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.left >= 0.0
            && self.right <= 1.0
            && self.right - self.left >= MIN_GAP - GAP_EPSILON
    }
}

/// Current divider positions and drag target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerState {
    left: f32,
    right: f32,
    active_drag: DragTarget,
}

impl DividerState {
    fn from_defaults(defaults: DividerDefaults) -> Self {
        Self {
            left: defaults.left,
            right: defaults.right,
            active_drag: DragTarget::None,
        }
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn active_drag(&self) -> DragTarget {
        self.active_drag
    }
}

/// Owns the divider state and applies pointer input to it
#[derive(Debug, Clone)]
pub struct DividerController {
    state: DividerState,
    defaults: DividerDefaults,
}

impl Default for DividerController {
    fn default() -> Self {
        Self::new(DividerDefaults::default())
    }
}

impl DividerController {
    /// Create a controller positioned at `defaults`
    ///
    /// `defaults` is validated first, so a bad config can't break the invariant.
    pub fn new(mut defaults: DividerDefaults) -> Self {
        defaults.validate();
        Self {
            state: DividerState::from_defaults(defaults),
            defaults,
        }
    }

    pub fn state(&self) -> DividerState {
        self.state
    }

    pub fn left(&self) -> f32 {
        self.state.left
    }

    pub fn right(&self) -> f32 {
        self.state.right
    }

    pub fn active_drag(&self) -> DragTarget {
        self.state.active_drag
    }

    pub fn defaults(&self) -> DividerDefaults {
        self.defaults
    }

    /// Which divider a press at `relative_x` would grab, without mutating state
    ///
    /// `left` is tested first, so it wins when both are within tolerance.
    pub fn hit_test(&self, relative_x: f32) -> DragTarget {
        if (relative_x - self.state.left).abs() < TOUCH_TOLERANCE {
            DragTarget::Left
        } else if (relative_x - self.state.right).abs() < TOUCH_TOLERANCE {
            DragTarget::Right
        } else {
            DragTarget::None
        }
    }

    /// Handle a press at `x` pixels on a surface `surface_width` pixels wide
    ///
    /// Returns true if a divider was grabbed. On a miss the drag target is
    /// cleared and the caller should apply its default press handling.
    pub fn on_pointer_down(&mut self, x: f32, surface_width: f32) -> bool {
        let target = normalize(x, surface_width)
            .map(|relative_x| self.hit_test(relative_x))
            .unwrap_or_default();

        self.state.active_drag = target;
        target.is_active()
    }

    /// Handle a drag to `x` pixels on a surface `surface_width` pixels wide
    ///
    /// Returns true if a divider moved and the markers need a redraw.
    pub fn on_pointer_move(&mut self, x: f32, surface_width: f32) -> bool {
        if !self.state.active_drag.is_active() {
            return false;
        }
        let Some(requested) = normalize(x, surface_width) else {
            return false;
        };

        match self.state.active_drag {
            DragTarget::Left => self.move_left(requested),
            DragTarget::Right => self.move_right(requested),
            DragTarget::None => {}
        }
        true
    }

    /// Handle a release; always ends any drag
    pub fn on_pointer_up(&mut self) {
        self.state.active_drag = DragTarget::None;
    }

    /// Restore the default positions and drop any drag
    pub fn reset(&mut self) {
        self.state = DividerState::from_defaults(self.defaults);
    }

    /// Sample-index range selected by the current positions
    ///
    /// `floor(count * position)` for both ends, with no rounding correction.
    /// Above 2^24 samples the `f32` count can round up past the last index,
    /// so both ends are capped at `sample_count`.
    pub fn export_range(&self, sample_count: usize) -> ExportRange {
        let count = sample_count as f32;
        let index = |position: f32| ((count * position).floor() as usize).min(sample_count);
        ExportRange {
            start_index: index(self.state.left),
            end_index: index(self.state.right),
        }
    }

    /// Capture the positions for persistence
    pub fn snapshot(&self) -> DividerSnapshot {
        DividerSnapshot {
            left: self.state.left,
            right: self.state.right,
        }
    }

    /// Apply previously captured positions
    ///
    /// An invalid snapshot resets to defaults instead. Returns true if the
    /// snapshot was applied.
    pub fn restore(&mut self, snapshot: DividerSnapshot) -> bool {
        if !snapshot.is_valid() {
            log::warn!(
                "restore: rejecting divider snapshot left={} right={}",
                snapshot.left,
                snapshot.right
            );
            self.reset();
            return false;
        }

        self.state = DividerState {
            left: snapshot.left,
            right: snapshot.right,
            active_drag: DragTarget::None,
        };
        true
    }

    fn move_left(&mut self, requested: f32) {
        self.state.left = if requested < 0.0 {
            0.0
        } else if self.state.right - requested < MIN_GAP {
            self.state.right - MIN_GAP
        } else {
            requested
        };
    }

    fn move_right(&mut self, requested: f32) {
        self.state.right = if requested > 1.0 {
            1.0
        } else if requested - self.state.left < MIN_GAP {
            self.state.left + MIN_GAP
        } else {
            requested
        };
    }
}

/// Convert a pixel coordinate into a fraction of the surface width
///
/// Positions outside the surface are allowed (the move rules clamp them);
/// a surface without width yields nothing.
fn normalize(x: f32, surface_width: f32) -> Option<f32> {
    if !(surface_width > 0.0) {
        return None;
    }
    let relative = x / surface_width;
    (!relative.is_nan()).then_some(relative)
}
