//! Canvas Program for the waveform editor

use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program};
use iced::{mouse, Color, Point, Rectangle, Size, Theme};
use wavecut_core::{DragTarget, Outline, WaveformEditor};

use super::marker::{left_marker, right_marker};
use super::EditorEvent;
use crate::theme::{
    CANVAS_BG, ENVELOPE_COLOR, HANDLE_ACTIVE_COLOR, HANDLE_COLOR, OUTSIDE_SELECTION_SHADE,
};

/// Canvas state for tracking a divider drag
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorInteraction {
    /// Set when a press grabbed a divider, cleared on release
    pub is_dragging: bool,
}

/// Canvas program drawing an editor's envelope and divider markers
///
/// `on_event` turns pointer input into application messages.
pub struct EditorCanvas<'a, Message, F>
where
    F: Fn(EditorEvent) -> Message,
{
    pub editor: &'a WaveformEditor,
    pub on_event: F,
}

impl<'a, Message, F> Program<Message> for EditorCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(EditorEvent) -> Message,
{
    type State = EditorInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let grabbed = self.editor.hit_test(position.x, bounds.width).is_active();
                interaction.is_dragging = grabbed;

                let action = canvas::Action::publish((self.on_event)(EditorEvent::PointerDown {
                    x: position.x,
                    width: bounds.width,
                }));
                // A miss stays uncaptured so surrounding widgets see the press
                Some(if grabbed { action.and_capture() } else { action })
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if interaction.is_dragging => {
                Some(
                    canvas::Action::publish((self.on_event)(EditorEvent::PointerMoved {
                        x: position.x - bounds.x,
                        width: bounds.width,
                    }))
                    .and_capture(),
                )
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let was_dragging = std::mem::take(&mut interaction.is_dragging);
                if was_dragging || cursor.is_over(bounds) {
                    Some(canvas::Action::publish((self.on_event)(EditorEvent::PointerUp)))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.is_dragging {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.editor.hit_test(position.x, bounds.width).is_active() => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = bounds.width;
        let height = bounds.height;

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), CANVAS_BG);

        // An empty outline draws nothing, but the dividers stay visible and draggable
        let outline = self.editor.outline(width, height);
        if !outline.is_empty() {
            frame.fill(&outline_path(&outline), ENVELOPE_COLOR);
        }

        let (left_x, right_x) = self.editor.marker_positions(width);

        // Dim everything outside the selection
        frame.fill_rectangle(Point::ORIGIN, Size::new(left_x, height), OUTSIDE_SELECTION_SHADE);
        frame.fill_rectangle(
            Point::new(right_x, 0.0),
            Size::new((width - right_x).max(0.0), height),
            OUTSIDE_SELECTION_SHADE,
        );

        for (marker, is_active) in divider_markers(self.editor, width, height) {
            frame.fill(&polygon(&marker), handle_color(is_active));
        }

        vec![frame.into_geometry()]
    }
}

/// Left and right marker outlines, each with whether it is being dragged
fn divider_markers(editor: &WaveformEditor, width: f32, height: f32) -> [([Point; 5], bool); 2] {
    let (left_x, right_x) = editor.marker_positions(width);
    let active = editor.dividers().active_drag();
    [
        (left_marker(left_x, width, height), active == DragTarget::Left),
        (right_marker(right_x, width, height), active == DragTarget::Right),
    ]
}

fn handle_color(is_active: bool) -> Color {
    if is_active {
        HANDLE_ACTIVE_COLOR
    } else {
        HANDLE_COLOR
    }
}

/// Closed path through the outline points, in traversal order
fn outline_path(outline: &Outline) -> Path {
    Path::new(|builder| {
        let mut points = outline.points().iter();
        if let Some(first) = points.next() {
            builder.move_to(Point::new(first.x, first.y));
            for point in points {
                builder.line_to(Point::new(point.x, point.y));
            }
            builder.close();
        }
    })
}

fn polygon(points: &[Point]) -> Path {
    Path::new(|builder| {
        if let Some((first, rest)) = points.split_first() {
            builder.move_to(*first);
            for point in rest {
                builder.line_to(*point);
            }
            builder.close();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecut_core::Sample;

    #[test]
    fn test_markers_without_samples() {
        let editor = WaveformEditor::default();
        assert!(editor.outline(200.0, 100.0).is_empty());

        let [(left, left_active), (right, right_active)] = divider_markers(&editor, 200.0, 100.0);
        assert_eq!(left, left_marker(0.0, 200.0, 100.0));
        assert_eq!(right, right_marker(200.0, 200.0, 100.0));
        assert!(!left_active && !right_active);
    }

    #[test]
    fn test_markers_with_single_sample_track_drag() {
        let mut editor = WaveformEditor::default();
        editor.load(vec![Sample::new(-0.5, 0.5)]);
        assert!(editor.outline(200.0, 100.0).is_empty());

        assert!(editor.pointer_down(199.0, 200.0));
        editor.pointer_moved(150.0, 200.0);

        let [(_, left_active), (right, right_active)] = divider_markers(&editor, 200.0, 100.0);
        assert!(!left_active);
        assert!(right_active);
        assert_eq!(right, right_marker(150.0, 200.0, 100.0));
    }
}
