//! Waveform editor view (right panel)

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};
use wavecut_core::FilesystemCatalog;
use wavecut_widgets::button_styles::action_style;
use wavecut_widgets::theme::{ERROR_COLOR, TEXT_SECONDARY};
use wavecut_widgets::waveform_editor;

use super::message::Message;
use crate::domain::EditorDomain;

/// Render the selected waveform with its export controls
pub fn view<'a>(
    domain: &'a EditorDomain<FilesystemCatalog>,
    canvas_height: f32,
    exporting: bool,
) -> Element<'a, Message> {
    let title = match domain.selected() {
        Some(entry) => text(entry.name.as_str()).size(18),
        None => text("Select a file").size(18).color(TEXT_SECONDARY),
    };

    let canvas = container(waveform_editor(domain.editor(), Message::Editor))
        .width(Length::Fill)
        .height(Length::Fixed(canvas_height));

    let mut controls = row![].spacing(12).align_y(Alignment::Center);
    if domain.can_export() {
        let label = if exporting { "Exporting..." } else { "Export selection" };
        let mut export = button(text(label).size(14))
            .padding([6, 14])
            .style(|_, status| action_style(status));
        if !exporting {
            export = export.on_press(Message::Export);
        }
        controls = controls.push(export);
    }
    controls = controls
        .push(Space::new().width(Length::Fill))
        .push(status_text(domain.status()));

    column![title, canvas, controls]
        .spacing(12)
        .width(Length::Fill)
        .into()
}

fn status_text(status: &str) -> Element<'_, Message> {
    let color = if status.starts_with("Failed") || status.starts_with("Export failed") {
        ERROR_COLOR
    } else {
        TEXT_SECONDARY
    };
    text(status).size(12).color(color).into()
}
