//! Waveform library browser (left panel)

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};
use wavecut_core::WaveformEntry;
use wavecut_widgets::button_styles::action_style;
use wavecut_widgets::waveform_list;

use super::message::Message;

/// Render the list of waveforms with a refresh action
pub fn view<'a>(
    entries: &'a [WaveformEntry],
    selected: Option<&'a WaveformEntry>,
    width: f32,
) -> Element<'a, Message> {
    let header = row![
        text("Waveforms").size(18),
        Space::new().width(Length::Fill),
        button(text("Refresh").size(12))
            .padding([4, 10])
            .style(|_, status| action_style(status))
            .on_press(Message::RefreshCatalog),
    ]
    .align_y(Alignment::Center);

    container(
        column![
            header,
            waveform_list(entries, selected, Message::SelectWaveform),
        ]
        .spacing(10),
    )
    .width(Length::Fixed(width))
    .height(Length::Fill)
    .into()
}
