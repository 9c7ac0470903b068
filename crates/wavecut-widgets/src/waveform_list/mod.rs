//! Scrollable list of catalog entries
//!
//! ```ignore
//! let list = waveform_list(&self.entries, self.selected.as_ref(), Message::Select);
//! ```

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};
use wavecut_core::WaveformEntry;

use crate::button_styles::list_entry_style;
use crate::theme::{ACCENT_COLOR, TEXT_SECONDARY};

/// Render `entries` as buttons, highlighting `selected`
pub fn waveform_list<'a, Message>(
    entries: &'a [WaveformEntry],
    selected: Option<&'a WaveformEntry>,
    on_select: impl Fn(WaveformEntry) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    if entries.is_empty() {
        return container(text("No waveforms found").size(13).color(TEXT_SECONDARY))
            .width(Length::Fill)
            .padding(12)
            .center_x(Length::Fill)
            .into();
    }

    let items: Vec<Element<'a, Message>> = entries
        .iter()
        .map(|entry| {
            let is_selected = selected == Some(entry);
            entry_button(entry, is_selected, on_select(entry.clone()))
        })
        .collect();

    scrollable(column(items).spacing(2).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn entry_button<'a, Message>(
    entry: &'a WaveformEntry,
    is_selected: bool,
    on_press: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mut label = row![text(entry.name.as_str()).size(13)]
        .spacing(6)
        .align_y(Alignment::Center);
    if entry.is_exported() {
        label = label
            .push(Space::new().width(Length::Fill))
            .push(text("export").size(10).color(ACCENT_COLOR));
    }

    button(label)
        .padding([6, 10])
        .width(Length::Fill)
        .style(move |_, status| list_entry_style(status, is_selected))
        .on_press(on_press)
        .into()
}
