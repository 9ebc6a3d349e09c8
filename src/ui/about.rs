/// About card: version blurb plus the display settings
use crate::settings::DisplaySettings;
use crate::Message;
use iced::widget::{button, checkbox, column, container, pick_list, row, text};
use iced::{Alignment, Element, Length};

pub fn about_card(settings: &DisplaySettings) -> Element<'static, Message> {
    let card = column![
        text("Gallery Demo").size(28),
        text(format!("Version {}", env!("CARGO_PKG_VERSION"))).size(13),
        text(
            "A single-screen showcase: paginated catalog with skeleton \
             loading, a staggered grid, and a simulated upload pipeline. \
             All data is synthetic; nothing leaves this machine.",
        )
        .size(14),
        row![
            text("Display font").size(14),
            pick_list(
                settings.font_names.clone(),
                Some(settings.selected_font.clone()),
                Message::FontSelected,
            )
            .text_size(14),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        checkbox("Dark mode", settings.dark_mode).on_toggle(Message::DarkModeToggled),
        button(text("Close").size(14))
            .padding([8.0, 16.0])
            .on_press(Message::ToggleAbout),
    ]
    .spacing(16)
    .align_x(Alignment::Center)
    .max_width(420);

    container(container(card).padding(32).style(container::rounded_box))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
