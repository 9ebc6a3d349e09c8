/// Top navigation bar: app title, screen tabs, About toggle
use crate::{Message, Screen};
use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Background, Element, Length, Theme};

type ButtonStyleFn = fn(&Theme, button::Status) -> button::Style;

pub fn navbar(active: Screen, about_open: bool) -> Element<'static, Message> {
    let tab = |label: &'static str, screen: Screen| {
        let style: ButtonStyleFn = if screen == active && !about_open {
            button::primary
        } else {
            button::text
        };
        button(text(label).size(15))
            .padding([8.0, 16.0])
            .style(style)
            .on_press(Message::ScreenSelected(screen))
    };

    let about_style: ButtonStyleFn = if about_open {
        button::primary
    } else {
        button::text
    };

    container(
        row![
            text("Gallery Demo").size(20),
            tab("Catalog", Screen::Catalog),
            tab("Upload", Screen::Upload),
            horizontal_space(),
            button(text("About").size(15))
                .padding([8.0, 16.0])
                .style(about_style)
                .on_press(Message::ToggleAbout),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([12.0, 24.0])
    .style(|theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        ..container::Style::default()
    })
    .into()
}
