/// Catalog screen: staggered card grid with skeleton and footer states
///
/// The scrollable reports its viewport on every scroll; the shell turns
/// positions near the content end into `load_more` calls. Which body is
/// rendered follows the loader flags directly: skeletons during the initial
/// load, the populated grid afterwards, a footer spinner row while a
/// follow-up page is in flight.
use crate::state::catalog::{CatalogLoader, FetchError};
use crate::state::data::CatalogEntry;
use crate::Message;
use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text, Column, Space,
};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

/// Number of placeholder cards shown while the first page is in flight.
const SKELETON_CARDS: usize = 6;

pub fn catalog_screen(loader: &CatalogLoader) -> Element<'_, Message> {
    let header = row![
        text("Catalog").size(24),
        horizontal_space(),
        button(text("Refresh").size(14))
            .padding([6.0, 12.0])
            .on_press(Message::RefreshCatalog),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut page = column![header].spacing(16).padding(24).width(Length::Fill);

    if let Some(error) = loader.error() {
        page = page.push(error_banner(error));
    }

    page = if loader.is_initial_loading() {
        page.push(skeleton_grid())
    } else {
        page.push(entry_grid(loader.entries()))
    };
    page = page.push(footer(loader));

    scrollable(container(page).width(Length::Fill))
        .on_scroll(Message::CatalogScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn error_banner(error: &FetchError) -> Element<'static, Message> {
    container(
        row![
            text(format!("⚠️  {error}")).size(14),
            horizontal_space(),
            button(text("Retry").size(14))
                .padding([6.0, 12.0])
                .on_press(Message::RetryCatalog),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(12)
    .style(|theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().danger.weak.color,
        )),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

/// Two-column masonry: entries alternate columns, card heights vary by id.
fn entry_grid(entries: &[CatalogEntry]) -> Element<'_, Message> {
    let mut left = Column::new().spacing(16);
    let mut right = Column::new().spacing(16);

    for (index, entry) in entries.iter().enumerate() {
        if index % 2 == 0 {
            left = left.push(entry_card(entry));
        } else {
            right = right.push(entry_card(entry));
        }
    }

    row![
        left.width(Length::FillPortion(1)),
        right.width(Length::FillPortion(1)),
    ]
    .spacing(16)
    .into()
}

fn entry_card(entry: &CatalogEntry) -> Element<'_, Message> {
    let color = artwork_color(&entry.image_ref);
    let artwork = container(Space::new(
        Length::Fill,
        Length::Fixed(artwork_height(entry.id)),
    ))
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    });

    column![
        artwork,
        text(&entry.title).size(15),
        text(&entry.subtitle).size(12),
    ]
    .spacing(4)
    .into()
}

fn skeleton_grid() -> Element<'static, Message> {
    let mut left = Column::new().spacing(16);
    let mut right = Column::new().spacing(16);

    for index in 0..SKELETON_CARDS {
        let card = skeleton_card(artwork_height(index as u64));
        if index % 2 == 0 {
            left = left.push(card);
        } else {
            right = right.push(card);
        }
    }

    row![
        left.width(Length::FillPortion(1)),
        right.width(Length::FillPortion(1)),
    ]
    .spacing(16)
    .into()
}

fn skeleton_card(height: f32) -> Element<'static, Message> {
    let block = |height: f32| {
        container(Space::new(Length::Fill, Length::Fixed(height)))
            .width(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(Background::Color(
                    theme.extended_palette().background.weak.color,
                )),
                border: Border {
                    radius: 6.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
    };

    // Artwork block plus two "text line" blocks.
    column![block(height), block(14.0), block(10.0)]
        .spacing(6)
        .into()
}

fn footer(loader: &CatalogLoader) -> Element<'static, Message> {
    let label: Element<_> = if loader.is_initial_loading() {
        Space::new(Length::Shrink, Length::Fixed(0.0)).into()
    } else if loader.is_loading_more() {
        text("Loading more…").size(14).into()
    } else if !loader.has_more() {
        text(format!("All {} items loaded", loader.entries().len()))
            .size(14)
            .into()
    } else {
        Space::new(Length::Shrink, Length::Fixed(0.0)).into()
    };

    container(label)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([8.0, 0.0])
        .into()
}

/// Heights cycle so the two columns drift out of phase and look staggered.
fn artwork_height(id: u64) -> f32 {
    match id % 3 {
        0 => 200.0,
        1 => 150.0,
        _ => 240.0,
    }
}

/// Deterministic placeholder color derived from the image reference.
/// FNV-1a over the ref string picks the hue; saturation and lightness are
/// fixed so the grid stays muted.
fn artwork_color(image_ref: &str) -> Color {
    let mut hash: u32 = 2166136261;
    for byte in image_ref.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16777619);
    }
    hue_to_color((hash % 360) as f32)
}

fn hue_to_color(hue: f32) -> Color {
    let chroma = 0.25;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let (r, g, b) = match (hue / 60.0) as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let lift = 0.35;
    Color::from_rgb(r + lift, g + lift, b + lift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_color_is_deterministic_and_in_range() {
        let first = artwork_color("asset://catalog/007.jpg");
        let second = artwork_color("asset://catalog/007.jpg");
        assert_eq!(first, second);

        for id in 0..360 {
            let color = hue_to_color(id as f32);
            for channel in [color.r, color.g, color.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
