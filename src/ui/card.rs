//! Community card view
//!
//! Projects one community into a card element: icon, name, rating badge,
//! category names, clickable tag chips, platform link buttons and an
//! expandable details region. Clicking the summary area toggles the details;
//! chip and link presses are captured by their buttons and do not reach the
//! toggle area.

use chrono::{DateTime, NaiveDate};
use iced::widget::{button, column, container, horizontal_space, image, mouse_area, row, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::catalog::Catalog;
use crate::state::data::Community;
use crate::state::filter::Selection;
use crate::Message;

const CARD_WIDTH: f32 = 340.0;
const ICON_SIZE: f32 = 48.0;
const PLATFORM_ICON_SIZE: f32 = 16.0;

/// Build the card for one community
pub fn community_card<'a>(
    community: &'a Community,
    catalog: &'a Catalog,
    selection: &Selection,
    expanded: bool,
) -> Element<'a, Message> {
    let icon = image(image::Handle::from_path(catalog.icon_path(&community.id)))
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE));

    let header = row![
        icon,
        text(&community.name).size(20),
        horizontal_space(),
        text(format!("⭐ {}", community.rating)).size(16),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let category_names = community
        .categories
        .iter()
        .map(|id| catalog.category_name(id))
        .collect::<Vec<_>>()
        .join(", ");

    let meta = column![
        text(category_names).size(14),
        tag_chips(community, catalog, selection),
    ]
    .spacing(6);

    // The summary toggles the details region; platform buttons inside it
    // capture their own presses first, so following a link never toggles
    let summary = mouse_area(
        column![
            text(&community.description).size(14),
            row![text("Links:").size(12), platform_links(community, catalog)]
                .spacing(8)
                .align_y(Alignment::Center),
        ]
        .spacing(8),
    )
    .on_press(Message::ToggleDetails(community.id.clone()));

    let mut body = column![header, meta, summary].spacing(10);
    if expanded {
        body = body.push(extra_info(community));
    }

    container(body)
        .padding(12)
        .width(Length::Fixed(CARD_WIDTH))
        .style(container::rounded_box)
        .into()
}

/// One clickable chip per tag, highlighted when it is the active tag filter
fn tag_chips<'a>(
    community: &'a Community,
    catalog: &'a Catalog,
    selection: &Selection,
) -> Element<'a, Message> {
    let chips: Vec<Element<Message>> = community
        .tags
        .iter()
        .map(|id| {
            let active = selection.tag.as_deref() == Some(id.as_str());
            button(text(catalog.tag_name(id)).size(12))
                .on_press(Message::TagChipPressed(id.clone()))
                .padding(4)
                .style(if active { button::primary } else { button::secondary })
                .into()
        })
        .collect();

    Wrap::with_elements(chips).spacing(6.0).line_spacing(6.0).into()
}

/// One button per platform entry; pressing opens the URL externally
fn platform_links<'a>(community: &'a Community, catalog: &'a Catalog) -> Element<'a, Message> {
    let links: Vec<Element<Message>> = community
        .platforms
        .iter()
        .map(|(name, platform)| {
            let label: Element<Message> = match catalog.platform_icon_path(name) {
                Some(path) => row![
                    image(image::Handle::from_path(path))
                        .width(Length::Fixed(PLATFORM_ICON_SIZE))
                        .height(Length::Fixed(PLATFORM_ICON_SIZE)),
                    text(name).size(12),
                ]
                .spacing(4)
                .align_y(Alignment::Center)
                .into(),
                None => text(name).size(12).into(),
            };

            button(label)
                .on_press(Message::OpenLink(platform.url.clone()))
                .padding(4)
                .style(button::secondary)
                .into()
        })
        .collect();

    Wrap::with_elements(links).spacing(6.0).line_spacing(6.0).into()
}

/// The expanded details: per-platform member counts and the creation date
fn extra_info(community: &Community) -> Element<'_, Message> {
    let mut rows: Vec<Element<Message>> = community
        .platforms
        .iter()
        .map(|(name, platform)| {
            text(format!("👥 {}: {}", name, platform.members))
                .size(13)
                .into()
        })
        .collect();

    rows.push(
        text(format!("📅 Created: {}", format_created_at(&community.created_at)))
            .size(13)
            .into(),
    );

    Column::with_children(rows).spacing(4).into()
}

/// Render the creation date nicely when it parses, raw when it does not
fn format_created_at(raw: &str) -> String {
    if raw.is_empty() {
        return "unknown".to_string();
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return stamp.format("%d %b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_created_at_date_only() {
        assert_eq!(format_created_at("2021-03-14"), "14 Mar 2021");
    }

    #[test]
    fn test_format_created_at_rfc3339() {
        assert_eq!(format_created_at("2021-03-14T12:30:00+00:00"), "14 Mar 2021");
    }

    #[test]
    fn test_format_created_at_falls_back_to_raw() {
        assert_eq!(format_created_at("spring 2021"), "spring 2021");
        assert_eq!(format_created_at(""), "unknown");
    }
}
