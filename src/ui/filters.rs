//! Filter bar view
//!
//! One button per category plus an "All" escape hatch, and the same for
//! tags with the first six shown directly and the rest behind a "+N more"
//! disclosure. The active control is highlighted on every view pass by
//! comparing its id against the current selection.

use iced::widget::{button, column, row, text, Column};
use iced::{Alignment, Element};
use iced_aw::Wrap;

use crate::state::catalog::Catalog;
use crate::state::filter::Selection;
use crate::Message;

/// Tags shown before the "+N more" disclosure kicks in
const VISIBLE_TAGS: usize = 6;

/// Build the whole filter bar
pub fn filter_bar<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
    tags_expanded: bool,
) -> Element<'a, Message> {
    column![
        category_row(catalog, selection),
        tag_rows(catalog, selection, tags_expanded),
    ]
    .spacing(10)
    .into()
}

fn category_row<'a>(catalog: &'a Catalog, selection: &Selection) -> Element<'a, Message> {
    let mut buttons: Vec<Element<Message>> = Vec::with_capacity(catalog.categories.len() + 1);

    buttons.push(filter_button(
        "All",
        selection.category.is_none(),
        Message::CategoryClicked(None),
    ));
    for category in &catalog.categories {
        let active = selection.category.as_deref() == Some(category.id.as_str());
        buttons.push(filter_button(
            &category.name,
            active,
            Message::CategoryClicked(Some(category.id.clone())),
        ));
    }

    row![
        text("Categories:").size(14),
        Wrap::with_elements(buttons).spacing(6.0).line_spacing(6.0),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn tag_rows<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
    tags_expanded: bool,
) -> Element<'a, Message> {
    let hidden = catalog.tags.len().saturating_sub(VISIBLE_TAGS);

    let mut buttons: Vec<Element<Message>> = Vec::with_capacity(VISIBLE_TAGS + 2);
    buttons.push(filter_button(
        "All",
        selection.tag.is_none(),
        Message::TagClicked(None),
    ));
    for tag in catalog.tags.iter().take(VISIBLE_TAGS) {
        buttons.push(tag_button(tag.name.as_str(), tag.id.as_str(), selection));
    }
    if hidden > 0 {
        let label = if tags_expanded {
            "show less".to_string()
        } else {
            format!("+{} more", hidden)
        };
        buttons.push(
            button(text(label).size(13))
                .on_press(Message::ToggleMoreTags)
                .padding(4)
                .style(button::text)
                .into(),
        );
    }

    let mut rows: Vec<Element<Message>> = vec![row![
        text("Tags:").size(14),
        Wrap::with_elements(buttons).spacing(6.0).line_spacing(6.0),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()];

    // The collapsed remainder, revealed by the disclosure button
    if tags_expanded && hidden > 0 {
        let rest: Vec<Element<Message>> = catalog
            .tags
            .iter()
            .skip(VISIBLE_TAGS)
            .map(|tag| tag_button(tag.name.as_str(), tag.id.as_str(), selection))
            .collect();
        rows.push(
            Wrap::with_elements(rest)
                .spacing(6.0)
                .line_spacing(6.0)
                .into(),
        );
    }

    Column::with_children(rows).spacing(6).into()
}

fn tag_button<'a>(name: &'a str, id: &str, selection: &Selection) -> Element<'a, Message> {
    let active = selection.tag.as_deref() == Some(id);
    filter_button(name, active, Message::TagClicked(Some(id.to_string())))
}

fn filter_button<'a>(label: &'a str, active: bool, message: Message) -> Element<'a, Message> {
    button(text(label).size(13))
        .on_press(message)
        .padding(4)
        .style(if active { button::primary } else { button::secondary })
        .into()
}
