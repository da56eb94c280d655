//! Photo grid with per-card actions.

use std::collections::HashMap;

use iced::widget::{Space, button, column, container, image, row, text};
use iced::{Alignment, Background, Border, ContentFit, Element, Length};

use gallerydesk_api::{GalleryPhoto, PhotoId};

use crate::message::Message;
use crate::model::ThumbnailState;
use crate::style::widgets;
use crate::style::widgets::palette;

const GRID_COLUMNS: usize = 3;
const THUMB_HEIGHT: f32 = 170.0;

/// Render the photo grid, or the loading and empty states in its place.
pub fn view_photo_grid<'a>(
    photos: &[&'a GalleryPhoto],
    thumbnails: &'a HashMap<PhotoId, ThumbnailState>,
    pending_delete: Option<&'a PhotoId>,
    deleting: Option<&'a PhotoId>,
    can_mutate: bool,
    is_loading: bool,
    is_filtered: bool,
) -> Element<'a, Message> {
    if is_loading {
        return status_block("\u{23F3}", "Loading photos..."); // hourglass
    }

    if photos.is_empty() {
        return if is_filtered {
            status_block("\u{1F50D}", "No photos match the search.") // magnifier
        } else {
            status_block("\u{1F4F7}", "No photos yet. Add the first one above.") // camera
        };
    }

    let mut grid = column![].spacing(16);
    for chunk in photos.chunks(GRID_COLUMNS) {
        let mut cards = row![].spacing(16);
        for &photo in chunk {
            cards = cards.push(view_photo_card(
                photo,
                thumbnails.get(&photo.id),
                pending_delete == Some(&photo.id),
                deleting == Some(&photo.id),
                can_mutate,
            ));
        }
        // Pad the last row so cards keep a uniform width
        for _ in chunk.len()..GRID_COLUMNS {
            cards = cards.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(cards);
    }

    grid.into()
}

/// Render one photo card.
fn view_photo_card<'a>(
    photo: &'a GalleryPhoto,
    thumb: Option<&'a ThumbnailState>,
    pending_delete: bool,
    deleting: bool,
    can_mutate: bool,
) -> Element<'a, Message> {
    let p = palette::current();

    let mut details = column![title_row(photo)].spacing(6);

    if let Some(notes) = photo.notes.as_deref() {
        details = details.push(text(truncate(notes, 90)).size(12).color(p.text_secondary));
    }

    let footer: Element<'a, Message> = if pending_delete {
        confirm_strip(photo)
    } else if deleting {
        text("Removing...").size(12).color(p.text_muted).into()
    } else {
        action_row(photo, can_mutate)
    };

    details = details.push(footer);

    container(column![thumbnail(photo, thumb), details.padding(12)])
        .width(Length::Fill)
        .style(widgets::card_style)
        .into()
}

/// Thumbnail area of a card.
fn thumbnail<'a>(
    photo: &'a GalleryPhoto,
    thumb: Option<&'a ThumbnailState>,
) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match thumb {
        Some(ThumbnailState::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(THUMB_HEIGHT))
            .into(),
        Some(ThumbnailState::Loading) => text("\u{23F3}").size(28).into(), // hourglass
        _ => text("\u{1F5BC}").size(28).into(),                            // framed picture
    };

    container(inner)
        .width(Length::Fill)
        .height(Length::Fixed(THUMB_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .clip(true)
        .style(widgets::thumb_frame_style)
        .into()
}

/// Title and category badge.
fn title_row(photo: &GalleryPhoto) -> Element<'_, Message> {
    let p = palette::current();

    let title = text(truncate(&photo.title, 40))
        .size(15)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .color(p.text_primary)
        .width(Length::Fill);

    let mut content = row![title].spacing(8).align_y(Alignment::Center);

    if let Some(category) = photo.category.as_deref() {
        content = content.push(
            container(text(truncate(category, 18)).size(11))
                .padding([2, 10])
                .style(widgets::category_badge_style),
        );
    }

    content.into()
}

/// Date plus open and delete controls.
fn action_row(photo: &GalleryPhoto, can_mutate: bool) -> Element<'_, Message> {
    let p = palette::current();

    let taken = text(
        photo
            .created_at
            .map(|ts| ts.with_timezone(&chrono::Local).format("%b %d, %Y").to_string())
            .unwrap_or_default(),
    )
    .size(11)
    .color(p.text_muted);

    let open = button(text("\u{2197}").size(13)) // north east arrow
        .on_press_maybe(
            photo
                .image_url
                .as_ref()
                .map(|url| Message::OpenImage(url.clone())),
        )
        .padding([4, 8])
        .style(widgets::ghost_button_style);

    let delete = button(text("\u{1F5D1}").size(13).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.danger),
        }
    }))
    .on_press_maybe(can_mutate.then(|| Message::RequestDelete(photo.id.clone())))
    .padding([4, 8])
    .style(widgets::ghost_button_style);

    row![taken, Space::new().width(Length::Fill), open, delete]
        .spacing(4)
        .align_y(Alignment::Center)
        .into()
}

/// Inline prompt shown before a delete goes out.
fn confirm_strip(photo: &GalleryPhoto) -> Element<'_, Message> {
    let p = palette::current();

    let prompt = text("Delete this photo?").size(12).color(p.danger);

    let cancel = button(text("Cancel").size(12))
        .on_press(Message::CancelDelete)
        .padding([4, 10])
        .style(widgets::secondary_button_style);

    let confirm = button(text("Delete").size(12))
        .on_press(Message::ConfirmDelete(photo.id.clone()))
        .padding([4, 10])
        .style(widgets::danger_button_style);

    container(
        row![prompt, Space::new().width(Length::Fill), cancel, confirm]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding(8)
    .style(|_theme| {
        let p = palette::current();
        container::Style {
            background: Some(Background::Color(p.danger_soft)),
            border: Border {
                color: p.danger,
                width: 1.0,
                radius: widgets::radius::MEDIUM.into(),
            },
            ..Default::default()
        }
    })
    .into()
}

/// Centered glyph and caption for loading and empty states.
fn status_block(glyph: &str, caption: &str) -> Element<'static, Message> {
    container(
        column![
            text(glyph.to_string()).size(48),
            text(caption.to_string()).size(16).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            }),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(48)
    .center_x(Length::Fill)
    .into()
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
