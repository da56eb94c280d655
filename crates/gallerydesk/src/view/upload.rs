//! Upload form card.

use iced::widget::{Space, button, column, container, image, row, text, text_input};
use iced::{Alignment, ContentFit, Element, Length};

use crate::message::{Message, UploadMessage};
use crate::model::UploadForm;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Render the upload card shown above the photo grid.
pub fn view_upload_card<'a>(
    form: &'a UploadForm,
    uploading: bool,
    can_upload: bool,
) -> Element<'a, Message> {
    let p = palette::current();

    let title = text("Add Photo").size(16).color(p.text_primary);

    let fields = column![
        labeled_input(
            "Title",
            "Golden hour at the pier",
            &form.draft.title,
            UploadMessage::TitleChanged,
        ),
        labeled_input(
            "Category",
            "Landscape",
            &form.draft.category,
            UploadMessage::CategoryChanged,
        ),
        labeled_input(
            "Notes",
            "Optional description",
            &form.draft.notes,
            UploadMessage::NotesChanged,
        ),
    ]
    .spacing(12)
    .width(Length::Fill);

    let body = row![preview_well(form), fields]
        .spacing(20)
        .align_y(Alignment::Start);

    let file_row = file_picker_row(form, uploading);

    let hint = text("JPEG, PNG, WebP or GIF up to 10 MB.")
        .size(11)
        .color(p.text_muted);

    let submit = button(
        text(if uploading {
            "Uploading..."
        } else {
            "Upload photo"
        })
        .size(14),
    )
    .on_press_maybe(can_upload.then_some(Message::Upload(UploadMessage::Submit)))
    .padding([10, 20])
    .style(widgets::primary_button_style);

    let footer = row![hint, Space::new().width(Length::Fill), submit]
        .spacing(12)
        .align_y(Alignment::Center);

    container(
        column![title, body, file_row, footer]
            .spacing(16)
            .padding(20),
    )
    .width(Length::Fill)
    .style(widgets::card_style)
    .into()
}

/// Preview of the picked file, or a placeholder well.
fn preview_well(form: &UploadForm) -> Element<'_, Message> {
    let inner: Element<'_, Message> = match &form.preview {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(150.0))
            .height(Length::Fixed(150.0))
            .into(),
        None => container(text("\u{1F5BC}").size(34)) // framed picture
            .width(Length::Fixed(150.0))
            .height(Length::Fixed(150.0))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    container(inner)
        .style(widgets::thumb_frame_style)
        .into()
}

/// File picker row: choose button, current selection, clear control.
fn file_picker_row(form: &UploadForm, uploading: bool) -> Element<'_, Message> {
    let p = palette::current();

    let choose = button(text("Choose file").size(13))
        .on_press_maybe((!uploading).then_some(Message::Upload(UploadMessage::PickImage)))
        .padding([8, 14])
        .style(widgets::secondary_button_style);

    let mut picked = row![choose].spacing(12).align_y(Alignment::Center);

    match form.draft.file.as_ref() {
        Some(file) => {
            picked = picked.push(text(file.name.clone()).size(13).color(p.text_secondary));
            picked = picked.push(
                button(text("\u{2715}").size(12)) // multiplication x
                    .on_press_maybe((!uploading).then_some(Message::Upload(UploadMessage::ClearImage)))
                    .padding([4, 8])
                    .style(widgets::ghost_button_style),
            );
        }
        None => {
            picked = picked.push(text("No file selected").size(13).color(p.text_muted));
        }
    }

    picked.into()
}

/// Create a labeled text input.
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> UploadMessage + 'a,
) -> Element<'a, Message> {
    let p = palette::current();
    column![
        text(label).size(12).color(p.text_secondary),
        text_input(placeholder, value)
            .on_input(move |s| Message::Upload(on_input(s)))
            .padding(10)
            .style(widgets::form_input_style),
    ]
    .spacing(4)
    .into()
}
