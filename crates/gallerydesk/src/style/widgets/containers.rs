//! Container style functions.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Header bar style - surface with a subtle bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Card style - upload form and photo cards.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Recessed well behind thumbnails and previews.
pub fn thumb_frame_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Category badge on photo cards.
pub fn category_badge_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.primary_soft)),
        text_color: Some(p.primary_dark),
        border: Border {
            color: p.primary_soft,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Banner shown while the backend is unreachable.
pub fn offline_banner_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.warning_soft)),
        text_color: Some(p.warning),
        border: Border {
            color: p.warning,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Toast surface for success notices.
pub fn toast_success_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.success_soft)),
        text_color: Some(p.success),
        border: Border {
            color: p.success,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::medium(),
        ..Default::default()
    }
}

/// Toast surface for error notices.
pub fn toast_error_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.danger_soft)),
        text_color: Some(p.danger),
        border: Border {
            color: p.danger,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::medium(),
        ..Default::default()
    }
}

/// Toast surface for neutral notices.
pub fn toast_info_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        text_color: Some(p.text_primary),
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::medium(),
        ..Default::default()
    }
}
