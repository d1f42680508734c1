use iced::{widget::button, Background, Color, Theme};

pub const PRIMARY_RED: Color = Color::from_rgb8(0xff, 0x00, 0x00);
pub const BAR_DARK: Color = Color::from_rgb8(0x28, 0x2d, 0x30);
pub const CARD_DARK: Color = Color::from_rgb8(0x28, 0x2d, 0x30);
pub const CARD_LIGHT: Color = Color::from_rgb8(0xfb, 0xfb, 0xfb);
pub const SIDEBAR_BG: Color = Color::from_rgb8(0x02, 0x02, 0x03);
pub const TEXT_DARK: Color = Color::from_rgb8(0x20, 0x25, 0x3a);
pub const TEXT_MUTED: Color = Color::from_rgb8(0x74, 0x79, 0x8c);
pub const GRID_LINE: Color = Color::from_rgb8(0xde, 0xde, 0xde);

pub const NUTRITION_CALORIES_BG: Color = Color::from_rgb8(0xff, 0xec, 0xec);
pub const NUTRITION_PROTEIN_BG: Color = Color::from_rgb8(0xec, 0xf4, 0xff);
pub const NUTRITION_CARBS_BG: Color = Color::from_rgb8(0xfa, 0xf5, 0xe5);
pub const NUTRITION_LIPID_BG: Color = Color::from_rgb8(0xfb, 0xea, 0xef);

pub fn accent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let mut background = PRIMARY_RED;

    if matches!(status, button::Status::Hovered) {
        background.a = 0.85;
    }

    if matches!(status, button::Status::Pressed) {
        background.a = 0.7;
    }

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        ..Default::default()
    }
}

pub fn muted_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let mut background = BAR_DARK;

    if matches!(status, button::Status::Hovered) {
        background.a = 0.85;
    }

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        ..Default::default()
    }
}
