// src/ui.rs
use iced::widget::{button, container};
use iced::{Background, Color, Theme};
use once_cell::sync::Lazy;

pub struct Styles {
    pub bg: Color,
    pub fg: Color,
    pub prompt_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub button_hover_bg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub cell_bg: Color,
    pub grid: Color,
    pub dialog_bg: Color,
}

pub static THEME: Lazy<Styles> = Lazy::new(|| Styles {
    bg: Color::from_rgb(0.9608, 0.9608, 0.9608), // #f5f5f5
    fg: Color::from_rgb(0.0, 0.0, 0.0),
    prompt_fg: Color::from_rgb(0.3333, 0.3333, 0.3333), // #555
    button_bg: Color::from_rgb(0.3843, 0.0, 0.9333),    // #6200ee
    button_fg: Color::from_rgb(1.0, 1.0, 1.0),
    button_hover_bg: Color::from_rgb(0.2157, 0.0, 0.7020), // #3700b3
    header_bg: Color::from_rgb(0.9490, 0.9490, 0.9490),    // #f2f2f2
    header_fg: Color::from_rgb(0.0, 0.0, 0.0),
    cell_bg: Color::from_rgb(1.0, 1.0, 1.0),
    grid: Color::from_rgb(0.8667, 0.8667, 0.8667), // #ddd
    dialog_bg: Color::from_rgb(1.0, 1.0, 1.0),
});

pub struct ContainerStyle {
    pub bg: Color,
    pub border: Option<Color>,
}

impl ContainerStyle {
    pub fn filled(bg: Color) -> Self {
        ContainerStyle { bg, border: None }
    }

    pub fn cell(bg: Color, border: Color) -> Self {
        ContainerStyle {
            bg,
            border: Some(border),
        }
    }
}

impl container::StyleSheet for ContainerStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: None,
            background: Some(Background::Color(self.bg)),
            border_radius: 0.0.into(),
            border_width: if self.border.is_some() { 1.0 } else { 0.0 },
            border_color: self.border.unwrap_or(Color::TRANSPARENT),
        }
    }
}

pub struct ButtonStyle {
    pub bg: Color,
    pub fg: Color,
    pub hover_bg: Color,
}

impl ButtonStyle {
    pub fn primary() -> Self {
        ButtonStyle {
            bg: THEME.button_bg,
            fg: THEME.button_fg,
            hover_bg: THEME.button_hover_bg,
        }
    }
}

impl button::StyleSheet for ButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.bg)),
            border_radius: 5.0.into(),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            text_color: self.fg,
            ..button::Appearance::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.hover_bg)),
            ..self.active(style)
        }
    }
}
