//! Theme palettes
//!
//! Pure mapping from `ThemeMode` (and section) to colours. Every renderer
//! reads its colours from here so that one flag drives the whole page.

use ratatui::style::Color;

use crate::{Section, ThemeMode};

// Tailwind shades used by the page
const CYAN_200: Color = Color::Rgb(0xa5, 0xf3, 0xfc);
const CYAN_300: Color = Color::Rgb(0x67, 0xe8, 0xf9);
const CYAN_400: Color = Color::Rgb(0x22, 0xd3, 0xee);
const CYAN_500: Color = Color::Rgb(0x06, 0xb6, 0xd4);
const CYAN_600: Color = Color::Rgb(0x08, 0x91, 0xb2);
const GRAY_100: Color = Color::Rgb(0xf3, 0xf4, 0xf6);
const GRAY_200: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
const GRAY_300: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
const GRAY_700: Color = Color::Rgb(0x37, 0x41, 0x51);
const GRAY_800: Color = Color::Rgb(0x1f, 0x29, 0x37);
const GRAY_900: Color = Color::Rgb(0x11, 0x18, 0x27);
const GRAY_950: Color = Color::Rgb(0x03, 0x07, 0x12);
const RED_400: Color = Color::Rgb(0xf8, 0x71, 0x71);
const RED_600: Color = Color::Rgb(0xdc, 0x26, 0x26);
const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);

/// Colour-defining choices for one themed surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page/section background
    pub background: Color,
    /// Card/panel background
    pub surface: Color,
    /// Body text
    pub text: Color,
    /// Headings, active links, typewriter text
    pub accent: Color,
    /// Filled buttons (background, foreground)
    pub button_bg: Color,
    pub button_fg: Color,
    /// Input borders
    pub border: Color,
    /// Input field background and text
    pub input_bg: Color,
    pub input_fg: Color,
    /// Success / failure status text
    pub success: Color,
    pub failure: Color,
}

/// Base palette for a theme
pub fn palette(theme: ThemeMode) -> Palette {
    match theme {
        ThemeMode::Dark => Palette {
            background: GRAY_950,
            surface: GRAY_900,
            text: GRAY_300,
            accent: CYAN_400,
            button_bg: CYAN_500,
            button_fg: GRAY_900,
            border: CYAN_500,
            input_bg: GRAY_800,
            input_fg: GRAY_300,
            success: CYAN_400,
            failure: RED_400,
        },
        ThemeMode::Light => Palette {
            background: WHITE,
            surface: GRAY_200,
            text: GRAY_700,
            accent: CYAN_600,
            button_bg: CYAN_600,
            button_fg: WHITE,
            border: CYAN_600,
            input_bg: GRAY_100,
            input_fg: GRAY_900,
            success: CYAN_600,
            failure: RED_600,
        },
    }
}

/// Palette for a specific section (sections differ only in background)
pub fn section_palette(theme: ThemeMode, section: Section) -> Palette {
    let base = palette(theme);
    let background = match (theme, section) {
        (ThemeMode::Dark, Section::Home) => GRAY_950,
        (ThemeMode::Dark, Section::Reactor | Section::Projects) => GRAY_950,
        (ThemeMode::Dark, _) => GRAY_900,
        (ThemeMode::Light, Section::Home) => WHITE,
        (ThemeMode::Light, Section::Reactor | Section::Projects) => GRAY_100,
        (ThemeMode::Light, _) => GRAY_200,
    };
    Palette { background, ..base }
}

/// Ring colours of the arc reactor, outermost first
pub fn reactor_rings(theme: ThemeMode) -> [Color; 3] {
    match theme {
        ThemeMode::Dark => [CYAN_500, CYAN_400, CYAN_300],
        ThemeMode::Light => [CYAN_600, CYAN_500, CYAN_400],
    }
}

/// Core colour of the arc reactor
pub fn reactor_core(theme: ThemeMode, activated: bool) -> Color {
    match (theme, activated) {
        (_, true) => WHITE,
        (ThemeMode::Dark, false) => CYAN_200,
        (ThemeMode::Light, false) => CYAN_500,
    }
}

/// Grid line colour for the decorative background (dark theme only)
pub fn grid_color() -> Color {
    Color::Rgb(0x0b, 0x3a, 0x44)
}

/// Colours of the five floating background dots
pub fn dot_colors() -> [Color; 5] {
    [CYAN_400, CYAN_300, CYAN_500, CYAN_200, CYAN_400]
}
