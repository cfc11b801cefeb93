//! Portfolio TUI Library
//!
//! Exposes modules for testing

pub mod config;
pub mod content;
pub mod logic;
pub mod model;
pub mod relay;
pub mod services;

// Shared enums used by both the model and the renderers
// These are available at crate:: level

/// Two-valued colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Flip between dark and light (toggling twice is the identity)
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Page sections, in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,     // Hero + typewriter
    Reactor,  // Arc reactor widget (no anchor)
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Reactor,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Anchor id used by the navigation bar, if the section has one
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Section::Home => Some("home"),
            Section::Reactor => None,
            Section::About => Some("about"),
            Section::Skills => Some("skills"),
            Section::Projects => Some("projects"),
            Section::Contact => Some("contact"),
        }
    }

    /// Label shown in the navigation bar
    pub fn as_str(&self) -> &str {
        match self {
            Section::Home => "Home",
            Section::Reactor => "Reactor",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        Section::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or(0)
    }
}
