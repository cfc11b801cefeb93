// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, section, legend)
// - render: Main orchestration function that coordinates all rendering
// - hit: Clickable regions recorded while rendering, consulted by the mouse handler
// - background: Pointer-following grid and dots (dark theme)
// - header: Brand, anchor links, theme toggle
// - hero: Typewriter line and call-to-action
// - reactor: Animated arc reactor
// - sections: About, skills grid, project cards
// - contact: Contact form and status line
// - legend: Renders hotkey legend and HUD
// - toast: Renders toast notifications (brief pop-up messages)

pub mod background;
pub mod contact;
pub mod header;
pub mod hero;
pub mod hit;
pub mod layout;
pub mod legend;
pub mod reactor;
pub mod render;
pub mod sections;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
