//! Integration tests for the shared interaction state
//!
//! Theme toggling, pointer tracking and the arc reactor's one-shot
//! activation window.

use std::time::{Duration, Instant};

use foliotui::logic::theme::{palette, reactor_core, section_palette};
use foliotui::logic::tilt;
use foliotui::model::{Model, PointerPosition, Viewport};
use foliotui::{Section, ThemeMode};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn model(now: Instant) -> Model {
    let mut model = Model::new(
        vec!["abc".to_string()],
        Viewport { width: 100, height: 40 },
        now,
    )
    .unwrap();
    model.mount(now);
    model
}

/// Test: toggling twice returns to the starting theme
#[test]
fn test_theme_toggle_is_involution() {
    let mut model = model(Instant::now());
    assert_eq!(model.interaction.theme, ThemeMode::Dark);

    model.toggle_theme();
    assert_eq!(model.interaction.theme, ThemeMode::Light);
    model.toggle_theme();
    assert_eq!(model.interaction.theme, ThemeMode::Dark);
}

/// Test: every section's colours differ between the two themes
#[test]
fn test_every_section_palette_differs_between_themes() {
    for section in Section::ALL {
        let dark = section_palette(ThemeMode::Dark, section);
        let light = section_palette(ThemeMode::Light, section);
        assert_ne!(dark.background, light.background, "{:?} background", section);
        assert_ne!(dark.text, light.text, "{:?} text", section);
        assert_ne!(dark.accent, light.accent, "{:?} accent", section);
    }
    assert_ne!(palette(ThemeMode::Dark).input_bg, palette(ThemeMode::Light).input_bg);
}

/// Test: the background layer only shows in the dark theme
#[test]
fn test_background_only_in_dark_theme() {
    let mut model = model(Instant::now());
    assert!(model.interaction.show_background());
    model.toggle_theme();
    assert!(!model.interaction.show_background());
}

/// Test: pointer moves are stored exactly as reported
#[test]
fn test_pointer_position_is_stored_verbatim() {
    let mut model = model(Instant::now());

    assert!(model.interaction.pointer_moved(17, 3));
    assert_eq!(model.interaction.pointer, PointerPosition { x: 17, y: 3 });

    // Outside the viewport is not clamped either
    model.interaction.pointer_moved(500, 90);
    assert_eq!(model.interaction.pointer, PointerPosition { x: 500, y: 90 });

    // Same position again is not a change
    assert!(!model.interaction.pointer_moved(500, 90));
}

/// Test: normalization is relative to the current viewport
#[test]
fn test_tilt_follows_normalized_pointer() {
    let mut model = model(Instant::now());
    model.interaction.pointer_moved(50, 20);
    assert_eq!(model.interaction.normalized(), (0.5, 0.5));
    let centred = model.interaction.tilt();
    assert_eq!(centred, tilt::perspective(0.5, 0.5));

    model.interaction.resized(200, 40);
    assert_eq!(model.interaction.normalized(), (0.25, 0.5));
    assert!(model.interaction.tilt().rotate_y_deg < 0.0);

    // Dots move towards the pointer relative to their anchors
    let offsets = model.interaction.dot_offsets();
    for (offset, anchor) in offsets.iter().zip(tilt::DOT_ANCHORS) {
        assert_eq!(*offset, tilt::dot_offset(0.25, 0.5, anchor));
    }
}

/// Test: pointer events are dropped once tracking stops
#[test]
fn test_pointer_ignored_after_teardown() {
    let mut model = model(Instant::now());
    model.interaction.pointer_moved(10, 10);
    model.teardown();

    assert!(!model.interaction.pointer_moved(20, 20));
    assert_eq!(model.interaction.pointer, PointerPosition { x: 10, y: 10 });
}

/// Test: activation sets the flag at once and clears it after exactly 500 ms
#[test]
fn test_reactor_activation_window() {
    let start = Instant::now();
    let mut model = model(start);
    assert!(!model.reactor.is_activated());

    model.reactor.activate(start);
    assert!(model.reactor.is_activated());

    model.tick(start + ms(499));
    assert!(model.reactor.is_activated());
    model.tick(start + ms(500));
    assert!(!model.reactor.is_activated());
}

/// Test: retriggering restarts the window instead of stacking timers
#[test]
fn test_reactor_retrigger_restarts_window() {
    let start = Instant::now();
    let mut model = model(start);

    model.reactor.activate(start);
    model.tick(start + ms(300));
    model.reactor.activate(start + ms(300));

    // The first activation's deadline has no effect
    model.tick(start + ms(500));
    assert!(model.reactor.is_activated());
    model.tick(start + ms(799));
    assert!(model.reactor.is_activated());
    model.tick(start + ms(800));
    assert!(!model.reactor.is_activated());

    // And nothing turns it back on
    model.tick(start + ms(2000));
    assert!(!model.reactor.is_activated());
}

/// Test: the activated core renders white in both themes
#[test]
fn test_activated_core_colour() {
    assert_eq!(
        reactor_core(ThemeMode::Dark, true),
        reactor_core(ThemeMode::Light, true)
    );
    assert_ne!(
        reactor_core(ThemeMode::Dark, false),
        reactor_core(ThemeMode::Light, false)
    );
}
