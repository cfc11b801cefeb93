//! Integration tests for section navigation
//!
//! Anchors resolve to sections regardless of which one is showing, and
//! stepping clamps at the first and last section.

use std::time::Instant;

use foliotui::model::{Model, Viewport};
use foliotui::Section;

fn model(now: Instant) -> Model {
    Model::new(
        vec!["abc".to_string()],
        Viewport { width: 100, height: 40 },
        now,
    )
    .unwrap()
}

/// Test: opening at the section already showing is not an error
#[test]
fn test_start_at_home_anchor() {
    let now = Instant::now();
    for anchor in ["home", "#home"] {
        let mut model = model(now);
        assert!(model.jump_to_anchor(anchor, now).is_ok(), "{}", anchor);
        assert_eq!(model.current_section(), Section::Home);
    }
}

/// Test: every section is reachable by its anchor, with or without '#'
#[test]
fn test_every_anchor_resolves() {
    let now = Instant::now();
    for (anchor, section) in [
        ("#about", Section::About),
        ("skills", Section::Skills),
        ("#projects", Section::Projects),
        ("contact", Section::Contact),
    ] {
        let mut model = model(now);
        assert!(model.jump_to_anchor(anchor, now).unwrap(), "{}", anchor);
        assert_eq!(model.current_section(), section);
    }
}

/// Test: an unknown anchor is rejected and leaves the view alone
#[test]
fn test_unknown_anchor_rejected() {
    let now = Instant::now();
    let mut model = model(now);
    let err = model.jump_to_anchor("#nowhere", now).unwrap_err();
    assert_eq!(err.to_string(), "Unknown section: #nowhere");
    assert_eq!(model.current_section(), Section::Home);
}

/// Test: stepping walks the sections in order and stops at the ends
#[test]
fn test_step_through_sections() {
    let now = Instant::now();
    let mut model = model(now);
    assert!(!model.scroll_prev(now));

    let mut visited = vec![model.current_section()];
    while model.scroll_next(now) {
        visited.push(model.current_section());
    }
    assert_eq!(visited, Section::ALL.to_vec());

    assert!(model.scroll_prev(now));
    assert_eq!(model.current_section(), Section::Projects);
}
