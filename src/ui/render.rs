use crate::App;
use ratatui::{
    style::{Modifier, Style},
    widgets::Block,
    Frame,
};
use std::time::Instant;

use super::{
    background, contact, header, hero,
    hit::HitMap,
    layout, legend, reactor, sections, toast,
};
use foliotui::logic::formatting::format_clock;
use foliotui::logic::reveal::{self, slide_rows};
use foliotui::logic::theme;
use foliotui::model::Focus;
use foliotui::Section;

/// Rows a section slides down by at the start of its reveal
const SLIDE_ROWS: u16 = 3;

/// Status text for the right side of the legend
fn hud_text(app: &App) -> String {
    let mut hud = format!(
        "{} · {}",
        format_clock(&chrono::Local::now()),
        app.model.interaction.theme.as_str()
    );
    if app.model.contact.in_flight() > 0 {
        hud.push_str(" · ⇡ transmitting");
    }
    if app.placeholder_relay {
        hud.push_str(" · relay not configured");
    }
    hud
}

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let now = Instant::now();
    let size = f.area();
    let mut hits = HitMap::default();

    let model = &app.model;
    let mode = model.interaction.theme;
    let section = model.current_section();
    let palette = theme::section_palette(mode, section);
    let elapsed = model.elapsed(now);

    f.render_widget(Block::default().style(Style::default().bg(palette.background)), size);
    if model.interaction.show_background() {
        background::render_background(f, size, &model.interaction);
    }

    let layout_info = layout::calculate_layout(size, legend::calculate_legend_height(model.ui.show_help));

    header::render_header(f, layout_info.header_area, mode, section, model.ui.focus, &mut hits);

    // Section slides in (and stays dim) while its reveal runs
    let progress = model.navigation.reveal_progress(section, now);
    let revealing = reveal::is_animating(progress);
    let content = layout::slide_down(layout_info.content_area, slide_rows(progress, SLIDE_ROWS));
    let since_reveal = model.navigation.time_since_reveal(section, now);

    match section {
        Section::Home => hero::render_hero(
            f,
            content,
            &palette,
            &model.hero,
            model.ui.focus,
            elapsed,
            revealing,
            &mut hits,
        ),
        Section::Reactor => reactor::render_reactor(
            f,
            content,
            mode,
            &palette,
            model.reactor.is_activated(),
            model.ui.focus == Some(Focus::Reactor),
            elapsed,
            &mut hits,
        ),
        Section::About => sections::render_about(f, content, &palette),
        Section::Skills => sections::render_skills(f, content, &palette, since_reveal),
        Section::Projects => sections::render_projects(
            f,
            content,
            &palette,
            since_reveal,
            model.interaction.pointer,
        ),
        Section::Contact => {
            contact::render_contact(f, content, &palette, &model.contact, model.ui.focus, &mut hits)
        }
    }

    if revealing && section != Section::Home {
        f.buffer_mut()
            .set_style(content, Style::default().add_modifier(Modifier::DIM));
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        &palette,
        model.ui.editing_field().is_some(),
        model.ui.show_help,
        &hud_text(app),
    );

    if let Some(message) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }

    app.hit_map = hits;
}
