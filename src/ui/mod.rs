mod chat_tab;
mod data_tab;
mod effects;
mod form_tab;
mod input_box;
mod inputs_tab;
mod layout;
mod sidebar;
mod status_bar;
mod status_tab;
mod tab_bar;
mod theme;

use crate::app::state::{AppState, Tab};
use crate::session::SessionSnapshot;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState, snap: &SessionSnapshot) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.sidebar_visible(), state.tab == Tab::Chat);

    if let Some(sidebar_area) = app_layout.sidebar {
        sidebar::render(frame, sidebar_area, state, snap);
    }
    tab_bar::render(frame, app_layout.tab_bar, state);

    match state.tab {
        Tab::Inputs => inputs_tab::render(frame, app_layout.content, state),
        Tab::Form => form_tab::render(frame, app_layout.content, state),
        Tab::Data => data_tab::render(frame, app_layout.content, state),
        Tab::Status => status_tab::render(frame, app_layout.content, state),
        Tab::Chat => chat_tab::render(frame, app_layout.content, state, snap),
    }

    if let Some(input_area) = app_layout.input_box {
        input_box::render(frame, input_area, state);
    }
    status_bar::render(frame, app_layout.status_bar, state, snap);

    // Celebration overlay draws on top of the tab content
    if let Some(effect) = &state.effect {
        effects::render(frame, app_layout.content, effect, &state.caps);
    }
}
