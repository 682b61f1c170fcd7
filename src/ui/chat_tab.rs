use crate::app::state::{AppState, FocusPanel};
use crate::session::{Role, SessionSnapshot, Turn};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, snap: &SessionSnapshot) {
    let focused = state.focus == FocusPanel::Content;
    let block = Block::default()
        .title(" Chat (echo) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let available_height = inner.height as usize;
    let total = snap.turns.len();

    // Compute visible range with scroll offset (0 = pinned to bottom)
    let end = total.saturating_sub(state.chat_scroll.min(total));
    let start = end.saturating_sub(available_height);

    let lines: Vec<Line> = snap.turns[start..end]
        .iter()
        .map(|turn| format_turn(turn, &state.session_name))
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);

    // Scrollbar
    if total > available_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(available_height)).position(start);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn format_turn<'a>(turn: &'a Turn, session_name: &str) -> Line<'a> {
    let ts = Span::styled(format!("[{}] ", turn.timestamp), Theme::timestamp());
    let (sender, style) = match turn.role {
        Role::User => (format!("<{}> ", session_name), Theme::user_turn()),
        Role::Assistant => (format!("<{}> ", turn.role.label()), Theme::echo_turn()),
    };
    Line::from(vec![
        ts,
        Span::styled(sender, style),
        Span::styled(turn.content.as_str(), Theme::text()),
    ])
}
