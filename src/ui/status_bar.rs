use crate::app::state::{AppState, FocusPanel};
use crate::session::SessionSnapshot;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, snap: &SessionSnapshot) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.session_name),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    // Toast takes priority over the regular status text
    let status_text = match &state.toast {
        Some(toast) => format!("{} {}", state.caps.glyph("🔔", "!"), toast.text),
        None => state.status_line(snap.counter, snap.turns.len()),
    };
    parts.push(Span::styled(format!(" {} ", status_text), Theme::status_bar()));

    if state.progress.running {
        parts.push(Span::styled(
            format!(" | task {}% ", state.progress.pct),
            Style::default().fg(Color::Yellow).bg(Color::DarkGray),
        ));
    }

    let focus_name = match state.focus {
        FocusPanel::Content => "CONTENT",
        FocusPanel::ChatInput => "INPUT",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
