use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(" ", Theme::text_muted())];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == state.tab {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, tab.title()), style));
        if i + 1 < Tab::ALL.len() {
            spans.push(Span::styled(
                format!(" {} ", state.caps.glyph("│", "|")),
                Theme::text_muted(),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
