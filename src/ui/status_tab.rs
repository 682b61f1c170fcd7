use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Status & Feedback ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if state.focus == FocusPanel::Content {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(inner);

    render_actions(frame, chunks[0], state);
    render_feedback(frame, chunks[1], state);
}

fn render_actions(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in StatusRow::ALL.iter().enumerate() {
        let selected = i == state.status_selected;
        let marker = if selected {
            state.caps.glyph("❯ ", "> ")
        } else {
            "  "
        };
        let style = if selected {
            Theme::selected_row()
        } else {
            Theme::text()
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Theme::accent()),
            Span::styled(row.label().to_string(), style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    // Progress demo gauge
    if state.progress.running || state.progress.pct > 0 {
        let label = if state.progress.running {
            format!("Progress: {}%", state.progress.pct)
        } else {
            "All done!".to_string()
        };
        let gauge = Gauge::default()
            .gauge_style(Theme::gauge())
            .ratio(f64::from(state.progress.pct) / 100.0)
            .label(label);
        frame.render_widget(gauge, chunks[1]);
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Messages ")
        .title_style(Theme::label())
        .borders(Borders::LEFT)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.feedback.is_empty() {
        let empty = Paragraph::new("No messages yet. Activate a row on the left.")
            .style(Theme::text_muted());
        frame.render_widget(empty, inner);
        return;
    }

    // Newest at the bottom, like a log
    let available = inner.height as usize;
    let start = state.feedback.len().saturating_sub(available);
    let lines: Vec<Line> = state.feedback[start..]
        .iter()
        .map(format_feedback_line)
        .collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn format_feedback_line(fb: &Feedback) -> Line<'_> {
    let ts = Span::styled(format!("[{}] ", fb.timestamp), Theme::timestamp());
    let (tag, style) = match fb.kind {
        FeedbackKind::Success => ("ok ", Theme::success_message()),
        FeedbackKind::Info => ("inf", Theme::info_message()),
        FeedbackKind::Warning => ("wrn", Theme::warning_message()),
        FeedbackKind::Error => ("err", Theme::error_message()),
    };
    Line::from(vec![
        ts,
        Span::styled(format!("{} ", tag), style),
        Span::styled(fb.text.as_str(), style),
    ])
}
