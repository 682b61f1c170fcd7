use crate::app::state::AppState;
use crate::session::SessionSnapshot;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "termgallery";

fn wave_color(col: u16, tick: u64) -> Color {
    let gradient: [(f64, f64, f64); 6] = [
        (80.0, 200.0, 210.0),  // teal
        (100.0, 170.0, 230.0), // blue
        (175.0, 140.0, 220.0), // lavender
        (220.0, 150.0, 180.0), // pink
        (230.0, 180.0, 80.0),  // amber
        (90.0, 210.0, 130.0),  // green
    ];
    let len = gradient.len() as f64;
    let phase = (col as f64 * 0.25 - tick as f64 * 0.1).rem_euclid(len);
    let idx = phase.floor() as usize;
    let frac = phase - phase.floor();
    let (r1, g1, b1) = gradient[idx % gradient.len()];
    let (r2, g2, b2) = gradient[(idx + 1) % gradient.len()];
    Color::Rgb(
        (r1 + (r2 - r1) * frac) as u8,
        (g1 + (g2 - g1) * frac) as u8,
        (b1 + (b2 - b1) * frac) as u8,
    )
}

fn title_line(state: &AppState) -> Line<'static> {
    if state.caps.true_color {
        let spans: Vec<Span> = TITLE
            .chars()
            .enumerate()
            .map(|(c, ch)| {
                Span::styled(
                    ch.to_string(),
                    Style::default()
                        .fg(wave_color(c as u16, state.tick_count))
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        Line::from(spans)
    } else {
        Line::from(Span::styled(TITLE, Theme::title()))
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, snap: &SessionSnapshot) {
    let block = Block::default()
        .title(" Session ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bullet = state.caps.glyph("•", "*");
    let mut lines: Vec<Line> = vec![
        title_line(state),
        Line::from(Span::styled(
            state.session_name.clone(),
            Theme::text_muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Counter value", Theme::label())),
        Line::from(Span::styled(
            format!("  {}", snap.counter),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("  (+ to increment)", Theme::caption())),
        Line::from(""),
        Line::from(Span::styled("Session keys", Theme::label())),
        Line::from(vec![
            Span::styled(format!(" {} ", bullet), Theme::accent()),
            Span::styled("counter", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled(format!(" {} ", bullet), Theme::accent()),
            Span::styled(format!("chat ({} turns)", snap.turns.len()), Theme::text()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Uptime ", Theme::label()),
            Span::styled(state.uptime(), Theme::value()),
        ]),
    ];
    lines.push(Line::from(vec![
        Span::styled("People ", Theme::label()),
        Span::styled(state.gallery.people_source.clone(), Theme::value()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
