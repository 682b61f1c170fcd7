use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Basic Input Widgets ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if state.focus == FocusPanel::Content {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, widget) in InputWidget::ALL.iter().enumerate() {
        let selected = i == state.inputs_selected;
        lines.push(widget_line(state, *widget, selected));
    }

    lines.push(Line::from(""));
    lines.push(readout_picks(state));
    lines.push(readout_values(state));
    lines.push(Line::from(Span::styled(
        "Up/Down select, Left/Right adjust, Space/Enter activate",
        Theme::caption(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn widget_line(state: &AppState, widget: InputWidget, selected: bool) -> Line<'static> {
    let w = &state.widgets;
    let caps = &state.caps;
    let marker = if selected { caps.glyph("❯ ", "> ") } else { "  " };
    let label_style = if selected {
        Theme::selected_row()
    } else {
        Theme::label()
    };

    let value = match widget {
        InputWidget::Checkbox => {
            format!("[{}]", if w.checkbox { "x" } else { " " })
        }
        InputWidget::Toggle => {
            if w.toggle {
                format!("{} on", caps.glyph("◉", "(#)"))
            } else {
                format!("{} off", caps.glyph("○", "( )"))
            }
        }
        InputWidget::Radio => RADIO_COLORS
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == w.radio {
                    format!("({}) {}", caps.glyph("•", "*"), c)
                } else {
                    format!("( ) {}", c)
                }
            })
            .collect::<Vec<_>>()
            .join("  "),
        InputWidget::Select => format!("< {} >", FRUITS[w.select]),
        InputWidget::MultiSelect => TOPPINGS
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let mark = if w.multi[i] { "x" } else { " " };
                if i == w.multi_cursor {
                    format!("[{}]{}{}{}", mark, caps.glyph("‹", "<"), t, caps.glyph("›", ">"))
                } else {
                    format!("[{}] {}", mark, t)
                }
            })
            .collect::<Vec<_>>()
            .join("  "),
        InputWidget::Slider => slider_track(w.slider, caps.glyph("█", "#"), caps.glyph("─", "-")),
        InputWidget::SizeSlider => SIZES
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if i == w.size_idx {
                    format!("[{}]", s)
                } else {
                    format!(" {} ", s)
                }
            })
            .collect::<Vec<_>>()
            .join(""),
        InputWidget::Number => format!("- {} +", w.number),
        InputWidget::Text => {
            let editing = state.editing == Some(EditTarget::WidgetText);
            if editing {
                format!("{}_", w.text)
            } else if w.text.is_empty() {
                "(Enter to edit)".to_string()
            } else {
                w.text.clone()
            }
        }
    };

    Line::from(vec![
        Span::styled(marker.to_string(), Theme::accent()),
        Span::styled(format!("{:<22}", widget.label()), label_style),
        Span::styled(value, Theme::value()),
    ])
}

fn slider_track(value: u8, filled: &str, empty: &str) -> String {
    const WIDTH: usize = 20;
    let pos = (value as usize * WIDTH) / 100;
    let mut track = String::new();
    for i in 0..WIDTH {
        track.push_str(if i <= pos { filled } else { empty });
    }
    format!("{} {}", track, value)
}

fn readout_picks(state: &AppState) -> Line<'static> {
    let w = &state.widgets;
    let toppings: Vec<&str> = TOPPINGS
        .iter()
        .zip(w.multi.iter())
        .filter(|(_, on)| **on)
        .map(|(t, _)| *t)
        .collect();
    Line::from(vec![
        Span::styled("You picked: ", Theme::label()),
        Span::styled(
            format!(
                "{}, {}, [{}]",
                RADIO_COLORS[w.radio],
                FRUITS[w.select],
                toppings.join(", ")
            ),
            Theme::text(),
        ),
    ])
}

fn readout_values(state: &AppState) -> Line<'static> {
    let w = &state.widgets;
    Line::from(vec![
        Span::styled("Values: ", Theme::label()),
        Span::styled(
            format!(
                "checkbox={} toggle={} slider={} size={} number={}",
                w.checkbox, w.toggle, w.slider, SIZES[w.size_idx], w.number
            ),
            Theme::text(),
        ),
    ])
}
