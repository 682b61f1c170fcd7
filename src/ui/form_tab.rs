use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Form ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(if state.focus == FocusPanel::Content {
            Theme::border_focused()
        } else {
            Theme::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "A form groups widgets. Submission applies them in one step.",
            Theme::caption(),
        )),
        Line::from(""),
    ];

    for (i, row) in FormRow::ALL.iter().enumerate() {
        let selected = i == state.form_selected;
        lines.push(form_line(state, *row, selected));
    }

    lines.push(Line::from(""));
    match &state.form.last_submission {
        Some(summary) => lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", state.caps.glyph("✔", "OK")),
                Theme::success_message(),
            ),
            Span::styled(summary.clone(), Theme::success_message()),
        ])),
        None => lines.push(Line::from(Span::styled(
            "Not submitted yet",
            Theme::text_muted(),
        ))),
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn form_line(state: &AppState, row: FormRow, selected: bool) -> Line<'static> {
    let marker = if selected {
        state.caps.glyph("❯ ", "> ")
    } else {
        "  "
    };
    let label_style = if selected {
        Theme::selected_row()
    } else {
        Theme::label()
    };

    let (label, value) = match row {
        FormRow::Name => {
            let editing = state.editing == Some(EditTarget::FormName);
            let value = if editing {
                format!("{}_", state.form.name)
            } else if state.form.name.is_empty() {
                "(Enter to edit)".to_string()
            } else {
                state.form.name.clone()
            };
            ("First name", value)
        }
        FormRow::Age => ("Age", format!("- {} +", state.form.age)),
        FormRow::Newsletter => (
            "Subscribe to newsletter",
            format!("[{}]", if state.form.newsletter { "x" } else { " " }),
        ),
        FormRow::Submit => ("", "[ Submit form ]".to_string()),
    };

    if label.is_empty() {
        Line::from(vec![
            Span::styled(marker.to_string(), Theme::accent()),
            Span::styled(
                value,
                if selected {
                    Theme::selected_row()
                } else {
                    Theme::accent()
                },
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(marker.to_string(), Theme::accent()),
            Span::styled(format!("{:<24}", label), label_style),
            Span::styled(value, Theme::value()),
        ])
    }
}
