use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::ChatInput;
    let block = Block::default()
        .title(" Message ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = &state.chat_input.text;
    let prompt = state.caps.glyph("❯ ", "> ");

    if focused {
        let line = Line::from(vec![
            Span::styled(prompt, Theme::accent()),
            Span::styled(input_text.as_str(), Theme::input_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Cursor column: prompt width + display width of the text before it
        let before = &input_text[..state.chat_input.cursor];
        let cursor_x = inner.x + prompt.width() as u16 + before.width() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    } else if input_text.is_empty() {
        let hint = Paragraph::new("Type a message (Enter or i to focus)").style(Theme::text_muted());
        frame.render_widget(hint, inner);
    } else {
        let paragraph = Paragraph::new(input_text.as_str()).style(Theme::input_text());
        frame.render_widget(paragraph, inner);
    }
}
