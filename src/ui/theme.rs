use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn caption() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn value() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn selected_row() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn accent() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn metric_value() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn metric_up() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn metric_down() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn success_message() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn info_message() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn warning_message() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn user_turn() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn echo_turn() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn tab_active() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::Black)
    }

    pub fn table_header() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Six-entry tint palette for effect particles on plain terminals.
    pub fn particle_color(tint: u8) -> Color {
        const PALETTE: [Color; 6] = [
            Color::Red,
            Color::Yellow,
            Color::Green,
            Color::Cyan,
            Color::Magenta,
            Color::Blue,
        ];
        PALETTE[tint as usize % PALETTE.len()]
    }
}
