use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub sidebar: Option<Rect>,
    pub tab_bar: Rect,
    pub content: Rect,
    pub input_box: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, with_sidebar: bool, with_input: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content_zone = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: sidebar | gallery (sidebar dropped on narrow terminals)
    let (sidebar, gallery) = if with_sidebar {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints([
                Constraint::Length(24), // Session panel
                Constraint::Min(40),    // Gallery
            ])
            .split(content_zone);
        (Some(h_chunks[0]), h_chunks[1])
    } else {
        (None, content_zone)
    };

    // Gallery: tab bar | tab content | (chat input)
    let (tab_bar, content, input_box) = if with_input {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Min(5),    // Tab content
                Constraint::Length(3), // Chat input
            ])
            .split(gallery);
        (chunks[0], chunks[1], Some(chunks[2]))
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Min(5),    // Tab content
            ])
            .split(gallery);
        (chunks[0], chunks[1], None)
    };

    AppLayout {
        sidebar,
        tab_bar,
        content,
        input_box,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_dropped_when_requested() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = compute_layout(area, false, false);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 100);
    }

    #[test]
    fn test_input_box_only_with_input() {
        let area = Rect::new(0, 0, 100, 30);
        assert!(compute_layout(area, true, true).input_box.is_some());
        assert!(compute_layout(area, true, false).input_box.is_none());
    }

    #[test]
    fn test_status_bar_is_last_row() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = compute_layout(area, true, true);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.status_bar.height, 1);
    }
}
