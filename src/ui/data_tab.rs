use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Sparkline, Table,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Data & Display ")
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
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Metrics
            Constraint::Min(5),    // People table
            Constraint::Length(8), // Array + chart
        ])
        .split(inner);

    render_metrics(frame, chunks[0], state);
    render_people(frame, chunks[1], state);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    render_array(frame, bottom[0], state);
    render_chart(frame, bottom[1], state);
}

fn render_metrics(frame: &mut Frame, area: Rect, state: &AppState) {
    let metrics = &state.gallery.metrics;
    if metrics.is_empty() {
        return;
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, metrics.len() as u32);
            metrics.len()
        ])
        .split(area);

    for (metric, col) in metrics.iter().zip(cols.iter()) {
        let delta_style = if metric.up {
            Theme::metric_up()
        } else {
            Theme::metric_down()
        };
        let arrow = if metric.up {
            state.caps.glyph("▲", "^")
        } else {
            state.caps.glyph("▼", "v")
        };
        let lines = vec![
            Line::from(Span::styled(metric.label, Theme::label())),
            Line::from(vec![
                Span::styled(format!("{} ", metric.value), Theme::metric_value()),
                Span::styled(format!("{} {}", arrow, metric.delta), delta_style),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), *col);
    }
}

fn render_people(frame: &mut Frame, area: Rect, state: &AppState) {
    let table_data = &state.gallery.people;
    let header = Row::new(
        table_data
            .headers
            .iter()
            .map(|h| h.as_str())
            .collect::<Vec<_>>(),
    )
    .style(Theme::table_header());

    let visible = area.height.saturating_sub(2) as usize;
    let rows: Vec<Row> = table_data
        .rows
        .iter()
        .skip(state.data_scroll)
        .take(visible.max(1))
        .map(|r| Row::new(r.iter().map(|c| c.as_str()).collect::<Vec<_>>()))
        .collect();

    let widths = vec![Constraint::Ratio(1, table_data.headers.len().max(1) as u32);
        table_data.headers.len()];
    let title = format!(
        " People ({} rows, {}) ",
        table_data.rows.len(),
        state.gallery.people_source
    );
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .title_style(Theme::label())
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );
    frame.render_widget(table, area);
}

fn render_array(frame: &mut Frame, area: Rect, state: &AppState) {
    let array = &state.gallery.array;
    let cols = array.first().map(|r| r.len()).unwrap_or(0);
    if cols == 0 {
        return;
    }
    let rows: Vec<Row> = array
        .iter()
        .map(|r| {
            Row::new(
                r.iter()
                    .map(|v| format!("{:+.2}", v))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    let widths = vec![Constraint::Length(7); cols];
    let table = Table::new(rows, widths).block(
        Block::default()
            .title(" Random array ")
            .title_style(Theme::label())
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );
    frame.render_widget(table, area);
}

fn render_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let series = &state.gallery.series;
    if series.len() < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(area);

    let (y_min, y_max) = series
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), (_, y)| {
            (lo.min(*y), hi.max(*y))
        });
    let y_pad = ((y_max - y_min) * 0.1).max(0.5);
    let x_max = (series.len() - 1) as f64;

    // Braille marks need a UTF-8 locale; fall back to dots.
    let marker = if state.caps.unicode {
        symbols::Marker::Braille
    } else {
        symbols::Marker::Dot
    };

    let datasets = vec![Dataset::default()
        .name("random walk")
        .marker(marker)
        .graph_type(GraphType::Line)
        .style(Theme::accent())
        .data(series)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Line chart ")
                .title_style(Theme::label())
                .borders(Borders::TOP)
                .border_style(Theme::border()),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled("0", Theme::text_muted()),
                    Span::styled(format!("{}", series.len() - 1), Theme::text_muted()),
                ])
                .style(Theme::border()),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min - y_pad, y_max + y_pad])
                .labels(vec![
                    Span::styled(format!("{:.1}", y_min), Theme::text_muted()),
                    Span::styled(format!("{:.1}", y_max), Theme::text_muted()),
                ])
                .style(Theme::border()),
        );
    frame.render_widget(chart, chunks[0]);

    // Sparkline wants non-negative integers; shift the series up.
    let spark: Vec<u64> = series
        .iter()
        .map(|(_, y)| ((y - y_min) * 10.0).round().max(0.0) as u64)
        .collect();
    let sparkline = Sparkline::default().data(&spark).style(Theme::accent());
    frame.render_widget(sparkline, chunks[1]);
}
