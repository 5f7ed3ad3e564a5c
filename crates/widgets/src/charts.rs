use market_dashboard_core::chart::ChartSpec;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::rgb;

/// Draws one market chart. The primary series is solid, reference areas are dimmed dots.
pub fn render_market_chart(spec: &ChartSpec, f: &mut Frame<'_>, area: Rect) {
    let points = (0..spec.series.len())
        .map(|index| spec.points(index))
        .collect::<Vec<_>>();

    let datasets = spec
        .series
        .iter()
        .zip(&points)
        .map(|(series, data)| {
            let style = Style::default().fg(rgb(series.color));
            let (marker, style) = if series.stroke.dashed {
                (Marker::Dot, style.add_modifier(Modifier::DIM))
            } else {
                (Marker::Braille, style.add_modifier(Modifier::BOLD))
            };
            Dataset::default()
                .name(series.label.clone())
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(style)
                .data(data)
        })
        .collect::<Vec<_>>();

    let x_labels = spec
        .x_axis_labels(3)
        .into_iter()
        .map(Span::raw)
        .collect::<Vec<_>>();
    let y_labels = spec
        .y_axis_labels(3)
        .into_iter()
        .map(Span::raw)
        .collect::<Vec<_>>();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(spec.title.clone())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(spec.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(spec.y_bounds())
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// Index the inspect line shows for `spec`; without a cursor it follows the latest point.
pub fn inspect_index(spec: &ChartSpec, cursor: Option<usize>) -> usize {
    let last = spec.len().saturating_sub(1);
    cursor.map_or(last, |index| index.min(last))
}

/// One line per chart with the date and every series value at the cursor.
pub fn render_inspect<'a>(
    specs: impl Iterator<Item = &'a ChartSpec>,
    cursor: Option<usize>,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let lines = specs
        .map(|spec| {
            TextLine::from(Span::styled(
                spec.tooltip_lines(inspect_index(spec, cursor)).join("  ·  "),
                Style::default().fg(Color::Gray),
            ))
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(Text::from(lines)), area);
}
