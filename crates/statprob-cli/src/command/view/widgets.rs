use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Rect},
    style::{Color, Modifier, Style, Stylize as _},
    symbols::{Marker, merge::MergeStrategy},
    widgets::{
        Axis, Bar, BarChart, Block, Cell, Chart, Dataset, GraphType, List, ListItem, ListState,
        Row, StatefulWidget, Table, Widget,
    },
};
use statprob_stats::distribution::{DistributionRow, DistributionTable};
use statprob_survey::{
    context::{SegmentView, SurveyContext},
    segment::Segment,
};

pub(super) struct SegmentSelector<'a> {
    pub context: &'a SurveyContext,
    pub selected: usize,
}

impl Widget for SegmentSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let items = Segment::ALL
            .iter()
            .zip(1..)
            .map(|(&segment, key)| {
                let total = self.context.total(segment);
                let content = if total == 0 {
                    format!("{key}: {} (no data)", segment.label())
                } else {
                    format!("{key}: {} (n = {total})", segment.label())
                };
                ListItem::new(content)
            })
            .collect::<Vec<_>>();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .title("Segments")
                    .merge_borders(MergeStrategy::Exact),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

pub(super) struct DistributionTableView<'a, 'b> {
    pub view: &'a SegmentView<'b>,
}

impl Widget for DistributionTableView<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let header = Row::new(["Show", "Freq", "PDF", "CDF", "%"]).bold();
        let rows = self.view.table.iter().map(|row| {
            Row::new([
                Cell::from(row.label.clone()),
                Cell::from(format!("{:>4}", row.frequency)),
                Cell::from(row.pdf_trace.clone()),
                Cell::from(row.cdf_trace.clone()),
                Cell::from(format!("{:>6.2}", row.percentage)),
            ])
        });
        let widths = [
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Length(16),
            Constraint::Length(26),
            Constraint::Length(6),
        ];

        let table = Table::new(rows, widths).header(header).block(
            Block::bordered()
                .merge_borders(MergeStrategy::Exact)
                .title(format!("{} (n = {})", self.view.label, self.view.total)),
        );

        Widget::render(table, area, buf);
    }
}

pub(super) struct FrequencyBars<'a> {
    pub table: &'a DistributionTable,
}

impl Widget for FrequencyBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let chart = BarChart::new(
            self.table
                .iter()
                .map(|row| {
                    Bar::with_label(
                        row.label.clone(),
                        u64::try_from(row.frequency).unwrap_or(u64::MAX),
                    )
                    .text_value(format!("{}", row.frequency))
                })
                .collect::<Vec<_>>(),
        )
        .block(
            Block::bordered()
                .merge_borders(MergeStrategy::Exact)
                .title("Frequency"),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0);

        Widget::render(chart, area, buf);
    }
}

/// Show names longer than this are cut on chart axes.
const AXIS_LABEL_CHARS: usize = 8;

fn axis_label(label: &str) -> String {
    label.chars().take(AXIS_LABEL_CHARS).collect()
}

/// Line chart of one table column, one point per row, with the show names
/// on the x axis in table order.
pub(super) struct RowLineChart<'a> {
    pub label: &'a str,
    pub table: &'a DistributionTable,
    pub value: fn(&DistributionRow) -> f64,
    pub y_max: f64,
    pub y_decimals: usize,
    pub color: Color,
}

impl Widget for RowLineChart<'_> {
    #[expect(clippy::cast_precision_loss)]
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let data = self
            .table
            .iter()
            .enumerate()
            .map(|(i, row)| (i as f64, (self.value)(row)))
            .collect::<Vec<_>>();
        let x_max = self.table.len().saturating_sub(1).max(1) as f64;
        let y_max = if self.y_max > 0.0 { self.y_max } else { 1.0 };
        let decimals = self.y_decimals;

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.color))
            .data(&data);
        let x_axis = Axis::default()
            .bounds([0.0, x_max])
            .labels(self.table.iter().map(|row| axis_label(&row.label)));
        let y_axis = Axis::default().bounds([0.0, y_max]).labels([
            format!("{:.decimals$}", 0.0),
            format!("{:.decimals$}", y_max / 2.0),
            format!("{y_max:.decimals$}"),
        ]);
        let chart = Chart::new(vec![dataset])
            .block(
                Block::bordered()
                    .merge_borders(MergeStrategy::Exact)
                    .title(self.label),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);

        Widget::render(chart, area, buf);
    }
}
