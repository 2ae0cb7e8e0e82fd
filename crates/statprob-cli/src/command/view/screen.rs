use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect, Spacing},
    style::{Color, Style},
    symbols::merge::MergeStrategy,
    text::Text,
    widgets::{Block, Paragraph},
};
use statprob_survey::{context::SurveyContext, segment::Segment};

use super::widgets::{DistributionTableView, FrequencyBars, RowLineChart, SegmentSelector};
use crate::tui::App;

/// Segment selector next to the table and charts of the selected segment.
#[derive(Debug)]
pub(crate) struct DistributionScreen {
    context: SurveyContext,
    selected: usize,
    should_exit: bool,
}

impl DistributionScreen {
    pub(crate) fn new(context: SurveyContext) -> Self {
        Self {
            context,
            selected: 0,
            should_exit: false,
        }
    }

    pub(crate) fn selected_segment(&self) -> Segment {
        Segment::ALL[self.selected]
    }

    fn select_previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(Segment::ALL.len() - 1);
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Segment::ALL.len();
    }

    #[expect(clippy::cast_precision_loss)]
    fn draw_segment(&self, frame: &mut Frame, area: Rect) {
        let segment = self.selected_segment();
        let view = match self.context.segment(segment) {
            Ok(view) => view,
            Err(err) => {
                let message = Paragraph::new(format!("{err}"))
                    .style(Style::default().fg(Color::Red))
                    .centered()
                    .block(
                        Block::bordered()
                            .title(segment.label())
                            .merge_borders(MergeStrategy::Exact),
                    );
                frame.render_widget(message, area);
                return;
            }
        };

        // borders(2) + header(1) + rows
        let table_height = u16::try_from(view.table.len() + 3).unwrap_or(u16::MAX);
        let [table_pane, chart_area] =
            Layout::vertical([Constraint::Length(table_height), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(area);
        let [upper_charts, lower_charts] =
            Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(chart_area);
        let [bars_pane, frequency_pane] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(upper_charts);
        let [pdf_pane, cdf_pane] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .spacing(Spacing::Overlap(1))
            .areas(lower_charts);

        let max_frequency = view.table.iter().map(|row| row.frequency).max().unwrap_or(0);

        frame.render_widget(DistributionTableView { view: &view }, table_pane);
        frame.render_widget(FrequencyBars { table: view.table }, bars_pane);
        frame.render_widget(
            RowLineChart {
                label: "Frequency (line)",
                table: view.table,
                value: |row| row.frequency as f64,
                y_max: max_frequency as f64,
                y_decimals: 0,
                color: Color::Magenta,
            },
            frequency_pane,
        );
        frame.render_widget(
            RowLineChart {
                label: "PDF",
                table: view.table,
                value: |row| row.pdf,
                y_max: 1.0,
                y_decimals: 2,
                color: Color::Cyan,
            },
            pdf_pane,
        );
        frame.render_widget(
            RowLineChart {
                label: "CDF",
                table: view.table,
                value: |row| row.cdf,
                y_max: 1.0,
                y_decimals: 2,
                color: Color::Green,
            },
            cdf_pane,
        );
    }
}

impl App for DistributionScreen {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(event) = event.as_key_event() else {
            return;
        };
        if event.kind != KeyEventKind::Press {
            return;
        }
        match event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char(c) => {
                if let Some(index) = "123".find(c) {
                    self.selected = index;
                }
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        // Layout: main area + help line at bottom
        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let [selector_pane, segment_area] =
            Layout::horizontal([Constraint::Length(28), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(main_area);

        let selector = SegmentSelector {
            context: &self.context,
            selected: self.selected,
        };
        frame.render_widget(selector, selector_pane);
        self.draw_segment(frame, segment_area);

        let help_text = Text::from(format!(
            "↑/↓: Select | 1-3: Jump | zero categories: {} | q/Esc: Quit",
            self.context.policy()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .centered();
        frame.render_widget(help_text, help_area);
    }
}
