//! Distribution table display
//!
//! Prints the frequency, PDF, CDF and percentage columns of one segment,
//! followed by the percentage summary.

use std::io::{self, Write};

use anyhow::Context;
use statprob_stats::distribution::DistributionRow;
use statprob_survey::context::{SegmentView, SurveyContext};

use crate::util::SurveyArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TableArg {
    #[command(flatten)]
    pub(crate) survey: SurveyArg,

    /// Segment to display (overall, male or female)
    #[arg(long, short, default_value = "overall")]
    pub(crate) segment: String,
}

pub(crate) fn run(arg: &TableArg) -> anyhow::Result<()> {
    let context = arg.survey.load_context()?;
    write_segment(io::stdout().lock(), &context, &arg.segment)
}

fn write_segment<W>(mut writer: W, context: &SurveyContext, choice: &str) -> anyhow::Result<()>
where
    W: Write,
{
    let view = context
        .select(choice)
        .with_context(|| format!("Cannot show segment '{choice}'"))?;

    write_distribution_table(&mut writer, &view)
        .and_then(|()| writeln!(writer))
        .and_then(|()| write_percentage_summary(&mut writer, &view))
        .and_then(|()| writer.flush())
        .context("Failed to write distribution table")
}

const LABEL_WIDTH: usize = 28;

/// label(28) + frequency(9) + pdf(18) + cdf(28) + percentage(10) + spaces(4)
const TABLE_WIDTH: usize = 97;

fn write_distribution_table<W>(writer: &mut W, view: &SegmentView<'_>) -> io::Result<()>
where
    W: Write,
{
    let width = LABEL_WIDTH;
    writeln!(writer, "Distribution for: {} (n = {})", view.label, view.total)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "  {:<width$} {:>9} {:<18} {:<28} {:>10}",
        "Show", "Frequency", "PDF", "CDF", "Percent",
    )?;
    writeln!(writer, "  {}", "-".repeat(TABLE_WIDTH))?;
    for row in view.table {
        write_distribution_row(writer, row)?;
    }
    writeln!(writer, "  {}", "-".repeat(TABLE_WIDTH))?;
    writeln!(writer, "  {:<width$} {:>9}", "Total", view.table.total())
}

fn write_distribution_row<W>(writer: &mut W, row: &DistributionRow) -> io::Result<()>
where
    W: Write,
{
    let width = LABEL_WIDTH;
    writeln!(
        writer,
        "  {:<width$} {:>9} {:<18} {:<28} {:>9.2}%",
        row.label, row.frequency, row.pdf_trace, row.cdf_trace, row.percentage,
    )
}

fn write_percentage_summary<W>(writer: &mut W, view: &SegmentView<'_>) -> io::Result<()>
where
    W: Write,
{
    let width = LABEL_WIDTH;
    writeln!(writer, "Percentage of {}:", view.label)?;
    for row in view.table {
        writeln!(writer, "  {:<width$} {:>6.2}%", row.label, row.percentage)?;
    }
    Ok(())
}
