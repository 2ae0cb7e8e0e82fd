use std::{io, path::PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use serde::Serialize;
use statprob_stats::distribution::DistributionRow;
use statprob_survey::{context::SurveyContext, error::SurveyError, segment::Segment};

use crate::util::{Output, SurveyArg};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ExportArg {
    #[command(flatten)]
    pub(crate) survey: SurveyArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub(crate) format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportedSurvey<'a> {
    zero_categories: String,
    segments: Vec<ExportedSegment<'a>>,
}

#[derive(Debug, Serialize)]
struct ExportedSegment<'a> {
    segment: Segment,
    label: &'static str,
    total: usize,
    rows: &'a [DistributionRow],
}

impl<'a> ExportedSurvey<'a> {
    /// Segments without students are kept as empty tables.
    fn collect(context: &'a SurveyContext) -> Result<Self, SurveyError> {
        let segments = Segment::ALL
            .into_iter()
            .map(|segment| match context.segment(segment) {
                Ok(view) => Ok(ExportedSegment {
                    segment,
                    label: view.label,
                    total: view.total,
                    rows: view.table.rows(),
                }),
                Err(SurveyError::NoData { .. }) => Ok(ExportedSegment {
                    segment,
                    label: segment.label(),
                    total: 0,
                    rows: &[],
                }),
                Err(err) => Err(err),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            zero_categories: context.policy().to_string(),
            segments,
        })
    }
}

pub(crate) fn run(arg: &ExportArg) -> anyhow::Result<()> {
    let context = arg.survey.load_context()?;
    let survey = ExportedSurvey::collect(&context)?;

    let mut output = Output::create(arg.output.as_deref())?;
    match arg.format {
        ExportFormat::Json => output.write_json(&survey)?,
        ExportFormat::Csv => {
            write_csv(&mut output, &survey)
                .with_context(|| format!("Failed to write CSV to {}", output.name()))?;
            output.finish()?;
        }
    }
    tracing::info!(
        format = ?arg.format,
        output = %output.name(),
        segments = survey.segments.len(),
        "distribution tables exported"
    );
    Ok(())
}

const CSV_HEADER: [&str; 8] = [
    "segment",
    "show",
    "frequency",
    "pdf",
    "pdf_trace",
    "cdf",
    "cdf_trace",
    "percentage",
];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    segment: &'static str,
    show: &'a str,
    frequency: usize,
    pdf: f64,
    pdf_trace: &'a str,
    cdf: f64,
    cdf_trace: &'a str,
    percentage: f64,
}

/// Writes one CSV record per table row. Empty segments contribute no records;
/// the header is written even when every segment is empty.
fn write_csv<W>(writer: W, survey: &ExportedSurvey<'_>) -> csv::Result<()>
where
    W: io::Write,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for segment in &survey.segments {
        for row in segment.rows {
            writer.serialize(CsvRow {
                segment: segment.segment.key(),
                show: &row.label,
                frequency: row.frequency,
                pdf: row.pdf,
                pdf_trace: &row.pdf_trace,
                cdf: row.cdf,
                cdf_trace: &row.cdf_trace,
                percentage: row.percentage,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use statprob_survey::{
        counter::ZeroCategoryPolicy,
        record::{Gender, SurveyData},
    };

    use super::*;

    const SURVEY_JSON: &str = include_str!("../../../../data/survey.json");

    fn context(keep: impl Fn(Gender) -> bool) -> SurveyContext {
        let mut data = SurveyData::from_json(SURVEY_JSON).unwrap();
        data.students.retain(|s| keep(s.gender));
        SurveyContext::build(&data, ZeroCategoryPolicy::Omit).unwrap()
    }

    fn csv_records(survey: &ExportedSurvey<'_>) -> Vec<csv::StringRecord> {
        let mut buf = Vec::new();
        write_csv(&mut buf, survey).unwrap();
        let mut reader = csv::Reader::from_reader(buf.as_slice());
        assert_eq!(reader.headers().unwrap().iter().collect::<Vec<_>>(), CSV_HEADER);
        reader.records().collect::<Result<_, _>>().unwrap()
    }

    #[test]
    fn test_csv_export() {
        let context = context(|_| true);
        let survey = ExportedSurvey::collect(&context).unwrap();
        let records = csv_records(&survey);

        assert_eq!(records.len(), 4 + 4 + 4);
        let first = &records[0];
        assert_eq!(&first[0], "overall");
        assert_eq!(&first[1], "Film Drama");
        assert_eq!(&first[2], "8");
        assert_eq!(first[3].parse::<f64>().unwrap(), 0.4);
        assert_eq!(&first[4], "8/20 = 0.4000");
        assert_eq!(&first[6], "0.4000 = 0.4000");
        assert_eq!(first[7].parse::<f64>().unwrap(), 40.0);
        assert_eq!((&records[4][0], &records[4][1]), ("male", "Olahraga"));
        assert_eq!((&records[8][0], &records[8][1]), ("female", "Film Drama"));
        assert_eq!(&records[8][2], "5");
    }

    #[test]
    fn test_empty_segment_is_exported_as_empty_table() {
        let context = context(|gender| gender == Gender::Male);
        let survey = ExportedSurvey::collect(&context).unwrap();

        let female = &survey.segments[2];
        assert_eq!(female.segment, Segment::Female);
        assert_eq!(female.total, 0);
        assert!(female.rows.is_empty());

        let json = serde_json::to_value(&survey).unwrap();
        assert_eq!(json["zero_categories"], "omit");
        assert_eq!(json["segments"][1]["segment"], "male");
        assert_eq!(json["segments"][1]["total"], 11);
        assert_eq!(json["segments"][2]["rows"], serde_json::json!([]));

        let records = csv_records(&survey);
        assert_eq!(records.len(), 4 + 4);
        assert!(records.iter().all(|record| &record[0] != "female"));
    }

    #[test]
    fn test_csv_quotes_labels_with_commas() {
        let data = SurveyData::from_json(
            r#"{
                "students": [
                    { "id": 1, "name": "A", "gender": "male", "most_like_show": 3 },
                    { "id": 2, "name": "B", "gender": "female", "most_like_show": 3 },
                    { "id": 3, "name": "C", "gender": "female", "most_like_show": 1 }
                ],
                "shows": [
                    { "id": 1, "name": "Olahraga" },
                    { "id": 3, "name": "Berita, \"Politik\" dan Ekonomi" }
                ]
            }"#,
        )
        .unwrap();
        let context = SurveyContext::build(&data, ZeroCategoryPolicy::Omit).unwrap();
        let survey = ExportedSurvey::collect(&context).unwrap();

        let mut buf = Vec::new();
        write_csv(&mut buf, &survey).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"Berita, \"\"Politik\"\" dan Ekonomi\""));

        let records = csv_records(&survey);
        assert_eq!(records.len(), 2 + 1 + 2);
        assert_eq!(&records[0][1], "Berita, \"Politik\" dan Ekonomi");
        assert_eq!(&records[0][4], "2/3 = 0.6667");
        assert_eq!(records[0].len(), CSV_HEADER.len());
    }
}
