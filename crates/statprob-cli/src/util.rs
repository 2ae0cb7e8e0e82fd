use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use statprob_survey::{context::SurveyContext, record::SurveyData};

use crate::command::ZeroCategories;

/// Destination of exported tables: a file, or stdout when no path is given.
pub(crate) struct Output {
    writer: Box<dyn io::Write>,
    name: String,
}

impl Output {
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self {
                writer: Box::new(io::stdout().lock()),
                name: "stdout".to_owned(),
            });
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            name: path.display().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes `value` as pretty JSON followed by a newline, then flushes.
    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut self.writer, value)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.writer))
            .with_context(|| format!("Failed to write JSON to {}", self.name))?;
        self.finish()
    }

    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", self.name))
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Read survey answers and the show catalog from a JSON file
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed
pub fn read_survey_file<P>(path: P) -> anyhow::Result<SurveyData>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::info!("Loading survey from {}...", path.display());
    let file = File::open(path)
        .with_context(|| format!("Failed to open survey file: {}", path.display()))?;
    let data = SurveyData::from_reader(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse survey JSON file: {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        students = data.students.len(),
        shows = data.shows.len(),
        "survey loaded"
    );
    Ok(data)
}

/// Options shared by every command that builds distribution tables.
#[derive(Debug, Clone, Args)]
pub(crate) struct SurveyArg {
    /// Survey JSON file with `students` and `shows`
    #[arg(value_name = "SURVEY")]
    pub survey_path: PathBuf,

    /// Whether offered shows without votes appear in the tables
    #[arg(long, value_enum, default_value_t = ZeroCategories::Omit)]
    pub zero_categories: ZeroCategories,
}

impl SurveyArg {
    pub fn load_context(&self) -> anyhow::Result<SurveyContext> {
        let data = read_survey_file(&self.survey_path)?;
        let context = SurveyContext::build(&data, self.zero_categories.into()).with_context(
            || {
                format!(
                    "Failed to build distribution tables from {}",
                    self.survey_path.display()
                )
            },
        )?;
        tracing::info!(policy = %context.policy(), "distribution tables ready");
        Ok(context)
    }
}
