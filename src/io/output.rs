//! Report writers for aggregation results.

use crate::pipeline::AggregationReport;
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-oriented human readable report
    #[default]
    Terminal,
    /// Pretty-printed JSON document
    Json,
}

/// Renders an [`AggregationReport`] to a sink.
///
/// `write_report` flushes before returning, so a buffered sink's write
/// failure is reported here and not lost on drop.
pub trait OutputWriter {
    fn write_report(&mut self, report: &AggregationReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AggregationReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the four result lines:
///
/// ```text
/// Total points: 18
/// Total points (all tasks): 26
/// {OPEN=[[OPEN, 5], [OPEN, 13]], CLOSED=[[CLOSED, 8]]}
/// [19%, 50%, 30%]
/// ```
pub struct TerminalWriter<W: Write> {
    writer: W,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            plain: false,
        }
    }

    /// Disable colors and emphasis.
    pub fn plain(mut self) -> Self {
        self.plain = true;
        self
    }

    fn label(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.bold().to_string()
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AggregationReport) -> anyhow::Result<()> {
        let open = self.label("Total points:");
        let total = self.label("Total points (all tasks):");
        writeln!(self.writer, "{} {}", open, report.open_points)?;
        writeln!(self.writer, "{} {}", total, report.total_points)?;
        writeln!(self.writer, "{}", report.groups)?;
        writeln!(self.writer, "{}", format_weight_list(&report.weights))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Bracketed, comma separated weights, e.g. `[19%, 50%, 30%]`.
pub fn format_weight_list(weights: &[String]) -> String {
    format!("[{}]", weights.join(", "))
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    plain: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal if plain => Box::new(TerminalWriter::new(writer).plain()),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
