//! The `report` command: load, aggregate, write.

use crate::cli::setup::{configure_thread_pool, disable_colors};
use crate::config::{load_config, load_config_from, ParallelConfig, TaskpointsConfig};
use crate::io::{create_writer, OutputFormat, TaskSource};
use crate::observability::{set_phase, AggregationPhase};
use crate::pipeline::source_pipeline;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Everything the `report` command needs, gathered from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub input: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub sequential: bool,
    pub jobs: usize,
    pub plain: bool,
    pub timings: bool,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let file_config = resolve_config(config.config_path.as_deref())?;

    let parallel = resolve_parallel(&file_config.parallel, config.sequential, config.jobs);
    if parallel.enabled {
        let threads = parallel.effective_concurrency();
        tracing::debug!(threads, "Configuring rayon thread pool");
        configure_thread_pool(threads);
    }

    let source = TaskSource::from_arg(config.input.as_deref());
    tracing::info!(source = ?source, parallel = parallel.enabled, "Aggregating tasks");

    let pipeline = source_pipeline(source, &parallel);
    let (report, timings) = pipeline.execute_with_timing()?;

    if config.timings {
        for timing in &timings {
            eprintln!("{}", timing.format());
        }
    }

    let _phase = set_phase(AggregationPhase::OutputGeneration);
    let format = config.format.unwrap_or(file_config.output.format);
    let plain = config.plain || file_config.output.plain;
    if plain {
        disable_colors();
    }

    let sink = open_output(config.output.as_deref())?;
    let mut writer = create_writer(format, sink, plain);
    writer
        .write_report(&report)
        .with_context(|| match &config.output {
            Some(path) => format!("Failed to write report to {}", path.display()),
            None => "Failed to write report to stdout".to_string(),
        })?;
    Ok(())
}

fn resolve_config(path: Option<&Path>) -> Result<TaskpointsConfig> {
    match path {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Apply CLI overrides to the configured parallelism (pure).
pub fn resolve_parallel(base: &ParallelConfig, sequential: bool, jobs: usize) -> ParallelConfig {
    let mut parallel = base.clone();
    if sequential {
        parallel.enabled = false;
    }
    if jobs > 0 {
        parallel.max_concurrency = Some(jobs);
    }
    parallel
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
