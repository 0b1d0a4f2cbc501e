//! Custom panic hook for structured crash reports.
//!
//! Prints what taskpoints was doing (phase, input file) alongside the
//! panic message and location.
//!
//! The phase context is thread-local and is set on the thread running the
//! pipeline. A panic inside a `par_*` stage happens on a rayon worker that
//! never saw it, so the report names the worker instead of a phase.

use super::context::{get_current_context, AggregationContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook.
///
/// Call early in `main()` before any work begins.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    eprintln!();
    eprintln!("{}", RULE);
    for line in crash_report_lines(&extract_panic_message(info), location(info), &context) {
        eprintln!("{}", line);
    }
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("Run with RUST_BACKTRACE=1 for stack trace");
    }
    eprintln!("{}", RULE);
}

fn crash_report_lines(
    message: &str,
    location: Option<String>,
    context: &AggregationContext,
) -> Vec<String> {
    let mut lines = vec![
        "TASKPOINTS CRASH REPORT".to_string(),
        format!("  Version: {}", VERSION),
        format!("  Platform: {}", std::env::consts::OS),
        format!("  Time: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")),
        format!("  PANIC: {}", message),
    ];
    if let Some(location) = location {
        lines.push(format!("  Location: {}", location));
    }
    match (context.phase, rayon::current_thread_index()) {
        (Some(phase), _) => lines.push(format!("  Phase: {}", phase)),
        (None, Some(worker)) => lines.push(format!(
            "  Phase: (rayon worker {} - phase is tracked on the pipeline thread)",
            worker
        )),
        (None, None) => lines.push(
            "  Phase: (not set - crash occurred before aggregation started)".to_string(),
        ),
    }
    if let Some(metadata) = Span::current().metadata() {
        lines.push(format!("  Span: {}", metadata.name()));
    }
    if let Some(input) = &context.input {
        lines.push(format!("  Input: {}", input.display()));
    }
    lines
}

fn location(info: &PanicHookInfo<'_>) -> Option<String> {
    info.location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
