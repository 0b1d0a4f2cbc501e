//! Thread-local context tracking for crash reports.
//!
//! Records which pipeline phase is running and which input file was
//! loaded, so the panic hook can say where a crash happened. Context is
//! per thread; guards restore the previous value on drop.

use std::cell::RefCell;
use std::path::PathBuf;

thread_local! {
    static CURRENT_CONTEXT: RefCell<AggregationContext> = const { RefCell::new(AggregationContext::new()) };
}

/// Context snapshot for the current operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationContext {
    /// Current pipeline phase
    pub phase: Option<AggregationPhase>,
    /// Input file the tasks came from, if any
    pub input: Option<PathBuf>,
}

impl AggregationContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            input: None,
        }
    }
}

/// Pipeline phases for context tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationPhase {
    /// Reading and validating task records
    Loading,
    /// Summing points of open tasks
    OpenPoints,
    /// Summing points of all tasks
    TotalPoints,
    /// Partitioning tasks by status
    Grouping,
    /// Computing per-task percentages
    Weighting,
    /// Writing the report
    OutputGeneration,
}

impl std::fmt::Display for AggregationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::OpenPoints => write!(f, "open_points"),
            Self::TotalPoints => write!(f, "total_points"),
            Self::Grouping => write!(f, "grouping"),
            Self::Weighting => write!(f, "weighting"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard for restoring context on drop.
pub struct ContextGuard {
    previous: AggregationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update_context(update: impl FnOnce(&mut AggregationContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        update(&mut *ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current pipeline phase.
///
/// Returns a guard that restores the previous phase on drop.
///
/// # Example
///
/// ```
/// use taskpoints::observability::{get_current_context, set_phase, AggregationPhase};
///
/// {
///     let _phase = set_phase(AggregationPhase::Grouping);
///     assert_eq!(get_current_context().phase, Some(AggregationPhase::Grouping));
/// }
/// assert_eq!(get_current_context().phase, None);
/// ```
#[must_use]
pub fn set_phase(phase: AggregationPhase) -> ContextGuard {
    update_context(|ctx| ctx.phase = Some(phase))
}

/// Set the input file the current run reads from.
#[must_use]
pub fn set_input(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update_context(|ctx| ctx.input = Some(path))
}

/// Get the current context snapshot.
///
/// Called by the panic hook to include context in crash reports.
#[must_use]
pub fn get_current_context() -> AggregationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = AggregationContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        reset_context();

        let _phase1 = set_phase(AggregationPhase::Loading);
        assert_eq!(
            get_current_context().phase,
            Some(AggregationPhase::Loading),
            "Phase should be Loading"
        );

        {
            let _phase2 = set_phase(AggregationPhase::Weighting);
            assert_eq!(
                get_current_context().phase,
                Some(AggregationPhase::Weighting),
                "Phase should be Weighting"
            );
        }

        assert_eq!(
            get_current_context().phase,
            Some(AggregationPhase::Loading),
            "Phase should be restored to Loading"
        );
    }

    #[test]
    fn test_nested_context_guards() {
        reset_context();

        let _input = set_input("/data/tasks.json");
        let _phase = set_phase(AggregationPhase::Grouping);

        let ctx = get_current_context();
        assert_eq!(ctx.phase, Some(AggregationPhase::Grouping));
        assert_eq!(ctx.input, Some(PathBuf::from("/data/tasks.json")));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(AggregationPhase::Loading.to_string(), "loading");
        assert_eq!(AggregationPhase::OpenPoints.to_string(), "open_points");
        assert_eq!(AggregationPhase::TotalPoints.to_string(), "total_points");
        assert_eq!(AggregationPhase::Grouping.to_string(), "grouping");
        assert_eq!(AggregationPhase::Weighting.to_string(), "weighting");
        assert_eq!(
            AggregationPhase::OutputGeneration.to_string(),
            "output_generation"
        );
    }

    #[test]
    fn test_empty_context_by_default() {
        reset_context();
        assert_eq!(get_current_context(), AggregationContext::new());
    }
}
