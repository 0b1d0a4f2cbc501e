//! Observability infrastructure: logging setup, phase tracking, crash reports.
//!
//! ## Usage
//!
//! ```ignore
//! use taskpoints::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(1);
//!     // ... rest of application
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, reset_context, set_input, set_phase, AggregationContext,
    AggregationPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{filter_for_verbosity, init_tracing};
