//! Setup and initialization functions for CLI
//!
//! Thread pool configuration and runtime environment setup.

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        // Already configured - this is fine, just note it
        log::debug!("Thread pool already configured: {}", e);
    }
}

/// Disable terminal colors for this process
pub fn disable_colors() {
    colored::control::set_override(false);
}
