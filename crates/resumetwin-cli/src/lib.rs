//! Resume upload view for the ResumeTwin backend.
//!
//! `ResumeUpload` owns the view state and runs the user actions (select a
//! file, upload, skill suggestions, report download, email) against a
//! `ResumeBackend`. `render` turns a state snapshot into text. The
//! `resumetwin` binary drives it from the terminal.

pub mod component;
pub mod notify;
pub mod render;
pub mod report;
pub mod session;
pub mod state;

pub use component::{ActionOutcome, ResumeUpload};
pub use notify::{AlertTarget, Notifier, TerminalNotifier};
pub use render::render;
pub use report::{DirectorySink, ReportSink};
pub use state::ViewState;

/// Initialize tracing for CLI binaries. Logs go to stderr so rendered output stays on stdout.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
