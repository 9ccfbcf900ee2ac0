use std::io::{self, BufRead, Write};

use tokio::runtime::{Handle, RuntimeFlavor};

pub const ENTER_PROMPT: &str = "Press Enter to continue...";

/// Blocking user notification. Handlers call it synchronously and continue
/// only after it returns.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTarget {
    Stdout,
    Stderr,
}

/// Prints notifications to the terminal, optionally waiting for the user to
/// press Enter before returning.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    target: AlertTarget,
    wait_for_enter: bool,
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::stdout()
    }
}

impl TerminalNotifier {
    pub fn stdout() -> Self {
        Self {
            target: AlertTarget::Stdout,
            wait_for_enter: false,
        }
    }

    /// Keeps stdout free for machine-readable output.
    pub fn stderr() -> Self {
        Self {
            target: AlertTarget::Stderr,
            wait_for_enter: false,
        }
    }

    /// Read one line from stdin after every alert.
    pub fn waiting_for_enter(mut self) -> Self {
        self.wait_for_enter = true;
        self
    }

    pub fn target(&self) -> AlertTarget {
        self.target
    }

    pub fn waits_for_enter(&self) -> bool {
        self.wait_for_enter
    }

    fn alert_to<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        write_alert(out, message)?;
        if self.wait_for_enter {
            let stdin = io::stdin();
            run_blocking(|| wait_for_enter(out, &mut stdin.lock()))?;
        }
        Ok(())
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        let result = match self.target {
            AlertTarget::Stdout => self.alert_to(&mut io::stdout().lock(), message),
            AlertTarget::Stderr => self.alert_to(&mut io::stderr().lock(), message),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to print notification");
        }
    }
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

pub fn write_alert<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "[!] {}", message)?;
    out.flush()
}

/// Prompt, then consume exactly one line of `input`. End of input counts as
/// acknowledged.
pub fn wait_for_enter<W: Write, R: BufRead>(out: &mut W, input: &mut R) -> io::Result<()> {
    write!(out, "{}", ENTER_PROMPT)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Run blocking terminal I/O without stalling the runtime's other tasks.
fn run_blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}
