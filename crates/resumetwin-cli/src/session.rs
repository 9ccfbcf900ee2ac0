//! Line-oriented interactive session over one `ResumeUpload`.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use resumetwin_api_client::ResumeBackend;
use resumetwin_core::{AppError, CareerPath};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::component::{ActionOutcome, ResumeUpload};
use crate::notify::Notifier;
use crate::report::ReportSink;

pub const HELP: &str = "\
Commands:
  file <path>     select a resume file
  upload          upload the selected file
  role [name]     select a career role (no name clears it)
  roles           list career roles
  skills          get skill suggestions for the selected role
  download        download the ATS report
  email <addr>    set the email address
  send            email the report
  show            show the current view
  help            show this help
  quit            leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    File(PathBuf),
    Upload,
    Role(Option<CareerPath>),
    Roles,
    Skills,
    Download,
    Email(String),
    Send,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "file" if !rest.is_empty() => Command::File(PathBuf::from(rest)),
            "file" => return Err(AppError::InvalidInput("Usage: file <path>".to_string())),
            "upload" => Command::Upload,
            "role" if rest.is_empty() => Command::Role(None),
            "role" => Command::Role(Some(rest.parse()?)),
            "roles" => Command::Roles,
            "skills" => Command::Skills,
            "download" => Command::Download,
            "email" => Command::Email(rest.to_string()),
            "send" => Command::Send,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(AppError::InvalidInput(format!(
                    "Unknown command '{}'. Type 'help' for a list of commands.",
                    other
                )))
            }
        };
        Ok(command)
    }
}

/// Read commands from `input` until `quit` or end of input.
pub async fn run<B, N, S, R, W>(
    view: &ResumeUpload<B, N, S>,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    B: ResumeBackend,
    N: Notifier,
    S: ReportSink,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    write!(out, "> ")?;
    out.flush()?;

    while let Some(line) = lines.next_line().await.context("Failed to read command")? {
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => execute(view, command, out).await?,
            Err(err) => writeln!(out, "{}", err.user_message())?,
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

async fn execute<B, N, S, W>(
    view: &ResumeUpload<B, N, S>,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()>
where
    B: ResumeBackend,
    N: Notifier,
    S: ReportSink,
    W: Write,
{
    match command {
        Command::File(path) => match view.select_file_path(&path).await {
            Ok(()) => writeln!(out, "Selected {}", path.display())?,
            Err(err) => writeln!(out, "Cannot read {}: {}", path.display(), err)?,
        },
        Command::Upload => {
            view.upload().await;
            write!(out, "{}", view.render().await)?;
        }
        Command::Role(path) => {
            view.set_career_path(path).await;
            match path {
                Some(path) => writeln!(out, "Career role: {}", path)?,
                None => writeln!(out, "Career role cleared")?,
            }
        }
        Command::Roles => {
            for path in CareerPath::ALL {
                writeln!(out, "  {}", path)?;
            }
        }
        Command::Skills => {
            if view.suggest_skills().await.is_completed() {
                write!(out, "{}", view.render().await)?;
            }
        }
        Command::Download => match view.download_report().await {
            ActionOutcome::Completed => writeln!(out, "Report downloaded")?,
            ActionOutcome::Skipped(err) => writeln!(out, "{}", err.user_message())?,
            ActionOutcome::Failed(_) | ActionOutcome::Superseded => {
                writeln!(out, "Download failed")?
            }
        },
        Command::Email(email) => view.set_email(email).await,
        Command::Send => {
            view.send_email().await;
        }
        Command::Show => write!(out, "{}", view.render().await)?,
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}
