//! ResumeTwin CLI: terminal front end for the ResumeTwin backend.
//!
//! Set RESUMETWIN_API_URL (or API_URL) to point at the backend; defaults to http://localhost:5000.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use resumetwin_api_client::ApiClient;
use resumetwin_cli::{init_tracing, session, ActionOutcome, DirectorySink, ResumeUpload, TerminalNotifier};
use resumetwin_core::{CareerPath, ClientConfig};

#[derive(Parser)]
#[command(name = "resumetwin", about = "Upload a resume and review its ATS analysis")]
struct Cli {
    /// Backend base URL (overrides RESUMETWIN_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory the ATS report is saved into (overrides RESUMETWIN_REPORT_DIR)
    #[arg(long, global = true)]
    report_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a resume and print the analysis
    Analyze {
        /// Path to the resume (PDF)
        file: PathBuf,
        /// Career role to get skill suggestions for
        #[arg(long)]
        role: Option<CareerPath>,
        /// Download the ATS report after uploading
        #[arg(long)]
        download: bool,
        /// Email the report to this address
        #[arg(long)]
        email: Option<String>,
        /// Print the view state as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive session
    Interactive,
    /// List the career roles skill suggestions are available for
    Roles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Commands::Roles = cli.command {
        for path in CareerPath::ALL {
            println!("{}", path);
        }
        return Ok(());
    }

    let mut config = ClientConfig::from_env().context("Invalid client configuration")?;
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    if let Some(report_dir) = cli.report_dir {
        config = config.with_report_dir(report_dir);
    }

    let client = ApiClient::from_config(&config).context(
        "Failed to create API client. Check RESUMETWIN_API_URL and RESUMETWIN_TIMEOUT_SECS",
    )?;
    tracing::debug!(api_url = %client.base_url(), "Using ResumeTwin backend");

    let notifier = match &cli.command {
        Commands::Analyze { json: true, .. } => TerminalNotifier::stderr(),
        Commands::Interactive if std::io::stdin().is_terminal() => {
            TerminalNotifier::stdout().waiting_for_enter()
        }
        _ => TerminalNotifier::stdout(),
    };
    let view = ResumeUpload::new(
        client,
        notifier,
        DirectorySink::new(config.report_dir.clone()),
    );

    match cli.command {
        Commands::Analyze {
            file,
            role,
            download,
            email,
            json,
        } => {
            view.select_file_path(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let uploaded = view.upload().await;

            if uploaded.is_completed() {
                if role.is_some() {
                    view.set_career_path(role).await;
                    view.suggest_skills().await;
                }
                if download {
                    if let ActionOutcome::Completed = view.download_report().await {
                        let saved = config.report_dir.join(resumetwin_core::REPORT_FILENAME);
                        if json {
                            eprintln!("Report saved to {}", saved.display());
                        } else {
                            println!("Report saved to {}", saved.display());
                        }
                    }
                }
                if let Some(email) = email {
                    view.set_email(email).await;
                    view.send_email().await;
                }
            }

            if json {
                let state = view.snapshot().await;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&state).context("Serialize view state")?
                );
            } else {
                print!("{}", view.render().await);
            }

            if let Some(err) = uploaded.error() {
                anyhow::bail!("Upload failed: {}", err);
            }
        }
        Commands::Interactive => {
            println!("{}", session::HELP);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::run(&view, stdin, &mut stdout).await?;
        }
        Commands::Roles => {}
    }

    Ok(())
}
