use anyhow::Result;
use clap::Parser;
use taskdeck::{config, session, tui};

#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(about = "Terminal dashboard for browsing ClickUp workspaces and tasks")]
#[command(version)]
struct Args {
    /// Path to config file
    #[arg(long, short)]
    config: Option<std::path::PathBuf>,

    /// Clear the stored token and last workspace, then exit
    #[arg(long)]
    logout: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("taskdeck=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let config = config::load(args.config.as_deref())?;
    let mut session = session::SessionStore::open(session::default_dir()?);

    if args.logout {
        session.clear();
        println!("Session cleared.");
        return Ok(());
    }

    // Run TUI
    tui::run(config, session).await
}
