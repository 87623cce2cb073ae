use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use reqwest::blocking::Client;

use systemtext_sync::config::SyncConfig;
use systemtext_sync::error::SyncError;
use systemtext_sync::services::sync::{self, Gate};

#[derive(Parser)]
#[command(name = "systemtext-sync")]
#[command(about = "Fetch translations from external service")]
struct Cli {
    /// Base URL of the sitemanager catalog service
    #[arg(long)]
    sitemanager_url: String,

    /// Base URL of the translation service
    #[arg(long)]
    translation_endpoint: String,

    /// Directory the language resources are written under
    #[arg(long, default_value = "resources/lang")]
    root: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Overwrite without asking
    #[arg(short = 'F', long)]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = SyncConfig {
        sitemanager_url: cli.sitemanager_url,
        translation_endpoint: cli.translation_endpoint,
        translation_root: cli.root,
        timeout: Duration::from_secs(cli.timeout_secs),
    };

    let client = Client::builder().timeout(cfg.timeout).build()?;

    println!("{}", "Fetching translations".green());

    let plan = sync::plan(&client, &cfg)?;
    println!("Found {} apps", plan.apps);
    println!("Found {} brands", plan.brands);
    println!("Generated {} urls", plan.ids.len());
    println!("----------------------------");

    let gate = if cli.force {
        Gate::Forced
    } else if confirm("Do you want to fetch and overwrite the translations?")? {
        Gate::Confirmed
    } else {
        Gate::Declined
    };

    if gate != Gate::Declined {
        println!("Fetching translations from {} urls...", plan.ids.len());
    }

    let report = match sync::execute(&client, &cfg, plan, gate) {
        Ok(report) => report,
        Err(SyncError::Cancelled) => {
            println!("{}", "Operation cancelled".yellow());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "Fetched {} of {} resources ({} missing), wrote {} files",
        report.fetched, report.ids_total, report.missing, report.files_written
    );

    if !report.fetch_failures.is_empty() || !report.write_failures.is_empty() {
        println!(
            "{}",
            format!(
                "{} fetch failures, {} write failures",
                report.fetch_failures.len(),
                report.write_failures.len()
            )
            .red()
        );
    }

    println!("{}", "Complete!".green());

    Ok(())
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
