use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use kith_core::{
    acknowledge_reminder, evaluate_quiz, gauge_report, local_today, parse_timezone,
    rank_reminders, simulate_trend, upcoming_birthdays, AnswerVector,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod state;
mod store;

use config::Config;
use state::KithHome;
use store::JsonFriendStore;

#[derive(Parser, Debug)]
#[command(name = "kith", version, about = "Friendship health and personality engine")]
struct Cli {
    /// Friend records JSON (defaults to ~/.kith/friends.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Override the configured display locale
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify quiz answers into an affinity category and personality
    Quiz {
        /// Comma-separated answers, each 0-3 (e.g. 0,2,1,3)
        #[arg(long)]
        answers: String,
    },

    /// Friends who are due for contact, most urgent first
    Reminders,

    /// Birthdays coming up within the configured window
    Birthdays,

    /// Overall relationship health score
    Gauge {
        /// Also print a simulated history of this many days
        #[arg(long)]
        trend: Option<usize>,
    },

    /// Mark a friend as contacted now
    Ack {
        friend_id: String,
    },

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write config.toml with defaults under the kith home
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kith_cli=info,kith_core=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let home = KithHome::from_env()?;
    let cfg = Config::load_or_default(&home.config_path())?;
    let locale = cli.locale.clone().unwrap_or_else(|| cfg.display.locale.clone());

    match cli.command {
        Command::Quiz { answers } => {
            let answers = AnswerVector::parse_csv(&answers).context("parse --answers")?;
            let outcome = evaluate_quiz(&answers, &locale);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Command::Reminders => {
            let store = open_store(cli.store, &home)?;
            let reminders = rank_reminders(
                store.friends(),
                Utc::now(),
                &locale,
                cfg.reminders,
                &mut rand::thread_rng(),
            );
            tracing::info!(count = reminders.len(), "reminders ranked");
            println!("{}", serde_json::to_string_pretty(&reminders)?);
        }

        Command::Birthdays => {
            let store = open_store(cli.store, &home)?;
            let today = today(&cfg)?;
            let upcoming = upcoming_birthdays(store.friends(), today, cfg.birthdays);
            println!("{}", serde_json::to_string_pretty(&upcoming)?);
        }

        Command::Gauge { trend } => {
            let store = open_store(cli.store, &home)?;
            let report = gauge_report(store.friends(), Utc::now(), cfg.gauge);
            println!("{}", serde_json::to_string_pretty(&report)?);

            if let Some(days) = trend {
                // Synthesized, not a stored history.
                let points = simulate_trend(report.score, days, today(&cfg)?, &mut rand::thread_rng());
                println!("{}", serde_json::to_string_pretty(&points)?);
            }
        }

        Command::Ack { friend_id } => {
            let mut store = open_store(cli.store, &home)?;
            acknowledge_reminder(&mut store, &friend_id, Utc::now())
                .with_context(|| format!("acknowledge {friend_id}"))?;
            tracing::info!(%friend_id, "last interaction updated");
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                let path = home.config_path();
                if config::init_config(&home)? {
                    println!("Wrote {}", path.display());
                } else {
                    println!("Config already exists: {}", path.display());
                }
            }
            ConfigCommand::Show => {
                println!("# {}\n{}", home.config_path().display(), cfg.to_toml()?);
            }
        },
    }

    Ok(())
}

fn open_store(path: Option<PathBuf>, home: &KithHome) -> Result<JsonFriendStore> {
    let path = match path {
        Some(p) => p,
        None => home.ensure()?.friends_path(),
    };
    JsonFriendStore::open(path)
}

fn today(cfg: &Config) -> Result<chrono::NaiveDate> {
    let tz = parse_timezone(&cfg.display.timezone)?;
    Ok(local_today(Utc::now(), tz))
}
