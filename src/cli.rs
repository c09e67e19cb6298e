// src/cli.rs
use crate::analytics;
use crate::core::ConfigManager;
use crate::matching::JobMatcher;
use crate::networking::ConnectionGraph;
use crate::referral::{should_follow_up, ReferralTimer};
use crate::types::{
    Application, ConnectionEdge, Contact, Job, Profile, ReferralStatus, ReferralTimingInput,
    RelationshipStrength,
};
use crate::utils::load_records;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "jobtrail")]
#[command(about = "Job-search insights: connection paths, referral timing, job matching")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// YAML configuration file (defaults to config.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Find the shortest connection path to a contact
    Path {
        /// Your contacts (JSON, YAML or TOML)
        #[arg(long)]
        contacts: PathBuf,
        /// Connection rows between contacts
        #[arg(long)]
        connections: PathBuf,
        /// Contacts that are not yours, used to name intermediate hops
        #[arg(long)]
        directory: Option<PathBuf>,
        /// Id of the person you want to reach
        #[arg(long)]
        target: String,
    },
    /// Suggest when to send a referral request
    Timing {
        /// Relationship strength, 1-5
        #[arg(long)]
        strength: u8,
        /// RFC 3339 timestamp of your last interaction
        #[arg(long)]
        last_contacted: Option<DateTime<Utc>>,
        /// RFC 3339 application deadline
        #[arg(long)]
        deadline: Option<DateTime<Utc>>,
        /// RFC 3339 posting date of the job
        #[arg(long)]
        job_created: DateTime<Utc>,
    },
    /// Check whether a sent referral request needs a follow-up
    FollowUp {
        /// draft, sent, responded, accepted or declined
        #[arg(long)]
        status: String,
        #[arg(long)]
        sent_at: Option<DateTime<Utc>>,
        #[arg(long)]
        follow_up_at: Option<DateTime<Utc>>,
    },
    /// Score a job posting against a candidate profile
    Match {
        #[arg(long)]
        job: PathBuf,
        #[arg(long)]
        profile: PathBuf,
    },
    /// Funnel, conversion and time-in-stage analytics for applications
    Analytics {
        #[arg(long)]
        applications: PathBuf,
    },
}

pub async fn handle_command(command: Command, config: &ConfigManager) -> Result<()> {
    match command {
        Command::Serve => anyhow::bail!("serve is handled by the web server entry point"),

        Command::Path {
            contacts,
            connections,
            directory,
            target,
        } => {
            let contacts: Vec<Contact> = load_records(&contacts).await?;
            let connections: Vec<ConnectionEdge> = load_records(&connections).await?;
            let directory: Vec<Contact> = match directory {
                Some(path) => load_records(&path).await?,
                None => Vec::new(),
            };

            info!(
                "Loaded {} contacts and {} connections",
                contacts.len(),
                connections.len()
            );

            let found = ConnectionGraph::new(&connections)
                .with_directory(&directory)
                .find_path(&contacts, &target);

            match &found {
                Some(path) => info!("{}", path.path_description),
                None => info!("No connection path found to {}", target),
            }
            print_json(&found)
        }

        Command::Timing {
            strength,
            last_contacted,
            deadline,
            job_created,
        } => {
            let input = ReferralTimingInput {
                relationship_strength: RelationshipStrength::new(strength)?,
                last_contacted_at: last_contacted,
                job_deadline: deadline,
                job_created_at: job_created,
            };
            let timer = ReferralTimer::new(config.scoring.timing.clone())?;
            let suggestion = timer.suggest_for(Utc::now(), &input);
            print_json(&suggestion)
        }

        Command::FollowUp {
            status,
            sent_at,
            follow_up_at,
        } => {
            let status: ReferralStatus = status.parse()?;
            print_json(&should_follow_up(status, sent_at, follow_up_at))
        }

        Command::Match { job, profile } => {
            let job: Job = load_records(&job).await?;
            let profile: Profile = load_records(&profile).await?;
            let matcher = JobMatcher::new(config.scoring.matching.clone())?;
            print_json(&matcher.score(&job, &profile))
        }

        Command::Analytics { applications } => {
            let applications: Vec<Application> = load_records(&applications).await?;
            print_json(&analytics::summarize(&applications, Utc::now()))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", rendered);
    Ok(())
}
