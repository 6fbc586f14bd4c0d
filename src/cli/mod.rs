//! # CLI Module
//!
//! The presentation layer: one subcommand group per screen of the original
//! application. Handlers stay thin: parse arguments, call the matching
//! client, print the result. Each handler awaits its request before
//! returning, so a command can never double-submit.

pub mod admin;
pub mod auth;
pub mod clubs;
pub mod documentation;
pub mod events;
pub mod facility;
pub mod news;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::common::{ApiError, Config, Result};
use crate::session::SessionManager;

#[derive(Parser)]
#[command(name = "piar", about = "Club management from the terminal", version)]
pub struct Cli {
    /// Backend base URL (overrides PIARAPP_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in with email/password or a Google token
    Login(auth::LoginArgs),
    /// Clear the stored session
    Logout,
    /// Show the currently logged-in user
    Whoami,
    /// Register a new account (optionally from an invitation token)
    Register(auth::RegisterArgs),
    /// Profile and preferences
    Profile {
        #[command(subcommand)]
        command: auth::ProfileCommand,
    },
    /// Pending club invitations
    Invitations {
        #[command(subcommand)]
        command: auth::InvitationCommand,
    },
    /// Clubs
    Clubs {
        #[command(subcommand)]
        command: clubs::ClubCommand,
    },
    /// Club members and their roles
    Members {
        #[command(subcommand)]
        command: clubs::MemberCommand,
    },
    /// Club news and comment threads
    News {
        #[command(subcommand)]
        command: news::NewsCommand,
    },
    /// Club events and RSVP
    Events {
        #[command(subcommand)]
        command: events::EventCommand,
    },
    /// Facility access codes
    Facility {
        #[command(subcommand)]
        command: facility::FacilityCommand,
    },
    /// Regulatory documentation (insurance, license card)
    Docs {
        #[command(subcommand)]
        command: documentation::DocsCommand,
    },
    /// Superadmin configuration
    Admin {
        #[command(subcommand)]
        command: admin::AdminCommand,
    },
}

/// Shared handles every handler needs.
pub struct Context {
    pub api: Arc<SessionManager>,
    pub config: Config,
}

pub async fn run(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Login(args) => auth::login(args, ctx).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Whoami => auth::whoami(ctx).await,
        Command::Register(args) => auth::register(args, ctx).await,
        Command::Profile { command } => auth::profile(command, ctx).await,
        Command::Invitations { command } => auth::invitations(command, ctx).await,
        Command::Clubs { command } => clubs::clubs(command, ctx).await,
        Command::Members { command } => clubs::members(command, ctx).await,
        Command::News { command } => news::news(command, ctx).await,
        Command::Events { command } => events::events(command, ctx).await,
        Command::Facility { command } => facility::facility(command, ctx).await,
        Command::Docs { command } => documentation::docs(command, ctx).await,
        Command::Admin { command } => admin::admin(command, ctx).await,
    }
}

/// Prompts on stdout and reads one line from stdin; used when a required
/// value was not passed as a flag.
pub fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Required-value resolution: flag first, interactive prompt second.
pub fn required(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            let entered = prompt(label)?;
            if entered.is_empty() {
                Err(ApiError::Validation(format!("{} is required", label)))
            } else {
                Ok(entered)
            }
        }
    }
}

/// Placeholder for absent optional strings, the value otherwise.
pub fn dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
