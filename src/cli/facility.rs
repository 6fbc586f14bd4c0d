//! Facility access-code screens

use clap::Subcommand;

use super::Context;
use crate::common::Result;
use crate::facility::FacilityClient;

#[derive(Subcommand)]
pub enum FacilityCommand {
    /// Show the current access code
    Show { club: i64 },
    /// Rotate the access code (admin only)
    Set {
        club: i64,
        code: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Code history for auditing (admin only)
    History { club: i64 },
}

pub async fn facility(command: FacilityCommand, ctx: &Context) -> Result<()> {
    let client = FacilityClient::new(ctx.api.clone());
    match command {
        FacilityCommand::Show { club } => match client.current(club).await? {
            Some(password) => {
                println!("{}", password.code);
                if let Some(description) = password.description {
                    println!("({})", description);
                }
            }
            None => println!("No access code configured for this club"),
        },
        FacilityCommand::Set {
            club,
            code,
            description,
        } => {
            let password = client.set(club, &code, description.as_deref()).await?;
            println!("Access code updated to {}", password.code);
        }
        FacilityCommand::History { club } => {
            for password in client.history(club).await? {
                let state = if password.active { "active" } else { "retired" };
                println!(
                    "{}  {}  {}",
                    password.created_at.as_deref().unwrap_or("-"),
                    password.code,
                    state
                );
            }
        }
    }
    Ok(())
}
