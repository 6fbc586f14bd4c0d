//! Club and member screens

use clap::Subcommand;

use super::{dash, Context};
use crate::clubs::{ClubCreate, ClubUpdate, ClubsClient, MemberInvite};
use crate::common::Result;

#[derive(Subcommand)]
pub enum ClubCommand {
    /// Clubs the current user belongs to
    List,
    Show {
        club: i64,
    },
    /// Create a club (superadmin only)
    Create {
        name: String,
        slug: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update club details (admin only)
    Update {
        club: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        contact_email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        region: Option<String>,
    },
    /// Show my role in a club
    Role {
        club: i64,
    },
}

#[derive(Subcommand)]
pub enum MemberCommand {
    List {
        club: i64,
    },
    /// Invite a new member by email
    Invite {
        club: i64,
        email: String,
        #[arg(long, default_value = "miembro")]
        role: String,
    },
    /// Pending invitations sent by the club (admin only)
    Invitations {
        club: i64,
    },
    /// Remove a member (marks the membership inactive)
    Remove {
        club: i64,
        user: i64,
    },
    SetRole {
        club: i64,
        user: i64,
        role: String,
    },
}

pub async fn clubs(command: ClubCommand, ctx: &Context) -> Result<()> {
    let client = ClubsClient::new(ctx.api.clone());
    match command {
        ClubCommand::List => {
            for club in client.list_mine().await? {
                println!("{:>4}  {}  ({})", club.id, club.name, club.slug);
            }
        }
        ClubCommand::Show { club } => {
            let club = client.get(club).await?;
            println!("{} ({})", club.name, club.slug);
            println!("  description: {}", dash(&club.description));
            println!("  contact:     {}", dash(&club.contact_email));
            println!("  phone:       {}", dash(&club.phone));
            println!("  website:     {}", dash(&club.website));
            println!(
                "  location:    {} / {}",
                dash(&club.country),
                dash(&club.region)
            );
        }
        ClubCommand::Create {
            name,
            slug,
            description,
        } => {
            let club = client
                .create(ClubCreate {
                    name,
                    slug,
                    description,
                })
                .await?;
            println!("Created club {} (id {})", club.name, club.id);
        }
        ClubCommand::Update {
            club,
            name,
            description,
            contact_email,
            phone,
            website,
            country,
            region,
        } => {
            let updated = client
                .update(
                    club,
                    ClubUpdate {
                        name,
                        description,
                        contact_email,
                        phone,
                        website,
                        country,
                        region,
                        ..Default::default()
                    },
                )
                .await?;
            println!("Updated club {}", updated.name);
        }
        ClubCommand::Role { club } => {
            println!("{}", client.my_role(club).await?);
        }
    }
    Ok(())
}

pub async fn members(command: MemberCommand, ctx: &Context) -> Result<()> {
    let client = ClubsClient::new(ctx.api.clone());
    match command {
        MemberCommand::List { club } => {
            for member in client.members(club).await? {
                let name = member
                    .user
                    .as_ref()
                    .map(|u| u.full_name.as_str())
                    .unwrap_or("(unknown)");
                println!("{:>4}  {}  {}", member.user_id, name, member.role);
            }
        }
        MemberCommand::Invite { club, email, role } => {
            let response = client
                .invite_member(club, MemberInvite { email, role })
                .await?;
            println!("{} (token {})", response.message, response.token);
        }
        MemberCommand::Invitations { club } => {
            for invitation in client.invitations(club).await? {
                println!(
                    "{}  {}  {}  {}",
                    invitation.email,
                    invitation.role,
                    invitation.status,
                    invitation.created_at.as_deref().unwrap_or("-")
                );
            }
        }
        MemberCommand::Remove { club, user } => {
            let response = client.remove_member(club, user).await?;
            println!("{}", response.message);
        }
        MemberCommand::SetRole { club, user, role } => {
            let response = client.set_member_role(club, user, &role).await?;
            println!("{} (user {} → {})", response.message, response.user_id, response.role);
        }
    }
    Ok(())
}
