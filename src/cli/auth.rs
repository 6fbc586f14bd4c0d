//! Login, registration, profile and invitation screens

use clap::{Args, Subcommand};

use super::{dash, prompt, required, Context};
use crate::auth::models::{InvitationRegisterRequest, RegisterRequest};
use crate::auth::{oauth, AuthClient, ProfileUpdate};
use crate::common::Result;

#[derive(Args)]
pub struct LoginArgs {
    /// Account email (prompted when omitted)
    pub email: Option<String>,
    /// Account password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
    /// Log in with a Google-issued token instead of a password
    #[arg(long, conflicts_with_all = ["email", "password"])]
    pub google_token: Option<String>,
    /// Print the Google authorization URL and exit
    #[arg(long, conflicts_with_all = ["email", "password", "google_token"])]
    pub google_url: bool,
}

#[derive(Args)]
pub struct RegisterArgs {
    pub email: Option<String>,
    /// Full name shown to other members
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    /// Invitation token; registration joins the club immediately
    #[arg(long)]
    pub invitation: Option<String>,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the profile as the backend sees it
    Show,
    /// Update profile fields and preferences
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        notifications: Option<bool>,
        /// Digest cadence: daily, weekly, never
        #[arg(long)]
        digest: Option<String>,
        #[arg(long)]
        dark_mode: Option<bool>,
        #[arg(long)]
        language: Option<String>,
    },
    /// Change the account password
    ChangePassword,
}

#[derive(Subcommand)]
pub enum InvitationCommand {
    /// List invitations waiting for this account
    List,
    Accept { token: String },
    Reject { token: String },
}

pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let client = AuthClient::new(ctx.api.clone());

    if args.google_url {
        let request = oauth::authorization_request(&ctx.config)?;
        println!("Open this URL in a browser to authorize:");
        println!("{}", request.url);
        println!("(state: {})", request.state);
        return Ok(());
    }

    let user = if let Some(token) = args.google_token {
        client.login_with_google(&token).await?
    } else {
        let email = required(args.email, "Email")?;
        let password = required(args.password, "Password")?;
        client.login(&email, &password).await?
    };

    println!("Logged in as {} <{}>", user.full_name, user.email);
    Ok(())
}

pub async fn logout(ctx: &Context) -> Result<()> {
    AuthClient::new(ctx.api.clone()).logout().await?;
    println!("Session cleared");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> Result<()> {
    match ctx.api.current_user().await {
        Some(user) => {
            println!("{} <{}>", user.full_name, user.email);
            if user.superadmin {
                println!("superadmin");
            }
        }
        None => println!("Not logged in"),
    }
    Ok(())
}

pub async fn register(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let client = AuthClient::new(ctx.api.clone());
    let email = required(args.email, "Email")?;
    let full_name = required(args.name, "Full name")?;
    let password = required(args.password, "Password")?;

    if let Some(invitation_token) = args.invitation {
        let user = client
            .register_from_invitation(InvitationRegisterRequest {
                email,
                full_name,
                password,
                invitation_token,
            })
            .await?;
        println!("Welcome, {}. Invitation accepted and session started", user.full_name);
    } else {
        let response = client
            .register(RegisterRequest {
                email,
                full_name,
                password,
            })
            .await?;
        println!("{} (account id {})", response.message, response.id);
        println!("Log in with: piar login {}", response.email);
    }
    Ok(())
}

pub async fn profile(command: ProfileCommand, ctx: &Context) -> Result<()> {
    let client = AuthClient::new(ctx.api.clone());
    match command {
        ProfileCommand::Show => {
            let user = client.me().await?;
            println!("{} <{}>", user.full_name, user.email);
            println!("  verified:      {}", user.email_verified);
            println!("  notifications: {}", user.notifications_enabled);
            println!("  digest:        {}", user.email_digest);
            println!("  dark mode:     {}", user.dark_mode);
            println!("  language:      {}", user.language);
            println!("  member since:  {}", dash(&user.created_at));
        }
        ProfileCommand::Update {
            name,
            notifications,
            digest,
            dark_mode,
            language,
        } => {
            let user = client
                .update_profile(ProfileUpdate {
                    full_name: name,
                    notifications_enabled: notifications,
                    email_digest: digest,
                    dark_mode,
                    language,
                })
                .await?;
            println!("Profile updated for {}", user.full_name);
        }
        ProfileCommand::ChangePassword => {
            let current = prompt("Current password")?;
            let new = prompt("New password")?;
            let response = client.change_password(&current, &new).await?;
            println!("{}", response.message);
        }
    }
    Ok(())
}

pub async fn invitations(command: InvitationCommand, ctx: &Context) -> Result<()> {
    let client = AuthClient::new(ctx.api.clone());
    match command {
        InvitationCommand::List => {
            let pending = client.pending_invitations().await?;
            if pending.is_empty() {
                println!("No pending invitations");
            }
            for invitation in pending {
                println!(
                    "{}  club {}  role {}  token {}",
                    invitation.club_name.as_deref().unwrap_or("(club)"),
                    invitation.club_id,
                    invitation.role,
                    invitation.token
                );
            }
        }
        InvitationCommand::Accept { token } => {
            let response = client.accept_invitation(&token).await?;
            println!("{}", response.message);
        }
        InvitationCommand::Reject { token } => {
            let response = client.reject_invitation(&token).await?;
            println!("{}", response.message);
        }
    }
    Ok(())
}
