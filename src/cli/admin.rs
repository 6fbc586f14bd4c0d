//! Superadmin configuration screens

use clap::Subcommand;

use super::Context;
use crate::admin::{AdminClient, EmailConfigUpdate};
use crate::common::Result;

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Show the outgoing email configuration (password stays masked)
    EmailShow,
    /// Update the outgoing email configuration
    EmailSet {
        #[arg(long)]
        server: String,
        #[arg(long, default_value_t = 587)]
        port: u16,
        #[arg(long)]
        username: String,
        /// New SMTP password; omit to keep the stored one
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        from_email: String,
        /// Use STARTTLS, e.g. --use-tls false to disable
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        use_tls: bool,
        #[arg(long, action = clap::ArgAction::Set, default_value_t = false)]
        use_ssl: bool,
        #[arg(long)]
        frontend_url: Option<String>,
    },
    /// Send a test email to verify the configuration
    TestEmail { to: String },
}

pub async fn admin(command: AdminCommand, ctx: &Context) -> Result<()> {
    let client = AdminClient::new(ctx.api.clone());
    match command {
        AdminCommand::EmailShow => {
            let config = client.email_config().await?;
            println!("server:   {}:{}", config.smtp_server, config.smtp_port);
            println!("username: {}", config.smtp_username);
            println!("password: {}", config.smtp_password);
            println!("from:     {}", config.smtp_from_email);
            println!("tls/ssl:  {}/{}", config.smtp_use_tls, config.smtp_use_ssl);
            if let Some(frontend_url) = config.frontend_url {
                println!("frontend: {}", frontend_url);
            }
        }
        AdminCommand::EmailSet {
            server,
            port,
            username,
            password,
            from_email,
            use_tls,
            use_ssl,
            frontend_url,
        } => {
            let config = client
                .update_email_config(EmailConfigUpdate {
                    smtp_server: server,
                    smtp_port: port,
                    smtp_username: username,
                    smtp_password: password,
                    smtp_from_email: from_email,
                    smtp_use_tls: use_tls,
                    smtp_use_ssl: use_ssl,
                    frontend_url,
                })
                .await?;
            println!("Email configuration saved ({})", config.smtp_server);
        }
        AdminCommand::TestEmail { to } => {
            let response = client.send_test_email(&to).await?;
            println!("{}", response.message);
        }
    }
    Ok(())
}
