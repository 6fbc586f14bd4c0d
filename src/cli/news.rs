//! News and comment screens

use clap::Subcommand;

use super::Context;
use crate::common::Result;
use crate::news::client::DEFAULT_PAGE_SIZE;
use crate::news::{NewsClient, NewsCreate, NewsUpdate};

#[derive(Subcommand)]
pub enum NewsCommand {
    List {
        club: i64,
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,
    },
    Show {
        club: i64,
        id: i64,
    },
    /// Publish a news item (admin only)
    Create {
        club: i64,
        title: String,
        content: String,
        #[arg(long)]
        category: Option<String>,
        /// Disable the comment thread under this item
        #[arg(long)]
        no_comments: bool,
    },
    /// Edit a news item (author or admin)
    Update {
        club: i64,
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    Delete {
        club: i64,
        id: i64,
    },
    /// Show the comment thread
    Comments {
        club: i64,
        id: i64,
    },
    /// Add a comment
    Comment {
        club: i64,
        id: i64,
        text: String,
    },
    DeleteComment {
        club: i64,
        id: i64,
        comment: i64,
    },
}

pub async fn news(command: NewsCommand, ctx: &Context) -> Result<()> {
    let client = NewsClient::new(ctx.api.clone());
    match command {
        NewsCommand::List { club, skip, limit } => {
            for item in client.list(club, skip, limit).await? {
                let comments = item
                    .comment_count
                    .map(|n| format!("  [{} comments]", n))
                    .unwrap_or_default();
                println!(
                    "{:>4}  {}  {}{}",
                    item.id,
                    item.created_at.as_deref().unwrap_or("-"),
                    item.title,
                    comments
                );
            }
        }
        NewsCommand::Show { club, id } => {
            let item = client.get(club, id).await?;
            println!("# {}", item.title);
            if let Some(author) = &item.author {
                println!("by {}", author.full_name);
            }
            println!();
            println!("{}", item.content);
        }
        NewsCommand::Create {
            club,
            title,
            content,
            category,
            no_comments,
        } => {
            let item = client
                .create(
                    club,
                    NewsCreate {
                        title,
                        content,
                        category,
                        image_url: None,
                        visibility: None,
                        comments_enabled: if no_comments { Some(false) } else { None },
                    },
                )
                .await?;
            println!("Published \"{}\" (id {})", item.title, item.id);
        }
        NewsCommand::Update {
            club,
            id,
            title,
            content,
            status,
        } => {
            let item = client
                .update(
                    club,
                    id,
                    NewsUpdate {
                        title,
                        content,
                        status,
                        ..Default::default()
                    },
                )
                .await?;
            println!("Updated \"{}\"", item.title);
        }
        NewsCommand::Delete { club, id } => {
            let response = client.delete(club, id).await?;
            println!("{}", response.message);
        }
        NewsCommand::Comments { club, id } => {
            let comments = client.comments(club, id).await?;
            if comments.is_empty() {
                println!("No comments yet");
            }
            for comment in comments {
                let author = comment
                    .author
                    .as_ref()
                    .map(|a| a.full_name.as_str())
                    .unwrap_or("(unknown)");
                println!("[{}] {}: {}", comment.id, author, comment.content);
            }
        }
        NewsCommand::Comment { club, id, text } => {
            let comment = client.post_comment(club, id, &text).await?;
            println!("Comment {} added", comment.id);
        }
        NewsCommand::DeleteComment { club, id, comment } => {
            let response = client.delete_comment(club, id, comment).await?;
            println!("{}", response.message);
        }
    }
    Ok(())
}
