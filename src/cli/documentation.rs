//! Documentation screens: insurance and license card records

use std::path::{Path, PathBuf};

use clap::Subcommand;

use super::{dash, Context};
use crate::common::{ApiError, Result};
use crate::documentation::{
    DocumentDownload, Documentation, DocumentationClient, DocumentationUpdate, FileUpload,
};

#[derive(Subcommand)]
pub enum DocsCommand {
    /// Show my documentation record
    Show,
    /// Show another member's record (admin screens)
    User { id: i64 },
    /// Create or update my record; files are uploaded as multipart
    Upload {
        #[arg(long)]
        insurance_number: Option<String>,
        #[arg(long)]
        insurance_issued: Option<String>,
        #[arg(long)]
        insurance_expires: Option<String>,
        #[arg(long)]
        insurance_file: Option<PathBuf>,
        #[arg(long)]
        license_number: Option<String>,
        #[arg(long)]
        license_issued: Option<String>,
        #[arg(long)]
        license_expires: Option<String>,
        #[arg(long)]
        license_file: Option<PathBuf>,
    },
    /// Download the stored insurance file
    DownloadInsurance {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Download the stored license card file
    DownloadLicense {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

async fn stage_file(path: &Path) -> Result<FileUpload> {
    let bytes = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| ApiError::Validation(format!("{} is not a file path", path.display())))?;
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Ok(FileUpload {
        filename,
        mime,
        bytes,
    })
}

fn print_record(doc: &Documentation) {
    println!("Insurance (seguro RC)");
    println!("  number:  {}", dash(&doc.insurance_number));
    println!("  issued:  {}", dash(&doc.insurance_issued_at));
    println!("  expires: {}", dash(&doc.insurance_expires_at));
    if doc.insurance_has_file {
        println!("  file:    {}", dash(&doc.insurance_file_name));
    }
    println!("License card (carnet)");
    println!("  number:  {}", dash(&doc.license_number));
    println!("  issued:  {}", dash(&doc.license_issued_at));
    println!("  expires: {}", dash(&doc.license_expires_at));
    if doc.license_has_file {
        println!("  file:    {}", dash(&doc.license_file_name));
    }
}

async fn save_download(download: DocumentDownload, out: Option<PathBuf>) -> Result<()> {
    let target = out.unwrap_or_else(|| PathBuf::from(&download.filename));
    tokio::fs::write(&target, &download.bytes).await?;
    println!("Saved {} ({} bytes)", target.display(), download.bytes.len());
    Ok(())
}

pub async fn docs(command: DocsCommand, ctx: &Context) -> Result<()> {
    let client = DocumentationClient::new(ctx.api.clone());
    match command {
        DocsCommand::Show => match client.mine().await? {
            Some(doc) => print_record(&doc),
            None => println!("No documentation on file yet"),
        },
        DocsCommand::User { id } => match client.for_user(id).await? {
            Some(doc) => print_record(&doc),
            None => println!("No documentation on file for user {}", id),
        },
        DocsCommand::Upload {
            insurance_number,
            insurance_issued,
            insurance_expires,
            insurance_file,
            license_number,
            license_issued,
            license_expires,
            license_file,
        } => {
            let insurance_file = match insurance_file {
                Some(path) => Some(stage_file(&path).await?),
                None => None,
            };
            let license_file = match license_file {
                Some(path) => Some(stage_file(&path).await?),
                None => None,
            };
            let doc = client
                .upsert_mine(DocumentationUpdate {
                    insurance_number,
                    insurance_issued_at: insurance_issued,
                    insurance_expires_at: insurance_expires,
                    license_number,
                    license_issued_at: license_issued,
                    license_expires_at: license_expires,
                    insurance_file,
                    license_file,
                })
                .await?;
            println!("Documentation saved");
            print_record(&doc);
        }
        DocsCommand::DownloadInsurance { out } => {
            save_download(client.download_insurance().await?, out).await?;
        }
        DocsCommand::DownloadLicense { out } => {
            save_download(client.download_license().await?, out).await?;
        }
    }
    Ok(())
}
