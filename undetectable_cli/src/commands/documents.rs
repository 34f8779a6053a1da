use anyhow::Result;
use clap::Args;
use undetectable_api::types::{DocumentIdRequest, ListDocumentsRequest};
use undetectable_api::Client;

use crate::input;
use crate::output::{print_document, print_documents, print_rehumanize, OutputFormat};

#[derive(Args)]
pub struct DocumentArgs {
    /// Document ID returned by `submit`
    pub id: String,
}

#[derive(Args)]
pub struct RehumanizeArgs {
    /// Document ID returned by `submit`
    pub id: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Number of documents to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

pub async fn run_document(
    args: &DocumentArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let id = input::validate_id(&args.id)?;
    let doc = client.retrieve_document(&DocumentIdRequest::new(id)).await?;
    if !doc.is_complete() {
        tracing::info!("Document {} is still being processed", doc.id);
    }
    print_document(&doc, format);
    Ok(())
}

pub async fn run_rehumanize(
    args: &RehumanizeArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let id = input::validate_id(&args.id)?;
    let resp = client
        .rehumanize_document(&DocumentIdRequest::new(id))
        .await?;
    print_rehumanize(&resp, format);
    Ok(())
}

pub async fn run_list(args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut request = ListDocumentsRequest::default();
    if let Some(offset) = args.offset {
        request = request.with_offset(offset);
    }

    let resp = client.list_documents(&request).await?;
    print_documents(&resp.documents, format);

    if resp.pagination {
        let next = args.offset.unwrap_or(0) as usize + resp.documents.len();
        eprintln!("More documents available; rerun with --offset {}", next);
    }
    Ok(())
}
