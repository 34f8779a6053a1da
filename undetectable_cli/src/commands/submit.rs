use anyhow::Result;
use clap::Args;
use undetectable_api::types::{Purpose, Readability, Strength, SubmitDocumentRequest};
use undetectable_api::Client;

use crate::input;
use crate::output::{print_submit, OutputFormat};

#[derive(Args)]
pub struct SubmitArgs {
    /// Document text, or `-` to read it from stdin
    pub content: String,

    /// Reading level: high-school, university, doctorate, journalist, marketing
    #[arg(long, default_value = "university")]
    pub readability: String,

    /// Purpose: general-writing, essay, article, marketing-material, story,
    /// cover-letter, report, business-material, legal-material
    #[arg(long, default_value = "general-writing")]
    pub purpose: String,

    /// Strength: quality, balanced, more-human (service default when omitted)
    #[arg(long)]
    pub strength: Option<String>,
}

/// Parses the enumerated options. Unknown values fail here, before any request is sent.
pub fn build_request(args: &SubmitArgs, content: String) -> Result<SubmitDocumentRequest> {
    let readability: Readability = args.readability.parse()?;
    let purpose: Purpose = args.purpose.parse()?;
    let mut request = SubmitDocumentRequest::new(content, readability, purpose);
    if let Some(ref strength) = args.strength {
        request = request.with_strength(strength.parse::<Strength>()?);
    }
    Ok(request)
}

pub async fn run(args: &SubmitArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let content = input::read_text(&args.content)?;
    let request = build_request(args, content)?;

    tracing::info!(
        "Submitting {} bytes ({}, {})",
        request.content.len(),
        request.readability,
        request.purpose
    );
    let resp = client.submit_document(&request).await?;

    print_submit(&resp, format);
    Ok(())
}
