use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use undetectable_api::types::{
    DetectResponse, Document, RehumanizeDocumentResponse, SubmitDocumentResponse,
};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

const PREVIEW_CHARS: usize = 60;

#[derive(Tabled, Serialize)]
struct DetectRow {
    #[tabled(rename = "Human Score")]
    #[serde(rename = "Human Score")]
    human: String,
}

#[derive(Tabled, Serialize)]
struct JobRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
struct DocumentRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
    #[tabled(rename = "Readability")]
    #[serde(rename = "Readability")]
    readability: String,
    #[tabled(rename = "Purpose")]
    #[serde(rename = "Purpose")]
    purpose: String,
    #[tabled(rename = "Output")]
    #[serde(rename = "Output")]
    output: String,
}

fn build_detect_rows(result: &DetectResponse) -> Vec<DetectRow> {
    vec![DetectRow {
        human: format!("{:.1}", result.human),
    }]
}

fn build_submit_rows(resp: &SubmitDocumentResponse) -> Vec<JobRow> {
    vec![JobRow {
        id: resp.id.clone(),
        status: resp.status.clone(),
    }]
}

fn build_rehumanize_rows(resp: &RehumanizeDocumentResponse) -> Vec<JobRow> {
    vec![JobRow {
        id: resp.id.clone(),
        status: resp.status.clone(),
    }]
}

fn build_document_rows(documents: &[Document]) -> Vec<DocumentRow> {
    documents
        .iter()
        .map(|d| DocumentRow {
            id: d.id.clone(),
            created: d.created_date.clone(),
            readability: d.readability.clone(),
            purpose: d.purpose.clone(),
            output: match &d.output {
                Some(text) => preview(text),
                None => "(processing)".to_string(),
            },
        })
        .collect()
}

fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    }
}

fn print_rows<T: Tabled>(rows: Vec<T>, format: &OutputFormat) {
    let mut table = Table::new(rows);
    if let OutputFormat::Markdown = format {
        table.with(Style::markdown());
    }
    println!("{}", table);
}

pub fn print_detect(result: &DetectResponse, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(result),
        _ => print_rows(build_detect_rows(result), format),
    }
}

pub fn print_submit(resp: &SubmitDocumentResponse, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(resp),
        _ => print_rows(build_submit_rows(resp), format),
    }
}

pub fn print_rehumanize(resp: &RehumanizeDocumentResponse, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(resp),
        _ => print_rows(build_rehumanize_rows(resp), format),
    }
}

pub fn print_documents(documents: &[Document], format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&documents),
        _ => print_rows(build_document_rows(documents), format),
    }
}

/// Prints one document, including its full output text below the summary table.
pub fn print_document(document: &Document, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(document),
        _ => {
            print_rows(build_document_rows(std::slice::from_ref(document)), format);
            if let Some(text) = &document.output {
                println!();
                println!("{}", text);
            }
        }
    }
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
