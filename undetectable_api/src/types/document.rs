//! Request and response bodies for the humanizer endpoints.

use serde::{Deserialize, Serialize};

use super::{Purpose, Readability, Strength};

/// Opaque identifier the humanizer assigns to a submitted document.
pub type DocumentID = String;

/// Body of a `/submit` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubmitDocumentRequest {
    /// Text to humanize.
    pub content: String,

    pub readability: Readability,

    pub purpose: Purpose,

    /// Omitted from the body when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,
}

impl SubmitDocumentRequest {
    pub fn new(content: impl Into<String>, readability: Readability, purpose: Purpose) -> Self {
        Self {
            content: content.into(),
            readability,
            purpose,
            strength: None,
        }
    }

    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = Some(strength);
        self
    }
}

/// Response of a `/submit` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubmitDocumentResponse {
    pub status: String,
    pub id: DocumentID,
}

/// Body of the `/document` and `/rehumanize` requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocumentIdRequest {
    pub id: DocumentID,
}

impl DocumentIdRequest {
    pub fn new(id: impl Into<DocumentID>) -> Self {
        Self { id: id.into() }
    }
}

/// A document stored by the humanizer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentID,

    /// Humanized text. `None` while the document is still being processed.
    pub output: Option<String>,

    /// Text as originally submitted.
    pub input: String,

    /// Readability level as recorded by the service.
    pub readability: String,

    pub created_date: String,

    /// Purpose as recorded by the service.
    pub purpose: String,
}

impl Document {
    /// Whether the humanizer has produced output for this document yet.
    pub fn is_complete(&self) -> bool {
        self.output.is_some()
    }
}

/// Response of a `/rehumanize` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RehumanizeDocumentResponse {
    pub status: String,
    pub id: DocumentID,
}

/// Body of a `/list` request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListDocumentsRequest {
    /// Number of documents to skip. The server picks the first page when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ListDocumentsRequest {
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Response of a `/list` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListDocumentsResponse {
    /// Whether more documents exist past this page.
    pub pagination: bool,
    pub documents: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submit_omits_missing_strength() {
        let req = SubmitDocumentRequest::new("Some text", Readability::University, Purpose::Essay);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"content": "Some text", "readability": "University", "purpose": "Essay"})
        );
    }

    #[test]
    fn submit_includes_strength() {
        let req = SubmitDocumentRequest::new("x", Readability::Marketing, Purpose::MarketingMaterial)
            .with_strength(Strength::Balanced);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "content": "x",
                "readability": "Marketing",
                "purpose": "Marketing Material",
                "strength": "Balanced"
            })
        );
    }

    #[test]
    fn list_request_offset_is_optional() {
        assert_eq!(
            serde_json::to_value(ListDocumentsRequest::default()).unwrap(),
            json!({})
        );
        assert_eq!(
            serde_json::to_value(ListDocumentsRequest::default().with_offset(20)).unwrap(),
            json!({"offset": 20})
        );
    }

    #[test]
    fn document_id_request_body() {
        assert_eq!(
            serde_json::to_value(DocumentIdRequest::new("abc")).unwrap(),
            json!({"id": "abc"})
        );
    }

    #[test]
    fn missing_output_field_reads_as_pending() {
        let doc: Document = serde_json::from_value(json!({
            "id": "d1",
            "input": "in",
            "readability": "University",
            "createdDate": "2024-05-01T12:00:00.000Z",
            "purpose": "Essay"
        }))
        .unwrap();
        assert!(!doc.is_complete());
    }
}
