mod options;
pub use self::options::{Purpose, Readability, Strength};

mod detect;
pub(crate) use self::detect::DetectRequest;
pub use self::detect::DetectResponse;

mod document;
pub use self::document::{
    Document, DocumentID, DocumentIdRequest, ListDocumentsRequest, ListDocumentsResponse,
    RehumanizeDocumentResponse, SubmitDocumentRequest, SubmitDocumentResponse,
};
