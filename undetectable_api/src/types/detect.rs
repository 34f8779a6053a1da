use serde::{Deserialize, Serialize};

/// Result of the `/detect` and `/detectIndividual` endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DetectResponse {
    /// How human-like the text reads, as scored by the detector.
    pub human: f64,
}

/// Body sent to the detector. The key travels in the body, not a header.
#[derive(Serialize)]
pub(crate) struct DetectRequest<'a> {
    pub text: &'a str,
    pub key: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_embeds_key() {
        let body = serde_json::to_value(DetectRequest {
            text: "hello",
            key: "k-1",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"text": "hello", "key": "k-1"}));
    }

    #[test]
    fn integer_score_parses() {
        let resp: DetectResponse = serde_json::from_str(r#"{"human": 87}"#).unwrap();
        assert_eq!(resp.human, 87.0);
    }
}
