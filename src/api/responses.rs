// src/api/responses.rs
//! Wire payloads of the recording service.

use serde::Deserialize;

/// Verdict payload of the recording service's file lookup.
///
/// The service answers through `ReturnCode`: zero means the file is
/// already in the repository, any other value means it is not. Other
/// fields vary between service versions and carry no meaning here.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupPayload {
    #[serde(rename = "ReturnCode")]
    pub return_code: i64,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl LookupPayload {
    /// Whether the service confirmed the file already exists.
    pub fn indicates_existing(&self) -> bool {
        self.return_code == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_return_code_means_existing() {
        let payload: LookupPayload =
            serde_json::from_str(r#"{"ReturnCode": 0}"#).expect("payload should parse");
        assert!(payload.indicates_existing());
    }

    #[test]
    fn nonzero_return_code_means_absent() {
        let payload: LookupPayload =
            serde_json::from_str(r#"{"ReturnCode": 1, "Message": "no such file"}"#)
                .expect("payload should parse");
        assert!(!payload.indicates_existing());
        assert_eq!(payload.message.as_deref(), Some("no such file"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload: LookupPayload =
            serde_json::from_str(r#"{"ReturnCode": 0, "Elapsed": 12, "Host": "svc-3"}"#)
                .expect("payload should parse");
        assert!(payload.indicates_existing());
    }

    #[test]
    fn missing_return_code_fails_to_parse() {
        assert!(serde_json::from_str::<LookupPayload>(r#"{"Message": "ok"}"#).is_err());
    }

    #[test]
    fn wrongly_typed_return_code_fails_to_parse() {
        assert!(serde_json::from_str::<LookupPayload>(r#"{"ReturnCode": "0"}"#).is_err());
    }
}
