//! Frontend Models
//!
//! Data structures matching backend entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Client data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Client {
    /// Server-assigned identifier. Empty for a draft not yet created.
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl Client {
    /// A draft has no server-assigned id yet
    pub fn is_draft(&self) -> bool {
        self.id.is_empty()
    }
}

/// One page of the client collection plus the total count
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientPage {
    pub content: Vec<Client>,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
}

/// Structured error body returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendError {
    pub msg: String,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope_shape() {
        let json = r#"{
            "content": [
                {"id": "1", "name": "Pepe"},
                {"id": "2", "name": "Ana"}
            ],
            "totalElements": 12
        }"#;

        let page: ClientPage = serde_json::from_str(json).expect("page should deserialize");
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_elements, 12);
        assert_eq!(page.content[0].name, "Pepe");
        assert!(!page.content[0].is_draft());
    }

    #[test]
    fn test_draft_client_has_empty_id() {
        let draft = Client {
            id: String::new(),
            name: "Nuevo".to_string(),
        };
        assert!(draft.is_draft());
    }

    #[test]
    fn test_error_body_shape() {
        let err: BackendError = serde_json::from_str(r#"{"msg": "Cliente en uso"}"#).unwrap();
        assert_eq!(err.msg, "Cliente en uso");
    }
}
