//! Mutation Rules
//!
//! Pure decisions behind the create/update/delete flows.

use crate::api::ApiError;
use crate::models::Client;

/// Which save operation a submitted client maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Create,
    Update,
}

impl SubmitKind {
    /// A draft (empty id) creates, a persisted client updates
    pub fn for_client(client: &Client) -> Self {
        if client.is_draft() {
            SubmitKind::Create
        } else {
            SubmitKind::Update
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            SubmitKind::Create => "Cliente creado correctamente",
            SubmitKind::Update => "Cliente actualizado correctamente",
        }
    }
}

/// How save failures reach the user.
///
/// Delete failures always surface a toast when the backend sends a
/// structured message; create/update failures have historically only been
/// logged. That asymmetry is a switch here rather than an accident of the
/// handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationPolicy {
    pub notify_submit_failures: bool,
}

impl Default for MutationPolicy {
    fn default() -> Self {
        Self {
            notify_submit_failures: false,
        }
    }
}

/// In-flight flags of the four remote operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingOps {
    pub fetching: bool,
    pub creating: bool,
    pub updating: bool,
    pub deleting: bool,
}

impl PendingOps {
    /// The global busy indicator shows while any operation runs
    pub fn any(&self) -> bool {
        self.fetching || self.creating || self.updating || self.deleting
    }
}

/// User-visible text for a failed deletion.
///
/// Only structured responses carry a message worth showing; transport and
/// decode failures stay silent.
pub fn delete_error_message(err: &ApiError) -> Option<String> {
    match err {
        ApiError::Response { data, .. } => Some(data.msg.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BackendError;

    fn client(id: &str, name: &str) -> Client {
        Client {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_empty_id_creates_nonempty_updates() {
        assert_eq!(
            SubmitKind::for_client(&client("", "Pepe")),
            SubmitKind::Create
        );
        assert_eq!(
            SubmitKind::for_client(&client("abc", "Pepe")),
            SubmitKind::Update
        );
    }

    #[test]
    fn test_success_messages_are_distinct() {
        assert_ne!(
            SubmitKind::Create.success_message(),
            SubmitKind::Update.success_message()
        );
        assert_eq!(
            SubmitKind::Create.success_message(),
            "Cliente creado correctamente"
        );
        assert_eq!(
            SubmitKind::Update.success_message(),
            "Cliente actualizado correctamente"
        );
    }

    #[test]
    fn test_submit_failures_silent_by_default() {
        assert!(!MutationPolicy::default().notify_submit_failures);
    }

    #[test]
    fn test_pending_ops_aggregation() {
        assert!(!PendingOps::default().any());
        assert!(PendingOps {
            fetching: true,
            ..Default::default()
        }
        .any());
        assert!(PendingOps {
            deleting: true,
            ..Default::default()
        }
        .any());
        assert!(PendingOps {
            creating: true,
            updating: true,
            ..Default::default()
        }
        .any());
    }

    #[test]
    fn test_delete_message_from_structured_response() {
        let err = ApiError::Response {
            status: 400,
            data: BackendError {
                msg: "Cliente en uso".to_string(),
            },
        };
        assert_eq!(delete_error_message(&err), Some("Cliente en uso".to_string()));
    }

    #[test]
    fn test_delete_message_silent_on_opaque_failure() {
        assert_eq!(
            delete_error_message(&ApiError::Fetch("connection refused".to_string())),
            None
        );
        assert_eq!(
            delete_error_message(&ApiError::Decode("missing field".to_string())),
            None
        );
    }
}
