use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One unmodified inbox entry.
///
/// Deserialization also accepts the field names used by Android SMS export
/// tools and the mobile client (`address` for the sender, `date` for the
/// epoch-millisecond timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(alias = "address")]
    pub sender: String,
    pub body: String,
    #[serde(alias = "date")]
    pub timestamp_millis: i64,
}

#[derive(Debug, Error)]
pub enum InboxError {
    #[error("SMS read permission denied")]
    PermissionDenied,
    #[error("inbox capability not available on this platform")]
    Unavailable,
    #[error("failed to read inbox export: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed inbox export: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Abstraction over a device inbox (or a stand-in for one).
///
/// Implementations may yield fewer than `limit` messages and must preserve
/// recency order, most recent first.
pub trait InboxSource: Send + Sync {
    fn list_messages(&self, limit: usize) -> Result<Vec<RawMessage>, InboxError>;
}

// ── Mock source (always available, used for tests) ────────────────────────────

/// Serves a preset message list, or a preset failure. Useful for unit
/// testing the import pipeline without a device inbox.
pub struct MockInbox {
    messages: Vec<RawMessage>,
    failure: Option<fn() -> InboxError>,
}

impl MockInbox {
    pub fn new(messages: Vec<RawMessage>) -> Self {
        Self { messages, failure: None }
    }

    /// An inbox whose read permission was refused.
    pub fn permission_denied() -> Self {
        Self { messages: vec![], failure: Some(|| InboxError::PermissionDenied) }
    }

    /// A platform with no SMS capability at all.
    pub fn unavailable() -> Self {
        Self { messages: vec![], failure: Some(|| InboxError::Unavailable) }
    }
}

impl InboxSource for MockInbox {
    fn list_messages(&self, limit: usize) -> Result<Vec<RawMessage>, InboxError> {
        if let Some(fail) = self.failure {
            return Err(fail());
        }
        Ok(self.messages.iter().take(limit).cloned().collect())
    }
}

// ── JSON export source ────────────────────────────────────────────────────────

/// Reads a JSON array of [`RawMessage`] from disk: the desktop stand-in for
/// the device inbox, fed by SMS backup/export tools.
pub struct JsonExportInbox {
    path: PathBuf,
}

impl JsonExportInbox {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl InboxSource for JsonExportInbox {
    fn list_messages(&self, limit: usize) -> Result<Vec<RawMessage>, InboxError> {
        let data = std::fs::read_to_string(&self.path)?;
        let mut messages: Vec<RawMessage> = serde_json::from_str(&data)?;
        messages.truncate(limit);
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn msg(sender: &str, body: &str, ts: i64) -> RawMessage {
        RawMessage { sender: sender.into(), body: body.into(), timestamp_millis: ts }
    }

    #[test]
    fn mock_serves_messages_up_to_limit() {
        let inbox = MockInbox::new(vec![msg("a", "1", 3), msg("b", "2", 2), msg("c", "3", 1)]);
        let listed = inbox.list_messages(2).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].sender, "a");
    }

    #[test]
    fn mock_failure_modes() {
        assert!(matches!(
            MockInbox::permission_denied().list_messages(10),
            Err(InboxError::PermissionDenied)
        ));
        assert!(matches!(
            MockInbox::unavailable().list_messages(10),
            Err(InboxError::Unavailable)
        ));
    }

    #[test]
    fn raw_message_accepts_export_field_aliases() {
        let m: RawMessage = serde_json::from_str(
            r#"{"address": "VM-ICICIB", "body": "Rs.500 debited", "date": 1700000000000}"#,
        )
        .unwrap();
        assert_eq!(m.sender, "VM-ICICIB");
        assert_eq!(m.timestamp_millis, 1_700_000_000_000);
    }

    #[test]
    fn json_export_inbox_reads_and_truncates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let export = serde_json::to_string(&vec![
            msg("VM-ICICIB", "Rs.500 debited", 3),
            msg("VM-HDFCBK", "Rs.200 credited", 2),
            msg("Mom", "call me", 1),
        ])
        .unwrap();
        file.write_all(export.as_bytes()).unwrap();

        let inbox = JsonExportInbox::new(file.path());
        assert_eq!(inbox.list_messages(10).unwrap().len(), 3);
        assert_eq!(inbox.list_messages(1).unwrap().len(), 1);
    }

    #[test]
    fn json_export_inbox_missing_file_is_io_error() {
        let inbox = JsonExportInbox::new("/nonexistent/inbox.json");
        assert!(matches!(inbox.list_messages(10), Err(InboxError::Io(_))));
    }

    #[test]
    fn json_export_inbox_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let inbox = JsonExportInbox::new(file.path());
        assert!(matches!(inbox.list_messages(10), Err(InboxError::Malformed(_))));
    }
}
