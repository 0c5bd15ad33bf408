use khata_core::ParsedTransaction;

use crate::extract::Extractor;
use crate::filter;
use crate::inbox::{InboxSource, RawMessage};

/// Default number of most-recent inbox messages to scan.
pub const DEFAULT_IMPORT_LIMIT: usize = 200;

fn strict(msg: &RawMessage) -> bool {
    filter::is_candidate(msg)
}

/// Sender-ID formats vary unpredictably across carriers and test
/// environments; dropping the sender check trades precision for recall while
/// the keyword check still screens out ordinary texts.
fn body_only(msg: &RawMessage) -> bool {
    filter::is_transaction_body(&msg.body)
}

// Passes are tried in order until one yields transactions.
const PASSES: [(&str, fn(&RawMessage) -> bool); 2] =
    [("strict", strict), ("body-only", body_only)];

/// Orchestrates: read inbox → filter → parse, with a relaxed second pass when
/// the strict pass comes up empty.
///
/// Holds no state across calls; safe to invoke repeatedly and concurrently on
/// independent sources.
pub struct ImportPipeline<S: InboxSource> {
    source: S,
}

impl<S: InboxSource> ImportPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Scan up to `limit` most-recent messages and return every parseable
    /// transaction, in inbox order.
    ///
    /// An unreadable inbox (permission refused, capability absent, bad
    /// export) is an empty import, never an error.
    pub fn import(&self, limit: usize) -> Vec<ParsedTransaction> {
        let raw = match self.source.list_messages(limit) {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!("inbox unavailable, importing nothing: {e}");
                return Vec::new();
            }
        };

        for (pass, accepts) in PASSES {
            let parsed: Vec<ParsedTransaction> = raw
                .iter()
                .filter(|m| accepts(m))
                .filter_map(Extractor::extract)
                .collect();
            tracing::debug!(pass, raw = raw.len(), parsed = parsed.len(), "import pass");
            if !parsed.is_empty() {
                return parsed;
            }
        }

        Vec::new()
    }
}
