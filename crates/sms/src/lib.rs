pub mod extract;
pub mod filter;
pub mod inbox;
pub mod pipeline;

pub use extract::Extractor;
pub use filter::{is_bank_sender, is_candidate, is_transaction_body};
pub use inbox::{InboxError, InboxSource, JsonExportInbox, MockInbox, RawMessage};
pub use pipeline::{ImportPipeline, DEFAULT_IMPORT_LIMIT};

/// Lazily-compiled regex cached in a `OnceLock` static.
macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static regex::Regex {
            static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            R.get_or_init(|| regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}

pub(crate) use re;
