use std::time::Duration;

use khata_core::{Categorization, Category};

use crate::classifier::{Classifier, NoClassifier};
use crate::normalize::normalize_category;
use crate::rules::heuristic_categorize;

/// Confidence reported for a classifier-derived category.
const CLASSIFIER_CONFIDENCE: u8 = 80;

/// Cap on one classifier round-trip; past it the heuristic result stands.
pub const DEFAULT_CLASSIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Heuristic-first categorization with an optional classifier fallback.
///
/// The classifier is consulted only when the keyword rules fall through to
/// `Other`. A classifier failure or timeout never surfaces to the caller:
/// the heuristic result is always a valid answer.
pub struct Categorizer<C: Classifier> {
    classifier: Option<C>,
    classify_timeout: Duration,
}

impl Categorizer<NoClassifier> {
    /// Keyword rules only; never performs I/O.
    pub fn heuristic_only() -> Self {
        Self::new(None)
    }
}

impl<C: Classifier> Categorizer<C> {
    pub fn new(classifier: Option<C>) -> Self {
        Self { classifier, classify_timeout: DEFAULT_CLASSIFY_TIMEOUT }
    }

    pub fn with_classifier(classifier: C) -> Self {
        Self::new(Some(classifier))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.classify_timeout = timeout;
        self
    }

    pub async fn categorize(&self, merchant: &str, description: &str) -> Categorization {
        let heuristic = heuristic_categorize(merchant, description);
        if heuristic.category != Category::Other {
            return heuristic;
        }

        let Some(classifier) = &self.classifier else {
            return heuristic;
        };

        match tokio::time::timeout(
            self.classify_timeout,
            classifier.classify(merchant, description),
        )
        .await
        {
            Ok(Ok(reply)) => {
                let category = normalize_category(&reply);
                tracing::debug!(raw = %reply, category = %category, "classifier reply");
                Categorization::new(category, CLASSIFIER_CONFIDENCE)
            }
            Ok(Err(e)) => {
                tracing::warn!("classifier failed, keeping heuristic result: {e}");
                heuristic
            }
            Err(_) => {
                tracing::warn!(
                    "classifier timed out after {:?}, keeping heuristic result",
                    self.classify_timeout
                );
                heuristic
            }
        }
    }
}
