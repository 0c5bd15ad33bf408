pub mod categorizer;
pub mod classifier;
pub mod normalize;
pub mod rules;

pub use categorizer::{Categorizer, DEFAULT_CLASSIFY_TIMEOUT};
pub use classifier::{ClassifyError, Classifier, GeminiClassifier, MockClassifier, NoClassifier};
pub use normalize::normalize_category;
pub use rules::heuristic_categorize;
