use khata_core::{Categorization, Category};

/// One row of the category table: any keyword hit assigns the category at
/// the row's confidence.
struct KeywordRule {
    category: Category,
    confidence: u8,
    keywords: &'static [&'static str],
}

/// Confidence reported when no keyword matches.
pub(crate) const FALLBACK_CONFIDENCE: u8 = 50;

// Evaluated top to bottom, first match wins: Food outranks Travel, Travel
// outranks Shopping, and so on. Keep the ordering stable: callers and stored
// confidences depend on it.
const RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Food,
        confidence: 70,
        keywords: &["zomato", "swiggy", "restaurant", "food", "cafe", "domino", "pizza", "burger"],
    },
    KeywordRule {
        category: Category::Travel,
        confidence: 70,
        keywords: &[
            "uber", "ola", "fuel", "petrol", "diesel", "flight", "train", "hotel", "travel",
            "bus", "cab", "taxi",
        ],
    },
    KeywordRule {
        category: Category::Shopping,
        confidence: 65,
        keywords: &["amazon", "flipkart", "myntra", "shopping", "store", "mall", "purchase"],
    },
    KeywordRule {
        category: Category::Bills,
        confidence: 65,
        keywords: &["bill", "electricity", "water", "dth", "recharge", "rent", "emi"],
    },
    KeywordRule {
        category: Category::Investments,
        confidence: 60,
        keywords: &["dividend", "interest", "investment", "mutual fund", "sip", "stock"],
    },
];

/// Keyword-based, zero-network categorization over `merchant + " " +
/// description`, lowercased. Falls back to `Other` at confidence 50.
pub fn heuristic_categorize(merchant: &str, description: &str) -> Categorization {
    let text = format!("{merchant} {description}").to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| text.contains(k)))
        .map(|rule| Categorization::new(rule.category, rule.confidence))
        .unwrap_or_else(|| Categorization::new(Category::Other, FALLBACK_CONFIDENCE))
}
