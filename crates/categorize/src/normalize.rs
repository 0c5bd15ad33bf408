use khata_core::Category;

// Same first-match-wins table shape as the heuristic rules, but over the
// looser vocabulary an external classifier (or a human) might use.
const FAMILIES: &[(Category, &[&str])] = &[
    (Category::Food, &["food", "restaurant", "dining", "eat", "cafe"]),
    (
        Category::Travel,
        &[
            "travel", "transport", "uber", "ola", "flight", "train", "bus", "hotel", "taxi",
            "fuel", "petrol", "diesel",
        ],
    ),
    (
        Category::Shopping,
        &["shop", "shopping", "purchase", "store", "mall", "amazon", "flipkart", "myntra"],
    ),
    (
        Category::Bills,
        &["bill", "bills", "electricity", "water", "dth", "recharge", "rent", "emi", "utility"],
    ),
    (
        Category::Investments,
        &["invest", "mutual", "sip", "stock", "equity", "dividend", "interest"],
    ),
    (Category::Other, &["other", "misc", "general"]),
];

/// Maps arbitrary free text (typically a classifier's reply) onto the
/// fixed category set. Unrecognized or empty input is `Other`.
pub fn normalize_category(raw: &str) -> Category {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return Category::Other;
    }
    FAMILIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}
