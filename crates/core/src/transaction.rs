use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment rail inferred from the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Upi,
    Card,
    Bank,
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMode::Upi => write!(f, "UPI"),
            PaymentMode::Card => write!(f, "Card"),
            PaymentMode::Bank => write!(f, "Bank"),
        }
    }
}

/// A transaction reconstructed from a single bank SMS.
///
/// `amount` is signed: negative means money left the account (debit),
/// positive means money entered it (credit). It is never zero; messages
/// without an extractable non-zero amount produce no transaction at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub amount: Decimal,
    pub merchant: String,
    /// First 140 characters of the raw message body; feeds categorization.
    pub description: String,
    pub occurred_at: DateTime<Utc>,
    pub mode: PaymentMode,
}

impl ParsedTransaction {
    pub fn is_debit(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn sample(amount: &str) -> ParsedTransaction {
        ParsedTransaction {
            amount: Decimal::from_str(amount).unwrap(),
            merchant: "Amazon".to_string(),
            description: "Rs.500 debited at Amazon".to_string(),
            occurred_at: Utc.timestamp_millis_opt(1_704_067_200_000).unwrap(),
            mode: PaymentMode::Upi,
        }
    }

    #[test]
    fn payment_mode_display() {
        assert_eq!(PaymentMode::Upi.to_string(), "UPI");
        assert_eq!(PaymentMode::Card.to_string(), "Card");
        assert_eq!(PaymentMode::Bank.to_string(), "Bank");
    }

    #[test]
    fn debit_is_negative_amount() {
        assert!(sample("-500.00").is_debit());
        assert!(!sample("500.00").is_debit());
    }

    #[test]
    fn serializes_timestamp_as_iso8601() {
        let json = serde_json::to_value(sample("-500.00")).unwrap();
        assert_eq!(json["occurred_at"], "2024-01-01T00:00:00Z");
    }
}
