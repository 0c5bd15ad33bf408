use chrono::{TimeZone, Utc};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use khata_core::{ParsedTransaction, PaymentMode};

use crate::inbox::RawMessage;
use crate::re;

/// Characters of the raw body carried into the transaction description.
const DESCRIPTION_LEN: usize = 140;

// Pass 1: a currency-marked number. Tolerant of the token variants seen in
// the wild (INR, NR, Rs, Rs., the Rupee sign), comma digit-grouping, and up
// to two fractional digits.
re!(re_currency_amount, r"(?i)(?:i?nr|rs\.?|₹)\s*([0-9,]+(?:\.[0-9]{1,2})?)");
// Pass 2: a number within 20 characters after a transaction keyword, for
// messages that omit or misspell the currency token.
re!(re_keyword_amount,
    r"(?i)(?:debited|credited|spent|purchase|withdrawn|payment|pos|upi|imps|neft|txn)[^0-9]{0,20}([0-9,]+(?:\.[0-9]{1,2})?)");

re!(re_debit_keyword, r"(?i)debited|spent|withdrawn|payment|purchase|pos|upi");
re!(re_credit_keyword, r"(?i)credited");

// The captured name runs to 40 characters or the first character outside the
// class. The class includes '-', so trailing metadata (dates, reference
// fragments) can end up in the merchant name; downstream consumers rely on
// this exact capture, so it stays.
re!(re_merchant, r"(?i)(?:at|to)\s+([A-Za-z0-9 &._-]{2,40})");

re!(re_mode_upi, r"(?i)upi");
re!(re_mode_card, r"(?i)pos|card|debit card|credit card");

/// Turns one inbox message into a structured transaction, or `None` when the
/// message carries no extractable non-zero amount.
pub struct Extractor;

impl Extractor {
    pub fn extract(msg: &RawMessage) -> Option<ParsedTransaction> {
        let body = msg.body.as_str();

        let magnitude = Self::extract_amount(body)?;

        // "credited" beats any debit keyword in the same message.
        let is_debit =
            re_debit_keyword().is_match(body) && !re_credit_keyword().is_match(body);
        let amount = if is_debit { -magnitude } else { magnitude };

        let merchant = Self::extract_merchant(body).unwrap_or_else(|| {
            if is_debit { "Expense" } else { "Income" }.to_string()
        });

        let occurred_at = Utc.timestamp_millis_opt(msg.timestamp_millis).single()?;

        Some(ParsedTransaction {
            amount,
            merchant,
            description: body.chars().take(DESCRIPTION_LEN).collect(),
            occurred_at,
            mode: Self::extract_mode(body),
        })
    }

    /// Currency-marked amounts first, keyword-adjacent amounts as fallback.
    /// A magnitude of zero counts as "no amount" at every stage.
    fn extract_amount(body: &str) -> Option<Decimal> {
        capture_amount(re_currency_amount(), body)
            .or_else(|| capture_amount(re_keyword_amount(), body))
    }

    fn extract_merchant(body: &str) -> Option<String> {
        let c = re_merchant().captures(body)?;
        let name = c.get(1)?.as_str().trim();
        if name.is_empty() {
            return None;
        }
        Some(name.to_string())
    }

    fn extract_mode(body: &str) -> PaymentMode {
        if re_mode_upi().is_match(body) {
            PaymentMode::Upi
        } else if re_mode_card().is_match(body) {
            PaymentMode::Card
        } else {
            PaymentMode::Bank
        }
    }
}

fn capture_amount(re: &Regex, body: &str) -> Option<Decimal> {
    let c = re.captures(body)?;
    let dec = parse_amount_str(c.get(1)?.as_str())?;
    if dec.is_zero() {
        return None;
    }
    Some(dec)
}

fn parse_amount_str(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.replace(',', "")).ok()
}
