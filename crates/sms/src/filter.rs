use crate::inbox::RawMessage;
use crate::re;

// Sender IDs on Indian DLT routes look like "VM-ICICIB": a 2–3 letter
// carrier/circle prefix, a hyphen, then the bank's registered header. The
// whole test is case-insensitive; bank names are matched anywhere in the
// sender string.
re!(re_dlt_sender,
    r"(?i)[A-Z]{2,3}-[A-Z0-9]{3,12}|ICICI|HDFC|SBI|AXIS|KOTAK|PNB|BOB|YES|IDFC|PAYTM|AMAZON|FLIPKART");
// Purely numeric senders (shortcodes, emulator test senders).
re!(re_numeric_sender, r"^[0-9]{5,15}$");

re!(re_txn_keywords,
    r"(?i)debited|credited|spent|purchase|withdrawn|payment|pos|upi|imps|neft|txn");

/// Sender plausibility: DLT short-code shape, a known bank/merchant name
/// anywhere in the sender, or a 5–15 digit numeric sender.
pub fn is_bank_sender(sender: &str) -> bool {
    re_dlt_sender().is_match(sender) || re_numeric_sender().is_match(sender)
}

/// Body plausibility: mentions at least one debit/credit/payment keyword.
/// A currency token is deliberately not required; test messages omit it.
pub fn is_transaction_body(body: &str) -> bool {
    re_txn_keywords().is_match(body)
}

/// A message is worth parsing only when both predicates hold.
pub fn is_candidate(msg: &RawMessage) -> bool {
    is_bank_sender(&msg.sender) && is_transaction_body(&msg.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dlt_shortcode_senders_match() {
        assert!(is_bank_sender("VM-ICICIB"));
        assert!(is_bank_sender("AD-HDFCBK"));
        assert!(is_bank_sender("JK-SBIINB"));
    }

    #[test]
    fn shortcode_match_is_case_insensitive() {
        // One (?i) flag covers the whole alternation, short-code arm included.
        assert!(is_bank_sender("vm-icicib"));
    }

    #[test]
    fn bank_name_anywhere_in_sender_matches() {
        assert!(is_bank_sender("PAYTM"));
        assert!(is_bank_sender("AMAZONPAY"));
        assert!(is_bank_sender("flipkart-offers"));
    }

    #[test]
    fn numeric_senders_match_between_5_and_15_digits() {
        assert!(is_bank_sender("56767"));
        assert!(is_bank_sender("919876543210"));
        assert!(!is_bank_sender("1234"));
        assert!(!is_bank_sender("1234567890123456"));
    }

    #[test]
    fn ordinary_senders_do_not_match() {
        assert!(!is_bank_sender("Mom"));
        assert!(!is_bank_sender("+notanumber"));
        assert!(!is_bank_sender(""));
    }

    #[test]
    fn transaction_keywords_match_case_insensitively() {
        assert!(is_transaction_body("Rs.500 DEBITED from a/c"));
        assert!(is_transaction_body("payment received via Upi"));
        assert!(is_transaction_body("NEFT transfer completed"));
    }

    #[test]
    fn non_transaction_bodies_do_not_match() {
        assert!(!is_transaction_body("Your OTP is 4512"));
        assert!(!is_transaction_body("Recharge offer: 2GB/day"));
        assert!(!is_transaction_body(""));
    }

    #[test]
    fn candidate_requires_both_predicates() {
        let bank_txn = RawMessage {
            sender: "VM-ICICIB".into(),
            body: "Rs.500 debited".into(),
            timestamp_millis: 0,
        };
        let bank_otp = RawMessage { body: "Your OTP is 4512".into(), ..bank_txn.clone() };
        let friend_txn = RawMessage { sender: "Mom".into(), ..bank_txn.clone() };

        assert!(is_candidate(&bank_txn));
        assert!(!is_candidate(&bank_otp));
        assert!(!is_candidate(&friend_txn));
    }
}
