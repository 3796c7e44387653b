//! Payment details collected in the second checkout step.

use serde::{Deserialize, Serialize};

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
    Bank,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Bank => "bank",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Bank => "Bank Transfer",
        }
    }
}

/// Payment form state. Card fields only matter for card payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
}

impl PaymentInfo {
    /// Names of required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        if self.method != PaymentMethod::Card {
            return Vec::new();
        }
        [
            ("card number", &self.card_number),
            ("expiry date", &self.expiry_date),
            ("cvv", &self.cvv),
            ("name on card", &self.card_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Last four digits of the card, for order summaries.
    pub fn card_last4(&self) -> Option<&str> {
        if self.method != PaymentMethod::Card {
            return None;
        }
        let digits = self.card_number.trim();
        digits
            .len()
            .checked_sub(4)
            .and_then(|start| digits.get(start..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_requires_all_fields() {
        let mut info = PaymentInfo::default();
        assert_eq!(info.missing_fields().len(), 4);

        info.card_number = "4111111111111111".to_string();
        info.expiry_date = "12/28".to_string();
        info.cvv = "123".to_string();
        assert_eq!(info.missing_fields(), vec!["name on card"]);

        info.card_name = "ANA QUISPE".to_string();
        assert!(info.is_complete());
        assert_eq!(info.card_last4(), Some("1111"));
    }

    #[test]
    fn test_other_methods_always_complete() {
        let info = PaymentInfo {
            method: PaymentMethod::Paypal,
            ..Default::default()
        };
        assert!(info.is_complete());
        assert_eq!(info.card_last4(), None);

        let info = PaymentInfo {
            method: PaymentMethod::Bank,
            ..Default::default()
        };
        assert!(info.is_complete());
    }
}
