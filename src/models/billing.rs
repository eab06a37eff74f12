//! Billing models

use serde::{Deserialize, Serialize};

/// Body for `POST payment/ios/webhook/`, reporting a store purchase so the
/// backend can flip the account's entitlement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseNotification {
    pub transaction_id: String,
    pub product_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_notification_roundtrip() {
        let notification = PurchaseNotification {
            transaction_id: "txn-42".to_string(),
            product_id: "premium.monthly".to_string(),
        };
        let json = serde_json::to_string(&notification).unwrap();
        let back: PurchaseNotification = serde_json::from_str(&json).unwrap();
        assert_eq!(back.transaction_id, "txn-42");
        assert_eq!(back.product_id, "premium.monthly");
    }
}
