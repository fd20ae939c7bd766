use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque token identifying an item or a customer.
///
/// Serialized as a hyphenated v4 UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(Uuid);

impl Identifier {
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: Identifier,
    pub quantity: u32,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer_id: Identifier,
    pub line_items: Vec<LineItem>,
}

/// What happened to one published order. The status is recorded, never acted on.
#[derive(Debug, Clone, Serialize)]
pub struct PublishOutcome {
    pub sequence: usize,
    pub customer_id: Identifier,
    pub line_items: usize,
    pub status: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<PublishOutcome>,
}

impl PublishReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successful(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| (200..300).contains(&o.status))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.successful()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order {
            customer_id: Identifier::from_random_bytes([7; 16]),
            line_items: vec![LineItem {
                item_id: Identifier::from_random_bytes([9; 16]),
                quantity: 3,
                price: 4200,
            }],
        }
    }

    #[test]
    fn test_order_json_shape() {
        let value = serde_json::to_value(sample_order()).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj["customer_id"].is_string());

        let item = &obj["line_items"][0];
        assert_eq!(item.as_object().unwrap().len(), 3);
        assert!(item["item_id"].is_string());
        assert_eq!(item["quantity"], 3);
        assert_eq!(item["price"], 4200);
    }

    #[test]
    fn test_identifier_is_v4_uuid() {
        let id = Identifier::from_random_bytes([0xab; 16]);

        assert_eq!(id.as_uuid().get_version_num(), 4);
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(Uuid::parse_str(&text).unwrap(), *id.as_uuid());
    }

    #[test]
    fn test_report_counts_by_status_class() {
        let customer_id = Identifier::from_random_bytes([1; 16]);
        let outcome = |sequence, status| PublishOutcome {
            sequence,
            customer_id,
            line_items: 1,
            status,
        };

        let report = PublishReport {
            started_at: Utc::now(),
            finished_at: Utc::now(),
            outcomes: vec![outcome(1, 201), outcome(2, 500), outcome(3, 200), outcome(4, 400)],
        };

        assert_eq!(report.total(), 4);
        assert_eq!(report.successful(), 2);
        assert_eq!(report.failed(), 2);
    }
}
