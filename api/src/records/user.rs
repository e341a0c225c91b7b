use serde::Deserialize;
use serde::Serialize;

use super::numeric_string;
use super::Record;
use crate::format;
use crate::query::contains_ignore_case;
use crate::query::Queryable;

/// A customer account as returned by `GET /users`.
///
/// Monetary fields stay as the server sent them; they are only interpreted
/// when formatted or sorted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "numeric_string")]
    pub account_balance: String,
    #[serde(deserialize_with = "numeric_string")]
    pub recent_transaction: String,
    #[serde(deserialize_with = "numeric_string")]
    pub debit: String,
    #[serde(deserialize_with = "numeric_string")]
    pub credit: String,
    pub transaction_type: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Record for User {
    const COLLECTION: &'static str = "users";
}

/// The orderings offered by the transactions screen. Every key sorts
/// descending.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum UserSortKey {
    /// Newest `createdAt` first.
    Date,
    AccountBalance,
    Credit,
    Debit,
}

impl UserSortKey {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::AccountBalance => "Balance",
            Self::Credit => "Credit",
            Self::Debit => "Debit",
        }
    }

    /// The wire name, e.g. `account_balance`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl Queryable for User {
    type SortKey = UserSortKey;

    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
    }

    fn sort_value(&self, key: UserSortKey) -> Option<f64> {
        match key {
            UserSortKey::Date => format::timestamp_millis(&self.created_at),
            UserSortKey::AccountBalance => format::coerce_number(&self.account_balance),
            UserSortKey::Credit => format::coerce_number(&self.credit),
            UserSortKey::Debit => format::coerce_number(&self.debit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn decodes_mock_api_payload() {
        let json = r#"{
            "createdAt": "2024-12-31T10:15:00.000Z",
            "name": "Ada Lovelace",
            "account_balance": "1000",
            "recent_transaction": 250,
            "transaction_type": true,
            "debit": "40.5",
            "credit": "12",
            "id": "1"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.recent_transaction, "250");
        assert_eq!(user.created_at, "2024-12-31T10:15:00.000Z");
        assert!(user.transaction_type);
    }

    #[test]
    fn search_only_looks_at_the_name() {
        let user = User {
            name: "Grace Hopper".into(),
            account_balance: "hopper".into(),
            ..Default::default()
        };
        assert!(user.matches("hop"));
        assert!(!User { name: "Ada".into(), ..user }.matches("hop"));
    }

    #[test]
    fn sort_keys_round_trip_their_wire_names() {
        assert_eq!(UserSortKey::AccountBalance.as_str(), "account_balance");
        assert_eq!(UserSortKey::from_str("date").unwrap(), UserSortKey::Date);
    }
}
