use serde::Deserialize;
use serde::Serialize;

use super::numeric_string;
use super::Record;
use crate::format;
use crate::query::contains_ignore_case;
use crate::query::Queryable;

/// A loan as returned by `GET /loan` or `POST /loan`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Loan {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "numeric_string")]
    pub active_loan: String,
    #[serde(deserialize_with = "numeric_string")]
    pub settled_loan: String,
    #[serde(deserialize_with = "numeric_string")]
    pub total_amount: String,
    pub purpose: String,
    /// ISO-8601 date the loan runs until.
    pub tenure: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Record for Loan {
    const COLLECTION: &'static str = "loans";
    const CREATED_NOTICE: &'static str = "Loan requested successfully!";
    const CREATE_FAILED_NOTICE: &'static str = "Failed to create the loan.";
    const CREATED_SLOT_KEY: Option<&'static str> = Some("createdLoan");
}

/// The body of `POST /loan`. The server assigns `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanDraft {
    pub name: String,
    pub active_loan: String,
    pub settled_loan: String,
    pub total_amount: String,
    pub purpose: String,
    pub tenure: String,
}

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
pub enum LoanSortKey {
    Date,
    TotalAmount,
    Tenure,
}

impl LoanSortKey {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::TotalAmount => "Total loan",
            Self::Tenure => "Tenure",
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl Queryable for Loan {
    type SortKey = LoanSortKey;

    fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle) || contains_ignore_case(&self.purpose, needle)
    }

    fn sort_value(&self, key: LoanSortKey) -> Option<f64> {
        match key {
            LoanSortKey::Date => format::timestamp_millis(&self.created_at),
            LoanSortKey::TotalAmount => format::coerce_number(&self.total_amount),
            LoanSortKey::Tenure => format::timestamp_millis(&self.tenure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_covers_name_and_purpose() {
        let loan = Loan {
            name: "Chinua Achebe".into(),
            purpose: "Business expansion".into(),
            ..Default::default()
        };
        assert!(loan.matches("achebe"));
        assert!(loan.matches("business"));
        assert!(!loan.matches("school"));
    }

    #[test]
    fn draft_serializes_without_server_fields() {
        let draft = LoanDraft {
            name: "John Doe".into(),
            active_loan: "20000".into(),
            settled_loan: "0".into(),
            total_amount: "20000".into(),
            purpose: "Business".into(),
            tenure: "2025-06-01T00:00:00.000Z".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("createdAt"));
    }

    #[test]
    fn created_loans_are_persisted_under_their_slot_key() {
        assert_eq!(Loan::CREATED_SLOT_KEY, Some("createdLoan"));
    }
}
