//! The records served by the mock API.

pub mod loan;
pub mod user;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

pub use loan::Loan;
pub use loan::LoanDraft;
pub use loan::LoanSortKey;
pub use user::User;
pub use user::UserSortKey;

/// A record type held by a [`RemoteStore`](crate::store::RemoteStore).
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Plural noun for log lines, e.g. "users".
    const COLLECTION: &'static str;

    /// Toast text after a successful create.
    const CREATED_NOTICE: &'static str = "Record created successfully!";

    /// Toast text after a failed create.
    const CREATE_FAILED_NOTICE: &'static str = "Failed to create the record.";

    /// Local slot key the last created record is written to, if any.
    const CREATED_SLOT_KEY: Option<&'static str> = None;
}

/// Deserializes a numeric-string field.
///
/// The mock API is not consistent about quoting numbers, so JSON numbers are
/// accepted and kept as their decimal text. `null` becomes an empty string.
pub(crate) fn numeric_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
