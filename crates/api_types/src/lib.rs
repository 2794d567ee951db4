use serde::{Deserialize, Serialize};

pub mod record {
    use super::*;

    /// A single expense entry.
    ///
    /// Records carry no identifier: the service returns them in insertion
    /// order and clients address them by position only.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Record {
        /// ISO-8601 calendar date (`YYYY-MM-DD`). Not validated.
        pub date: String,
        pub category: String,
        /// Whole currency units.
        ///
        /// `None` is the non-numeric amount and is serialized as `null`.
        pub amount: Option<i64>,
    }

    impl Record {
        pub fn new(date: impl Into<String>, category: impl Into<String>, amount: i64) -> Self {
            Self {
                date: date.into(),
                category: category.into(),
                amount: Some(amount),
            }
        }
    }

    /// Acknowledgement returned by `POST /records`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct StatusResponse {
        pub status: String,
    }
}

pub mod summary {
    use indexmap::IndexMap;

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RecordsTotal {
        pub total: i64,
    }

    /// Amount summed per category, in the order categories were first seen.
    ///
    /// On the wire this is a plain JSON object: `{"food": 1200, "rent": 50000}`.
    pub type CategorySummary = IndexMap<String, i64>;
}

pub mod error {
    use super::*;

    /// Body of every non-2xx response.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorResponse {
        pub error: String,
    }
}
