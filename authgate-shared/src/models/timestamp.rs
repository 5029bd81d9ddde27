use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp newtype used on the wire and for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Render the timestamp in the long form shown on the dashboard,
    /// e.g. "January 5, 2024".
    #[must_use]
    pub fn long_form(&self) -> String {
        format!(
            "{} {}, {}",
            self.0.format("%B"),
            self.0.day(),
            self.0.year()
        )
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}
