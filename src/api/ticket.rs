use std::error::Error as StdError;

use derive_more::Display;
use serde::Deserialize;
use serde_json::{Map, Value};

const TOTAL: &str = "total";
const CRITICAL: &str = "critical";

/// Aggregate counters describing a ticket population.
///
/// Built once from source data and only read afterwards. Neither
/// constructor checks the counters against each other: the data source is
/// trusted, so `closed > total` or negative counts are kept as given.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct Stats {
    total: i64,
    open: i64,
    received: i64,
    in_progress: i64,
    resolved: i64,
    closed: i64,
    critical: i64,
}

impl Stats {
    pub fn new(
        total: i64,
        open: i64,
        received: i64,
        in_progress: i64,
        resolved: i64,
        closed: i64,
        critical: i64,
    ) -> Self {
        Self {
            total,
            open,
            received,
            in_progress,
            resolved,
            closed,
            critical,
        }
    }

    /// Extracts every counter from a parsed JSON object.
    ///
    /// Keys are looked up in declaration order and the first absent or
    /// non-integer one fails the whole extraction. Unknown keys are ignored.
    pub fn from_json(
        json: &Map<String, Value>,
    ) -> Result<Self, FromJsonError> {
        let field = |key: &'static str| {
            let value =
                json.get(key).ok_or(FromJsonError::MissingField(key))?;
            value.as_i64().ok_or_else(|| FromJsonError::TypeMismatch {
                field: key,
                value: value.clone(),
            })
        };

        Ok(Self {
            total: field(TOTAL)?,
            open: field(Status::Open.key())?,
            received: field(Status::Received.key())?,
            in_progress: field(Status::InProgress.key())?,
            resolved: field(Status::Resolved.key())?,
            closed: field(Status::Closed.key())?,
            critical: field(CRITICAL)?,
        })
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn open(&self) -> i64 {
        self.open
    }

    pub fn received(&self) -> i64 {
        self.received
    }

    pub fn in_progress(&self) -> i64 {
        self.in_progress
    }

    pub fn resolved(&self) -> i64 {
        self.resolved
    }

    pub fn closed(&self) -> i64 {
        self.closed
    }

    /// Critical tickets, counted regardless of their status.
    pub fn critical(&self) -> i64 {
        self.critical
    }

    pub fn count(&self, status: Status) -> i64 {
        match status {
            Status::Open => self.open,
            Status::Received => self.received,
            Status::InProgress => self.in_progress,
            Status::Resolved => self.resolved,
            Status::Closed => self.closed,
        }
    }

    /// Tickets nobody has finished working on yet.
    ///
    /// Saturates at `i64::MAX` rather than overflowing.
    pub fn active_tickets(&self) -> i64 {
        self.open
            .saturating_add(self.received)
            .saturating_add(self.in_progress)
    }

    /// Share of closed tickets, as a ratio rather than a percentage.
    ///
    /// Zero when there are no tickets at all.
    pub fn completion_rate(&self) -> f64 {
        if self.total > 0 {
            self.closed as f64 / self.total as f64
        } else {
            0.0
        }
    }
}

impl TryFrom<&Value> for Stats {
    type Error = FromJsonError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_object()
            .ok_or(FromJsonError::NotAnObject)
            .and_then(Self::from_json)
    }
}

impl TryFrom<Map<String, Value>> for Stats {
    type Error = FromJsonError;

    fn try_from(json: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_json(&json)
    }
}

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Status {
    /// Ticket is created and waits to be picked up.
    #[display("open")]
    Open,

    /// Ticket is acknowledged by support.
    #[display("received")]
    Received,

    #[display("in_progress")]
    InProgress,

    /// Work is done, confirmation is pending.
    #[display("resolved")]
    Resolved,

    #[display("closed")]
    Closed,
}

impl Status {
    pub const ALL: [Self; 5] = [
        Self::Open,
        Self::Received,
        Self::InProgress,
        Self::Resolved,
        Self::Closed,
    ];

    /// Key of this status' counter in the wire format.
    pub fn key(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Received => "received",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

#[derive(Clone, Debug, Display, PartialEq)]
pub enum FromJsonError {
    #[display("expected a JSON object")]
    NotAnObject,

    #[display("missing field `{_0}`")]
    MissingField(&'static str),

    #[display(
        "invalid type for field `{field}`: expected an integer, found {value}"
    )]
    TypeMismatch { field: &'static str, value: Value },
}

impl StdError for FromJsonError {}
