//! Conversion of raw stats documents into [`TicketStats`].

use std::{error::Error as StdError, io, path::Path};

use derive_more::{Display, From};
use serde_json::Value;
use tokio::fs;

use crate::api::{ticket::FromJsonError, TicketStats};

pub fn parse(s: &str) -> Result<TicketStats, Error> {
    let json = serde_json::from_str::<Value>(s)?;
    Ok(TicketStats::try_from(&json)?)
}

pub async fn read(path: impl AsRef<Path>) -> Result<TicketStats, Error> {
    let path = path.as_ref();

    let s = fs::read_to_string(path).await?;
    let stats = parse(&s)?;

    tracing::debug!(
        path = %path.display(),
        total = stats.total(),
        "read ticket stats",
    );

    Ok(stats)
}

#[derive(Debug, Display, From)]
pub enum Error {
    #[display("failed to read stats: {_0}")]
    #[from]
    Io(io::Error),

    #[display("malformed stats document: {_0}")]
    #[from]
    Json(serde_json::Error),

    #[display("invalid stats: {_0}")]
    #[from]
    Stats(FromJsonError),
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Stats(e) => Some(e),
        }
    }
}
