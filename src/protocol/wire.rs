use serde::Serialize;
use thiserror::Error;

use crate::{Batch, Command};

#[derive(Debug, Error)]
pub enum WireError {
    #[error("failed to encode batch: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Payload<'a> {
    commands: &'a [Command],
}

/// Encode a batch as the executor's wire payload: a JSON object with a
/// single `commands` array, terminated by a newline (the bridge parses a
/// line at a time).
///
/// Pure with respect to the batch: encoding never mutates it, and an empty
/// batch encodes to an empty `commands` array rather than an error.
pub fn encode(batch: &Batch) -> Result<String, WireError> {
    let mut payload = serde_json::to_string(&Payload {
        commands: batch.commands(),
    })?;
    payload.push('\n');
    Ok(payload)
}
