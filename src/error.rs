//! Error types and the write-concern tolerance rule.

use thiserror::Error;

/// Driver message text identifying a write that was not acknowledged.
pub(crate) const UNACKNOWLEDGED_WRITE: &str = "unacknowledged write";

/// Errors surfaced by the client adapter.
///
/// Every variant aborts the calling iteration, with one exception:
/// [`ClientError::UnacknowledgedWrite`] is absorbed by a handle that was
/// constructed with the tolerance flag set (see [`tolerable`]).
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection establishment failure: bad URI, unreachable host, or a
    /// failed reachability check at construction time.
    #[error("MongoDB connection error: {0}")]
    Connection(#[source] mongodb::error::Error),

    /// A write completed without server acknowledgment.
    ///
    /// The display text doubles as the classification key: a driver error
    /// rendering exactly this message is mapped onto this variant.
    #[error("unacknowledged write")]
    UnacknowledgedWrite,

    /// A hex identifier that is not 24 characters of valid hex.
    #[error("invalid object id '{hex}': {source}")]
    MalformedObjectId {
        hex: String,
        #[source]
        source: bson::oid::Error,
    },

    /// Any other MongoDB driver or server error, message preserved.
    #[error("MongoDB error: {0}")]
    Database(mongodb::error::Error),
}

impl ClientError {
    /// Classify a raw driver error.
    ///
    /// Only an error whose rendered message is exactly
    /// `unacknowledged write` becomes [`ClientError::UnacknowledgedWrite`];
    /// everything else keeps its original text under
    /// [`ClientError::Database`].
    pub(crate) fn classify(err: mongodb::error::Error) -> Self {
        if is_unacknowledged_message(&err.to_string()) {
            ClientError::UnacknowledgedWrite
        } else {
            ClientError::Database(err)
        }
    }

    /// Whether this is the write-not-acknowledged condition.
    pub fn is_unacknowledged_write(&self) -> bool {
        matches!(self, ClientError::UnacknowledgedWrite)
    }
}

impl From<mongodb::error::Error> for ClientError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::classify(err)
    }
}

/// Exact-match test for the unacknowledged-write message.
///
/// The condition is deliberately narrow: a message that merely contains the
/// phrase does not qualify.
pub(crate) fn is_unacknowledged_message(message: &str) -> bool {
    message == UNACKNOWLEDGED_WRITE
}

/// The single tolerance rule applied after every driver call: an error may be
/// swallowed iff it is the unacknowledged-write condition and the handle was
/// built to tolerate it.
pub(crate) fn tolerable(tolerate_unacknowledged: bool, err: &ClientError) -> bool {
    tolerate_unacknowledged && err.is_unacknowledged_write()
}
