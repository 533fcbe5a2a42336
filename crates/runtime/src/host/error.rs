//! Failures surfaced by host capability calls.
//!
//! Every variant is a "not found / wrong kind / missing field" condition.
//! None of them is retried: a failed resolution is a transient absence the
//! engine tolerates by doing nothing.
use thiserror::Error;

use patch_core::{FormId, FormKind};

use super::ActorId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("form {0} not found")]
    FormNotFound(FormId),

    #[error("form {id} is {actual}, expected {expected}")]
    WrongKind {
        id: FormId,
        expected: FormKind,
        actual: FormKind,
    },

    #[error("form {0} carries no magic effects")]
    NoEffects(FormId),

    #[error("actor {0} is no longer available")]
    ActorNotFound(ActorId),

    #[error("player actor not available")]
    PlayerNotFound,
}
