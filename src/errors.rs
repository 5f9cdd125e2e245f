use generational_arena::Index;
use thiserror::Error;

/// Errors raised by link tree mutations.
///
/// Only the attach family of operations can fail, and it fails before
/// anything is mutated. The propagation walk itself is total.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error("link not found in this tree: {0:?}")]
    NotFound(Index),

    #[error("link is already attached to a parent: {0:?}")]
    AlreadyAttached(Index),

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    CycleDetected { parent: Index, child: Index },
}

pub type LinkResult<T> = Result<T, LinkError>;
