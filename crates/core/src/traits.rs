//! Core traits for identifier generation
//!
//! Anything that hands out unique names implements [`IdSource`]. The temp-dir
//! manager only needs *some* source of unique identifiers; tests can swap the
//! random default for a scripted one to make paths predictable or to inject
//! a generation failure.

use crate::error::StagehandResult;
use crate::types::Identifier;

/// A source of unique identifiers
pub trait IdSource {
    /// Produce the next identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce an identifier. Scripted
    /// sources use this to model injected generation failures.
    fn try_next_id(&mut self) -> StagehandResult<Identifier>;
}

impl<S: IdSource + ?Sized> IdSource for &mut S {
    fn try_next_id(&mut self) -> StagehandResult<Identifier> {
        (**self).try_next_id()
    }
}

impl<S: IdSource + ?Sized> IdSource for Box<S> {
    fn try_next_id(&mut self) -> StagehandResult<Identifier> {
        (**self).try_next_id()
    }
}

/// Random UUID v4 identifiers; never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn try_next_id(&mut self) -> StagehandResult<Identifier> {
        Ok(Identifier::new_random())
    }
}
