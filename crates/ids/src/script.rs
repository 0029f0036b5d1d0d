//! Scripted identifier factory
//!
//! A script is an ordered list of [`ScriptEntry`] values. Each request
//! consumes exactly one entry, strictly in declaration order:
//!
//! - `ScriptEntry::Id` is returned as-is
//! - `ScriptEntry::Fail` yields `StagehandError::InjectedIdFailure`
//!
//! Requesting more entries than were declared is a bug in the test, not a
//! condition under test, so it aborts the test.

use stagehand_core::{fatal, or_fatal, IdSource, Identifier, StagehandError, StagehandResult};
use tracing::{debug, warn};

/// String form of [`ScriptEntry::Fail`] accepted by [`ScriptedIds::parse`]
pub const FAILURE_SENTINEL: &str = "ERROR";

/// One scripted response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEntry {
    /// Produce this identifier
    Id(Identifier),
    /// Fail this request
    Fail,
}

impl ScriptEntry {
    /// Parse the string form: [`FAILURE_SENTINEL`] or a canonical identifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if the string is neither.
    pub fn parse(s: &str) -> StagehandResult<Self> {
        if s == FAILURE_SENTINEL {
            return Ok(ScriptEntry::Fail);
        }
        Identifier::parse(s).map(ScriptEntry::Id)
    }
}

impl From<Identifier> for ScriptEntry {
    fn from(id: Identifier) -> Self {
        ScriptEntry::Id(id)
    }
}

/// Identifier factory that replays a fixed script
#[derive(Debug, Clone)]
pub struct ScriptedIds {
    script: Vec<ScriptEntry>,
    /// Index of the next entry; never exceeds `script.len()`
    cursor: usize,
}

impl ScriptedIds {
    /// Build a factory from tagged entries
    pub fn new(entries: impl IntoIterator<Item = ScriptEntry>) -> Self {
        ScriptedIds {
            script: entries.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Build a factory from strings, where [`FAILURE_SENTINEL`] marks a
    /// failing slot.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for the first string that is neither the
    /// sentinel nor a canonical identifier.
    pub fn try_parse<I, S>(entries: I) -> StagehandResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let script = entries
            .into_iter()
            .map(|s| ScriptEntry::parse(s.as_ref()))
            .collect::<StagehandResult<Vec<_>>>()?;
        Ok(Self::new(script))
    }

    /// Like [`ScriptedIds::try_parse`], aborting the test on a malformed
    /// fixture.
    #[track_caller]
    pub fn parse<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        or_fatal(Self::try_parse(entries))
    }

    /// Consume the next entry.
    ///
    /// # Errors
    ///
    /// Returns `InjectedIdFailure` when the entry is [`ScriptEntry::Fail`].
    ///
    /// # Panics
    ///
    /// Panics if every declared entry has already been consumed.
    #[track_caller]
    pub fn try_next_id(&mut self) -> StagehandResult<Identifier> {
        let position = self.cursor;
        let Some(entry) = self.script.get(position).copied() else {
            fatal(StagehandError::ScriptExhausted { consumed: position })
        };
        self.cursor += 1;

        match entry {
            ScriptEntry::Id(id) => {
                debug!(target: "stagehand::ids", position, %id, "Scripted identifier served");
                Ok(id)
            }
            ScriptEntry::Fail => {
                warn!(target: "stagehand::ids", position, "Scripted identifier failure served");
                Err(StagehandError::InjectedIdFailure { position })
            }
        }
    }

    /// Consume the next entry, aborting the test if it is a failure slot.
    ///
    /// Use [`ScriptedIds::try_next_id`] to observe injected failures.
    #[track_caller]
    pub fn next_id(&mut self) -> Identifier {
        or_fatal(self.try_next_id())
    }

    /// True once every declared entry has been consumed
    pub fn all_consumed(&self) -> bool {
        self.cursor == self.script.len()
    }

    /// Number of entries consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Number of entries still to be consumed
    pub fn remaining(&self) -> usize {
        self.script.len() - self.cursor
    }

    /// Total number of declared entries
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// True if the script declares no entries
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl IdSource for ScriptedIds {
    fn try_next_id(&mut self) -> StagehandResult<Identifier> {
        ScriptedIds::try_next_id(self)
    }
}
