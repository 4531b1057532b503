use std::fmt::Display;

use crate::types::err::ClauseDBError;

/// The index of a clause within one of the clause stores.
pub type FormulaIndex = u32;

/// A token distinguishing reuses of the same learnt slot.
pub type FormulaToken = u16;

/// A key to a clause held in the clause database.
///
/// Original clauses are never moved, so their index is stable.
/// Learnt clauses may be deleted and their slot reused, so a learnt key pairs
/// the slot index with the token current when the clause was stored, and a key
/// with a stale token resolves to no clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseKey {
    /// A key to a clause given to the context.
    Original(FormulaIndex),

    /// A key to a clause learnt by the context.
    Learnt(FormulaIndex, FormulaToken),
}

impl ClauseKey {
    /// The index of the key, into the store appropriate to its kind.
    pub fn index(&self) -> usize {
        match self {
            ClauseKey::Original(index) => *index as usize,
            ClauseKey::Learnt(index, _) => *index as usize,
        }
    }

    /// The same learnt key with the token advanced, for slot reuse.
    pub fn retoken(&self) -> Result<Self, ClauseDBError> {
        match self {
            ClauseKey::Original(_) => Err(ClauseDBError::Missing),
            ClauseKey::Learnt(index, token) => {
                if *token == FormulaToken::MAX {
                    return Err(ClauseDBError::TokensExhausted);
                }
                Ok(ClauseKey::Learnt(*index, token + 1))
            }
        }
    }
}

impl Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClauseKey::Original(index) => write!(f, "Original({index})"),
            ClauseKey::Learnt(index, token) => write!(f, "Learnt({index}, {token})"),
        }
    }
}
