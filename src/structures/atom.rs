/*!
(The internal representation of) an atom, aka. a 'variable'.

Atoms are dense unsigned integers, so the atoms of a context are [0..*n*) for
some *n*.
This allows an atom to be used as the index of per-atom structures (values,
levels, reasons, activities, …) without translation.

Clients request growth to at least *n* atoms before any clause mentions atom
*n - 1*; referencing an atom outside the current range is a contract violation
and is reported as an error rather than silently extending the context.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Bounded to allow a literal to fit the same representation with room for a
/// polarity bit.
pub const ATOM_MAX: Atom = Atom::MAX >> 1;
