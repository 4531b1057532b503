/*!
Clauses, aka. collections of literals, interpreted as the disjunction of those
literals.

The canonical representation of a clause is as a vector of literals.

- The empty clause is always false (never true).
- Single literals are identified with the clause containing that literal (aka. a
  'unit' clause).
- Clauses of size two are never materialized in the clause database, and exist
  only as paired watch entries.
*/

use crate::structures::{atom::Atom, literal::CLiteral};

/// The clause trait.
pub trait Clause {
    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// A string of the clause in DIMACS form, without the terminating `0`.
    fn as_dimacs_string(&self) -> String;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause given to the context by a client.
    Original,

    /// A clause derived via resolution during conflict analysis.
    Resolution,
}

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }

    fn as_dimacs_string(&self) -> String {
        CLiteral::as_dimacs_string(self)
    }
}

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }

    fn as_dimacs_string(&self) -> String {
        self.as_slice().as_dimacs_string()
    }
}

impl Clause for &[CLiteral] {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self.to_vec()
    }

    fn as_dimacs_string(&self) -> String {
        self.iter()
            .map(|literal| literal.as_dimacs_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
