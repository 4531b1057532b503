/*!
Literals, aka. atoms paired with a polarity.

A literal with positive polarity asserts its atom is true, a literal with
negative polarity asserts its atom is false.

The [index](CLiteral::index) of a literal is `2 * atom + polarity`, giving a
dense range over all literals of a context which is used to key watch lists.
Negating a literal flips the low bit of its index.
*/

use std::{
    fmt::Display,
    ops::{Neg, Not},
};

use crate::structures::atom::Atom;

/// The canonical implementation of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl CLiteral {
    pub fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal asserting the opposite value for the same atom.
    pub fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The index of the literal: `2 * atom + polarity`.
    pub fn index(&self) -> usize {
        ((self.atom as usize) << 1) | (self.polarity as usize)
    }

    /// The literal in DIMACS form, with atom 0 written as 1, and so on.
    pub fn as_dimacs_string(&self) -> String {
        let external = self.atom + 1;
        match self.polarity {
            true => format!("{external}"),
            false => format!("-{external}"),
        }
    }
}

impl Neg for CLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Not for CLiteral {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicies_interleave() {
        let negative = CLiteral::new(3, false);
        let positive = CLiteral::new(3, true);

        assert_eq!(negative.index(), 6);
        assert_eq!(positive.index(), 7);
        assert_eq!(negative.negate(), positive);
        assert_eq!((-positive).index(), negative.index());
    }

    #[test]
    fn atom_groups_order() {
        let mut literals = vec![
            CLiteral::new(5, true),
            CLiteral::new(2, false),
            CLiteral::new(2, true),
            CLiteral::new(0, true),
        ];
        literals.sort_unstable();

        assert_eq!(
            literals,
            vec![
                CLiteral::new(0, true),
                CLiteral::new(2, false),
                CLiteral::new(2, true),
                CLiteral::new(5, true),
            ]
        );
    }
}
