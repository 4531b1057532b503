/*!
Fundamental structures of a formula: atoms, literals, and clauses.
*/

pub mod atom;
pub mod clause;
pub mod literal;
