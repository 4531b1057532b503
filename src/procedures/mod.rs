/*!
Procedures over a context.

- [bcp]: boolean constraint propagation.
- [analysis]: derivation of an asserting clause from a conflict.
- [assumptions]: explanation of conflicts at the root level.
- [backjump]: unwinding the trail.
- [decision]: choice of an atom and polarity.
- [simplify]: level-zero removal of satisfied clauses.
- [reduction]: deletion of inactive learnt clauses.
- [solve]: the outer loop binding everything together.
*/

pub mod analysis;
pub mod assumptions;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod reduction;
pub mod simplify;
pub mod solve;
