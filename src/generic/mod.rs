/*!
Generic structures with no particular tie to satisfiability.
*/

pub mod index_heap;
pub mod luby;
pub mod minimal_pcg;
