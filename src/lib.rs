/*!
kestrel_sat: an incremental, assumption-based CDCL satisfiability engine.

The crate is built around a [context](crate::context), which owns a formula in
conjunctive normal form together with everything required to decide it:
per-atom state, materialized clauses, watch lists, a trail of assignments, and
a configuration.
Clauses accumulate across calls, and each call to solve may carry a set of
assumption literals which hold for that call alone, with an unsatisfiable
outcome explained by a conflicting subset of the assumptions.

The engine is a conflict-driven clause learning loop in the MiniSat mould:
two-watched-literal propagation with dedicated binary clause handling,
first-UIP conflict analysis with self-subsumption minimization, activity-based
decisions with occasional random probes, Luby-sequence restarts, learnt clause
reduction, and level-zero simplification.

# Example

```rust
use kestrel_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::CLiteral,
};

let mut ctx = Context::from_config(Config::default());

let p = ctx.fresh_atom().unwrap();
let q = ctx.fresh_atom().unwrap();

ctx.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)]).unwrap();
ctx.add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)]).unwrap();

assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
assert_eq!(ctx.model().unwrap()[q as usize], true);
```

Solves are incremental: further clauses may be added after any call, and a
later call reuses everything learnt so far.

```rust
# use kestrel_sat::{config::Config, context::Context, reports::Report, structures::literal::CLiteral};
# let mut ctx = Context::from_config(Config::default());
# let p = ctx.fresh_atom().unwrap();
# let q = ctx.fresh_atom().unwrap();
# ctx.add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)]).unwrap();
# ctx.solve().unwrap();
ctx.add_clause(vec![CLiteral::new(q, false)]).unwrap();

assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
assert_eq!(ctx.model().unwrap()[p as usize], true);
```
*/

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod recorder;
pub mod reports;
pub mod structures;
pub mod types;
