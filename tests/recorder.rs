use std::{cell::RefCell, rc::Rc};

use kestrel_sat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    recorder::{ClauseRecorder, VecRecorder},
    reports::Report,
    structures::literal::CLiteral,
    types::err::ErrorKind,
};

fn lit(atom: u32, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

/// A recorder handle which can be inspected after being handed to a context.
#[derive(Clone, Default)]
struct Shared(Rc<RefCell<VecRecorder>>);

impl ClauseRecorder for Shared {
    fn clause(&mut self, literals: &[CLiteral]) {
        self.0.borrow_mut().clause(literals);
    }

    fn conclude_unsatisfiable(&mut self) {
        self.0.borrow_mut().conclude_unsatisfiable();
    }
}

#[test]
fn stored_clauses_are_mirrored() {
    let record = Shared::default();
    let mut ctx = Context::from_config(Config::default());
    ctx.set_recorder(Box::new(record.clone())).unwrap();

    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();
    let r = ctx.fresh_atom().unwrap();

    ctx.add_clause(lit(p, true)).unwrap();
    ctx.add_clause(vec![lit(q, true), lit(r, true)]).unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, false), lit(r, false)])
        .unwrap();

    let seen = record.0.borrow();
    assert_eq!(seen.clauses.len(), 3);
    assert_eq!(seen.clauses[0], vec![lit(p, true)]);
    assert!(!seen.concluded);
}

#[test]
fn noop_submissions_are_not_mirrored() {
    let record = Shared::default();
    let mut ctx = Context::from_config(Config::default());
    ctx.set_recorder(Box::new(record.clone())).unwrap();

    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();

    assert_eq!(
        ctx.add_clause(vec![lit(p, true), lit(p, false)]),
        Ok(ClauseOk::Tautology)
    );
    assert_eq!(record.0.borrow().clauses.len(), 0);

    ctx.add_clause(lit(q, true)).unwrap();
    assert_eq!(
        ctx.add_clause(vec![lit(q, true), lit(p, true)]),
        Ok(ClauseOk::Tautology)
    );
    assert_eq!(record.0.borrow().clauses.len(), 1);
}

#[test]
fn mirrored_clauses_are_the_simplified_forms() {
    let record = Shared::default();
    let mut ctx = Context::from_config(Config::default());
    ctx.set_recorder(Box::new(record.clone())).unwrap();

    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();
    ctx.add_clause(lit(p, false)).unwrap();
    // [p, q] stores as the unit [q].
    ctx.add_clause(vec![lit(p, true), lit(q, true)]).unwrap();

    let seen = record.0.borrow();
    assert_eq!(seen.clauses[1], vec![lit(q, true)]);
}

#[test]
fn an_unsatisfiable_run_concludes_the_record() {
    let record = Shared::default();
    let mut ctx = Context::from_config(Config::default());
    ctx.set_recorder(Box::new(record.clone())).unwrap();

    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();
    ctx.add_clause(vec![lit(p, true), lit(q, true)]).unwrap();
    ctx.add_clause(vec![lit(p, true), lit(q, false)]).unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, true)]).unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, false)]).unwrap();

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

    let seen = record.0.borrow();
    assert!(seen.concluded);
    // Learning was mirrored along the way.
    assert!(seen.clauses.len() > 4);
}

#[test]
fn learnt_clauses_join_the_record() {
    let record = Shared::default();
    let mut ctx = Context::from_config(Config::default());
    ctx.set_recorder(Box::new(record.clone())).unwrap();

    // A pigeonhole instance guarantees conflicts, and so learnt clauses.
    let holes = 3_u32;
    let var = |p: u32, h: u32| p * holes + h;
    ctx.ensure_atoms(4 * holes).unwrap();
    for p in 0..4 {
        let clause: Vec<CLiteral> = (0..holes).map(|h| lit(var(p, h), true)).collect();
        ctx.add_clause(clause).unwrap();
    }
    let mut given = 4;
    for h in 0..holes {
        for a in 0..4 {
            for b in (a + 1)..4 {
                ctx.add_clause(vec![lit(var(a, h), false), lit(var(b, h), false)])
                    .unwrap();
                given += 1;
            }
        }
    }

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

    let seen = record.0.borrow();
    assert!(seen.clauses.len() > given);
    assert!(seen.concluded);
}

#[test]
fn recorders_only_install_before_clauses() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    ctx.add_clause(lit(p, true)).unwrap();

    assert_eq!(
        ctx.set_recorder(Box::new(Shared::default())),
        Err(ErrorKind::InvalidState)
    );
}
