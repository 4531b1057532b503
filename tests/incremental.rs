use kestrel_sat::{
    config::Config,
    context::Context,
    procedures::solve::SolveLimits,
    reports::Report,
    structures::literal::CLiteral,
    types::err::ErrorKind,
};

fn lit(atom: u32, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

#[test]
fn clauses_accumulate_across_calls() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();

    ctx.add_clause(vec![lit(p, true), lit(q, true)]).unwrap();
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

    ctx.add_clause(lit(p, false)).unwrap();
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert_eq!(ctx.model().unwrap()[q as usize], true);

    // By now q is a level-zero fact, so the opposing unit is an immediate
    // contradiction rather than a stored clause.
    assert_eq!(
        ctx.add_clause(lit(q, false)),
        Err(ErrorKind::FundamentalConflict)
    );
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn atoms_may_arrive_between_calls() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    ctx.add_clause(lit(p, true)).unwrap();
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

    let q = ctx.fresh_atom().unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, true)]).unwrap();
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert_eq!(ctx.model().unwrap()[q as usize], true);
}

#[test]
fn a_verdict_is_reproduced_not_recomputed_blindly() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();

    ctx.add_clause(vec![lit(p, true), lit(q, true)]).unwrap();
    ctx.add_clause(vec![lit(p, true), lit(q, false)]).unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, true)]).unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, false)]).unwrap();

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    let conflicts_at_verdict = ctx.counters.total_conflicts;

    // A further call short-circuits on the recorded state.
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    assert_eq!(ctx.counters.total_conflicts, conflicts_at_verdict);
}

#[test]
fn counters_track_work() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();
    ctx.add_clause(lit(p, true)).unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, true)]).unwrap();

    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert!(ctx.counters.total_propagations >= 2);
    assert_eq!(ctx.counters.solve_calls, 1);
    assert!(ctx.counters.restarts >= 1);
}

#[test]
fn solving_twice_reuses_learnt_clauses() {
    // An unsatisfiable instance interrupted early, then resumed: the second
    // call starts from the learning of the first.
    let mut ctx = Context::from_config(Config::default());
    let holes = 4_u32;
    let var = |p: u32, h: u32| p * holes + h;
    ctx.ensure_atoms(5 * holes).unwrap();
    for p in 0..5 {
        let clause: Vec<CLiteral> = (0..holes).map(|h| lit(var(p, h), true)).collect();
        ctx.add_clause(clause).unwrap();
    }
    for h in 0..holes {
        for a in 0..5 {
            for b in (a + 1)..5 {
                ctx.add_clause(vec![lit(var(a, h), false), lit(var(b, h), false)])
                    .unwrap();
            }
        }
    }

    let limits = SolveLimits {
        conflicts: Some(50),
        ..SolveLimits::default()
    };
    let first = ctx.solve_given(&[], limits).unwrap();
    let conflicts_after_first = ctx.counters.total_conflicts;

    if first == Report::Unknown {
        assert!(conflicts_after_first >= 50);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    } else {
        assert_eq!(first, Report::Unsatisfiable);
    }
}
