use kestrel_sat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::CLiteral,
    types::err::{AtomDBError, ErrorKind},
};

fn lit(atom: u32, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

#[test]
fn empty_context_is_satisfiable() {
    let mut ctx = Context::from_config(Config::default());
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
}

#[test]
fn unit_fixes_a_value() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();

    assert_eq!(ctx.add_clause(lit(p, true)), Ok(ClauseOk::UnitForced));
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert_eq!(ctx.model().unwrap()[p as usize], true);
}

#[test]
fn contradicting_units_are_a_permanent_conflict() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();

    assert!(ctx.add_clause(lit(p, true)).is_ok());
    assert_eq!(
        ctx.add_clause(lit(p, false)),
        Err(ErrorKind::FundamentalConflict)
    );

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    // Nothing escapes the verdict.
    assert_eq!(
        ctx.add_clause(lit(q, true)),
        Err(ErrorKind::FundamentalConflict)
    );
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn tautologies_are_noops() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();

    assert_eq!(
        ctx.add_clause(vec![lit(p, true), lit(q, true), lit(p, false)]),
        Ok(ClauseOk::Tautology)
    );
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
}

#[test]
fn root_satisfied_clauses_are_noops() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();

    assert_eq!(ctx.add_clause(lit(p, true)), Ok(ClauseOk::UnitForced));
    assert_eq!(
        ctx.add_clause(vec![lit(p, true), lit(q, true)]),
        Ok(ClauseOk::Tautology)
    );
}

#[test]
fn duplicate_literals_collapse() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();

    // [p, p] reduces to the unit [p].
    assert_eq!(
        ctx.add_clause(vec![lit(p, true), lit(p, true)]),
        Ok(ClauseOk::UnitForced)
    );
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert_eq!(ctx.model().unwrap()[p as usize], true);
}

#[test]
fn out_of_range_atoms_are_loud() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();

    assert_eq!(
        ctx.add_clause(vec![lit(p, true), lit(p + 1, true)]),
        Err(ErrorKind::AtomDB(AtomDBError::OutOfRange(p + 1)))
    );

    // The context is unchanged and usable.
    assert_eq!(ctx.add_clause(lit(p, true)), Ok(ClauseOk::UnitForced));
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
}

#[test]
fn level_zero_falsified_literals_are_dropped() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();

    assert_eq!(ctx.add_clause(lit(p, false)), Ok(ClauseOk::UnitForced));
    // [p, q] reduces to the unit [q].
    assert_eq!(
        ctx.add_clause(vec![lit(p, true), lit(q, true)]),
        Ok(ClauseOk::UnitForced)
    );

    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    let model = ctx.model().unwrap();
    assert_eq!(model[p as usize], false);
    assert_eq!(model[q as usize], true);
}

#[test]
fn an_implication_chain_propagates() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();
    let r = ctx.fresh_atom().unwrap();

    ctx.add_clause(lit(p, true)).unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, true)]).unwrap();
    ctx.add_clause(vec![lit(q, false), lit(r, true)]).unwrap();

    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    let model = ctx.model().unwrap();
    assert!(model[p as usize] && model[q as usize] && model[r as usize]);
}

#[test]
fn all_polarity_combinations_over_two_atoms_conflict() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_atom().unwrap();
    let q = ctx.fresh_atom().unwrap();

    ctx.add_clause(vec![lit(p, true), lit(q, true)]).unwrap();
    ctx.add_clause(vec![lit(p, true), lit(q, false)]).unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, true)]).unwrap();
    ctx.add_clause(vec![lit(p, false), lit(q, false)]).unwrap();

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    assert!(ctx.conflict_core().is_empty());
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn a_model_satisfies_every_clause() {
    let mut ctx = Context::from_config(Config::default());
    for _ in 0..6 {
        ctx.fresh_atom().unwrap();
    }
    let clauses: Vec<Vec<CLiteral>> = vec![
        vec![lit(0, true), lit(1, false), lit(2, true)],
        vec![lit(1, true), lit(3, true)],
        vec![lit(2, false), lit(4, true), lit(5, false)],
        vec![lit(0, false), lit(5, true)],
        vec![lit(3, false), lit(4, false)],
    ];
    for clause in &clauses {
        ctx.add_clause(clause.clone()).unwrap();
    }

    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    let model = ctx.model().unwrap();
    for clause in &clauses {
        assert!(clause
            .iter()
            .any(|l| model[l.atom() as usize] == l.polarity()));
    }
}
