use std::time::Duration;

use kestrel_sat::{
    config::Config,
    context::Context,
    procedures::solve::SolveLimits,
    reports::Report,
    structures::literal::CLiteral,
};

fn lit(atom: u32, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

/// A pigeonhole instance: `pigeons` into `holes`, unsatisfiable whenever
/// `pigeons > holes`.
fn pigeonhole(ctx: &mut Context, pigeons: u32, holes: u32) {
    let var = |pigeon: u32, hole: u32| pigeon * holes + hole;
    ctx.ensure_atoms(pigeons * holes).unwrap();

    for pigeon in 0..pigeons {
        let somewhere: Vec<CLiteral> = (0..holes).map(|h| lit(var(pigeon, h), true)).collect();
        ctx.add_clause(somewhere).unwrap();
    }
    for hole in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                ctx.add_clause(vec![lit(var(a, hole), false), lit(var(b, hole), false)])
                    .unwrap();
            }
        }
    }
}

#[test]
fn pigeonhole_is_unsatisfiable() {
    let mut ctx = Context::from_config(Config::default());
    pigeonhole(&mut ctx, 4, 3);
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn pigeonhole_fits_when_it_fits() {
    let mut ctx = Context::from_config(Config::default());
    pigeonhole(&mut ctx, 3, 3);
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
}

#[test]
fn a_conflict_budget_interrupts_without_a_verdict() {
    let mut ctx = Context::from_config(Config::default());
    pigeonhole(&mut ctx, 5, 4);

    let limits = SolveLimits {
        conflicts: Some(1),
        ..SolveLimits::default()
    };
    assert_eq!(ctx.solve_given(&[], limits), Ok(Report::Unknown));

    // The interrupted call kept its learning, and an unlimited call closes
    // the question.
    assert!(ctx.counters.total_conflicts >= 1);
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn a_propagation_budget_interrupts_without_a_verdict() {
    let mut ctx = Context::from_config(Config::default());
    pigeonhole(&mut ctx, 5, 4);

    let limits = SolveLimits {
        propagations: Some(1),
        ..SolveLimits::default()
    };
    assert_eq!(ctx.solve_given(&[], limits), Ok(Report::Unknown));
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn a_zero_deadline_interrupts_at_the_first_restart() {
    let mut ctx = Context::from_config(Config::default());
    pigeonhole(&mut ctx, 7, 6);

    let limits = SolveLimits {
        time: Some(Duration::ZERO),
        ..SolveLimits::default()
    };
    assert_eq!(ctx.solve_given(&[], limits), Ok(Report::Unknown));
}

#[test]
fn interrupted_calls_accumulate_towards_a_verdict() {
    let mut ctx = Context::from_config(Config::default());
    pigeonhole(&mut ctx, 5, 4);

    let limits = SolveLimits {
        conflicts: Some(20),
        ..SolveLimits::default()
    };
    let mut verdict = Report::Unknown;
    for _ in 0..500 {
        verdict = ctx.solve_given(&[], limits).unwrap();
        if verdict != Report::Unknown {
            break;
        }
    }
    assert_eq!(verdict, Report::Unsatisfiable);
}

#[test]
fn limits_and_assumptions_compose() {
    let mut ctx = Context::from_config(Config::default());
    pigeonhole(&mut ctx, 4, 4);
    // Close one hole by assumption: 4 pigeons, effectively 3 holes.
    let closed: Vec<CLiteral> = (0..4).map(|p| lit(p * 4 + 3, false)).collect();

    assert_eq!(
        ctx.solve_given(&closed, SolveLimits::default()),
        Ok(Report::Unsatisfiable)
    );
    assert!(!ctx.conflict_core().is_empty());

    // Without the assumptions the instance is fine.
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
}
