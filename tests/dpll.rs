use std::{cell::RefCell, rc::Rc};

use formula_sat::{
    builder::parser::parse,
    compile::compile,
    config::Config,
    context::Context,
    db::atom::AtomDB,
    dispatch::{
        library::{
            delta::Delta,
            report::{self, Report},
            stat::Stat,
        },
        Dispatch,
    },
    structures::{
        cnf::Cnf,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
};

/// Parses, compiles, and loads the text into a context.
fn context_from(text: &str, config: Config) -> (Context, Formula, AtomDB) {
    let (formula, mut atom_db) = parse(text).result().unwrap();
    let compilation = compile(&formula, &mut atom_db, &config).unwrap();
    let ctx = Context::from_cnf(config, compilation.cnf).unwrap();
    (ctx, formula, atom_db)
}

fn record_dispatches(ctx: &mut Context) -> Rc<RefCell<Vec<Dispatch>>> {
    let dispatches = Rc::new(RefCell::new(Vec::default()));
    let sink = dispatches.clone();
    ctx.set_dispatcher(Some(Rc::new(move |dispatch: Dispatch| {
        sink.borrow_mut().push(dispatch)
    })));
    dispatches
}

fn deltas(dispatches: &[Dispatch]) -> Vec<Delta> {
    dispatches
        .iter()
        .filter_map(|dispatch| match dispatch {
            Dispatch::Delta(delta) => Some(*delta),
            _ => None,
        })
        .collect()
}

mod scenarios {
    use super::*;

    #[test]
    fn conjunction() {
        let (mut ctx, _, atom_db) = context_from("a&b", Config::default());
        assert_eq!(atom_db.count(), 2);

        assert_eq!(ctx.solve(), Ok(report::Solve::Satisfiable));
        assert_eq!(ctx.model(), Ok(vec![true, true]));
    }

    #[test]
    fn contradiction() {
        let (mut ctx, _, _) = context_from("a&!a", Config::default());
        assert_eq!(ctx.solve(), Ok(report::Solve::Unsatisfiable));
        assert_eq!(ctx.report(), report::Solve::Unsatisfiable);
        assert!(ctx.model().is_err());

        let mut config = Config::default();
        config.direct_recognition.value = false;
        let (mut ctx, _, _) = context_from("a&!a", config);
        assert_eq!(ctx.solve(), Ok(report::Solve::Unsatisfiable));
    }

    #[test]
    fn implication() {
        let (mut ctx, _, atom_db) = context_from("a->b", Config::default());
        assert_eq!(ctx.solve(), Ok(report::Solve::Satisfiable));

        let model = ctx.model().unwrap();
        let a = atom_db.atom_of("a").unwrap() as usize;
        let b = atom_db.atom_of("b").unwrap() as usize;
        assert!(!(model[a] && !model[b]));
        assert!(ctx.cnf.satisfied_by(&model));
    }
}

mod search {
    use super::*;

    #[test]
    fn all_four_clauses() {
        let (mut ctx, _, _) = context_from("(a|b)&(!a|b)&(a|!b)&(!a|!b)", Config::default());
        let dispatches = record_dispatches(&mut ctx);

        assert_eq!(ctx.solve(), Ok(report::Solve::Unsatisfiable));

        let a = CLiteral::new(0, true);
        let b = CLiteral::new(1, true);
        assert_eq!(
            deltas(&dispatches.borrow()),
            vec![
                Delta::Decide(a),
                Delta::Propagate(b, 1),
                Delta::Backtrack(Some(3)),
                Delta::Redecide(a.negate()),
                Delta::Propagate(b, 0),
                Delta::Backtrack(Some(2)),
                Delta::Backtrack(None),
            ]
        );

        assert_eq!(ctx.counters.decisions, 2);
        assert_eq!(ctx.counters.conflicts, 2);
        assert_eq!(ctx.counters.propagations, 2);
        assert_eq!(ctx.valuation, vec![None, None]);
    }

    #[test]
    fn finish_follows_report() {
        let (mut ctx, _, _) = context_from("a | b", Config::default());
        let dispatches = record_dispatches(&mut ctx);
        assert!(ctx.solve().is_ok());

        let dispatches = dispatches.borrow();
        let tail = &dispatches[dispatches.len() - 2..];
        assert_eq!(
            tail,
            &[
                Dispatch::Report(Report::Solve(report::Solve::Satisfiable)),
                Dispatch::Report(Report::Finish),
            ]
        );
        assert!(dispatches
            .iter()
            .any(|dispatch| matches!(dispatch, Dispatch::Stat(Stat::Decisions(1)))));
    }

    #[test]
    fn undefined_atoms_are_true() {
        // b is never valued, as deciding a satisfies the clause.
        let (mut ctx, _, _) = context_from("a | b", Config::default());
        assert_eq!(ctx.solve(), Ok(report::Solve::Satisfiable));
        assert_eq!(ctx.valuation, vec![Some(true), None]);
        assert_eq!(ctx.model(), Ok(vec![true, true]));
    }

    #[test]
    fn flipped_frames_forget_propagations() {
        // Deciding a propagates c and then conflicts on d.
        // After the flip, c must be free again for the second clause to be satisfied by !c.
        let text = "(a|b)&(!a|c)&(!c|!b|d)&(!a|!d)&(!a|!c|d)&(!c|e)&(!e|!b)";
        let (mut ctx, formula, atom_db) = context_from(text, Config::default());

        assert_eq!(ctx.solve(), Ok(report::Solve::Satisfiable));
        let model = ctx.model().unwrap();
        let source = model[..atom_db.count()]
            .iter()
            .map(|value| Some(*value))
            .collect::<Vec<_>>();
        assert_eq!(formula.evaluate(&source), Some(true));
    }
}

mod limits {
    use super::*;

    #[test]
    fn decision_limit() {
        let mut config = Config::default();
        config.decision_limit.value = 0;

        let (mut ctx, _, _) = context_from("(a|b)&(!a|b)", config);
        assert_eq!(ctx.solve(), Ok(report::Solve::Unknown));
        assert_eq!(ctx.report(), report::Solve::Unknown);
        assert!(ctx.model().is_err());
    }

    #[test]
    fn no_decision_needed() {
        let mut config = Config::default();
        config.decision_limit.value = 0;

        let (mut ctx, _, _) = context_from("a & (!a | b)", config);
        assert_eq!(ctx.solve(), Ok(report::Solve::Satisfiable));
    }

    #[test]
    fn hand_built_cnf() {
        let mut cnf = Cnf::new(3);
        cnf.push(vec![CLiteral::new(0, false), CLiteral::new(2, true)]);
        cnf.push(vec![CLiteral::new(2, false)]);
        cnf.push(vec![CLiteral::new(0, true), CLiteral::new(1, true)]);

        let mut ctx = Context::from_cnf(Config::default(), cnf).unwrap();
        assert_eq!(ctx.solve(), Ok(report::Solve::Satisfiable));
        assert_eq!(ctx.model(), Ok(vec![false, true, false]));
    }
}
