use std::{cell::RefCell, rc::Rc};

use formula_sat::{
    builder::{
        parser::parse,
        random::{self, RandomBounds},
    },
    compile::{compile, Method},
    config::{Config, EquivTemplate},
    context::Context,
    dispatch::{library::report, Dispatch},
    structures::{cnf::Cnf, formula::Formula},
};

use rand::{rngs::SmallRng, SeedableRng};

/// Whether some valuation of the first `atom_count` atoms satisfies the formula.
fn brute_force(formula: &Formula, atom_count: usize) -> bool {
    assert!(atom_count <= 8);
    (0..1_usize << atom_count).any(|bits| {
        let valuation = (0..atom_count)
            .map(|atom| Some(bits & (1 << atom) != 0))
            .collect::<Vec<_>>();
        formula.evaluate(&valuation) == Some(true)
    })
}

fn solve(cnf: Cnf, config: Config) -> (report::Solve, Option<Vec<bool>>) {
    let mut ctx = Context::from_cnf(config, cnf).unwrap();
    let result = ctx.solve().unwrap();
    (result, ctx.model().ok())
}

fn tseitin_config() -> Config {
    let mut config = Config::default();
    config.direct_recognition.value = false;
    config
}

mod equisatisfiability {
    use super::*;

    #[test]
    fn random_formulas() {
        let mut rng = SmallRng::seed_from_u64(3);

        for _ in 0..300 {
            let text = random::formula(&mut rng, 5, 5);
            let (formula, mut atom_db) = parse(&text).result().unwrap();
            let source_atoms = atom_db.count();

            let compilation = compile(&formula, &mut atom_db, &tseitin_config()).unwrap();
            let cnf = compilation.cnf.clone();
            let (result, model) = solve(compilation.cnf, tseitin_config());

            match brute_force(&formula, source_atoms) {
                true => {
                    assert_eq!(result, report::Solve::Satisfiable, "{text}");

                    let model = model.unwrap();
                    assert!(cnf.satisfied_by(&model), "{text}");

                    let source = model[..source_atoms]
                        .iter()
                        .map(|value| Some(*value))
                        .collect::<Vec<_>>();
                    assert_eq!(formula.evaluate(&source), Some(true), "{text}");
                }

                false => assert_eq!(result, report::Solve::Unsatisfiable, "{text}"),
            }
        }
    }

    #[test]
    fn negated_equivalences() {
        for text in ["!(a<->b) & a", "!(a<->b) & !(b<->c) & !(a<->c)", "(a<->!b) & (a<->b)"] {
            let (formula, mut atom_db) = parse(text).result().unwrap();
            let source_atoms = atom_db.count();
            let compilation = compile(&formula, &mut atom_db, &Config::default()).unwrap();
            let (result, _) = solve(compilation.cnf, Config::default());

            let expected = match brute_force(&formula, source_atoms) {
                true => report::Solve::Satisfiable,
                false => report::Solve::Unsatisfiable,
            };
            assert_eq!(result, expected, "{text}");
        }
    }

    #[test]
    fn chained_equivalence_template() {
        // The chained template ties the operands of an equivalence together in every context.
        let mut config = tseitin_config();
        config.equiv_template.value = EquivTemplate::Chained;

        let (formula, mut atom_db) = parse("!(a<->b) & a").result().unwrap();
        assert!(brute_force(&formula, atom_db.count()));

        let compilation = compile(&formula, &mut atom_db, &config).unwrap();
        let (result, _) = solve(compilation.cnf, config);
        assert_eq!(result, report::Solve::Unsatisfiable);
    }
}

mod repeated_operands {
    use super::*;

    fn check(text: &str, config: Config) {
        let (formula, mut atom_db) = parse(text).result().unwrap();
        let source_atoms = atom_db.count();
        let compilation = compile(&formula, &mut atom_db, &config).unwrap();
        let cnf = compilation.cnf.clone();
        let (result, model) = solve(compilation.cnf, config);

        match brute_force(&formula, source_atoms) {
            true => {
                assert_eq!(result, report::Solve::Satisfiable, "{text}");
                assert!(cnf.satisfied_by(&model.unwrap()), "{text}");
            }
            false => assert_eq!(result, report::Solve::Unsatisfiable, "{text}"),
        }
    }

    #[test]
    fn negated_self_equivalence() {
        check("!(a<->a)", Config::default());
        check("!(a<->a)", tseitin_config());
    }

    #[test]
    fn repeated_literal_clauses() {
        check("(a|a)&(!a|!a)", Config::default());
        check("(a|a)&(!a|!a)", tseitin_config());
    }

    #[test]
    fn identical_operands() {
        for text in ["a&a", "a|a", "a->a", "!(a->a)", "(a&a)<->!(a|a)", "(!(b<->b)|a)&!a"] {
            check(text, Config::default());
        }
    }
}

mod direct_and_tseitin {
    use super::*;

    #[test]
    fn agree_on_random_cnfs() {
        let mut rng = SmallRng::seed_from_u64(5);
        let bounds = RandomBounds {
            max_atoms: 9,
            max_clauses: 12,
            max_literals: 3,
        };

        for _ in 0..200 {
            let text = random::cnf_formula(&mut rng, &bounds);

            let (formula, mut direct_db) = parse(&text).result().unwrap();
            let direct = compile(&formula, &mut direct_db, &Config::default()).unwrap();
            assert_eq!(direct.method, Method::Direct, "{text}");
            assert_eq!(direct_db.count(), direct.cnf.atom_count());

            let (formula, mut tseitin_db) = parse(&text).result().unwrap();
            let tseitin = compile(&formula, &mut tseitin_db, &tseitin_config()).unwrap();
            assert_eq!(tseitin.method, Method::Tseitin, "{text}");

            let (direct_result, direct_model) = solve(direct.cnf.clone(), Config::default());
            let (tseitin_result, _) = solve(tseitin.cnf, tseitin_config());
            assert_eq!(direct_result, tseitin_result, "{text}");

            if let Some(model) = direct_model {
                assert!(direct.cnf.satisfied_by(&model), "{text}");
            }
        }
    }
}

mod determinism {
    use super::*;

    fn run(text: &str) -> (Cnf, Vec<Dispatch>) {
        let (formula, mut atom_db) = parse(text).result().unwrap();
        let compilation = compile(&formula, &mut atom_db, &tseitin_config()).unwrap();

        let mut ctx = Context::from_cnf(tseitin_config(), compilation.cnf.clone()).unwrap();
        let dispatches = Rc::new(RefCell::new(Vec::default()));
        let sink = dispatches.clone();
        ctx.set_dispatcher(Some(Rc::new(move |dispatch: Dispatch| {
            if let Dispatch::Delta(_) = dispatch {
                sink.borrow_mut().push(dispatch);
            }
        })));
        assert!(ctx.solve().is_ok());

        let trace = dispatches.borrow().clone();
        (compilation.cnf, trace)
    }

    #[test]
    fn identical_runs() {
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..50 {
            let text = random::formula(&mut rng, 6, 6);
            let (first_cnf, first_trace) = run(&text);
            let (second_cnf, second_trace) = run(&text);

            assert_eq!(first_cnf, second_cnf, "{text}");
            assert_eq!(first_trace, second_trace, "{text}");
        }
    }
}
