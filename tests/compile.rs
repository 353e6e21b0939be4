use formula_sat::{
    builder::parser::parse,
    compile::{compile, Method},
    config::Config,
    structures::literal::{CLiteral, Literal},
};

fn tseitin_config() -> Config {
    let mut config = Config::default();
    config.direct_recognition.value = false;
    config
}

mod direct {
    use super::*;

    #[test]
    fn conjunction_of_variables() {
        let (formula, mut atom_db) = parse("a&b").result().unwrap();
        let compilation = compile(&formula, &mut atom_db, &Config::default()).unwrap();

        assert_eq!(compilation.method, Method::Direct);
        assert_eq!(atom_db.count(), 2);
        assert_eq!(
            compilation.cnf.clauses(),
            &[vec![CLiteral::new(0, true)], vec![CLiteral::new(1, true)]]
        );
    }

    #[test]
    fn clause_order_follows_text() {
        let (formula, mut atom_db) = parse("(c | !a) & b & (a | b | !c)").result().unwrap();
        let compilation = compile(&formula, &mut atom_db, &Config::default()).unwrap();

        assert_eq!(compilation.method, Method::Direct);
        assert_eq!(
            compilation.cnf.as_named_string(&atom_db),
            "(c|!a)&(b)&(a|b|!c)"
        );
        assert_eq!(compilation.cnf.as_string(), "(0|!1)&(2)&(1|2|!0)");
    }

    #[test]
    fn double_negation_is_transformed() {
        let (formula, mut atom_db) = parse("!!a & b").result().unwrap();
        let compilation = compile(&formula, &mut atom_db, &Config::default()).unwrap();

        assert_eq!(compilation.method, Method::Tseitin);
        assert!(atom_db.atom_of("!!a").is_some());
    }
}

mod tseitin {
    use super::*;

    #[test]
    fn forced() {
        let (formula, mut atom_db) = parse("a&b").result().unwrap();
        let compilation = compile(&formula, &mut atom_db, &tseitin_config()).unwrap();

        assert_eq!(compilation.method, Method::Tseitin);
        assert_eq!(atom_db.count(), 3);
        assert_eq!(compilation.cnf.atom_count(), 3);
    }

    #[test]
    fn structure_sharing() {
        let (formula, mut atom_db) = parse("(a&b) -> (a&b)").result().unwrap();
        let compilation = compile(&formula, &mut atom_db, &Config::default()).unwrap();

        let auxiliary = atom_db
            .atom_name_pairs()
            .filter(|(atom, _)| atom_db.is_auxiliary(*atom))
            .map(|(_, name)| name.to_string())
            .collect::<Vec<_>>();

        assert_eq!(auxiliary, vec!["(a&b)", "((a&b)->(a&b))"]);
        assert_eq!(compilation.cnf.clauses().len(), 7);
    }

    #[test]
    fn shared_negations() {
        let (formula, mut atom_db) = parse("!a | (b & !a)").result().unwrap();
        let _ = compile(&formula, &mut atom_db, &Config::default()).unwrap();

        // a, b, !a, (b&!a), (!a|(b&!a))
        assert_eq!(atom_db.count(), 5);
    }

    #[test]
    fn implication_witnesses() {
        let (formula, mut atom_db) = parse("a->b").result().unwrap();
        let compilation = compile(&formula, &mut atom_db, &Config::default()).unwrap();
        let cnf = compilation.cnf;

        assert_eq!(atom_db.atom_of("(a->b)"), Some(2));

        assert!(cnf.satisfied_by(&[false, false, true]));
        assert!(cnf.satisfied_by(&[false, true, true]));
        assert!(cnf.satisfied_by(&[true, true, true]));

        assert!(!cnf.satisfied_by(&[true, false, true]));
        assert!(!cnf.satisfied_by(&[true, false, false]));
    }

    #[test]
    fn dimacs() {
        let (formula, mut atom_db) = parse("!p").result().unwrap();
        let compilation = compile(&formula, &mut atom_db, &Config::default()).unwrap();
        assert_eq!(compilation.method, Method::Direct);
        assert_eq!(compilation.cnf.as_dimacs(), "p cnf 1 1\n-1 0\n");

        let compilation = compile(&formula, &mut atom_db, &tseitin_config()).unwrap();
        assert_eq!(compilation.cnf.as_dimacs(), "p cnf 2 3\n-1 -2 0\n1 2 0\n2 0\n");
    }
}
