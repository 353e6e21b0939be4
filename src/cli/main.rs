use std::io::BufRead;

use config::{parse_args, CliConfig};
use formula_sat::{
    builder::{
        parser::{parse, ParseOutcome},
        random::{cnf_formula, RandomBounds},
    },
    compile::compile,
    context::Context,
    dispatch::library::report::{self},
};
use misc::{report_syntax_error, write_model};
use rand::{rngs::SmallRng, SeedableRng};
use trace::trace_dispatcher;

mod config;
mod misc;
mod trace;

fn main() {
    #[cfg(feature = "env_log")]
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut cli_options = CliConfig::default();

    let config = match parse_args(&args, &mut cli_options) {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let text = match (cli_options.random, cli_options.formula.take()) {
        (Some(seed), _) => cnf_formula(&mut SmallRng::seed_from_u64(seed), &RandomBounds::default()),

        (None, Some(formula)) => formula,

        (None, None) => {
            let mut line = String::default();
            if std::io::stdin().lock().read_line(&mut line).is_err() {
                println!("c Failed to read a formula");
                std::process::exit(1);
            }
            line.trim_end_matches(['\n', '\r']).to_string()
        }
    };

    let quiet = cli_options.quiet;

    if cli_options.random.is_some() && quiet == 0 {
        println!("c Random formula: {text}");
    }

    let (formula, mut atom_db) = match parse(&text) {
        ParseOutcome::Parsed(formula, atom_db) => (formula, atom_db),
        ParseOutcome::SyntaxError(error) => {
            report_syntax_error(&text, &error);
            std::process::exit(1);
        }
    };

    if quiet < 2 {
        println!("Parse complete. No errors.");
        println!();
        println!("Parse result (disambiguated):");
        println!("{}", formula.as_string(&atom_db));
    }

    if quiet == 0 {
        println!();
        println!("Parse tree:");
        print!("{}", formula.tree_string(&atom_db));
    }

    let compilation = match compile(&formula, &mut atom_db, &config) {
        Ok(compilation) => compilation,
        Err(e) => {
            println!("c Compile error: {e}");
            std::process::exit(2);
        }
    };

    if quiet < 2 {
        println!();
        println!("Internal variable mapping:");
        print!("{}", atom_db.mapping_string());
        println!();
        println!("Final CNF ({}):", compilation.method);
        println!("{}", compilation.cnf.as_string());
    }

    if cli_options.dimacs {
        println!();
        print!("{}", compilation.cnf.as_dimacs());
    }

    let cnf = compilation.cnf;
    let mut ctx = match Context::from_cnf(config, cnf.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            println!("c Context error: {e}");
            std::process::exit(2);
        }
    };

    if quiet == 0 {
        println!();
        println!("Trace:");
        ctx.set_dispatcher(Some(trace_dispatcher(cnf)));
    }

    let result = match ctx.solve() {
        Ok(result) => result,
        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(2);
        }
    };

    if quiet < 2 {
        println!();
    }

    match result {
        report::Solve::Satisfiable => {
            println!("SAT");
            match ctx.model() {
                Ok(model) => write_model(&model, &atom_db),
                Err(e) => {
                    println!("c Model error: {e}");
                    std::process::exit(2);
                }
            }
        }

        report::Solve::Unsatisfiable => println!("NON-SAT"),

        report::Solve::TimeUp | report::Solve::Unknown => println!("UNKNOWN ({result})"),
    }

    if quiet == 0 {
        println!();
        println!(
            "c {} iterations, {} decisions, {} propagations, {} conflicts in {:.2?}",
            ctx.counters.iterations,
            ctx.counters.decisions,
            ctx.counters.propagations,
            ctx.counters.conflicts,
            ctx.counters.time
        );
    }
}
