use formula_sat::{
    db::atom::AtomDB,
    types::err::SyntaxError,
};

/// Writes a report on a syntax error, noting the character found at the position of the error.
pub fn report_syntax_error(text: &str, error: &SyntaxError) {
    let found = match text.get(error.position..).and_then(|rest| rest.chars().next()) {
        Some(character) => format!("{character}"),
        None => "end of input".to_string(),
    };

    println!("Parse Error:");
    println!("  position: {}", error.position);
    println!("  found: {found}");
    println!("  expects: {}", error.expected);
}

/// Writes the value of each source atom on a line, as `name: 1` or `name: 0`.
pub fn write_model(model: &[bool], atom_db: &AtomDB) {
    for (atom, name) in atom_db.atom_name_pairs() {
        if atom_db.is_auxiliary(atom) {
            continue;
        }
        let value = match model.get(atom as usize) {
            Some(true) => 1,
            _ => 0,
        };
        println!("{name}: {value}");
    }
}
