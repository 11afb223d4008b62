use exprtree_rs::ast::{format_postfix, parse};
use std::io::{self, BufRead, Write};

/// Reads one expression per line and prints its value, postfix form and
/// simplified form. `q` quits.
fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "expr> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let expression = line.trim();
        if expression == "q" {
            break;
        }
        if expression.is_empty() {
            continue;
        }

        let mut tree = match parse(expression) {
            Ok(tree) => tree,
            Err(err) => {
                println!("Error: {}", err);
                continue;
            }
        };
        tree.load_standard_library();

        if let Ok(postfix) = format_postfix(expression) {
            println!("postfix: {}", postfix);
        }
        match tree.evaluate() {
            Ok(value) => println!("{} = {}", expression, value),
            Err(err) => println!("Error: {}", err),
        }
        match tree.simplify() {
            Ok(simplified) => println!("simplified: {}", simplified.render_latex(3)),
            Err(err) => println!("Error: {}", err),
        }
    }

    Ok(())
}
