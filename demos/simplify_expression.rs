use exprtree_rs::ast::parse;
use log::debug;

fn main() {
    pretty_env_logger::init();

    let expressions = [
        "2x + 0",
        "(3 + 4) * y * 1",
        "k * x^1 + sin(pi / 2)",
        "x^0 + 1^y",
        "(a - 0) / 1",
    ];

    for expression in expressions {
        let mut tree = parse(expression).expect("Failed to parse");
        tree.load_standard_library();
        tree.set_constant("k", 2.5);
        debug!("tree: {:?}", tree);

        match tree.simplify() {
            Ok(simplified) => {
                println!("{}", expression);
                println!("  infix: {}", simplified);
                println!("  latex: {}", simplified.render_latex(2));
            }
            Err(err) => println!("Error: {}", err),
        }
    }
}
