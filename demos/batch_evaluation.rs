use exprtree_rs::ast::parse;
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let mut tree = parse("a sin(t) + b cos(t)").expect("Failed to parse");
    tree.load_standard_library();
    tree.set_variable("a", 2.0);
    tree.set_variable("b", 0.5);

    let assignments: Vec<HashMap<String, f32>> = (0..8)
        .map(|step| HashMap::from([("t".to_string(), step as f32 * 0.25)]))
        .collect();

    for (assignment, result) in assignments.iter().zip(tree.evaluate_batch(&assignments)) {
        match result {
            Ok(value) => println!("t = {:.2}: {}", assignment["t"], value),
            Err(err) => println!("Error: {}", err),
        }
    }
}
