use crate::functions::Library;

pub fn register(library: &mut Library) {
    // `log` is the natural logarithm, same as `ln`
    library.register_function("log", f32::ln);
    library.register_function("ln", f32::ln);
    library.register_function("log10", f32::log10);
    library.register_function("log2", f32::log2);
    library.register_function("exp", f32::exp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logarithms() {
        let mut library = Library::new();
        register(&mut library);
        let call = |name: &str, x: f32| library.function(name).unwrap()(x);

        assert_eq!(call("log", 1.0), 0.0);
        assert!((call("ln", std::f32::consts::E) - 1.0).abs() < 1e-6);
        assert!((call("log10", 1000.0) - 3.0).abs() < 1e-6);
        assert_eq!(call("log2", 8.0), 3.0);
        assert_eq!(call("exp", 0.0), 1.0);
        assert!(call("ln", -1.0).is_nan());
    }
}
