use crate::functions::Library;

/// Rounding, absolute value and roots.
pub fn register(library: &mut Library) {
    library.register_function("floor", f32::floor);
    library.register_function("ceil", f32::ceil);
    library.register_function("abs", f32::abs);
    library.register_function("sqrt", f32::sqrt);
    library.register_function("cbrt", f32::cbrt);
}
