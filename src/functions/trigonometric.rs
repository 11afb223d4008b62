use crate::functions::Library;

pub fn register(library: &mut Library) {
    library.register_function("sin", f32::sin);
    library.register_function("cos", f32::cos);
    library.register_function("tan", f32::tan);
    library.register_function("sinh", f32::sinh);
    library.register_function("cosh", f32::cosh);
    library.register_function("tanh", f32::tanh);
}
