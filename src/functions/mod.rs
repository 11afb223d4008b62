pub mod algebraic;
pub mod logarithmic;
pub mod trigonometric;

use crate::ast::Function;
use std::collections::HashMap;
use std::sync::Arc;

/// A named set of constants and unary functions that can be loaded into any tree.
#[derive(Clone, Default)]
pub struct Library {
    constants: HashMap<String, f32>,
    functions: HashMap<String, Function>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// `pi`, `e` and the trigonometric, logarithmic and algebraic functions.
    pub fn standard() -> Self {
        let mut library = Library::new()
            .with_constant("pi", std::f32::consts::PI)
            .with_constant("e", std::f32::consts::E);
        trigonometric::register(&mut library);
        logarithmic::register(&mut library);
        algebraic::register(&mut library);
        library
    }

    pub fn register_constant(&mut self, name: &str, value: f32) {
        self.constants.insert(name.to_string(), value);
    }

    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn with_constant(mut self, name: &str, value: f32) -> Self {
        self.register_constant(name, value);
        self
    }

    pub fn with_function<F>(mut self, name: &str, function: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        self.register_function(name, function);
        self
    }

    pub fn constants(&self) -> &HashMap<String, f32> {
        &self.constants
    }

    pub fn functions(&self) -> &HashMap<String, Function> {
        &self.functions
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut functions: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        functions.sort_unstable();
        f.debug_struct("Library")
            .field("constants", &self.constants)
            .field("functions", &functions)
            .finish()
    }
}
