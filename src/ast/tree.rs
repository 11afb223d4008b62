use crate::ast::ExprNode;
use crate::error::{Result, UndefinedReference};
use crate::functions::Library;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type Function = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

/// An expression tree together with the context it is evaluated against.
///
/// Variables are consulted before constants. Only constants count as fixed
/// values when simplifying.
#[derive(Clone)]
pub struct ExprTree {
    root: ExprNode,
    constants: HashMap<String, f32>,
    variables: HashMap<String, f32>,
    functions: HashMap<String, Function>,
}

impl ExprTree {
    /// Creates a tree with an empty context.
    pub fn new(root: ExprNode) -> Self {
        Self {
            root,
            constants: HashMap::new(),
            variables: HashMap::new(),
            functions: HashMap::new(),
        }
    }

    /// Creates a tree that starts out with the given constants and functions and no variables.
    pub fn with_context(
        root: ExprNode,
        constants: HashMap<String, f32>,
        functions: HashMap<String, Function>,
    ) -> Self {
        Self {
            root,
            constants,
            variables: HashMap::new(),
            functions,
        }
    }

    pub fn root(&self) -> &ExprNode {
        &self.root
    }

    pub fn into_root(self) -> ExprNode {
        self.root
    }

    pub fn constants(&self) -> &HashMap<String, f32> {
        &self.constants
    }

    pub fn variables(&self) -> &HashMap<String, f32> {
        &self.variables
    }

    pub fn functions(&self) -> &HashMap<String, Function> {
        &self.functions
    }

    pub fn set_variable(&mut self, name: &str, value: f32) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn set_constant(&mut self, name: &str, value: f32) {
        self.constants.insert(name.to_string(), value);
    }

    /// Registers a unary function under `name`, replacing any previous one.
    pub fn set_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn set_constants(&mut self, constants: HashMap<String, f32>) {
        self.constants = constants;
    }

    pub fn set_functions(&mut self, functions: HashMap<String, Function>) {
        self.functions = functions;
    }

    pub fn extend_constants(&mut self, constants: impl IntoIterator<Item = (String, f32)>) {
        self.constants.extend(constants);
    }

    pub fn extend_variables(&mut self, variables: impl IntoIterator<Item = (String, f32)>) {
        self.variables.extend(variables);
    }

    pub fn extend_functions(&mut self, functions: impl IntoIterator<Item = (String, Function)>) {
        self.functions.extend(functions);
    }

    /// Merges a library's constants and functions into this tree's context.
    pub fn load_library(&mut self, library: &Library) {
        self.extend_constants(
            library
                .constants()
                .iter()
                .map(|(name, value)| (name.clone(), *value)),
        );
        self.extend_functions(
            library
                .functions()
                .iter()
                .map(|(name, function)| (name.clone(), Arc::clone(function))),
        );
    }

    pub fn load_standard_library(&mut self) {
        self.load_library(&Library::standard());
    }

    pub fn evaluate(&self) -> Result<f32> {
        self.evaluate_node(&self.root, None)
    }

    /// Evaluates with `overrides` consulted ahead of the tree's own variables.
    pub fn evaluate_with(&self, overrides: &HashMap<String, f32>) -> Result<f32> {
        self.evaluate_node(&self.root, Some(overrides))
    }

    /// Evaluates one assignment per entry of `assignments`, in parallel.
    pub fn evaluate_batch(&self, assignments: &[HashMap<String, f32>]) -> Vec<Result<f32>> {
        assignments
            .par_iter()
            .map(|overrides| self.evaluate_with(overrides))
            .collect()
    }

    pub(crate) fn lookup_variable(
        &self,
        name: &str,
        overrides: Option<&HashMap<String, f32>>,
    ) -> Result<f32> {
        overrides
            .and_then(|overrides| overrides.get(name))
            .or_else(|| self.variables.get(name))
            .or_else(|| self.constants.get(name))
            .copied()
            .ok_or_else(|| UndefinedReference::Variable(name.to_string()).into())
    }

    pub(crate) fn evaluate_node(
        &self,
        node: &ExprNode,
        overrides: Option<&HashMap<String, f32>>,
    ) -> Result<f32> {
        match node {
            ExprNode::Number(value) => Ok(*value),
            ExprNode::Variable(name) => self.lookup_variable(name, overrides),
            ExprNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = self.evaluate_node(left, overrides)?;
                let right_value = self.evaluate_node(right, overrides)?;
                Ok(operator.apply(left_value, right_value))
            }
            ExprNode::Negate(inner) => Ok(-self.evaluate_node(inner, overrides)?),
            ExprNode::Function { name, argument } => {
                let function = self
                    .functions
                    .get(name)
                    .ok_or_else(|| UndefinedReference::Function(name.clone()))?;
                Ok(function(self.evaluate_node(argument, overrides)?))
            }
        }
    }
}

impl fmt::Debug for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        functions.sort_unstable();
        f.debug_struct("ExprTree")
            .field("root", &self.root)
            .field("constants", &self.constants)
            .field("variables", &self.variables)
            .field("functions", &functions)
            .finish()
    }
}

/// Trees compare by structure only; their contexts are ignored.
impl PartialEq for ExprTree {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}
