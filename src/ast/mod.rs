/// AST (Abstract Syntax Tree) module
/// Contains the expression tree the parser builds
///
/// Submodules:
/// - ast: Core expression trait and owning wrapper
/// - expressions: The concrete expression kinds
pub mod ast;
pub mod expressions;

#[cfg(test)]
mod tests;
