//! Error types for table generation.

use thiserror::Error;

/// Structural faults that slip past validation and surface while
/// converting or evaluating an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedExpression {
	/// A `)` without a matching `(`, or a `(` never closed.
	#[error("unbalanced parentheses")]
	UnbalancedParentheses,

	/// An operator found fewer operands than it needs.
	#[error("operator is missing an operand")]
	MissingOperand,

	/// Evaluation finished with more than one value.
	#[error("{0} operands left without an operator")]
	DanglingOperands(usize),

	/// A variable token with no entry in the variable table.
	#[error("unknown variable {0:?}")]
	UnknownVariable(String),
}

/// Why no table was produced for an expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
	/// Rejected by the adjacency check.
	#[error("Invalid expression!")]
	InvalidExpression,

	#[error("malformed expression: {0}")]
	Malformed(#[from] MalformedExpression),

	/// More variables than the configured limit allows.
	#[error("{count} variables exceed the limit of {max}")]
	TooManyVariables { count: usize, max: usize },
}
