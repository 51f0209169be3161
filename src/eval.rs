//! Postfix evaluator.

use crate::error::MalformedExpression;
use crate::token::{Token, TokenKind};
use crate::variables::VariableTable;

/// Evaluate a postfix sequence against the current variable values.
///
/// # Errors
///
/// Returns an error if an operator finds too few operands, if anything
/// other than exactly one value is left at the end, or if a variable has
/// no entry in `variables`.
pub fn evaluate(postfix: &[Token], variables: &VariableTable) -> Result<bool, MalformedExpression> {
	let mut operands: Vec<bool> = Vec::with_capacity(postfix.len());
	for token in postfix {
		let value = match token.kind {
			TokenKind::Constant(value) => value,
			TokenKind::Variable => variables
				.get(&token.lexeme)
				.ok_or_else(|| MalformedExpression::UnknownVariable(token.lexeme.clone()))?,
			TokenKind::Operator(op) if op.is_unary() => {
				let right = pop(&mut operands)?;
				op.apply(false, right)
			}
			TokenKind::Operator(op) => {
				let right = pop(&mut operands)?;
				let left = pop(&mut operands)?;
				op.apply(left, right)
			}
			// a parenthesis left in postfix means the conversion was skipped
			TokenKind::LeftParen | TokenKind::RightParen => {
				return Err(MalformedExpression::UnbalancedParentheses)
			}
		};
		operands.push(value);
	}
	match operands.len() {
		0 => Err(MalformedExpression::MissingOperand),
		1 => Ok(operands[0]),
		n => Err(MalformedExpression::DanglingOperands(n)),
	}
}

fn pop(operands: &mut Vec<bool>) -> Result<bool, MalformedExpression> {
	operands.pop().ok_or(MalformedExpression::MissingOperand)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::lexer::scan;
	use crate::postfix::to_postfix;

	fn eval_with(source: &str, values: &[(&str, bool)]) -> Result<bool, MalformedExpression> {
		let scanned = scan(source);
		let mut variables = scanned.variables;
		for (name, value) in values {
			assert!(variables.set(name, *value));
		}
		evaluate(&to_postfix(&scanned.tokens)?, &variables)
	}

	#[test]
	fn test_constants() {
		assert_eq!(eval_with("T ^ F", &[]), Ok(false));
		assert_eq!(eval_with("0 v 1", &[]), Ok(true));
		assert_eq!(eval_with("!F", &[]), Ok(true));
	}

	#[test]
	fn test_variables_read_current_value() {
		assert_eq!(eval_with("p ^ !p", &[("p", true)]), Ok(false));
		assert_eq!(eval_with("p v q", &[("p", false), ("q", true)]), Ok(true));
		assert_eq!(eval_with("p -> q", &[("p", true), ("q", false)]), Ok(false));
		assert_eq!(eval_with("p <-> q", &[("p", false), ("q", false)]), Ok(true));
	}

	#[test]
	fn test_right_grouped_implication() {
		// F -> (T -> F) is true, (F -> T) -> F would be false
		let values = [("p", false), ("q", true), ("r", false)];
		assert_eq!(eval_with("p -> q -> r", &values), Ok(true));
		assert_eq!(eval_with("(p -> q) -> r", &values), Ok(false));
	}

	#[test]
	fn test_malformed() {
		assert_eq!(eval_with("p ^ ^ q", &[]), Err(MalformedExpression::MissingOperand));
		assert_eq!(eval_with("(p)(q)", &[]), Err(MalformedExpression::DanglingOperands(2)));
		assert_eq!(eval_with("()", &[]), Err(MalformedExpression::MissingOperand));
		assert_eq!(
			evaluate(&scan("p").tokens, &VariableTable::new()),
			Err(MalformedExpression::UnknownVariable("p".to_owned()))
		);
		assert_eq!(
			evaluate(&scan("(T)").tokens, &VariableTable::new()),
			Err(MalformedExpression::UnbalancedParentheses)
		);
	}
}
