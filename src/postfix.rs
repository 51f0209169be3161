use crate::error::MalformedExpression;
use crate::token::{Token, TokenKind};

/// Shunting-yard conversion from infix to postfix order.
///
/// A stacked operator is popped only while it binds strictly tighter than
/// the incoming one, so equal operators are left on the stack and a chain
/// like `p -> q -> r` groups as `p -> (q -> r)`.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, MalformedExpression> {
	let mut stack: Vec<&Token> = Vec::new();
	let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
	for token in tokens {
		match token.kind {
			TokenKind::Constant(_) | TokenKind::Variable => output.push(token.clone()),
			TokenKind::Operator(_) => {
				while let Some(top) = stack.last() {
					if top.precedence() <= token.precedence() {
						break;
					}
					output.push((*top).clone());
					stack.pop();
				}
				stack.push(token);
			}
			TokenKind::LeftParen => stack.push(token),
			TokenKind::RightParen => loop {
				match stack.pop() {
					Some(top) if top.kind == TokenKind::LeftParen => break,
					Some(top) => output.push(top.clone()),
					None => return Err(MalformedExpression::UnbalancedParentheses),
				}
			},
		}
	}
	while let Some(top) = stack.pop() {
		if top.kind == TokenKind::LeftParen {
			return Err(MalformedExpression::UnbalancedParentheses);
		}
		output.push(top.clone());
	}
	log::debug!(
		"postfix: {}",
		output.iter().map(|t| t.lexeme.as_str()).collect::<Vec<_>>().join(" ")
	);
	Ok(output)
}
