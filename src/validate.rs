use crate::token::{Token, TokenKind};

/// Local adjacency check over the token sequence.
///
/// Each operand and operator is judged only by its immediate neighbours; a
/// missing neighbour satisfies no rule. Parentheses are not checked here,
/// unbalanced ones are caught during postfix conversion.
pub fn is_well_formed(tokens: &[Token]) -> bool {
	(0..tokens.len()).all(|i| {
		let left = if i == 0 { None } else { tokens.get(i - 1) };
		let right = tokens.get(i + 1);
		let token = &tokens[i];
		let ok = if token.is_operand() {
			operand_fits(tokens.len(), left, right)
		} else if token.is_negation() {
			negation_fits(left, right)
		} else if token.is_binary_operator() {
			binary_fits(left, right)
		} else {
			true
		};
		if !ok {
			log::debug!("token {} at {} is misplaced", token, i);
		}
		ok
	})
}

fn is(token: Option<&Token>, check: impl Fn(&Token) -> bool) -> bool {
	token.map_or(false, check)
}

fn operand_fits(len: usize, left: Option<&Token>, right: Option<&Token>) -> bool {
	len == 1
		|| is(right, Token::is_binary_operator)
		|| is(left, Token::is_operator)
		|| is(left, |t| t.kind == TokenKind::LeftParen)
}

fn negation_fits(left: Option<&Token>, right: Option<&Token>) -> bool {
	is(right, |t| {
		t.is_operand() || t.is_negation() || t.kind == TokenKind::LeftParen
	}) || is(left, |t| t.kind == TokenKind::LeftParen)
		|| (is(left, Token::is_operator) && is(right, |t| !t.is_negation()))
}

fn binary_fits(left: Option<&Token>, right: Option<&Token>) -> bool {
	is(right, |t| {
		t.is_operand() || t.is_negation() || t.kind == TokenKind::LeftParen
	}) && is(left, |t| t.is_operand() || t.kind == TokenKind::RightParen)
}
