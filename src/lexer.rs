use crate::token::{Operator, Token, TokenKind};
use crate::variables::VariableTable;
use plex::lexer;

#[derive(Debug)]
enum Lexeme {
	Space,
	Token(TokenKind, String),
	// `-`, `<` or `<-` that never became an operator
	Partial(String),
	Variable(String),
}

// Longest match wins, ties go to the earlier rule, so every single-character
// rule must come before the catch-all variable rules.
lexer! {
	fn next_lexeme(text: 'a) -> Lexeme;

	r#" "# => Lexeme::Space,
	r#"[0F]"# => Lexeme::Token(TokenKind::Constant(false), text.to_owned()),
	r#"[1T]"# => Lexeme::Token(TokenKind::Constant(true), text.to_owned()),
	r#"\("# => Lexeme::Token(TokenKind::LeftParen, text.to_owned()),
	r#"\)"# => Lexeme::Token(TokenKind::RightParen, text.to_owned()),
	r#"[\^*]"# => Lexeme::Token(TokenKind::Operator(Operator::Conjunction), text.to_owned()),
	r#"[v+]"# => Lexeme::Token(TokenKind::Operator(Operator::Disjunction), text.to_owned()),
	r#"[!~]"# => Lexeme::Token(TokenKind::Operator(Operator::Negation), text.to_owned()),
	r#"->"# => Lexeme::Token(TokenKind::Operator(Operator::Implication), text.to_owned()),
	r#"<->"# => Lexeme::Token(TokenKind::Operator(Operator::Biconditional), text.to_owned()),
	r#"-"# => Lexeme::Partial(text.to_owned()),
	r#"<-?"# => Lexeme::Partial(text.to_owned()),
	r#"."# => Lexeme::Variable(text.to_owned()),
	r#"\n"# => Lexeme::Variable(text.to_owned()),
}

/// Result of scanning one expression.
#[derive(Clone, Debug, Default)]
pub struct Scan {
	pub tokens: Vec<Token>,
	pub variables: VariableTable,
}

/// Split `source` into tokens and collect its distinct variables.
///
/// Scanning never fails: any character without a meaning of its own is a
/// variable, and an unfinished `->` or `<->` is dropped.
pub fn scan(source: &str) -> Scan {
	let mut result = Scan::default();
	let mut remaining = source;
	while let Some((lexeme, new_remaining)) = next_lexeme(remaining) {
		match lexeme {
			Lexeme::Space => {}
			Lexeme::Partial(text) => log::warn!("dropping incomplete operator {:?}", text),
			Lexeme::Token(kind, text) => result.tokens.push(Token::new(kind, text)),
			Lexeme::Variable(text) => {
				result.variables.register(&text);
				result.tokens.push(Token::new(TokenKind::Variable, text));
			}
		}
		remaining = new_remaining;
	}
	log::debug!(
		"scanned {:?} into {} tokens, {} variables",
		source,
		result.tokens.len(),
		result.variables.len()
	);
	result
}
