use std::fmt;

/// Binding strength of an operator, weakest first.
///
/// `NotApplicable` belongs to operands and parentheses. It orders below
/// every operator, so nothing ever pops a parenthesis as an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	NotApplicable,
	Biconditional,
	Implication,
	Disjunction,
	Conjunction,
	Negation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
	Negation,
	Conjunction,
	Disjunction,
	Implication,
	Biconditional,
}

impl Operator {
	pub fn precedence(self) -> Precedence {
		match self {
			Operator::Negation => Precedence::Negation,
			Operator::Conjunction => Precedence::Conjunction,
			Operator::Disjunction => Precedence::Disjunction,
			Operator::Implication => Precedence::Implication,
			Operator::Biconditional => Precedence::Biconditional,
		}
	}

	pub fn is_unary(self) -> bool {
		self == Operator::Negation
	}

	/// Apply a binary connective. Negation only looks at `right`.
	pub fn apply(self, left: bool, right: bool) -> bool {
		match self {
			Operator::Negation => !right,
			Operator::Conjunction => left && right,
			Operator::Disjunction => left || right,
			// material implication
			Operator::Implication => left <= right,
			Operator::Biconditional => left == right,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
	Constant(bool),
	Variable,
	Operator(Operator),
	LeftParen,
	RightParen,
}

/// One lexical unit. A variable's name is its lexeme; its value lives in
/// the `VariableTable`, never in the token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	pub lexeme: String,
}

impl Token {
	pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Token {
		Token {
			kind,
			lexeme: lexeme.into(),
		}
	}

	pub fn precedence(&self) -> Precedence {
		match self.kind {
			TokenKind::Operator(op) => op.precedence(),
			_ => Precedence::NotApplicable,
		}
	}

	pub fn is_operand(&self) -> bool {
		matches!(self.kind, TokenKind::Constant(_) | TokenKind::Variable)
	}

	pub fn is_operator(&self) -> bool {
		matches!(self.kind, TokenKind::Operator(_))
	}

	pub fn is_negation(&self) -> bool {
		self.kind == TokenKind::Operator(Operator::Negation)
	}

	pub fn is_binary_operator(&self) -> bool {
		self.is_operator() && !self.is_negation()
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.lexeme)
	}
}
