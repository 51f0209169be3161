use crate::error::TableError;
use crate::eval::evaluate;
use crate::lexer::scan;
use crate::limits::Limits;
use crate::postfix::to_postfix;
use crate::validate::is_well_formed;
use std::fmt;

/// One assignment and the value of the expression under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
	/// Values in the same order as `TruthTable::variables`.
	pub assignment: Vec<bool>,
	pub result: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
	pub expression: String,
	pub variables: Vec<String>,
	pub rows: Vec<Row>,
}

impl TruthTable {
	/// Build the truth table of `expression` under the default limits.
	///
	/// Returns `Ok(None)` when the expression has no tokens at all.
	pub fn generate(expression: &str) -> Result<Option<TruthTable>, TableError> {
		Self::generate_with_limits(expression, &Limits::default())
	}

	pub fn generate_with_limits(
		expression: &str,
		limits: &Limits,
	) -> Result<Option<TruthTable>, TableError> {
		let scanned = scan(expression);
		if scanned.tokens.is_empty() {
			return Ok(None);
		}
		if !is_well_formed(&scanned.tokens) {
			return Err(TableError::InvalidExpression);
		}
		let mut variables = scanned.variables;
		let count = variables.len();
		let too_many = || TableError::TooManyVariables {
			count,
			max: limits.max_variables(),
		};
		if count > limits.max_variables() {
			return Err(too_many());
		}
		// conversion does not depend on variable values, so it runs once
		let postfix = to_postfix(&scanned.tokens)?;

		let row_count = 1u64.checked_shl(count as u32).ok_or_else(too_many)?;
		let mut rows = Vec::new();
		rows.try_reserve(row_count as usize).map_err(|_| too_many())?;
		for index in 0..row_count {
			variables.assign_row(index);
			let result = evaluate(&postfix, &variables)?;
			let assignment: Vec<bool> = variables.values().collect();
			log::trace!("row {}: {:?} -> {}", index, assignment, result);
			rows.push(Row { assignment, result });
		}
		Ok(Some(TruthTable {
			expression: expression.to_owned(),
			variables: variables.names().map(str::to_owned).collect(),
			rows,
		}))
	}
}

fn label(value: bool) -> char {
	if value {
		'T'
	} else {
		'F'
	}
}

// Header, a blank line, one line per row with the result right-aligned under
// the middle of the expression, and a closing blank line.
impl fmt::Display for TruthTable {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for name in &self.variables {
			write!(f, "{} ", name)?;
		}
		writeln!(f, "\t{}", self.expression)?;
		writeln!(f)?;
		let width = (self.expression.len() + 1) / 2;
		for row in &self.rows {
			for &value in &row.assignment {
				write!(f, "{} ", label(value))?;
			}
			writeln!(f, "\t{:>width$}", label(row.result), width = width)?;
		}
		writeln!(f)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::error::MalformedExpression;
	use crate::limits::MAX_VARIABLES;

	fn results(expression: &str) -> Vec<bool> {
		TruthTable::generate(expression)
			.unwrap()
			.unwrap()
			.rows
			.into_iter()
			.map(|row| row.result)
			.collect()
	}

	#[test]
	fn test_conjunction_rows() {
		let table = TruthTable::generate("p ^ q").unwrap().unwrap();
		assert_eq!(table.variables, vec!["p", "q"]);
		assert_eq!(
			table.rows,
			vec![
				Row { assignment: vec![true, true], result: true },
				Row { assignment: vec![true, false], result: false },
				Row { assignment: vec![false, true], result: false },
				Row { assignment: vec![false, false], result: false },
			]
		);
	}

	#[test]
	fn test_negation_and_implication() {
		assert_eq!(results("!p"), vec![false, true]);
		assert_eq!(results("p -> q"), vec![true, false, true, true]);
		assert_eq!(results("p <-> q"), vec![true, false, false, true]);
	}

	#[test]
	fn test_constant_only() {
		let table = TruthTable::generate("T -> F").unwrap().unwrap();
		assert!(table.variables.is_empty());
		assert_eq!(table.rows, vec![Row { assignment: vec![], result: false }]);
	}

	#[test]
	fn test_empty() {
		assert_eq!(TruthTable::generate(""), Ok(None));
		assert_eq!(TruthTable::generate("   "), Ok(None));
	}

	#[test]
	fn test_rejections() {
		assert_eq!(TruthTable::generate("p ^ ^ q"), Err(TableError::InvalidExpression));
		assert_eq!(
			TruthTable::generate("((p"),
			Err(TableError::Malformed(MalformedExpression::UnbalancedParentheses))
		);
		assert_eq!(
			TruthTable::generate("()^p"),
			Err(TableError::Malformed(MalformedExpression::MissingOperand))
		);
	}

	#[test]
	fn test_limits() {
		assert_eq!(
			TruthTable::generate_with_limits("a ^ b ^ c", &Limits::new(2)),
			Err(TableError::TooManyVariables { count: 3, max: 2 })
		);
		assert!(TruthTable::generate_with_limits("a ^ b", &Limits::new(2)).is_ok());

		// 39 variables: the clamp must refuse before anything is allocated
		let wide = "ABCDEGHIJKLMNOPQRSUVWXYZabcdefghijklmno";
		let expression = wide.chars().map(String::from).collect::<Vec<_>>().join(" ^ ");
		assert_eq!(
			TruthTable::generate_with_limits(&expression, &Limits::new(63)),
			Err(TableError::TooManyVariables { count: 39, max: MAX_VARIABLES })
		);
	}

	#[test]
	fn test_display() {
		let table = TruthTable::generate("p ^ q").unwrap().unwrap();
		assert_eq!(
			table.to_string(),
			"p q \tp ^ q\n\nT T \t  T\nT F \t  F\nF T \t  F\nF F \t  F\n\n"
		);
		let table = TruthTable::generate("1").unwrap().unwrap();
		assert_eq!(table.to_string(), "\t1\n\n\tT\n\n");
	}
}
