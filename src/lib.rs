//! Truth tables for propositional-logic expressions.
//!
//! An expression goes through four stages: [`lexer::scan`] splits it into
//! tokens and collects its variables, [`validate::is_well_formed`] checks
//! token adjacency, [`postfix::to_postfix`] reorders the tokens by operator
//! precedence, and [`eval::evaluate`] runs the postfix form once for every
//! assignment of the variables.
//!
//! ```
//! use truthtable::TruthTable;
//!
//! let table = TruthTable::generate("p -> q").unwrap().unwrap();
//! let results: Vec<bool> = table.rows.iter().map(|row| row.result).collect();
//! assert_eq!(results, vec![true, false, true, true]);
//! ```
//!
//! Accepted syntax: `0 F 1 T` constants, `! ~` not, `^ *` and, `v +` or,
//! `->` implies, `<->` iff, parentheses, and any other single character as
//! a variable. Spaces are ignored.

pub mod error;
pub mod eval;
pub mod lexer;
pub mod limits;
pub mod postfix;
pub mod table;
pub mod token;
pub mod validate;
pub mod variables;

pub use error::{MalformedExpression, TableError};
pub use limits::{Limits, MAX_VARIABLES};
pub use table::{Row, TruthTable};
pub use token::{Operator, Precedence, Token, TokenKind};
pub use variables::VariableTable;
