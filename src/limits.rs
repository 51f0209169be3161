/// Bounds on the size of a generated table.
///
/// A table has 2^N rows for N variables, so the variable count is the only
/// thing worth limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
	max_variables: usize,
}

/// Largest variable count any `Limits` accepts: 2^24 rows, about a gigabyte.
pub const MAX_VARIABLES: usize = 24;

impl Default for Limits {
	fn default() -> Self {
		Self { max_variables: 20 }
	}
}

impl Limits {
	/// Counts above `MAX_VARIABLES` are clamped to it.
	pub fn new(max_variables: usize) -> Self {
		Self {
			max_variables: max_variables.min(MAX_VARIABLES),
		}
	}

	/// Maximum number of distinct variables in one expression.
	pub fn max_variables(&self) -> usize {
		self.max_variables
	}
}
