use std::collections::BTreeMap;

/// Propositional variables of one expression, one value cell per name.
///
/// Iteration is in name order. That order fixes both the header columns and
/// the bit each variable reads from the row index, so the two always agree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableTable {
	cells: BTreeMap<String, bool>,
}

impl VariableTable {
	pub fn new() -> VariableTable {
		VariableTable {
			cells: BTreeMap::new(),
		}
	}

	/// Register `name` with an initial value of false. Returns false if it
	/// was already known.
	pub fn register(&mut self, name: &str) -> bool {
		if self.cells.contains_key(name) {
			return false;
		}
		self.cells.insert(name.to_owned(), false);
		true
	}

	pub fn len(&self) -> usize {
		self.cells.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	pub fn get(&self, name: &str) -> Option<bool> {
		self.cells.get(name).copied()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.cells.keys().map(String::as_str)
	}

	pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
		self.cells.values().copied()
	}

	// rows normally come from assign_row; tests pin single values
	#[cfg(test)]
	pub(crate) fn set(&mut self, name: &str, value: bool) -> bool {
		match self.cells.get_mut(name) {
			Some(cell) => {
				*cell = value;
				true
			}
			None => false,
		}
	}

	/// Load the assignment for row `index` of the table.
	///
	/// The first variable reads the highest bit, and a set bit means false:
	/// row 0 is all true and the last row is all false.
	pub fn assign_row(&mut self, index: u64) {
		let count = self.cells.len();
		for (position, value) in self.cells.values_mut().enumerate() {
			let shift = count - 1 - position;
			*value = (index >> shift) & 1 == 0;
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_register_once() {
		let mut table = VariableTable::new();
		assert!(table.register("q"));
		assert!(table.register("p"));
		assert!(!table.register("q"));
		assert_eq!(table.len(), 2);
		assert_eq!(table.names().collect::<Vec<_>>(), vec!["p", "q"]);
		assert_eq!(table.get("p"), Some(false));
		assert_eq!(table.get("r"), None);
		assert!(table.set("p", true));
		assert!(!table.set("r", true));
		assert_eq!(table.get("p"), Some(true));
	}

	#[test]
	fn test_assign_row() {
		let mut table = VariableTable::new();
		table.register("p");
		table.register("q");
		let rows: Vec<Vec<bool>> = (0..4)
			.map(|i| {
				table.assign_row(i);
				table.values().collect()
			})
			.collect();
		assert_eq!(
			rows,
			vec![
				vec![true, true],
				vec![true, false],
				vec![false, true],
				vec![false, false],
			]
		);
	}
}
