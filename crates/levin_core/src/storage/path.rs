use crate::storage::{AccessError, Object, Value, ValueKind};

/// One parsed operation in an entry path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a named object entry.
	Entry(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

/// Parsed entry path expression such as `payload_data.peers[2].id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl EntryPath {
	/// Parse dotted entry syntax with optional `[index]` selectors.
	pub fn parse(input: &str) -> Result<Self, AccessError> {
		let invalid = || AccessError::InvalidEntryPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_') {
				idx += 1;
			}
			if idx == start {
				return Err(invalid());
			}
			steps.push(PathStep::Entry(input[start..idx].to_owned()));

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}

	/// Walk `root` along this path and borrow the selected value.
	pub fn resolve<'a>(&self, root: &'a Object) -> Result<&'a Value, AccessError> {
		let mut steps = self.steps.iter();
		let Some(PathStep::Entry(first)) = steps.next() else {
			return Err(AccessError::InvalidEntryPath { path: self.to_string() });
		};

		let mut current = root.entry(first)?;
		for step in steps {
			current = match step {
				PathStep::Entry(name) => match current {
					Value::Object(object) => object.entry(name)?,
					other => {
						return Err(AccessError::TypeMismatch {
							expected: ValueKind::Object,
							got: other.kind(),
						});
					}
				},
				PathStep::Index(index) => current.as_array()?.get(*index)?,
			};
		}
		Ok(current)
	}
}

impl std::fmt::Display for EntryPath {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (pos, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Entry(name) if pos == 0 => f.write_str(name)?,
				PathStep::Entry(name) => write!(f, ".{name}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
