use dex_domain::record::Monster;

/// Records accumulated for one identifier list, in arrival order.
///
/// Entries are only ever appended; the owning driver clears the store when a new list starts.
#[derive(Debug, Default)]
pub struct RecordStore {
	records: Vec<Monster>,
}
impl RecordStore {
	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn as_slice(&self) -> &[Monster] {
		&self.records
	}

	pub(crate) fn append(&mut self, batch: Vec<Monster>) {
		self.records.extend(batch);
	}

	pub(crate) fn clear(&mut self) {
		self.records.clear();
	}
}
