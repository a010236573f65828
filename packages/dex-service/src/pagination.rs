use dex_domain::record::Monster;

use crate::{Error, Result, store::RecordStore};

/// Progress through one identifier list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaginationState {
	/// No identifier list yet.
	Idle,
	/// The slice starting at `cursor` is outstanding.
	FetchingBatch { cursor: usize },
	/// The list is exhausted or a batch came back empty.
	Done,
	/// A batch failed. Nothing further is requested for this list.
	Failed,
}

/// One outstanding slice `[cursor, cursor + batch_size)` of the identifier list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchRequest {
	pub generation: u64,
	pub cursor: usize,
	pub ids: Vec<i64>,
}

/// Sequential batch loader.
///
/// The driver never performs I/O. [`PaginationDriver::start`] and [`PaginationDriver::resolve`]
/// hand back the next [`BatchRequest`] to issue, so at most one request is outstanding and
/// batches are integrated strictly in cursor order. Every [`PaginationDriver::start`] opens a
/// new generation; responses carrying an older generation are discarded.
#[derive(Debug)]
pub struct PaginationDriver {
	batch_size: usize,
	ids: Vec<i64>,
	generation: u64,
	cursor: usize,
	state: PaginationState,
	store: RecordStore,
	error: Option<Error>,
	requests_issued: usize,
}
impl PaginationDriver {
	pub fn new(batch_size: usize) -> Result<Self> {
		if batch_size == 0 {
			return Err(Error::InvalidRequest {
				message: "batch_size must be greater than zero.".to_string(),
			});
		}

		Ok(Self {
			batch_size,
			ids: Vec::new(),
			generation: 0,
			cursor: 0,
			state: PaginationState::Idle,
			store: RecordStore::default(),
			error: None,
			requests_issued: 0,
		})
	}

	pub fn batch_size(&self) -> usize {
		self.batch_size
	}

	pub fn ids(&self) -> &[i64] {
		&self.ids
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn state(&self) -> PaginationState {
		self.state
	}

	pub fn store(&self) -> &RecordStore {
		&self.store
	}

	/// Requests issued for the current identifier list.
	pub fn requests_issued(&self) -> usize {
		self.requests_issued
	}

	pub fn error(&self) -> Option<&Error> {
		self.error.as_ref()
	}

	pub fn has_failed(&self) -> bool {
		self.state == PaginationState::Failed
	}

	/// True only while the first batch is outstanding and nothing has been accumulated.
	pub fn is_loading(&self) -> bool {
		matches!(self.state, PaginationState::FetchingBatch { .. }) && self.store.is_empty()
	}

	/// Resets everything for `ids` and returns the first request. An empty list finishes
	/// immediately without issuing one.
	pub fn start(&mut self, ids: Vec<i64>) -> Option<BatchRequest> {
		self.generation += 1;
		self.ids = ids;
		self.cursor = 0;
		self.store.clear();
		self.error = None;
		self.requests_issued = 0;

		tracing::debug!(
			generation = self.generation,
			total = self.ids.len(),
			batch_size = self.batch_size,
			"Starting pagination."
		);

		if self.ids.is_empty() {
			self.state = PaginationState::Done;

			return None;
		}

		Some(self.request_at_cursor())
	}

	/// Integrates the outcome of `request` and returns the next request, if any.
	///
	/// A non-empty batch is appended in arrival order and advances the cursor by the batch
	/// size. An empty batch ends pagination even when ids remain. A failure parks the driver
	/// in [`PaginationState::Failed`] and keeps what was already accumulated.
	pub fn resolve(
		&mut self,
		request: &BatchRequest,
		outcome: Result<Vec<Monster>>,
	) -> Option<BatchRequest> {
		if !self.is_current(request) {
			tracing::debug!(
				generation = request.generation,
				cursor = request.cursor,
				current_generation = self.generation,
				"Discarding stale batch response."
			);

			return None;
		}

		let records = match outcome {
			Ok(records) => records,
			Err(err) => {
				tracing::error!(error = %err, cursor = self.cursor, "Batch fetch failed.");

				self.error = Some(err);
				self.state = PaginationState::Failed;

				return None;
			},
		};

		if records.is_empty() {
			tracing::debug!(cursor = self.cursor, "Empty batch, treating as end of data.");

			self.state = PaginationState::Done;

			return None;
		}

		let batch_len = records.len();

		self.store.append(records);
		self.cursor += self.batch_size;

		tracing::debug!(
			batch_len,
			accumulated = self.store.len(),
			cursor = self.cursor,
			"Batch integrated."
		);

		if self.cursor >= self.ids.len() {
			self.state = PaginationState::Done;

			return None;
		}

		Some(self.request_at_cursor())
	}

	fn is_current(&self, request: &BatchRequest) -> bool {
		request.generation == self.generation
			&& self.state == PaginationState::FetchingBatch { cursor: request.cursor }
	}

	fn request_at_cursor(&mut self) -> BatchRequest {
		let end = (self.cursor + self.batch_size).min(self.ids.len());

		self.state = PaginationState::FetchingBatch { cursor: self.cursor };
		self.requests_issued += 1;

		BatchRequest {
			generation: self.generation,
			cursor: self.cursor,
			ids: self.ids[self.cursor..end].to_vec(),
		}
	}
}
