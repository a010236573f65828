use std::sync::Arc;

use dex_domain::{
	filter::{self, ViewCriteria},
	record::Monster,
	view::{DisplayFlags, ViewItem},
};

use crate::{
	BatchFetcher, Result,
	pagination::{BatchRequest, PaginationDriver, PaginationState},
};

/// What a projector needs to render the current view.
#[derive(Debug)]
pub struct BrowseSnapshot<'a> {
	pub loading: bool,
	pub failed: bool,
	pub items: Vec<ViewItem<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
struct ViewKey {
	generation: u64,
	accumulated: usize,
	criteria: ViewCriteria,
}

#[derive(Debug, Default)]
struct VisibleCache {
	key: Option<ViewKey>,
	indices: Vec<usize>,
	recomputations: usize,
}

/// A browse session: paginates one identifier list through a [`BatchFetcher`] and derives the
/// filtered, ranked view from what has arrived so far.
///
/// The visible sequence is recomputed only when the accumulated records or the criteria
/// change. The store is append-only within a generation, so its length identifies its
/// contents.
pub struct Browser {
	driver: PaginationDriver,
	fetcher: Arc<dyn BatchFetcher>,
	criteria: ViewCriteria,
	pending: Option<BatchRequest>,
	visible: VisibleCache,
}
impl Browser {
	pub fn new(batch_size: usize, fetcher: Arc<dyn BatchFetcher>) -> Result<Self> {
		Ok(Self {
			driver: PaginationDriver::new(batch_size)?,
			fetcher,
			criteria: ViewCriteria::default(),
			pending: None,
			visible: VisibleCache::default(),
		})
	}

	pub fn with_criteria(mut self, criteria: ViewCriteria) -> Self {
		self.criteria = criteria;

		self
	}

	pub fn driver(&self) -> &PaginationDriver {
		&self.driver
	}

	pub fn state(&self) -> PaginationState {
		self.driver.state()
	}

	pub fn is_loading(&self) -> bool {
		self.driver.is_loading()
	}

	pub fn has_failed(&self) -> bool {
		self.driver.has_failed()
	}

	pub fn criteria(&self) -> &ViewCriteria {
		&self.criteria
	}

	pub fn set_criteria(&mut self, criteria: ViewCriteria) {
		self.criteria = criteria;
	}

	/// Starts over with a new identifier list. A response still in flight for the previous
	/// list is dropped when it resolves.
	pub fn set_ids(&mut self, ids: Vec<i64>) {
		self.pending = self.driver.start(ids);
	}

	/// Fetches and integrates one batch. Returns `false` once nothing is left to request.
	pub async fn step(&mut self) -> bool {
		let Some(request) = self.pending.take() else {
			return false;
		};
		let outcome = self.fetcher.fetch(&request.ids).await;

		self.pending = self.driver.resolve(&request, outcome);

		self.pending.is_some()
	}

	/// Pumps batches one after another until the list is exhausted, a batch comes back empty,
	/// or a fetch fails.
	pub async fn run(&mut self) -> PaginationState {
		while self.step().await {}

		tracing::info!(
			state = ?self.driver.state(),
			accumulated = self.driver.store().len(),
			requests = self.driver.requests_issued(),
			"Pagination finished."
		);

		self.driver.state()
	}

	/// Visible records in ranked order.
	pub fn visible(&mut self) -> Vec<&Monster> {
		self.refresh_visible();

		let records = self.driver.store().as_slice();

		self.visible.indices.iter().map(|index| &records[*index]).collect()
	}

	pub fn snapshot(&mut self, display: DisplayFlags) -> BrowseSnapshot<'_> {
		let loading = self.is_loading();
		let failed = self.has_failed();
		let items =
			self.visible().into_iter().map(|record| ViewItem::new(record, display)).collect();

		BrowseSnapshot { loading, failed, items }
	}

	/// How many times the visible sequence has been derived.
	pub fn recompute_count(&self) -> usize {
		self.visible.recomputations
	}

	fn refresh_visible(&mut self) {
		let key = ViewKey {
			generation: self.driver.generation(),
			accumulated: self.driver.store().len(),
			criteria: self.criteria.clone(),
		};

		if self.visible.key.as_ref() == Some(&key) {
			return;
		}

		self.visible.indices =
			filter::visible_indices(self.driver.store().as_slice(), &self.criteria);
		self.visible.recomputations += 1;

		tracing::trace!(
			visible = self.visible.indices.len(),
			accumulated = key.accumulated,
			"Recomputed visible records."
		);

		self.visible.key = Some(key);
	}
}
