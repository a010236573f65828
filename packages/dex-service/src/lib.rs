pub mod browser;
pub mod pagination;
pub mod store;

mod error;

pub use browser::{BrowseSnapshot, Browser};
pub use error::{Error, Result};
pub use pagination::{BatchRequest, PaginationDriver, PaginationState};
pub use store::RecordStore;

use std::{future::Future, pin::Pin};

use dex_domain::record::Monster;
use dex_providers::graphql::CatalogueClient;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Resolves an ordered id slice to the matching records.
///
/// Implementations may return any subset of the requested ids in any order, and an empty list
/// when none exist. Timeouts and retries are the implementation's business.
pub trait BatchFetcher
where
	Self: Send + Sync,
{
	fn fetch<'a>(&'a self, ids: &'a [i64]) -> BoxFuture<'a, Result<Vec<Monster>>>;
}

impl BatchFetcher for CatalogueClient {
	fn fetch<'a>(&'a self, ids: &'a [i64]) -> BoxFuture<'a, Result<Vec<Monster>>> {
		Box::pin(async move { self.fetch_monsters(ids).await.map_err(Error::from) })
	}
}
