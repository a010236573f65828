use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};
use dex_domain::record::Monster;

const ARTWORK_FIELDS: &str = "phase modifiedDate creditPrimary { id name } \
	creditSecondary { id name } bounty { exists full incomplete }";

/// Batched catalogue query: one request per id slice.
pub fn carrousel_query() -> String {
	format!(
		"query Carrousel($ids: [Int!]) {{ monster(filter: $ids) {{ id rawId name \
		 manual {{ portraits {{ {fields} }} sprites {{ {fields} }} }} \
		 forms {{ portraits {{ {fields} }} sprites {{ {fields} }} }} }} }}",
		fields = ARTWORK_FIELDS,
	)
}

/// Reusable HTTP client bound to one catalogue endpoint.
#[derive(Clone, Debug)]
pub struct CatalogueClient {
	client: Client,
	url: String,
}
impl CatalogueClient {
	pub fn new(cfg: &dex_config::Source) -> Result<Self> {
		let client = Client::builder()
			.timeout(Duration::from_millis(cfg.timeout_ms))
			.default_headers(crate::default_headers(&cfg.default_headers)?)
			.build()?;

		Ok(Self { client, url: format!("{}{}", cfg.api_base, cfg.path) })
	}

	pub async fn fetch_monsters(&self, ids: &[i64]) -> Result<Vec<Monster>> {
		let body = serde_json::json!({
			"operationName": "Carrousel",
			"query": carrousel_query(),
			"variables": { "ids": ids },
		});
		let res = self.client.post(&self.url).json(&body).send().await?;
		let json: Value = res.error_for_status()?.json().await?;
		let monsters = parse_monster_response(json)?;

		tracing::debug!(requested = ids.len(), returned = monsters.len(), "Fetched monster batch.");

		Ok(monsters)
	}
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
	message: String,
}

fn parse_monster_response(mut json: Value) -> Result<Vec<Monster>> {
	if let Some(errors) = json.get("errors").filter(|errors| !errors.is_null()) {
		let errors: Vec<GraphQlError> = serde_json::from_value(errors.clone())?;

		if !errors.is_empty() {
			let message =
				errors.into_iter().map(|err| err.message).collect::<Vec<_>>().join("; ");

			return Err(Error::GraphQl { message });
		}
	}

	let monsters = json
		.get_mut("data")
		.and_then(|data| data.get_mut("monster"))
		.map(Value::take)
		.ok_or_else(|| Error::InvalidResponse {
			message: "Catalogue response is missing data.monster.".to_string(),
		})?;

	if monsters.is_null() {
		return Ok(Vec::new());
	}

	Ok(serde_json::from_value(monsters)?)
}
