use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub source: Source,
	pub browse: Browse,
	pub view: View,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

/// Remote catalogue answering the batched GraphQL query.
#[derive(Debug, Deserialize, Clone)]
pub struct Source {
	pub api_base: String,
	pub path: String,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Browse {
	/// Number of ids requested per batch.
	pub request_items_size: usize,
	/// Optional. Inclusive id range browsed when no ids are given on the command line.
	pub id_range: Option<IdRange>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct IdRange {
	pub start: i64,
	pub end: i64,
}
impl IdRange {
	pub fn ids(&self) -> Vec<i64> {
		(self.start..=self.end).collect()
	}
}

#[derive(Debug, Deserialize)]
pub struct View {
	#[serde(default)]
	pub text: String,
	#[serde(default = "default_rank_by")]
	pub rank_by: String,
	#[serde(default)]
	pub only_full_portraits: bool,
	#[serde(default)]
	pub only_full_sprites: bool,
	#[serde(default)]
	pub display: Display,
}

/// Columns shown next to each visible record.
#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct Display {
	#[serde(default)]
	pub show_index: bool,
	#[serde(default)]
	pub show_portrait_author: bool,
	#[serde(default)]
	pub show_sprite_author: bool,
	#[serde(default)]
	pub show_last_modification: bool,
	#[serde(default)]
	pub show_portrait_bounty: bool,
	#[serde(default)]
	pub show_sprite_bounty: bool,
}

fn default_rank_by() -> String {
	"POKEDEX_NUMBER".to_string()
}
