mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Browse, Config, Display, IdRange, Service, Source, View};

use std::{fs, path::Path};

/// Rank method labels accepted by `view.rank_by`.
pub const RANK_METHOD_LABELS: [&str; 7] = [
	"POKEDEX_NUMBER",
	"LAST_MODIFICATION",
	"NAME",
	"PORTRAIT_AUTHOR",
	"SPRITE_AUTHOR",
	"PORTRAIT_BOUNTY",
	"SPRITE_BOUNTY",
];

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.browse.request_items_size == 0 {
		return Err(Error::Validation {
			message: "browse.request_items_size must be greater than zero.".to_string(),
		});
	}

	if let Some(range) = cfg.browse.id_range
		&& range.start > range.end
	{
		return Err(Error::Validation {
			message: "browse.id_range.start must be less than or equal to browse.id_range.end."
				.to_string(),
		});
	}

	for (label, value) in
		[("source.api_base", &cfg.source.api_base), ("source.path", &cfg.source.path)]
	{
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.source.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "source.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (key, value) in &cfg.source.default_headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!("source.default_headers.{key} must be a string."),
			});
		}
	}

	if !RANK_METHOD_LABELS.contains(&cfg.view.rank_by.as_str()) {
		return Err(Error::Validation {
			message: format!("view.rank_by must be one of {}.", RANK_METHOD_LABELS.join(", ")),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.view.rank_by = cfg.view.rank_by.trim().to_ascii_uppercase();
	cfg.service.log_level = cfg.service.log_level.trim().to_string();

	if cfg.source.api_base.ends_with('/') && cfg.source.path.starts_with('/') {
		cfg.source.api_base = cfg.source.api_base.trim_end_matches('/').to_string();
	}
}
