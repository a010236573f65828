use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};

pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default() | Effects::BOLD)
		.usage(AnsiColor::Green.on_default() | Effects::BOLD)
		.literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parses a comma separated list of ids, accepting inclusive `a-b` ranges (`1-3,7,9-10`).
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, String> {
	let mut ids = Vec::new();

	for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
		match part.split_once('-') {
			Some((start, end)) => {
				let start = parse_id(start)?;
				let end = parse_id(end)?;

				if start > end {
					return Err(format!("Id range {part} must be ascending."));
				}

				ids.extend(start..=end);
			},
			None => ids.push(parse_id(part)?),
		}
	}

	Ok(ids)
}

fn parse_id(raw: &str) -> Result<i64, String> {
	raw.trim().parse::<i64>().map_err(|err| format!("Invalid id {raw:?}: {err}."))
}
