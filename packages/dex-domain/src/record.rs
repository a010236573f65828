use serde::{Deserialize, Serialize};
use time::{
	Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
	macros::format_description,
};

/// Completion phase of a category's artwork.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
	#[default]
	Incomplete,
	Exists,
	/// Fully featured: every expected piece of artwork exists.
	Full,
	#[serde(other)]
	Unknown,
}

/// Artwork category a credit, phase or bounty belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
	Portrait,
	Sprite,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub name: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Bounty {
	#[serde(default)]
	pub exists: Option<i64>,
	#[serde(default)]
	pub full: Option<i64>,
	#[serde(default)]
	pub incomplete: Option<i64>,
}
impl Bounty {
	/// Present, non-zero fields in `exists`, `full`, `incomplete` order.
	pub fn values(&self) -> impl Iterator<Item = i64> {
		[self.exists, self.full, self.incomplete].into_iter().flatten().filter(|value| *value != 0)
	}
}

/// Per-category artwork state: credits and bounty, plus phase and modification date when the
/// record carries curated metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
	#[serde(default)]
	pub phase: Option<Phase>,
	#[serde(default)]
	pub modified_date: Option<String>,
	#[serde(default)]
	pub credit_primary: Option<Credit>,
	#[serde(default)]
	pub credit_secondary: Vec<Credit>,
	#[serde(default)]
	pub bounty: Bounty,
}
impl Artwork {
	pub fn primary_name(&self) -> Option<&str> {
		self.credit_primary.as_ref().and_then(|credit| credit.name.as_deref())
	}

	pub fn secondary_names(&self) -> impl Iterator<Item = &str> {
		self.credit_secondary.iter().filter_map(|credit| credit.name.as_deref())
	}

	/// Parsed `modified_date`; `None` when absent or unparseable.
	pub fn modified_at(&self) -> Option<OffsetDateTime> {
		self.modified_date.as_deref().and_then(parse_timestamp)
	}
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
	#[serde(default)]
	pub portraits: Artwork,
	#[serde(default)]
	pub sprites: Artwork,
}
impl Form {
	pub fn artwork(&self, category: Category) -> &Artwork {
		match category {
			Category::Portrait => &self.portraits,
			Category::Sprite => &self.sprites,
		}
	}
}

/// One catalogue entry.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
	pub id: i64,
	#[serde(default)]
	pub raw_id: String,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub forms: Vec<Form>,
	#[serde(default)]
	pub manual: Option<Form>,
}
impl Monster {
	pub fn manual_artwork(&self, category: Category) -> Option<&Artwork> {
		self.manual.as_ref().map(|manual| manual.artwork(category))
	}

	pub fn manual_phase(&self, category: Category) -> Option<Phase> {
		self.manual_artwork(category).and_then(|artwork| artwork.phase)
	}

	/// Primary credited author of the curated artwork for `category`.
	pub fn manual_author(&self, category: Category) -> Option<&str> {
		self.manual_artwork(category).and_then(Artwork::primary_name)
	}

	/// Later of the curated portrait and sprite modification dates.
	pub fn last_modified(&self) -> Option<OffsetDateTime> {
		let portrait = self.manual_artwork(Category::Portrait).and_then(Artwork::modified_at);
		let sprite = self.manual_artwork(Category::Sprite).and_then(Artwork::modified_at);

		portrait.max(sprite)
	}

	/// Highest qualifying bounty across all forms; `None` when no form offers one.
	pub fn max_bounty(&self, category: Category) -> Option<i64> {
		self.forms.iter().flat_map(|form| form.artwork(category).bounty.values()).max()
	}
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) and bare `YYYY-MM-DD` dates.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
	let raw = raw.trim();

	if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
		return Some(parsed);
	}
	if let Ok(parsed) = PrimitiveDateTime::parse(
		raw,
		format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
	) {
		return Some(parsed.assume_utc());
	}

	Date::parse(raw, format_description!("[year]-[month]-[day]"))
		.ok()
		.map(|date| date.midnight().assume_utc())
}
