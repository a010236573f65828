use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::record::{Category, Monster};

/// Ordering strategy applied to the visible sequence.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankMethod {
	#[default]
	PokedexNumber,
	LastModification,
	Name,
	PortraitAuthor,
	SpriteAuthor,
	PortraitBounty,
	SpriteBounty,
	/// Unrecognised label. Ranks every pair as equal.
	#[serde(other)]
	Unknown,
}
impl RankMethod {
	pub const ALL: [Self; 7] = [
		Self::PokedexNumber,
		Self::LastModification,
		Self::Name,
		Self::PortraitAuthor,
		Self::SpriteAuthor,
		Self::PortraitBounty,
		Self::SpriteBounty,
	];

	pub fn label(self) -> &'static str {
		match self {
			Self::PokedexNumber => "POKEDEX_NUMBER",
			Self::LastModification => "LAST_MODIFICATION",
			Self::Name => "NAME",
			Self::PortraitAuthor => "PORTRAIT_AUTHOR",
			Self::SpriteAuthor => "SPRITE_AUTHOR",
			Self::PortraitBounty => "PORTRAIT_BOUNTY",
			Self::SpriteBounty => "SPRITE_BOUNTY",
			Self::Unknown => "UNKNOWN",
		}
	}

	/// Strategy for this method; `None` means "keep the incoming order".
	pub fn comparator(self) -> Option<Comparator> {
		match self {
			Self::PokedexNumber => Some(by_id),
			Self::LastModification => Some(by_last_modification),
			Self::Name => Some(by_name),
			Self::PortraitAuthor => Some(by_portrait_author),
			Self::SpriteAuthor => Some(by_sprite_author),
			Self::PortraitBounty => Some(by_portrait_bounty),
			Self::SpriteBounty => Some(by_sprite_bounty),
			Self::Unknown => None,
		}
	}
}
impl fmt::Display for RankMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
impl FromStr for RankMethod {
	type Err = std::convert::Infallible;

	/// Case-insensitive; anything unrecognised becomes [`RankMethod::Unknown`].
	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let normalized = raw.trim().to_ascii_uppercase().replace('-', "_");

		Ok(Self::ALL
			.into_iter()
			.find(|method| method.label() == normalized)
			.unwrap_or(Self::Unknown))
	}
}

pub type Comparator = fn(&Monster, &Monster) -> Ordering;

/// Compares two records under `method`. Every strategy is a total preorder, so a stable sort
/// keeps the arrival order of records that compare equal.
pub fn compare(a: &Monster, b: &Monster, method: RankMethod) -> Ordering {
	method.comparator().map(|cmp| cmp(a, b)).unwrap_or(Ordering::Equal)
}

pub fn by_id(a: &Monster, b: &Monster) -> Ordering {
	a.id.cmp(&b.id)
}

/// Most recently modified first. Records without any parseable curated date sort after every
/// dated record and tie with each other.
pub fn by_last_modification(a: &Monster, b: &Monster) -> Ordering {
	b.last_modified().cmp(&a.last_modified())
}

pub fn by_name(a: &Monster, b: &Monster) -> Ordering {
	locale_compare(a.name.as_deref().unwrap_or(""), b.name.as_deref().unwrap_or(""))
}

pub fn by_portrait_author(a: &Monster, b: &Monster) -> Ordering {
	by_author(a, b, Category::Portrait)
}

pub fn by_sprite_author(a: &Monster, b: &Monster) -> Ordering {
	by_author(a, b, Category::Sprite)
}

pub fn by_portrait_bounty(a: &Monster, b: &Monster) -> Ordering {
	by_bounty(a, b, Category::Portrait)
}

pub fn by_sprite_bounty(a: &Monster, b: &Monster) -> Ordering {
	by_bounty(a, b, Category::Sprite)
}

fn by_author(a: &Monster, b: &Monster, category: Category) -> Ordering {
	locale_compare(
		a.manual_author(category).unwrap_or(""),
		b.manual_author(category).unwrap_or(""),
	)
}

// `None` (no qualifying bounty anywhere) is the lowest score, so those records go last.
fn by_bounty(a: &Monster, b: &Monster, category: Category) -> Ordering {
	b.max_bounty(category).cmp(&a.max_bounty(category))
}

/// Accent and case insensitive primary comparison, so "Émile" sorts between "Eli" and "Eve".
///
/// Ties are broken with lowercase before uppercase ("abc" < "ABC") and finally by code point,
/// so the order stays total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
	collation_key(a)
		.cmp(&collation_key(b))
		.then_with(|| case_inverted(a).cmp(&case_inverted(b)))
		.then_with(|| a.cmp(b))
}

fn collation_key(raw: &str) -> String {
	raw.nfkd().filter(|ch| !is_combining_mark(*ch)).flat_map(char::to_lowercase).collect()
}

fn case_inverted(raw: &str) -> String {
	let mut inverted = String::with_capacity(raw.len());

	for ch in raw.chars() {
		if ch.is_lowercase() {
			inverted.extend(ch.to_uppercase());
		} else {
			inverted.extend(ch.to_lowercase());
		}
	}

	inverted
}
