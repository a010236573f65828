use serde::{Deserialize, Serialize};

use crate::{
	rank::RankMethod,
	record::{Artwork, Category, Monster, Phase},
};

/// Inputs of the visible sequence. The pipeline only reads them.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ViewCriteria {
	pub text: String,
	pub only_full_portraits: bool,
	pub only_full_sprites: bool,
	pub rank_by: RankMethod,
}
impl From<&dex_config::View> for ViewCriteria {
	fn from(view: &dex_config::View) -> Self {
		Self {
			text: view.text.clone(),
			only_full_portraits: view.only_full_portraits,
			only_full_sprites: view.only_full_sprites,
			rank_by: view.rank_by.parse().unwrap_or_default(),
		}
	}
}

/// Visible records, in ranked order.
pub fn filter_monsters<'a>(monsters: &'a [Monster], criteria: &ViewCriteria) -> Vec<&'a Monster> {
	visible_indices(monsters, criteria).into_iter().map(|index| &monsters[index]).collect()
}

/// Positions in `monsters` of the visible records, in ranked order.
pub fn visible_indices(monsters: &[Monster], criteria: &ViewCriteria) -> Vec<usize> {
	let needle = criteria.text.to_lowercase();
	let mut kept: Vec<usize> = monsters
		.iter()
		.enumerate()
		.filter(|(_, monster)| matches_text(monster, &needle))
		.filter(|(_, monster)| {
			!criteria.only_full_portraits || is_fully_featured(monster, Category::Portrait)
		})
		.filter(|(_, monster)| {
			!criteria.only_full_sprites || is_fully_featured(monster, Category::Sprite)
		})
		.map(|(index, _)| index)
		.collect();

	if let Some(cmp) = criteria.rank_by.comparator() {
		kept.sort_by(|a, b| cmp(&monsters[*a], &monsters[*b]));
	}

	kept
}

/// `needle` must already be lowercase. Checks fields in a fixed order and stops at the first
/// hit.
pub fn matches_text(monster: &Monster, needle: &str) -> bool {
	if needle.is_empty() {
		return true;
	}

	let contains = |value: &str| value.to_lowercase().contains(needle);
	let credits_match = |artwork: &Artwork| {
		artwork.primary_name().is_some_and(contains) || artwork.secondary_names().any(contains)
	};

	monster.name.as_deref().is_some_and(contains)
		|| monster.forms.iter().any(|form| credits_match(&form.portraits))
		|| monster.forms.iter().any(|form| credits_match(&form.sprites))
		|| monster.id.to_string().contains(needle)
}

pub fn is_fully_featured(monster: &Monster, category: Category) -> bool {
	monster.manual_phase(category) == Some(Phase::Full)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::{Credit, Form};

	fn monster(id: i64, name: &str) -> Monster {
		Monster {
			id,
			raw_id: format!("{id:04}"),
			name: Some(name.to_string()),
			..Default::default()
		}
	}

	fn credit(name: &str) -> Credit {
		Credit { id: None, name: Some(name.to_string()) }
	}

	fn phased(id: i64, portrait: Phase, sprite: Phase) -> Monster {
		Monster {
			manual: Some(Form {
				portraits: Artwork { phase: Some(portrait), ..Default::default() },
				sprites: Artwork { phase: Some(sprite), ..Default::default() },
			}),
			..monster(id, "m")
		}
	}

	fn ids(monsters: &[&Monster]) -> Vec<i64> {
		monsters.iter().map(|monster| monster.id).collect()
	}

	#[test]
	fn text_match_is_case_insensitive() {
		let monsters = vec![monster(25, "pikachu"), monster(1, "bulbasaur")];
		let criteria = ViewCriteria { text: "PIK".to_string(), ..Default::default() };

		assert_eq!(ids(&filter_monsters(&monsters, &criteria)), vec![25]);
	}

	#[test]
	fn text_matches_credits_and_id() {
		let mut credited = monster(7, "squirtle");

		credited.forms.push(Form {
			portraits: Artwork { credit_secondary: vec![credit("Baz")], ..Default::default() },
			sprites: Artwork { credit_primary: Some(credit("Quux")), ..Default::default() },
		});

		let monsters = vec![credited, monster(150, "mewtwo")];
		let query = |text: &str| {
			let criteria = ViewCriteria { text: text.to_string(), ..Default::default() };

			ids(&filter_monsters(&monsters, &criteria))
		};

		assert_eq!(query("baz"), vec![7]);
		assert_eq!(query("QUUX"), vec![7]);
		assert_eq!(query("15"), vec![150]);
		assert_eq!(query("nothing"), Vec::<i64>::new());
		assert_eq!(query(""), vec![7, 150]);
	}

	#[test]
	fn text_matches_any_form_credit_but_not_curated_credits() {
		let mut credited = monster(4, "charmander");

		credited.forms.push(Form::default());
		credited.forms.push(Form {
			portraits: Artwork { credit_primary: Some(credit("Alice")), ..Default::default() },
			sprites: Artwork {
				credit_secondary: vec![credit("Carl"), credit("Bob")],
				..Default::default()
			},
		});

		let curated = Monster {
			manual: Some(Form {
				portraits: Artwork { credit_primary: Some(credit("Zed")), ..Default::default() },
				sprites: Artwork { credit_secondary: vec![credit("Yan")], ..Default::default() },
			}),
			..monster(133, "eevee")
		};
		let monsters = vec![credited, curated];
		let query = |text: &str| {
			let criteria = ViewCriteria { text: text.to_string(), ..Default::default() };

			ids(&filter_monsters(&monsters, &criteria))
		};

		assert_eq!(query("alice"), vec![4]);
		assert_eq!(query("BOB"), vec![4]);
		assert_eq!(query("zed"), Vec::<i64>::new());
		assert_eq!(query("yan"), Vec::<i64>::new());
	}

	#[test]
	fn completeness_flags_narrow() {
		let monsters = vec![
			phased(1, Phase::Full, Phase::Full),
			phased(2, Phase::Full, Phase::Exists),
			phased(3, Phase::Incomplete, Phase::Full),
			monster(4, "no manual"),
		];
		let portraits = ViewCriteria { only_full_portraits: true, ..Default::default() };
		let sprites = ViewCriteria { only_full_sprites: true, ..Default::default() };
		let both = ViewCriteria {
			only_full_portraits: true,
			only_full_sprites: true,
			..Default::default()
		};

		assert_eq!(ids(&filter_monsters(&monsters, &portraits)), vec![1, 2]);
		assert_eq!(ids(&filter_monsters(&monsters, &sprites)), vec![1, 3]);
		assert_eq!(ids(&filter_monsters(&monsters, &both)), vec![1]);
	}

	#[test]
	fn filtering_is_idempotent() {
		let monsters = vec![
			phased(9, Phase::Full, Phase::Full),
			monster(3, "pikachu"),
			phased(5, Phase::Full, Phase::Incomplete),
		];
		let criteria = ViewCriteria {
			text: "m".to_string(),
			only_full_portraits: true,
			rank_by: RankMethod::PokedexNumber,
			..Default::default()
		};
		let once: Vec<Monster> =
			filter_monsters(&monsters, &criteria).into_iter().cloned().collect();
		let twice = filter_monsters(&once, &criteria);

		assert_eq!(ids(&twice), once.iter().map(|monster| monster.id).collect::<Vec<_>>());
		assert_eq!(ids(&twice), vec![5, 9]);
	}

	#[test]
	fn ranking_is_applied_last() {
		let monsters = vec![monster(3, "c"), monster(1, "a"), monster(2, "b")];
		let criteria = ViewCriteria { rank_by: RankMethod::PokedexNumber, ..Default::default() };

		assert_eq!(visible_indices(&monsters, &criteria), vec![1, 2, 0]);

		let by_name = ViewCriteria { rank_by: RankMethod::Name, ..Default::default() };

		assert_eq!(ids(&filter_monsters(&monsters, &by_name)), vec![1, 2, 3]);
	}
}
