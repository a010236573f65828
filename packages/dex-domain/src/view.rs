use serde::{Deserialize, Serialize};

use crate::record::Monster;

/// Optional columns a projector renders next to each record.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DisplayFlags {
	pub show_index: bool,
	pub show_portrait_author: bool,
	pub show_sprite_author: bool,
	pub show_last_modification: bool,
	pub show_portrait_bounty: bool,
	pub show_sprite_bounty: bool,
}
impl From<dex_config::Display> for DisplayFlags {
	fn from(display: dex_config::Display) -> Self {
		Self {
			show_index: display.show_index,
			show_portrait_author: display.show_portrait_author,
			show_sprite_author: display.show_sprite_author,
			show_last_modification: display.show_last_modification,
			show_portrait_bounty: display.show_portrait_bounty,
			show_sprite_bounty: display.show_sprite_bounty,
		}
	}
}

/// One visible record handed to a projector, keyed by its raw identifier.
#[derive(Clone, Copy, Debug)]
pub struct ViewItem<'a> {
	pub key: &'a str,
	pub record: &'a Monster,
	pub display: DisplayFlags,
}
impl<'a> ViewItem<'a> {
	pub fn new(record: &'a Monster, display: DisplayFlags) -> Self {
		Self { key: record.raw_id.as_str(), record, display }
	}
}

/// Renders visible records. Receives items in ranked order and has no way to reach back into
/// the browse session.
pub trait ViewProjector {
	fn project(&mut self, item: ViewItem<'_>);
}

pub fn project_all<'a, P>(projector: &mut P, items: impl IntoIterator<Item = ViewItem<'a>>)
where
	P: ViewProjector + ?Sized,
{
	for item in items {
		projector.project(item);
	}
}
