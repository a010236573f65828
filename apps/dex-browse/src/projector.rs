use std::io::{self, Write};

use time::format_description::well_known::Rfc3339;

use dex_domain::{
	record::Category,
	view::{ViewItem, ViewProjector},
};

/// Writes one line per visible record: key, name, then the enabled columns.
pub struct TextProjector<W> {
	out: W,
	error: Option<io::Error>,
}
impl<W> TextProjector<W>
where
	W: Write,
{
	pub fn new(out: W) -> Self {
		Self { out, error: None }
	}

	/// Flushes and reports the first write failure, if any.
	pub fn finish(mut self) -> io::Result<W> {
		if let Some(err) = self.error.take() {
			return Err(err);
		}

		self.out.flush()?;

		Ok(self.out)
	}
}
impl<W> ViewProjector for TextProjector<W>
where
	W: Write,
{
	fn project(&mut self, item: ViewItem<'_>) {
		if self.error.is_some() {
			return;
		}
		if let Err(err) = writeln!(self.out, "{}", render_line(&item)) {
			self.error = Some(err);
		}
	}
}

pub fn render_line(item: &ViewItem<'_>) -> String {
	let record = item.record;
	let display = item.display;
	let mut columns = vec![item.key.to_string(), record.name.clone().unwrap_or_default()];

	if display.show_index {
		columns.push(format!("#{}", record.id));
	}
	if display.show_portrait_author {
		let author = record.manual_author(Category::Portrait).unwrap_or("-");

		columns.push(format!("portrait: {author}"));
	}
	if display.show_sprite_author {
		let author = record.manual_author(Category::Sprite).unwrap_or("-");

		columns.push(format!("sprite: {author}"));
	}
	if display.show_last_modification {
		let modified = record
			.last_modified()
			.and_then(|at| at.format(&Rfc3339).ok())
			.unwrap_or_else(|| "-".to_string());

		columns.push(format!("modified: {modified}"));
	}
	if display.show_portrait_bounty {
		let bounty = bounty_label(record.max_bounty(Category::Portrait));

		columns.push(format!("portrait bounty: {bounty}"));
	}
	if display.show_sprite_bounty {
		let bounty = bounty_label(record.max_bounty(Category::Sprite));

		columns.push(format!("sprite bounty: {bounty}"));
	}

	columns.join("\t")
}

fn bounty_label(bounty: Option<i64>) -> String {
	bounty.map(|value| value.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use dex_domain::{
		record::{Artwork, Bounty, Credit, Form, Monster},
		view::DisplayFlags,
	};

	fn pikachu() -> Monster {
		Monster {
			id: 25,
			raw_id: "0025".to_string(),
			name: Some("Pikachu".to_string()),
			manual: Some(Form {
				portraits: Artwork {
					modified_date: Some("2023-06-01".to_string()),
					credit_primary: Some(Credit { id: None, name: Some("Alice".to_string()) }),
					..Default::default()
				},
				..Default::default()
			}),
			forms: vec![Form {
				sprites: Artwork {
					bounty: Bounty { incomplete: Some(15), ..Default::default() },
					..Default::default()
				},
				..Default::default()
			}],
		}
	}

	#[test]
	fn renders_only_enabled_columns() {
		let record = pikachu();
		let plain = ViewItem::new(&record, DisplayFlags::default());

		assert_eq!(render_line(&plain), "0025\tPikachu");

		let display = DisplayFlags {
			show_index: true,
			show_portrait_author: true,
			show_sprite_author: true,
			show_last_modification: true,
			show_portrait_bounty: true,
			show_sprite_bounty: true,
		};
		let line = render_line(&ViewItem::new(&record, display));

		assert_eq!(
			line,
			"0025\tPikachu\t#25\tportrait: Alice\tsprite: -\tmodified: 2023-06-01T00:00:00Z\t\
			 portrait bounty: -\tsprite bounty: 15"
		);
	}

	#[test]
	fn writes_one_line_per_item() {
		let record = pikachu();
		let mut projector = TextProjector::new(Vec::new());

		projector.project(ViewItem::new(&record, DisplayFlags::default()));
		projector.project(ViewItem::new(&record, DisplayFlags::default()));

		let out = projector.finish().expect("Failed to flush projector.");

		let text = String::from_utf8(out).expect("Failed to decode projector output.");

		assert_eq!(text, "0025\tPikachu\n0025\tPikachu\n");
	}
}
