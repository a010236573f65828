pub mod projector;

use std::{io, path::PathBuf, sync::Arc};

use clap::Parser;
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use dex_domain::{
	filter::ViewCriteria,
	rank::RankMethod,
	view::{self, DisplayFlags},
};
use dex_providers::graphql::CatalogueClient;
use dex_service::{BatchFetcher, Browser};

use crate::projector::TextProjector;

#[derive(Debug, Parser)]
#[command(
	version = dex_cli::VERSION,
	rename_all = "kebab",
	styles = dex_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Ids to browse, e.g. `1-151,250`. Defaults to `browse.id_range`.
	#[arg(long, value_name = "IDS")]
	pub ids: Option<String>,
	/// Case-insensitive text matched against names, credits and ids.
	#[arg(long, short = 't')]
	pub text: Option<String>,
	#[arg(long, short = 'r', value_name = "METHOD")]
	pub rank_by: Option<String>,
	#[arg(long)]
	pub only_full_portraits: bool,
	#[arg(long)]
	pub only_full_sprites: bool,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = dex_config::load(&args.config)?;
	init_tracing(&config)?;
	let ids = resolve_ids(&args, &config)?;
	let criteria = resolve_criteria(&args, &config.view)?;
	let display = DisplayFlags::from(config.view.display);
	let fetcher: Arc<dyn BatchFetcher> = Arc::new(CatalogueClient::new(&config.source)?);
	let mut browser =
		Browser::new(config.browse.request_items_size, fetcher)?.with_criteria(criteria);

	tracing::info!(
		total = ids.len(),
		batch_size = config.browse.request_items_size,
		rank_by = %browser.criteria().rank_by,
		"Browsing catalogue."
	);

	browser.set_ids(ids);

	while browser.step().await {
		let accumulated = browser.driver().store().len();
		let visible = browser.visible().len();

		tracing::info!(accumulated, visible, "Batch received.");
	}

	let snapshot = browser.snapshot(display);
	let failed = snapshot.failed;
	let mut projector = TextProjector::new(io::stdout().lock());

	view::project_all(&mut projector, snapshot.items);
	let _stdout = projector.finish()?;

	if failed {
		let message = browser
			.driver()
			.error()
			.map(ToString::to_string)
			.unwrap_or_else(|| "Unknown fetch failure.".to_string());

		return Err(eyre::eyre!("Browsing stopped early: {message}"));
	}

	Ok(())
}

pub fn resolve_ids(args: &Args, config: &dex_config::Config) -> color_eyre::Result<Vec<i64>> {
	match (&args.ids, config.browse.id_range) {
		(Some(raw), _) => dex_cli::parse_id_list(raw).map_err(|message| eyre::eyre!(message)),
		(None, Some(range)) => Ok(range.ids()),
		(None, None) => Err(eyre::eyre!("Pass --ids or set browse.id_range.")),
	}
}

pub fn resolve_criteria(
	args: &Args,
	view: &dex_config::View,
) -> color_eyre::Result<ViewCriteria> {
	let mut criteria = ViewCriteria::from(view);

	if let Some(text) = &args.text {
		criteria.text = text.clone();
	}
	if let Some(raw) = &args.rank_by {
		let Ok(rank_by) = raw.parse::<RankMethod>();

		if rank_by == RankMethod::Unknown {
			return Err(eyre::eyre!(
				"--rank-by must be one of {}.",
				dex_config::RANK_METHOD_LABELS.join(", ")
			));
		}

		criteria.rank_by = rank_by;
	}

	criteria.only_full_portraits |= args.only_full_portraits;
	criteria.only_full_sprites |= args.only_full_sprites;

	Ok(criteria)
}

fn init_tracing(config: &dex_config::Config) -> color_eyre::Result<()> {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
	Ok(())
}
