use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = dex_browse::Args::parse();
	dex_browse::run(args).await
}
