pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Fetch error: {message}")]
	Fetch { message: String },
}
impl From<dex_providers::Error> for Error {
	fn from(err: dex_providers::Error) -> Self {
		Self::Fetch { message: err.to_string() }
	}
}
