pub mod filter;
pub mod rank;
pub mod record;
pub mod view;
