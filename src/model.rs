mod api_error;
pub use api_error::ApiError;
mod error;
pub use error::QuoteError;
mod labels;
pub use labels::Labels;
mod quote;
pub use quote::Quote;
