mod provider;
pub use provider::Provider;
mod awesome;
pub use awesome::{decode, AwesomeApi};
