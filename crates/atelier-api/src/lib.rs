// atelier-api: Async Rust clients for the WordPress.com public content API
// and the form-relay service used by the contact page.

pub mod error;
pub mod relay;
pub mod transport;
pub mod wp;

pub use error::Error;
pub use relay::{ContactForm, RelayClient};
pub use transport::TransportConfig;
pub use wp::SiteClient;
