//! Data models shared by the services and the HTTP handlers
//!
//! Each model represents the output of a service operation. JSON shapes that
//! differ from the domain types live next to the handlers that produce them.

pub mod chart;
pub mod quote;
pub mod watchlist;
pub mod ping;

// Re-export commonly used types for convenience
pub use chart::PricePoint;
pub use quote::Quote;
pub use watchlist::{AddOutcome, RemoveOutcome, WatchlistItem};
pub use ping::PingMetrics;
