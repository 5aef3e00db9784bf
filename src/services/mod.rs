pub mod chart_service;
pub mod ping_service;
pub mod quote_service;
pub mod watchlist_service;

pub use quote_service::QuoteService;
pub use watchlist_service::WatchlistService;
