pub mod chat_view;
pub mod footer;
pub mod navbar;
pub mod shared;
pub mod stock_panel;
pub mod tickers;
