mod list;
mod request;

pub use list::QuotesDialog;
pub use request::{open_quote_request, QuoteRequestDialog};
