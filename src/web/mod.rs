//! Web Module
//!
//! Mock web server answering every GET with an HTML page that reflects the
//! requested target and the headers it arrived with.

pub mod handlers;
pub mod page;
pub mod routes;


pub use handlers::page_handler;
pub use page::{escape_html, render_page};
pub use routes::create_router;
