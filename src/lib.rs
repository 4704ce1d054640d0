//! Extracts the Lua API of a game from its generated HTML documentation.
//!
//! The pages are read line by line with regular expressions, not parsed as
//! HTML: each member, description or enum entry of the Doxygen output starts
//! on its own line. The result is an [`ApiSnapshot`] for completion
//! generators to consume.
//!
//! ```no_run
//! let api = luadoc_scraper::scrape(std::path::Path::new("docs/html"))?;
//! println!("{} classes", api.classes.len());
//! # Ok::<(), luadoc_scraper::ScrapeError>(())
//! ```

pub mod api;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod scan;

pub use api::scrape;
pub use error::{FieldError, ScrapeError};
pub use model::ApiSnapshot;
