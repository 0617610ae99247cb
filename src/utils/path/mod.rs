//! Path and link helpers. Pure functions, no I/O.
//!
//! - [`fs`]: filesystem paths (`normalize_path`, `relative_display`)
//! - [`route`]: site links (`is_external_link`, `page_path`)

pub mod fs;
pub mod route;

pub use fs::normalize_path;
