//! Pastewash: clean up text copied out of AI generation tools.
//!
//! Two independent transforms:
//! - [`clean::clean`] strips invisible and bidi-control characters and
//!   recomposes the text to NFC.
//! - [`normalize::normalize_text`] maps styled mathematical letterforms
//!   back to plain ASCII, with [`normalize::extract_title`] to pick a post's
//!   title line first.
//!
//! Both are pure functions over `&str`. The [`io`] and [`cli`] modules wrap
//! them for standard streams and the system clipboard.

pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod normalize;

pub use clean::clean;
pub use config::Config;
pub use error::{Error, Result};
pub use normalize::{extract_title, normalize_char, normalize_text};
