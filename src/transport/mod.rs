//! Transport module
//!
//! The low-level capability that issues one HTTP request and decodes the
//! response body into a trade batch. The retry layer treats it as opaque:
//! hand it a fully built URL and a timeout, get back a parsed batch or a
//! classified error.

mod client;
mod types;

pub use client::HttpTransport;
pub use types::Transport;

#[cfg(test)]
pub(crate) mod testing;
