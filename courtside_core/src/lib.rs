#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod dataset;
pub mod error;
pub mod player;
pub mod query;

pub use dataset::Dataset;
pub use error::{LoadError, Result};
pub use player::{PlayerRecord, PlayerTable};
pub use query::{Answer, QueryEngine};
