pub mod bump;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod observability;
pub mod ui;

pub use bump::bump;
pub use error::{BumpError, Result};
