//! Command implementations

pub mod lookup;
pub mod simple;

pub use lookup::{LookupError, check_word, random_word};
pub use simple::run_simple;
