//! JSON parsers for the TVmaze API
//!
//! Each parser turns a raw response body into normalized records.

pub mod episodes;
pub mod search;

pub use episodes::parse_episodes;
pub use search::parse_search_results;
