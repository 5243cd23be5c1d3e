//! accessmap-search
//!
//! Free-text service search: a borrowed per-catalog index (`index`) and the
//! score-and-sort ranker behind the sidebar search box (`rank`).

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod index;
pub mod rank;

pub use index::{IndexEntry, SearchIndex};
pub use rank::rank;
