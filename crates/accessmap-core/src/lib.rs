#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod catalog;
pub mod categories;
pub mod config;
pub mod error;
pub mod traits;
pub mod travel;
pub mod types;
