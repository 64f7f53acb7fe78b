//! Game implementations built on the core types.

pub mod twenty_one;
