pub mod bulk;
pub mod diff;
pub mod keyword;
mod predicates;
pub mod tree;
