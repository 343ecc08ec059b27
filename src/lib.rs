pub mod cli;
pub mod error;
pub mod nutrition;
pub mod recipe;
pub mod suggest;
