pub mod assemble;
pub mod filter;
pub mod picker;
pub mod story;
pub mod strategy;
pub mod trash;
