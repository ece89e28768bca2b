pub mod catalog;
pub mod parse;
pub mod source;

#[cfg(test)]
pub mod fixtures;
