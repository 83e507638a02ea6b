pub mod error;
pub mod evaluate;
pub mod extract;
pub mod read;
pub mod skills;
pub mod text;

#[cfg(test)]
pub mod test_support;
