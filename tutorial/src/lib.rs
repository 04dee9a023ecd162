use thiserror::Error;

pub mod arrays;
pub mod greeting;

pub use arrays::min_max;
pub use greeting::greet;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Expected at least one value, but the input was empty")]
    EmptyInput,
}
