use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Iteration count must be at least 1")]
    ZeroIterations,
    #[error("Incorrect result for {name} (n={n})")]
    IncorrectResult { name: &'static str, n: usize },
}
