use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Route pattern '{pattern}' is already registered"))]
    DuplicatePattern { pattern: String },

    #[snafu(display("Failed to lock mutex: poisoned"))]
    LockPoisoned,

    #[snafu(display("Terminal error: {source}"))]
    Terminal { source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
