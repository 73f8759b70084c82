use thiserror::Error;

// Bring in specific errors from the modules we want to wrap
use crate::checks::CheckError;
use crate::config::ConfigError;
use crate::filters::FilterError;
use crate::io::IoError;
use crate::runner::RunError;
use crate::wrap::WrapError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Wrap(#[from] WrapError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Run(#[from] RunError),
}

pub type AppResult<T> = Result<T, AppError>;
