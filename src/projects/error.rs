use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("pixel buffer error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),
    // getrandom::Error only implements std::error::Error behind its "std" feature.
    #[error("could not gather entropy: {0}")]
    Entropy(getrandom::Error),
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input {0:?}")]
    Input(String),
}

impl From<getrandom::Error> for ViewerError {
    fn from(e: getrandom::Error) -> Self {
        ViewerError::Entropy(e)
    }
}
