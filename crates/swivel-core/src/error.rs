use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Carousel requires at least one panel")]
    EmptyPanelSet,
}

pub type Result<T> = std::result::Result<T, Error>;
