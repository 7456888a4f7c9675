use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("failed to bind listener: {0}")]
    Bind(#[from] std::io::Error),
}
