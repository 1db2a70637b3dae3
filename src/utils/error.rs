use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValuadorError {
    #[error("insufficient data: area and at least 2 positive comparables are required")]
    InsufficientData,

    #[error("storage operation failed: {0}")]
    StorageError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ValuadorError {
    /// Message shown to the end user, in the product's language.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValuadorError::InsufficientData => {
                "Necesitas al menos 2 comparables y los metros cuadrados."
            }
            ValuadorError::StorageError(_) | ValuadorError::SerializationError(_) => {
                "No se pudieron guardar los datos."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ValuadorError>;
