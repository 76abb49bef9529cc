use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Requested amount {requested} of product {product_id} exceeds stock ({available})")]
    OutOfStock {
        product_id: u64,
        requested: i64,
        available: u32,
    },

    #[error("Product {product_id} is not in the cart")]
    NotInCart { product_id: u64 },

    #[error("Product {product_id} is unknown to the inventory service")]
    UnknownProduct { product_id: u64 },

    #[error("Inventory request failed: {0}")]
    Inventory(#[from] reqwest::Error),

    #[error("Inventory service answered {status} for {url}")]
    InventoryStatus { url: String, status: u16 },

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored cart under '{key}' is corrupt: {reason}")]
    CorruptCart { key: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse grouping used when deciding what to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    OutOfStock,
    NotFound,
    ServiceFailure,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CartError::OutOfStock { .. } => ErrorCategory::OutOfStock,
            CartError::NotInCart { .. } | CartError::UnknownProduct { .. } => {
                ErrorCategory::NotFound
            }
            CartError::Inventory(_)
            | CartError::InventoryStatus { .. }
            | CartError::Storage(_)
            | CartError::Serialization(_)
            | CartError::CorruptCart { .. } => ErrorCategory::ServiceFailure,
            CartError::ConfigError { .. }
            | CartError::ConfigValidationError { .. }
            | CartError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CartError::OutOfStock { .. }
            | CartError::NotInCart { .. }
            | CartError::UnknownProduct { .. } => ErrorSeverity::Low,
            CartError::Inventory(_) | CartError::InventoryStatus { .. } => ErrorSeverity::Medium,
            CartError::Storage(_)
            | CartError::Serialization(_)
            | CartError::ConfigError { .. }
            | CartError::ConfigValidationError { .. }
            | CartError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CartError::CorruptCart { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CartError::OutOfStock { available, .. } => {
                format!("Choose an amount of at most {}", available)
            }
            CartError::NotInCart { .. } => "Add the product to the cart first".to_string(),
            CartError::UnknownProduct { .. } => {
                "Check the product id against the inventory service".to_string()
            }
            CartError::Inventory(_) | CartError::InventoryStatus { .. } => {
                "Check that the inventory service is reachable and retry".to_string()
            }
            CartError::Storage(_) | CartError::Serialization(_) => {
                "Check that the storage path is writable".to_string()
            }
            CartError::CorruptCart { key, .. } => format!(
                "Remove the entry '{}' from the storage file to start with an empty cart",
                key
            ),
            CartError::ConfigError { .. }
            | CartError::ConfigValidationError { .. }
            | CartError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::OutOfStock => "Not enough stock for the requested amount".to_string(),
            ErrorCategory::NotFound => format!("Not found: {}", self),
            ErrorCategory::ServiceFailure => format!("Service failure: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        let out = CartError::OutOfStock {
            product_id: 1,
            requested: 2,
            available: 1,
        };
        assert_eq!(out.category(), ErrorCategory::OutOfStock);
        assert_eq!(out.severity(), ErrorSeverity::Low);

        assert_eq!(
            CartError::NotInCart { product_id: 7 }.category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            CartError::UnknownProduct { product_id: 7 }.category(),
            ErrorCategory::NotFound
        );

        let status = CartError::InventoryStatus {
            url: "http://localhost/stock/1".to_string(),
            status: 500,
        };
        assert_eq!(status.category(), ErrorCategory::ServiceFailure);
        assert_eq!(status.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_corrupt_cart_is_critical() {
        let err = CartError::CorruptCart {
            key: "@RocketShoes:cart".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.recovery_suggestion().contains("@RocketShoes:cart"));
    }
}
