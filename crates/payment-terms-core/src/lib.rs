pub mod amortization;
pub mod engine;
pub mod error;
pub mod factor_rate;
pub mod fees;
pub mod listed_price;
pub mod params;
pub mod reservation;
pub mod schemes;
pub mod types;

pub use error::PaymentTermsError;
pub use params::ContractParameters;
pub use types::*;

/// Standard result type for all payment-terms operations
pub type PaymentTermsResult<T> = Result<T, PaymentTermsError>;
