pub mod balance_80;
pub mod deferred;
pub mod payment_20_80;
pub mod spot_cash;
pub mod spot_down;

pub use balance_80::Balance80Terms;
pub use deferred::DeferredTerms;
pub use payment_20_80::TwentyEightyTerms;
pub use spot_cash::SpotCashTerms;
pub use spot_down::SpotDownTerms;

use rust_decimal_macros::dec;

/// Down-payment split shared by the Spot Down, 20/80 and 80%-Balance
/// schemes: 20% up front, 80% financed.
pub(crate) const DOWN_PAYMENT_RATIO: rust_decimal::Decimal = dec!(0.20);
pub(crate) const BALANCE_RATIO: rust_decimal::Decimal = dec!(0.80);
