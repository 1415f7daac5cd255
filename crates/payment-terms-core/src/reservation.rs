use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PaymentTermsError;
use crate::types::Money;
use crate::PaymentTermsResult;

/// One bracket of a reservation-fee schedule: contracts priced at or below
/// `up_to` pay `fee`. The final tier may omit `up_to` to catch everything
/// above the last bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationFeeTier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_to: Option<Money>,
    pub fee: Money,
}

/// Reservation fees auto-tiered by TCP bracket. This is business policy
/// data, not engine logic: the engine never consults a schedule on its own;
/// producers resolve the fee and place it in `ContractParameters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationFeeSchedule {
    pub tiers: Vec<ReservationFeeTier>,
}

impl ReservationFeeSchedule {
    /// Build a schedule, validating that bounded tiers come first with
    /// strictly increasing bounds, at most one open tier sits last, and no
    /// fee is negative.
    pub fn new(tiers: Vec<ReservationFeeTier>) -> PaymentTermsResult<Self> {
        if tiers.is_empty() {
            return Err(PaymentTermsError::InvalidInput {
                field: "tiers".into(),
                reason: "Schedule must contain at least one tier".into(),
            });
        }

        let mut previous_bound: Option<Money> = None;
        for (i, tier) in tiers.iter().enumerate() {
            if tier.fee < Decimal::ZERO {
                return Err(PaymentTermsError::InvalidInput {
                    field: format!("tiers[{i}].fee"),
                    reason: "Reservation fee cannot be negative".into(),
                });
            }
            match tier.up_to {
                Some(bound) => {
                    if i > 0 && tiers[i - 1].up_to.is_none() {
                        return Err(PaymentTermsError::InvalidInput {
                            field: format!("tiers[{i}]"),
                            reason: "Only the final tier may be open-ended".into(),
                        });
                    }
                    if let Some(prev) = previous_bound {
                        if bound <= prev {
                            return Err(PaymentTermsError::InvalidInput {
                                field: format!("tiers[{i}].up_to"),
                                reason: "Tier bounds must be strictly increasing".into(),
                            });
                        }
                    }
                    previous_bound = Some(bound);
                }
                None => {
                    if i != tiers.len() - 1 {
                        return Err(PaymentTermsError::InvalidInput {
                            field: format!("tiers[{i}]"),
                            reason: "Only the final tier may be open-ended".into(),
                        });
                    }
                }
            }
        }

        Ok(Self { tiers })
    }

    /// Look up the fee for a contract price. Returns None when the price
    /// falls above every bounded tier and no open tier exists.
    pub fn fee_for(&self, total_contract_price: Money) -> Option<Money> {
        for tier in &self.tiers {
            match tier.up_to {
                Some(bound) if total_contract_price <= bound => return Some(tier.fee),
                Some(_) => continue,
                None => return Some(tier.fee),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_schedule() -> ReservationFeeSchedule {
        ReservationFeeSchedule::new(vec![
            ReservationFeeTier {
                up_to: Some(dec!(2_000_000)),
                fee: dec!(20_000),
            },
            ReservationFeeTier {
                up_to: Some(dec!(5_000_000)),
                fee: dec!(30_000),
            },
            ReservationFeeTier {
                up_to: None,
                fee: dec!(50_000),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_within_brackets() {
        let schedule = sample_schedule();
        assert_eq!(schedule.fee_for(dec!(1_500_000)), Some(dec!(20_000)));
        assert_eq!(schedule.fee_for(dec!(3_000_000)), Some(dec!(30_000)));
        assert_eq!(schedule.fee_for(dec!(9_000_000)), Some(dec!(50_000)));
    }

    #[test]
    fn test_lookup_bracket_bound_is_inclusive() {
        let schedule = sample_schedule();
        assert_eq!(schedule.fee_for(dec!(2_000_000)), Some(dec!(20_000)));
        assert_eq!(schedule.fee_for(dec!(2_000_000.01)), Some(dec!(30_000)));
    }

    #[test]
    fn test_no_open_tier_above_last_bound() {
        let schedule = ReservationFeeSchedule::new(vec![ReservationFeeTier {
            up_to: Some(dec!(1_000_000)),
            fee: dec!(15_000),
        }])
        .unwrap();
        assert_eq!(schedule.fee_for(dec!(1_500_000)), None);
    }

    #[test]
    fn test_rejects_unsorted_bounds() {
        let result = ReservationFeeSchedule::new(vec![
            ReservationFeeTier {
                up_to: Some(dec!(5_000_000)),
                fee: dec!(30_000),
            },
            ReservationFeeTier {
                up_to: Some(dec!(2_000_000)),
                fee: dec!(20_000),
            },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_open_tier_not_last() {
        let result = ReservationFeeSchedule::new(vec![
            ReservationFeeTier {
                up_to: None,
                fee: dec!(50_000),
            },
            ReservationFeeTier {
                up_to: Some(dec!(2_000_000)),
                fee: dec!(20_000),
            },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_negative_fee() {
        let result = ReservationFeeSchedule::new(vec![ReservationFeeTier {
            up_to: None,
            fee: dec!(-1),
        }]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_schedule() {
        assert!(ReservationFeeSchedule::new(vec![]).is_err());
    }
}
