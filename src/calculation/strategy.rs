//! Pay calculation strategies.
//!
//! This module defines the closed set of policies used to convert an
//! employee's accumulated work records into a final payable amount. Each
//! strategy is stateless and pure: the same work list always produces the
//! same amount, and selecting a strategy has no side effects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WorkRecord;

/// Returns the uplift multiplier applied by the premium strategy.
///
/// The multiplier is 1.15 (15% uplift on the summed work amounts).
pub fn premium_multiplier() -> Decimal {
    Decimal::new(115, 2)
}

/// Returns the flat bonus added by the fixed-bonus strategy.
///
/// The bonus is 200 and applies even to an empty work history.
pub fn fixed_bonus_amount() -> Decimal {
    Decimal::from(200)
}

/// A pay-calculation strategy, selectable per employee.
///
/// Strategies form a closed enumeration with small-integer selectors
/// {1 = Standard, 2 = Premium, 3 = FixedBonus}; any other selector is
/// rejected by [`PayStrategy::from_selector`]. Selection is mutable at any
/// time with no transition restrictions, and switching never recomputes or
/// stores history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayStrategy {
    /// Sum of all recorded work amounts. The default for new employees.
    #[default]
    Standard,
    /// Sum of all recorded work amounts with a 15% uplift.
    Premium,
    /// Sum of all recorded work amounts plus a flat bonus of 200.
    FixedBonus,
}

impl PayStrategy {
    /// Resolves a strategy from its small-integer selector.
    ///
    /// Returns `None` for any selector outside {1, 2, 3}.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_registry::calculation::PayStrategy;
    ///
    /// assert_eq!(PayStrategy::from_selector(2), Some(PayStrategy::Premium));
    /// assert_eq!(PayStrategy::from_selector(4), None);
    /// ```
    pub fn from_selector(selector: u8) -> Option<Self> {
        match selector {
            1 => Some(Self::Standard),
            2 => Some(Self::Premium),
            3 => Some(Self::FixedBonus),
            _ => None,
        }
    }

    /// Returns the small-integer selector for this strategy.
    pub fn selector(&self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Premium => 2,
            Self::FixedBonus => 3,
        }
    }

    /// Returns the human-readable name used when rendering this strategy.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Premium => "Premium (+15%)",
            Self::FixedBonus => "Fixed bonus (+200)",
        }
    }

    /// Computes the total pay for the given work records under this strategy.
    ///
    /// An empty work list yields 0 under Standard and Premium; FixedBonus
    /// yields the flat bonus, which always applies.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_registry::calculation::PayStrategy;
    /// use payroll_registry::models::WorkRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let works = vec![WorkRecord {
    ///     name: "Assembly".to_string(),
    ///     pay: Decimal::from(50),
    /// }];
    /// assert_eq!(PayStrategy::Standard.calculate(&works), Decimal::from(50));
    /// assert_eq!(PayStrategy::FixedBonus.calculate(&works), Decimal::from(250));
    /// ```
    pub fn calculate(&self, works: &[WorkRecord]) -> Decimal {
        let base_sum: Decimal = works.iter().map(WorkRecord::total_pay).sum();
        match self {
            Self::Standard => base_sum,
            Self::Premium => base_sum * premium_multiplier(),
            Self::FixedBonus => base_sum + fixed_bonus_amount(),
        }
    }
}
