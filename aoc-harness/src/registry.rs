//! Day registry built from inventory plugins
//!
//! Solvers self-register through [`register_day!`](crate::register_day),
//! and [`Registry::from_plugins`] gathers them into a fixed, day-ordered
//! set once at startup. There is no dynamic registration after that point.

use crate::error::RegistrationError;
use crate::solver::DynDay;

/// Plugin record submitted once per day solver.
///
/// Usually produced by the [`register_day!`](crate::register_day) macro
/// rather than written by hand.
pub struct DayPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn DynDay,
}

// Enable plugin collection via inventory
inventory::collect!(DayPlugin);

/// Register a [`DaySolver`](crate::DaySolver) type with the plugin system.
///
/// # Example
///
/// ```ignore
/// use aoc_harness::{DaySolver, register_day};
///
/// pub struct Day01;
///
/// impl DaySolver for Day01 {
///     // ...
/// }
///
/// register_day!(Day01);
/// ```
#[macro_export]
macro_rules! register_day {
    ($solver:path) => {
        $crate::inventory::submit! {
            $crate::DayPlugin {
                day: <$solver as $crate::DaySolver>::DAY,
                solver: &$solver,
            }
        }
    };
}

/// Immutable, day-ordered set of registered solvers.
pub struct Registry {
    days: Vec<&'static dyn DynDay>,
}

impl Registry {
    /// Build a registry from an explicit solver list.
    ///
    /// Sorts by day and rejects duplicate day numbers.
    pub fn new(mut days: Vec<&'static dyn DynDay>) -> Result<Self, RegistrationError> {
        days.sort_by_key(|solver| solver.day());
        for pair in days.windows(2) {
            if pair[0].day() == pair[1].day() {
                return Err(RegistrationError::DuplicateDay(pair[0].day()));
            }
        }
        Ok(Self { days })
    }

    /// Build a registry from every plugin submitted via
    /// [`register_day!`](crate::register_day).
    pub fn from_plugins() -> Result<Self, RegistrationError> {
        Self::new(
            inventory::iter::<DayPlugin>()
                .map(|plugin| plugin.solver)
                .collect(),
        )
    }

    /// Number of registered days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no day is registered.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate the solvers in day order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn DynDay> + '_ {
        self.days.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DaySolver;

    macro_rules! fake_day {
        ($name:ident, $day:expr) => {
            struct $name;

            impl DaySolver for $name {
                const DAY: u8 = $day;
                type Parsed<'a> = ();
                type Part1 = u8;
                type Part2 = u8;

                fn parse(_: &str) {}

                fn part1(_: &()) -> u8 {
                    Self::DAY
                }

                fn part2(_: &(), part1: &u8) -> u8 {
                    *part1
                }
            }
        };
    }

    fake_day!(FakeTwo, 2);
    fake_day!(FakeFive, 5);
    fake_day!(FakeFiveAgain, 5);

    #[test]
    fn test_sorted_by_day() {
        let registry = Registry::new(vec![&FakeFive, &FakeTwo]).unwrap();
        let days: Vec<u8> = registry.iter().map(|solver| solver.day()).collect();
        assert_eq!(days, vec![2, 5]);
    }

    #[test]
    fn test_duplicate_day_rejected() {
        let result = Registry::new(vec![&FakeFive, &FakeFiveAgain]);
        assert!(matches!(result, Err(RegistrationError::DuplicateDay(5))));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
