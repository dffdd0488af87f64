use crate::{CalendarDay, ConfigError, SelectionError};

/// Inclusive limits on which days may be tapped. Either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    min: Option<CalendarDay>,
    max: Option<CalendarDay>,
}

impl Bounds {
    /// # Errors
    /// Returns `ConfigError::InvalidBounds` if both limits are given and `min > max`.
    pub fn new(min: Option<CalendarDay>, max: Option<CalendarDay>) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConfigError::InvalidBounds { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// Accepts every day.
    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    pub const fn min(&self) -> Option<CalendarDay> {
        self.min
    }

    pub const fn max(&self) -> Option<CalendarDay> {
        self.max
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        self.min.is_none_or(|min| min <= day) && self.max.is_none_or(|max| day <= max)
    }

    /// # Errors
    /// Returns `SelectionError::OutOfBounds` for a day outside the limits.
    pub fn check(&self, day: CalendarDay) -> Result<(), SelectionError> {
        if self.contains(day) {
            Ok(())
        } else {
            Err(SelectionError::OutOfBounds { day })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::day;

    #[test]
    fn test_new_rejects_inverted_limits() {
        let result = Bounds::new(Some(day(2024, 6, 1)), Some(day(2024, 5, 1)));
        assert_eq!(
            result,
            Err(ConfigError::InvalidBounds {
                min: day(2024, 6, 1),
                max: day(2024, 5, 1),
            })
        );

        assert!(Bounds::new(Some(day(2024, 5, 1)), Some(day(2024, 5, 1))).is_ok());
        assert!(Bounds::new(Some(day(2024, 6, 1)), None).is_ok());
        assert!(Bounds::new(None, Some(day(2024, 5, 1))).is_ok());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = Bounds::new(Some(day(2024, 5, 1)), Some(day(2024, 5, 31))).expect("ordered bounds");

        assert!(bounds.contains(day(2024, 5, 1)));
        assert!(bounds.contains(day(2024, 5, 15)));
        assert!(bounds.contains(day(2024, 5, 31)));
        assert!(!bounds.contains(day(2024, 4, 30)));
        assert!(!bounds.contains(day(2024, 6, 1)));
    }

    #[test]
    fn test_open_ends() {
        let from_may = Bounds::new(Some(day(2024, 5, 1)), None).expect("min only");
        assert!(from_may.contains(CalendarDay::MAX));
        assert!(!from_may.contains(day(2024, 4, 30)));

        let until_may = Bounds::new(None, Some(day(2024, 5, 31))).expect("max only");
        assert!(until_may.contains(CalendarDay::MIN));
        assert!(!until_may.contains(day(2024, 6, 1)));

        assert!(Bounds::unbounded().contains(CalendarDay::MIN));
        assert!(Bounds::unbounded().contains(CalendarDay::MAX));
        assert_eq!(Bounds::default(), Bounds::unbounded());
    }

    #[test]
    fn test_check() {
        let bounds = Bounds::new(Some(day(2024, 5, 1)), Some(day(2024, 5, 31))).expect("ordered bounds");

        assert_eq!(bounds.check(day(2024, 5, 10)), Ok(()));
        assert_eq!(
            bounds.check(day(2024, 6, 1)),
            Err(SelectionError::OutOfBounds { day: day(2024, 6, 1) })
        );
    }
}
