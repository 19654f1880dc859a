//! Search configuration: [`RunLimits`] and [`FrontierKind`].

use crucible_core::{Direction, Heading};

use crate::error::SearchError;

/// Bounds on how many consecutive steps the crucible may take in one
/// direction.
///
/// `min_run` is the number of straight steps required before turning or
/// stopping (`0` means no lower bound); `max_run` is the longest straight
/// run allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunLimits {
    pub min_run: u32,
    pub max_run: u32,
}

impl RunLimits {
    /// Ordinary crucible: at most three blocks in a straight line.
    pub const STANDARD: Self = Self {
        min_run: 0,
        max_run: 3,
    };

    /// Ultra crucible: four to ten blocks before turning or stopping.
    pub const ULTRA: Self = Self {
        min_run: 4,
        max_run: 10,
    };

    /// Create validated limits.
    pub fn new(min_run: u32, max_run: u32) -> Result<Self, SearchError> {
        let limits = Self { min_run, max_run };
        limits.validate()?;
        Ok(limits)
    }

    /// Check that `max_run >= max(min_run, 1)`.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_run < self.min_run.max(1) {
            return Err(SearchError::InvalidParameter {
                min_run: self.min_run,
                max_run: self.max_run,
            });
        }
        Ok(())
    }

    /// Run length after moving towards `dir` from a state entered with
    /// `heading` after `run` straight steps, or `None` if the move is
    /// forbidden.
    ///
    /// The origin may leave in any direction. Otherwise reversing is never
    /// allowed, going straight requires `run < max_run` and turning requires
    /// `run >= min_run`.
    #[inline]
    pub fn next_run(&self, heading: Heading, run: u32, dir: Direction) -> Option<u32> {
        match heading {
            Heading::Start => Some(1),
            Heading::Moving(cur) if dir == cur => (run < self.max_run).then_some(run + 1),
            Heading::Moving(cur) if dir == cur.opposite() => None,
            Heading::Moving(_) => (run >= self.min_run).then_some(1),
        }
    }

    /// Whether a state on the goal cell may end the search there.
    ///
    /// The origin needs no move at all, so a one-cell grid is always solved.
    #[inline]
    pub fn can_stop(&self, heading: Heading, run: u32) -> bool {
        match heading {
            Heading::Start => true,
            Heading::Moving(_) => run >= self.min_run,
        }
    }
}

impl Default for RunLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Priority structure used for the search frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierKind {
    /// Binary min-heap keyed by cumulative cost.
    #[default]
    BinaryHeap,
    /// Circular bucket queue over the bounded cell-cost range.
    Buckets,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::Direction::*;

    #[test]
    fn validation() {
        assert!(RunLimits::new(0, 3).is_ok());
        assert!(RunLimits::new(4, 10).is_ok());
        assert!(RunLimits::new(4, 4).is_ok());
        assert_eq!(
            RunLimits::new(0, 0),
            Err(SearchError::InvalidParameter {
                min_run: 0,
                max_run: 0
            })
        );
        assert!(RunLimits::new(5, 4).is_err());
        assert!(RunLimits::STANDARD.validate().is_ok());
        assert!(RunLimits::ULTRA.validate().is_ok());
    }

    #[test]
    fn start_moves_anywhere() {
        let l = RunLimits::ULTRA;
        for d in Direction::ALL {
            assert_eq!(l.next_run(Heading::Start, 0, d), Some(1));
        }
    }

    #[test]
    fn never_reverse() {
        let l = RunLimits::STANDARD;
        for d in Direction::ALL {
            for run in 1..=3 {
                assert_eq!(l.next_run(Heading::Moving(d), run, d.opposite()), None);
            }
        }
    }

    #[test]
    fn straight_until_max() {
        let l = RunLimits::STANDARD;
        assert_eq!(l.next_run(East.into(), 1, East), Some(2));
        assert_eq!(l.next_run(East.into(), 2, East), Some(3));
        assert_eq!(l.next_run(East.into(), 3, East), None);
    }

    #[test]
    fn turn_after_min() {
        let l = RunLimits::ULTRA;
        assert_eq!(l.next_run(South.into(), 3, East), None);
        assert_eq!(l.next_run(South.into(), 4, East), Some(1));
        assert_eq!(l.next_run(South.into(), 10, West), Some(1));
        assert_eq!(l.next_run(South.into(), 10, South), None);
        // with no lower bound any run may turn
        assert_eq!(RunLimits::STANDARD.next_run(North.into(), 1, West), Some(1));
    }

    #[test]
    fn stop_rules() {
        let l = RunLimits::ULTRA;
        assert!(l.can_stop(Heading::Start, 0));
        assert!(!l.can_stop(East.into(), 3));
        assert!(l.can_stop(East.into(), 4));
        assert!(RunLimits::STANDARD.can_stop(South.into(), 1));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn limits_round_trip() {
        let json = serde_json::to_string(&RunLimits::ULTRA).unwrap();
        let back: RunLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RunLimits::ULTRA);
    }
}
