use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Очки сетенты в десятых долях (17.5 хранится как 175).
/// Обёртка над u32, чтобы не путать с количеством карт.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct SetentaPoints(pub u32);

impl SetentaPoints {
    pub const ZERO: SetentaPoints = SetentaPoints(0);

    pub fn from_tenths(tenths: u32) -> Self {
        SetentaPoints(tenths)
    }

    pub fn tenths(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Значение в очках, для отображения.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl Add for SetentaPoints {
    type Output = SetentaPoints;

    fn add(self, rhs: SetentaPoints) -> Self::Output {
        SetentaPoints(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for SetentaPoints {
    fn add_assign(&mut self, rhs: SetentaPoints) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for SetentaPoints {
    fn sum<I: Iterator<Item = SetentaPoints>>(iter: I) -> Self {
        iter.fold(SetentaPoints::ZERO, Add::add)
    }
}

impl fmt::Display for SetentaPoints {
    /// `36.5`, `44`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 10;
        let frac = self.0 % 10;
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.{frac}")
        }
    }
}
