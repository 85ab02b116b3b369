use std::fmt;

/// Inclusive integer range `[low, high]` used for damage and power rolls.
///
/// The `(0, 0)` range is special: it means "no randomized magnitude" and
/// always rolls zero without consuming randomness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntRange {
    low: i32,
    high: i32,
}

impl IntRange {
    pub const ZERO: Self = Self { low: 0, high: 0 };

    /// Creates a range. `low` must not exceed `high`.
    pub const fn new(low: i32, high: i32) -> Self {
        assert!(low <= high, "IntRange low bound exceeds high bound");
        Self { low, high }
    }

    #[inline]
    pub const fn low(self) -> i32 {
        self.low
    }

    #[inline]
    pub const fn high(self) -> i32 {
        self.high
    }

    /// Returns true for the `(0, 0)` "no effect" range.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.low == 0 && self.high == 0
    }

    /// Number of distinct values the range can produce.
    #[inline]
    pub const fn span(self) -> u32 {
        (self.high - self.low) as u32 + 1
    }

    pub const fn contains(self, value: i32) -> bool {
        value >= self.low && value <= self.high
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

// Tooltips and saved configs encode ranges as a `[low, high]` pair.
#[cfg(feature = "serde")]
impl serde::Serialize for IntRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.low, self.high].serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let [low, high] = <[i32; 2]>::deserialize(deserializer)?;
        if low > high {
            return Err(serde::de::Error::custom(format!(
                "invalid range [{low}, {high}]: low exceeds high"
            )));
        }
        Ok(Self { low, high })
    }
}
