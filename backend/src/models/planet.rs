use serde::Serialize;

/// The nine planets of the numerology cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Planet {
    Sun,
    Moon,
    Jupiter,
    Rahu,
    Mercury,
    Venus,
    Ketu,
    Saturn,
    Mars,
}

impl Planet {
    /// Planet ruling the given number (1-9).
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Sun),
            2 => Some(Self::Moon),
            3 => Some(Self::Jupiter),
            4 => Some(Self::Rahu),
            5 => Some(Self::Mercury),
            6 => Some(Self::Venus),
            7 => Some(Self::Ketu),
            8 => Some(Self::Saturn),
            9 => Some(Self::Mars),
            _ => None,
        }
    }

    pub const fn number(self) -> u32 {
        match self {
            Self::Sun => 1,
            Self::Moon => 2,
            Self::Jupiter => 3,
            Self::Rahu => 4,
            Self::Mercury => 5,
            Self::Venus => 6,
            Self::Ketu => 7,
            Self::Saturn => 8,
            Self::Mars => 9,
        }
    }

    /// Length of this planet's mahadasha in years.
    pub const fn duration_years(self) -> i32 {
        self.number() as i32
    }

    /// Next planet in the cycle (Mars wraps to Sun).
    pub const fn next(self) -> Self {
        match self {
            Self::Sun => Self::Moon,
            Self::Moon => Self::Jupiter,
            Self::Jupiter => Self::Rahu,
            Self::Rahu => Self::Mercury,
            Self::Mercury => Self::Venus,
            Self::Venus => Self::Ketu,
            Self::Ketu => Self::Saturn,
            Self::Saturn => Self::Mars,
            Self::Mars => Self::Sun,
        }
    }
}

/// Advance a cycle number 1-9, wrapping 9 to 1.
pub const fn next_in_cycle(number: u32) -> u32 {
    if number < 9 {
        number + 1
    } else {
        1
    }
}
