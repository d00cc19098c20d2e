/// a physical seat number as printed in a hand history, always 1..=6.
///
/// both dialects number seats this way; `remap` carries a seat from the
/// source table into the solver's numbering and `unmap` is its inverse.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seat(u8);

impl Seat {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(crate::N as u8);

    /// all seats in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (u8::from(Self::MIN)..=u8::from(Self::MAX)).map(Self)
    }

    /// the fixed table rotation: the source's seat 1 wraps around to the
    /// solver's seat 6 and every other seat shifts down by one.
    pub const fn remap(self) -> Self {
        match self.0 {
            1 => Self(6),
            n => Self(n - 1),
        }
    }

    /// inverse of `remap`.
    pub const fn unmap(self) -> Self {
        match self.0 {
            6 => Self(1),
            n => Self(n + 1),
        }
    }
}

/// u8 isomorphism
///
/// out-of-range numbers are rejected so that downstream code never sees a
/// seat outside the table.
impl TryFrom<u8> for Seat {
    type Error = Box<dyn std::error::Error>;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=6 => Ok(Self(n)),
            n => Err(format!("seat out of range: {}", n).into()),
        }
    }
}
impl From<Seat> for u8 {
    fn from(seat: Seat) -> u8 {
        seat.0
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl crate::Arbitrary for Seat {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random_range(1..=crate::N as u8))
    }
}
