/// one seat line of a hand, keyed by its remapped output seat.
///
/// the stack is kept verbatim so currency formatting survives the
/// round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub seat: Seat,
    pub name: String,
    pub stack: String,
}

/// parse the `<name> (<stack> in chips)` tail of a seat line. splitting at
/// the last open paren keeps names containing spaces or parens intact.
impl TryFrom<(Seat, &str)> for Record {
    type Error = Box<dyn std::error::Error>;
    fn try_from((seat, rest): (Seat, &str)) -> Result<Self, Self::Error> {
        let rest = rest
            .strip_suffix(" in chips)")
            .ok_or(format!("not a seat record: {}", rest))?;
        let (name, stack) = rest
            .rsplit_once(" (")
            .ok_or(format!("not a seat record: {}", rest))?;
        Ok(Self {
            seat,
            name: name.to_string(),
            stack: stack.to_string(),
        })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Seat {}: {} ({} in chips)", self.seat, self.name, self.stack)
    }
}

use super::seat::Seat;
