/// one line of source text, classified by shape alone.
///
/// classification is total and context free: whether a `Seat n:` line is a
/// seat record or a summary entry depends on which region of the hand it
/// sits in, so that call belongs to the scan, not to the classifier. any
/// line that matches no known shape is `Other` and flows through the
/// transcoder verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// opens a new hand record.
    Start,
    /// table description carrying the button seat, in source numbering.
    Table(Seat),
    /// `Seat <n>: <rest>`, in source numbering.
    Seat(Seat, String),
    /// `<name>: posts small blind ...`
    Small(String),
    /// `<name>: posts big blind ...`
    Big(String),
    /// opens the summary region.
    Summary,
    /// `Total pot ...`
    Pot,
    /// `Board [...]`
    Board,
    /// anything else.
    Other,
}

impl Line {
    fn table(s: &str) -> Option<Seat> {
        let s = s.strip_prefix("Table ")?;
        let (_, tail) = s.split_once("Seat #")?;
        let digits = tail
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>();
        let seat = digits
            .parse::<u8>()
            .ok()
            .and_then(|n| Seat::try_from(n).ok())?;
        match tail[digits.len()..].starts_with(" is the button") {
            true => Some(seat),
            false => None,
        }
    }

    fn seat(s: &str) -> Option<(Seat, String)> {
        let s = s.strip_prefix("Seat ")?;
        let (number, rest) = s.split_once(": ")?;
        let seat = number
            .parse::<u8>()
            .ok()
            .and_then(|n| Seat::try_from(n).ok())?;
        Some((seat, rest.to_string()))
    }

    fn blind(s: &str, post: &str) -> Option<String> {
        let (name, _) = s.split_once(post)?;
        Some(name.to_string())
    }
}

/// str classification
impl From<&str> for Line {
    fn from(s: &str) -> Self {
        if s.starts_with(crate::HAND_MARKER) {
            Self::Start
        } else if s.starts_with(crate::SUMMARY_MARKER) {
            Self::Summary
        } else if s.starts_with("Total pot ") {
            Self::Pot
        } else if s.starts_with("Board [") {
            Self::Board
        } else if let Some(seat) = Self::table(s) {
            Self::Table(seat)
        } else if let Some((seat, rest)) = Self::seat(s) {
            Self::Seat(seat, rest)
        } else if let Some(name) = Self::blind(s, ": posts small blind") {
            Self::Small(name)
        } else if let Some(name) = Self::blind(s, ": posts big blind") {
            Self::Big(name)
        } else {
            Self::Other
        }
    }
}

use crate::table::seat::Seat;
