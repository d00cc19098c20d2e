/// which region of the hand the scan cursor is in. the summary marker
/// flips the cursor forward and nothing flips it back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Region {
    #[default]
    Actions,
    Summary,
}

/// a summary seat entry awaiting re-rendering, in output numbering. the
/// verbatim line is kept so entries that cannot be resolved to a role
/// pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub seat: Seat,
    pub rest: String,
    pub verbatim: String,
}

/// everything one forward pass learns about a hand.
///
/// built fresh per hand and dropped after rendering, so player identity
/// never leaks across hands. seat numbers are already remapped here;
/// names, stacks, and unrecognized lines stay verbatim.
#[derive(Debug, Default)]
pub struct Context {
    first: Option<String>,
    roster: Roster,
    actions: Vec<String>,
    entries: Vec<Entry>,
    pot: Option<String>,
    board: Option<String>,
    region: Region,
}

impl Context {
    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(String::as_str)
    }

    /// summary entries in ascending output seat order.
    pub fn entries(&self) -> Vec<&Entry> {
        let mut entries = self.entries.iter().collect::<Vec<_>>();
        entries.sort_by_key(|entry| entry.seat);
        entries
    }

    pub fn pot(&self) -> Option<&str> {
        self.pot.as_deref()
    }

    pub fn board(&self) -> Option<&str> {
        self.board.as_deref()
    }

    pub fn summarized(&self) -> bool {
        self.region == Region::Summary
    }

    /// a hand we could not even seat anyone in. it still renders, mostly
    /// verbatim, but deserves a diagnostic.
    pub fn degenerate(&self) -> bool {
        self.first.is_none() || self.roster.is_empty()
    }

    fn scan(&mut self, line: &str) {
        match Line::from(line) {
            Line::Table(button) => self.roster.dealer(button.remap()),
            Line::Seat(seat, rest) => self.seat(seat, rest, line),
            Line::Small(name) => {
                self.roster.post_small(&name);
                self.keep(line);
            }
            Line::Big(name) => {
                self.roster.post_big(&name);
                self.keep(line);
            }
            Line::Summary => self.region = Region::Summary,
            Line::Pot if self.summarized() => self.pot = Some(line.to_string()),
            Line::Board if self.summarized() => self.board = Some(line.to_string()),
            Line::Start | Line::Pot | Line::Board | Line::Other => self.keep(line),
        }
    }

    fn seat(&mut self, seat: Seat, rest: String, line: &str) {
        match self.region {
            Region::Summary => self.entries.push(Entry {
                seat: seat.remap(),
                rest,
                verbatim: line.to_string(),
            }),
            Region::Actions => match Record::try_from((seat.remap(), rest.as_str())) {
                Ok(record) => self.roster.sit(record),
                Err(_) => self.keep(line),
            },
        }
    }

    fn keep(&mut self, line: &str) {
        self.actions.push(line.to_string());
    }
}

/// the scan pass. the first line is carried verbatim without ever being
/// classified, since the segmenter already decided where hands begin.
impl From<&RawHand> for Context {
    fn from(hand: &RawHand) -> Self {
        let mut this = Self::default();
        let mut lines = hand.lines();
        this.first = lines.next().map(String::from);
        for line in lines {
            this.scan(line);
        }
        this
    }
}

use crate::history::hand::RawHand;
use crate::history::line::Line;
use crate::table::record::Record;
use crate::table::roster::Roster;
use crate::table::seat::Seat;
