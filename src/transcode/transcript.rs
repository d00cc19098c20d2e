/// a fully transcoded hand, ready for the output stream.
///
/// the text carries no trailing newline; the writer owns the separator
/// that closes each hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    seq: usize,
    text: String,
    degenerate: bool,
}

impl Transcript {
    pub fn seq(&self) -> usize {
        self.seq
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// true when the scan could not seat anyone; the text is then mostly
    /// the source hand passed through verbatim.
    pub fn degenerate(&self) -> bool {
        self.degenerate
    }

    /// a summary seat entry: drop the player name, strip whatever button
    /// or blind annotations the source carried, then re-annotate from the
    /// resolved roles so nothing comes out doubled or stale.
    fn entry(
        entry: &Entry,
        roles: &BTreeMap<Seat, Role>,
        roster: &Roster,
        rewriter: &Rewriter,
    ) -> String {
        let Some(role) = roles.get(&entry.seat) else {
            return entry.verbatim.clone();
        };
        let tail = Self::nameless(&entry.rest, roster);
        let tail = rewriter.rewrite(Self::plain(tail));
        let mut line = format!("Seat {}: {}", entry.seat, role.label());
        if roster.button() == Some(entry.seat) {
            line.push_str(" (button)");
        }
        if let Some(blind) = role.blind() {
            line.push(' ');
            line.push_str(blind);
        }
        if !tail.is_empty() {
            line.push(' ');
            line.push_str(&tail);
        }
        line
    }

    /// drop the leading player name from a summary entry tail. known
    /// names are tried longest first so one being a prefix of another
    /// cannot truncate it; when none fits, the first whitespace token
    /// goes instead.
    fn nameless<'a>(rest: &'a str, roster: &Roster) -> &'a str {
        let mut names = roster
            .records()
            .map(|record| record.name.as_str())
            .collect::<Vec<_>>();
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        for name in names {
            if let Some(tail) = rest.strip_prefix(name) {
                if tail.is_empty() || tail.starts_with(' ') {
                    return tail;
                }
            }
        }
        rest.split_once(' ').map(|(_, tail)| tail).unwrap_or("")
    }

    /// strip leading button and blind annotations left over from the
    /// source, however many it stacked up.
    fn plain(mut tail: &str) -> &str {
        loop {
            let trimmed = tail.trim_start();
            match ["(button)", "(small blind)", "(big blind)"]
                .iter()
                .find_map(|tag| trimmed.strip_prefix(tag))
            {
                Some(stripped) => tail = stripped,
                None => return trimmed,
            }
        }
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// the render pass: marker line verbatim, rebuilt table line, seat lines
/// in ascending output order wearing role labels, rewritten actions, then
/// the reassembled summary.
impl From<&RawHand> for Transcript {
    fn from(hand: &RawHand) -> Self {
        let context = Context::from(hand);
        let roles = context.roster().roles();
        let rewriter = Rewriter::from(context.roster());
        let mut lines = Vec::with_capacity(hand.len());
        if let Some(first) = context.first() {
            lines.push(first.to_string());
        }
        if let Some(button) = context.roster().button() {
            lines.push(format!(
                "Table '{}' 6-max Seat #{} is the button",
                crate::SOLVER_TABLE,
                button
            ));
        }
        for record in context.roster().records() {
            let name = roles
                .get(&record.seat)
                .map(|role| role.label().to_string())
                .unwrap_or_else(|| record.name.clone());
            lines.push(format!(
                "Seat {}: {} ({} in chips)",
                record.seat, name, record.stack
            ));
        }
        for action in context.actions() {
            lines.push(rewriter.rewrite(action));
        }
        if context.summarized() {
            lines.push(crate::SUMMARY_MARKER.to_string());
            if let Some(pot) = context.pot() {
                lines.push(pot.to_string());
            }
            if let Some(board) = context.board() {
                lines.push(board.to_string());
            }
            for entry in context.entries() {
                lines.push(Self::entry(entry, &roles, context.roster(), &rewriter));
            }
        }
        Self {
            seq: hand.seq(),
            text: lines.join("\n"),
            degenerate: context.degenerate(),
        }
    }
}

use super::context::Context;
use super::context::Entry;
use super::rewrite::Rewriter;
use crate::history::hand::RawHand;
use crate::table::role::Role;
use crate::table::roster::Roster;
use crate::table::seat::Seat;
use std::collections::BTreeMap;
