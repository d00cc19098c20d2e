/// replaces whole-token occurrences of player names with role labels.
///
/// a token boundary is any side not touching an alphanumeric or an
/// underscore, so a name that happens to be a substring of another name,
/// or of surrounding text, is never clipped. longer names are tried first
/// at each position so overlapping names resolve to the most specific
/// match, and replaced text is never rescanned.
pub struct Rewriter {
    pairs: Vec<(String, &'static str)>,
}

impl Rewriter {
    pub fn rewrite(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut rest = line;
        'scan: while let Some(c) = rest.chars().next() {
            let open = out.chars().next_back().map_or(true, |c| !Self::wordy(c));
            if open {
                for (name, label) in self.pairs.iter() {
                    if let Some(tail) = rest.strip_prefix(name.as_str()) {
                        if tail.chars().next().map_or(true, |c| !Self::wordy(c)) {
                            out.push_str(label);
                            rest = tail;
                            continue 'scan;
                        }
                    }
                }
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
        out
    }

    fn wordy(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl From<&Roster> for Rewriter {
    fn from(roster: &Roster) -> Self {
        let mut pairs = roster
            .identities()
            .into_iter()
            .filter(|(name, _)| !name.is_empty()) // an empty name would never advance the scan
            .map(|(name, role)| (name, role.label()))
            .collect::<Vec<_>>();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { pairs }
    }
}

use crate::table::roster::Roster;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::record::Record;
    use crate::table::seat::Seat;

    fn rewriter(names: &[&str]) -> Rewriter {
        let mut roster = Roster::default();
        for (i, name) in names.iter().enumerate() {
            roster.sit(Record {
                seat: Seat::try_from(i as u8 + 1).unwrap(),
                name: name.to_string(),
                stack: "$1000.00".to_string(),
            });
        }
        roster.dealer(Seat::try_from(names.len() as u8).unwrap());
        roster.post_small(names[0]);
        if let Some(name) = names.get(1) {
            roster.post_big(name);
        }
        Rewriter::from(&roster)
    }

    #[test]
    fn rewrites_action_lines() {
        let r = rewriter(&["alice", "bob", "carol"]);
        assert!(r.rewrite("alice: raises $10.00 to $20.00") == "Pio_OOP: raises $10.00 to $20.00");
        assert!(r.rewrite("bob collected $25.00 from pot") == "Pio_IP collected $25.00 from pot");
        assert!(r.rewrite("Dealt to carol [Ah Kh]") == "Dealt to Pio_BTN [Ah Kh]");
        assert!(r.rewrite("Uncalled bet ($10.00) returned to alice") == "Uncalled bet ($10.00) returned to Pio_OOP");
    }

    #[test]
    fn whole_tokens_only() {
        // "alice" sits at the head of "alicette" but must not be clipped.
        let r = rewriter(&["alice", "alicette"]);
        assert!(r.rewrite("alicette: folds") == "Pio_BTN: folds");
        assert!(r.rewrite("xalice: folds") == "xalice: folds");
        assert!(r.rewrite("alice9: folds") == "alice9: folds");
        assert!(r.rewrite("alice_: folds") == "alice_: folds");
    }

    #[test]
    fn longest_name_wins() {
        let r = rewriter(&["aa", "aa bb"]);
        assert!(r.rewrite("aa bb: checks") == "Pio_BTN: checks");
        assert!(r.rewrite("aa: checks") == "Pio_OOP: checks");
    }

    #[test]
    fn replacements_are_not_rescanned() {
        // the label itself contains "Pio", which must stay untouched even
        // when a player is named that.
        let r = rewriter(&["Pio", "other"]);
        assert!(r.rewrite("Pio: bets $5.00") == "Pio_OOP: bets $5.00");
        assert!(r.rewrite("Pio Pio Pio") == "Pio_OOP Pio_OOP Pio_OOP");
    }

    #[test]
    fn punctuation_is_a_boundary() {
        let r = rewriter(&["alice", "bob"]);
        assert!(r.rewrite("(alice) shows [2c 2d]") == "(Pio_OOP) shows [2c 2d]");
        assert!(r.rewrite("alice") == "Pio_OOP");
        assert!(r.rewrite("hi alice, hi bob.") == "hi Pio_OOP, hi Pio_BTN.");
    }

    #[test]
    fn multibyte_text_survives() {
        let r = rewriter(&["añejo", "bob"]);
        assert!(r.rewrite("añejo: folds") == "Pio_OOP: folds");
        assert!(r.rewrite("çaçá añejo çaçá") == "çaçá Pio_OOP çaçá");
    }
}
