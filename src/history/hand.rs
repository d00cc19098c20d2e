/// one hand record sliced out of the source stream, still unparsed.
///
/// the sequence number counts hands from the top of the stream and only
/// ever shows up in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHand {
    seq: usize,
    lines: Vec<String>,
}

impl RawHand {
    pub fn seq(&self) -> usize {
        self.seq
    }

    pub fn first(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<(usize, Vec<String>)> for RawHand {
    fn from((seq, lines): (usize, Vec<String>)) -> Self {
        Self { seq, lines }
    }
}

/// a random but well-formed six-max hand: random id, button, names, and
/// stacks, blinds posted by the two seats after the button, everyone
/// folding to the big blind.
impl crate::Arbitrary for RawHand {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let id = rng.random_range(200_000_000_000u64..250_000_000_000u64);
        let button = rng.random_range(1..=crate::N as u8);
        let names = (1..=crate::N)
            .map(|i| format!("player{}x{}", i, rng.random_range(10..100)))
            .collect::<Vec<_>>();
        let sb = (button as usize) % crate::N;
        let bb = (button as usize + 1) % crate::N;
        let mut lines = vec![
            format!(
                "{} #{}: Hold'em No Limit ($5/$10) - 2024/06/01 12:00:00 ET",
                crate::HAND_MARKER,
                id
            ),
            format!("Table 'Halley Fast' 6-max Seat #{} is the button", button),
        ];
        for (i, name) in names.iter().enumerate() {
            let stack = rng.random_range(500..2000);
            lines.push(format!("Seat {}: {} (${}.00 in chips)", i + 1, name, stack));
        }
        lines.push(format!("{}: posts small blind $5.00", names[sb]));
        lines.push(format!("{}: posts big blind $10.00", names[bb]));
        lines.push("*** HOLE CARDS ***".to_string());
        lines.push(format!("Dealt to {} [Ah Kh]", names[sb]));
        for i in (0..crate::N).map(|i| (bb + 1 + i) % crate::N).take(crate::N - 1) {
            lines.push(format!("{}: folds", names[i]));
        }
        lines.push(format!("Uncalled bet ($5.00) returned to {}", names[bb]));
        lines.push(format!("{} collected $10.00 from pot", names[bb]));
        lines.push(crate::SUMMARY_MARKER.to_string());
        lines.push("Total pot $10.00 | Rake $0.00".to_string());
        for (i, name) in names.iter().enumerate() {
            let mut tags = String::new();
            if i + 1 == button as usize {
                tags.push_str(" (button)");
            }
            if i == sb {
                tags.push_str(" (small blind)");
            }
            if i == bb {
                tags.push_str(" (big blind)");
            }
            let fate = match i == bb {
                true => "collected ($10.00)",
                false => "folded before Flop (didn't bet)",
            };
            lines.push(format!("Seat {}: {}{} {}", i + 1, name, tags, fate));
        }
        Self::from((0, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::history::line::Line;

    #[test]
    fn random_hand_is_well_formed() {
        let hand = RawHand::random();
        assert!(matches!(Line::from(hand.first().unwrap()), Line::Start));
        assert!(hand.lines().any(|l| matches!(Line::from(l), Line::Table(_))));
        assert!(hand.lines().any(|l| matches!(Line::from(l), Line::Summary)));
        assert!(hand.lines().filter(|l| matches!(Line::from(*l), Line::Seat(..))).count() == 12);
    }
}
