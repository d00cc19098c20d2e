/// slices a stream of text lines into hands.
///
/// a marker line closes whatever is buffered and opens the next hand, so
/// every hand owns its marker line as its first line. anything buffered
/// when the stream ends is flushed as a final hand, which means a source
/// that was cut off mid-hand still yields that partial hand. lines ahead
/// of the first marker form a markerless first hand rather than being
/// dropped.
pub struct Hands<I> {
    lines: I,
    buffer: Vec<String>,
    seq: usize,
}

impl<I> Hands<I>
where
    I: Iterator<Item = String>,
{
    fn flush(&mut self) -> RawHand {
        let hand = RawHand::from((self.seq, std::mem::take(&mut self.buffer)));
        self.seq += 1;
        hand
    }
}

impl<I> From<I> for Hands<I>
where
    I: Iterator<Item = String>,
{
    fn from(lines: I) -> Self {
        Self {
            lines,
            buffer: Vec::new(),
            seq: 0,
        }
    }
}

impl<I> Iterator for Hands<I>
where
    I: Iterator<Item = String>,
{
    type Item = RawHand;
    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if line.starts_with(crate::HAND_MARKER) && !self.buffer.is_empty() {
                let hand = self.flush();
                self.buffer.push(line);
                return Some(hand);
            }
            self.buffer.push(line);
        }
        match self.buffer.is_empty() {
            true => None,
            false => Some(self.flush()),
        }
    }
}

use super::hand::RawHand;
