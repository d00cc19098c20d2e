use super::report::Report;
use super::writer::tagged;
use super::writer::Emit;
use super::writer::Writer;
use crate::history::split::Hands;
use crate::transcode::transcript::Transcript;
use anyhow::Context;
use anyhow::Result;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

/// feed a line stream through the transcoder into a sink.
///
/// hands go one at a time, in stream order, each transcoded independently
/// of its neighbors. whatever the segmenter has buffered when the lines
/// run out still comes through, so cutting the feed never drops a partial
/// hand. emit failures abort the run on the spot.
pub fn stream<I, E>(lines: I, sink: &mut E) -> Result<Report>
where
    I: Iterator<Item = String>,
    E: Emit,
{
    let mut count = 0;
    for hand in Hands::from(lines) {
        let transcript = Transcript::from(&hand);
        if transcript.degenerate() {
            log::warn!("hand {} is degenerate, rendered best-effort", hand.seq());
        }
        count += 1;
        sink.emit(&transcript, count)?;
    }
    let report = sink.finish(count)?;
    log::info!("{}", report);
    Ok(report)
}

/// convert one file: derive the destination from the source when none is
/// given, then stream source lines into it.
///
/// a read failure mid-stream still flushes what the segmenter buffered
/// before surfacing, so the destination holds every hand that was fully
/// read; it is never silently truncated mid-hand without an error.
pub fn convert(source: &Path, destination: Option<&Path>) -> Result<Report> {
    let destination = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| tagged(source));
    let file = File::open(source).with_context(|| format!("open source {}", source.display()))?;
    let ref mut writer = Writer::create(&destination)?;
    let mut broken = None;
    let lines = BufReader::new(file).lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            broken = Some(e);
            None
        }
    });
    let report = stream(lines, writer)?;
    match broken {
        Some(e) => Err(e).with_context(|| format!("read source {}", source.display())),
        None => Ok(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// an emitter that remembers what it was handed.
    #[derive(Default)]
    struct Memory {
        counts: Vec<usize>,
        texts: Vec<String>,
    }

    impl Emit for Memory {
        fn emit(&mut self, hand: &Transcript, n: usize) -> Result<()> {
            self.counts.push(n);
            self.texts.push(hand.text().to_string());
            Ok(())
        }
        fn finish(&mut self, hands: usize) -> Result<Report> {
            Ok(Report {
                destination: "memory".to_string(),
                hands,
            })
        }
    }

    fn feed(lines: &[&str]) -> (Memory, Report) {
        let mut sink = Memory::default();
        let lines = lines.iter().map(|s| s.to_string());
        let report = stream(lines, &mut sink).unwrap();
        (sink, report)
    }

    #[test]
    fn counts_are_one_based_and_monotonic() {
        let (sink, report) = feed(&[
            "PokerStars Zoom Hand #1: Hold'em No Limit",
            "Seat 1: a ($10.00 in chips)",
            "PokerStars Zoom Hand #2: Hold'em No Limit",
            "Seat 1: a ($10.00 in chips)",
            "PokerStars Zoom Hand #3: Hold'em No Limit",
            "Seat 1: a ($10.00 in chips)",
        ]);
        assert!(sink.counts == vec![1, 2, 3]);
        assert!(report.hands == 3);
    }

    #[test]
    fn trailing_partial_hand_is_emitted() {
        let (sink, report) = feed(&[
            "PokerStars Zoom Hand #1: Hold'em No Limit",
            "Seat 1: a ($10.00 in chips)",
            "PokerStars Zoom Hand #2: Hold'em No Limit",
        ]);
        assert!(report.hands == 2);
        assert!(sink.texts[1].starts_with("PokerStars Zoom Hand #2"));
    }

    #[test]
    fn empty_stream_reports_zero_hands() {
        let (sink, report) = feed(&[]);
        assert!(sink.counts.is_empty());
        assert!(report.hands == 0);
    }

    #[test]
    fn read_failure_surfaces_and_keeps_hands() {
        // an undecodable byte mid-stream fails the run, but every hand
        // read before it, including the partial one, reaches the file.
        let source = std::env::temp_dir().join("zoom2pio-torn-source.txt");
        let destination = std::env::temp_dir().join("zoom2pio-torn-source-H2N4.txt");
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"PokerStars Zoom Hand #1: Hold'em No Limit\n");
        bytes.extend_from_slice(b"Seat 1: a ($10.00 in chips)\n");
        bytes.extend_from_slice(b"PokerStars Zoom Hand #2: Hold'em No Limit\n");
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"PokerStars Zoom Hand #3: Hold'em No Limit\n");
        std::fs::write(&source, bytes).unwrap();
        assert!(convert(&source, Some(&destination)).is_err());
        let written = std::fs::read_to_string(&destination).unwrap();
        assert!(written.contains("PokerStars Zoom Hand #1"));
        assert!(written.contains("PokerStars Zoom Hand #2"));
        assert!(!written.contains("PokerStars Zoom Hand #3"));
        std::fs::remove_file(&source).unwrap();
        std::fs::remove_file(&destination).unwrap();
    }

    #[test]
    fn emit_failure_aborts_the_run() {
        struct Refusing;
        impl Emit for Refusing {
            fn emit(&mut self, _: &Transcript, _: usize) -> Result<()> {
                Err(anyhow::anyhow!("sink refused the hand"))
            }
            fn finish(&mut self, hands: usize) -> Result<Report> {
                Ok(Report {
                    destination: "nowhere".to_string(),
                    hands,
                })
            }
        }
        let lines = [
            "PokerStars Zoom Hand #1: Hold'em No Limit",
            "Seat 1: a ($10.00 in chips)",
        ];
        let lines = lines.iter().map(|s| s.to_string());
        assert!(stream(lines, &mut Refusing).is_err());
    }

    #[test]
    fn hands_are_transcoded_not_copied() {
        let (sink, _) = feed(&[
            "PokerStars Zoom Hand #1: Hold'em No Limit",
            "Table 'Aludra Fast' 6-max Seat #3 is the button",
            "Seat 3: alone ($10.00 in chips)",
        ]);
        assert!(sink.texts[0].contains("Table 'PioSolver Table' 6-max Seat #2 is the button"));
        assert!(sink.texts[0].contains("Seat 2: Pio_BTN ($10.00 in chips)"));
    }
}
