use super::progress::Progress;
use super::report::Report;
use crate::transcode::transcript::Transcript;
use anyhow::Context;
use anyhow::Result;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// destination for transcoded hands.
pub trait Emit {
    /// accept the n-th transcoded hand, 1-based.
    fn emit(&mut self, hand: &Transcript, n: usize) -> Result<()>;
    /// flush everything and describe where the hands went.
    fn finish(&mut self, hands: usize) -> Result<Report>;
}

/// streams hands into anything Write, separated the way the solver
/// expects. nothing is promised durable until `finish` flushes.
pub struct Writer<W: Write> {
    sink: BufWriter<W>,
    destination: String,
    progress: Progress,
}

impl Writer<File> {
    /// create the destination file, truncating whatever was there.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("create destination {}", path.display()))?;
        Ok(Self::new(file, path.display().to_string()))
    }
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W, destination: String) -> Self {
        Self {
            sink: BufWriter::new(sink),
            destination,
            progress: Progress::default(),
        }
    }
}

impl<W: Write> Emit for Writer<W> {
    fn emit(&mut self, hand: &Transcript, _: usize) -> Result<()> {
        self.sink.write_all(hand.text().as_bytes())?;
        self.sink.write_all(crate::HAND_SEPARATOR.as_bytes())?;
        self.progress.tick();
        Ok(())
    }

    fn finish(&mut self, hands: usize) -> Result<Report> {
        self.sink.flush()?;
        Ok(Report {
            destination: self.destination.clone(),
            hands,
        })
    }
}

/// splice the output tag into a source filename, ahead of its extension
/// when it has one.
pub fn tagged(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    match source.extension() {
        Some(ext) => source.with_file_name(format!(
            "{}{}.{}",
            stem,
            crate::OUTPUT_TAG,
            ext.to_string_lossy()
        )),
        None => source.with_file_name(format!("{}{}", stem, crate::OUTPUT_TAG)),
    }
}
