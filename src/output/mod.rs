pub mod plot;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::debug;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::types::{Corpus, Interval};

pub use self::plot::write_plot_data;

const CES_HEADER: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<cesAna>\n<chunkList>\n<chunk>\n<par>\n";
const CES_FOOTER: &str = "\n</par>\n</chunk>\n</chunkList>\n</cesAna>";
const ARC_HEADER: &str = "\n<text>\n<div id='d1'>\n<p id='d1p1'>\n";
const ARC_FOOTER: &str = "</p>\n</div>\n</text>\n";

// JSON record for one interval
#[derive(Debug, Serialize)]
struct IntervalRecord<'a> {
    source_start: usize,
    source_end: usize,
    target_start: usize,
    target_end: usize,
    source: Vec<&'a str>,
    target: Vec<&'a str>,
}

/// Writes the sentences covered by the intervals of a document pair.
#[derive(Debug, Clone)]
pub struct AlignmentWriter {
    output_dir: PathBuf,
    format: OutputFormat,
    source_lang: String,
    target_lang: String,
}

impl AlignmentWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P, format: OutputFormat, source_lang: &str, target_lang: &str) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            format,
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        }
    }

    fn side_path(&self, name: &str, lang: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}.{}", name, lang, self.format.as_str()))
    }

    /// Write the output files for one pair and return their paths. Nothing is
    /// written when there is no interval.
    pub fn write(&self, name: &str, source: &Corpus, target: &Corpus, intervals: &[Interval]) -> Result<Vec<PathBuf>> {
        if intervals.is_empty() {
            return Ok(Vec::new());
        }
        fs::create_dir_all(&self.output_dir)?;

        if self.format == OutputFormat::Jsonl {
            let path = self.output_dir.join(format!(
                "{}.{}-{}.jsonl", name, self.source_lang, self.target_lang
            ));
            write_jsonl(&path, source, target, intervals)?;
            debug!("Wrote {:?}", path);
            return Ok(vec![path]);
        }

        let source_path = self.side_path(name, &self.source_lang);
        let target_path = self.side_path(name, &self.target_lang);
        self.write_side(&source_path, source, intervals.iter().map(|iv| iv.source_range()))?;
        self.write_side(&target_path, target, intervals.iter().map(|iv| iv.target_range()))?;
        debug!("Wrote {:?} and {:?}", source_path, target_path);
        Ok(vec![source_path, target_path])
    }

    fn write_side<I>(&self, path: &Path, corpus: &Corpus, ranges: I) -> Result<()>
    where
        I: IntoIterator<Item = std::ops::RangeInclusive<usize>>,
    {
        let mut out = BufWriter::new(File::create(path)?);

        match self.format {
            OutputFormat::Ces => out.write_all(CES_HEADER.as_bytes())?,
            OutputFormat::Arc => out.write_all(ARC_HEADER.as_bytes())?,
            _ => {},
        }

        for range in ranges {
            for index in range {
                let Some(sentence) = corpus.get(index) else {
                    continue;
                };
                match self.format {
                    OutputFormat::Ces | OutputFormat::Arc => write!(
                        out,
                        "<s id=\"{}\">\n{}\n</s>\n",
                        sentence.output_id(index),
                        sentence.text
                    )?,
                    _ => writeln!(out, "{}", sentence.text)?,
                }
            }
        }

        match self.format {
            OutputFormat::Ces => out.write_all(CES_FOOTER.as_bytes())?,
            OutputFormat::Arc => out.write_all(ARC_FOOTER.as_bytes())?,
            _ => {},
        }
        out.flush()?;
        Ok(())
    }
}

fn texts(corpus: &Corpus, range: std::ops::RangeInclusive<usize>) -> Vec<&str> {
    range.filter_map(|index| corpus.get(index)).map(|s| s.text.as_str()).collect()
}

fn write_jsonl(path: &Path, source: &Corpus, target: &Corpus, intervals: &[Interval]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for interval in intervals {
        let record = IntervalRecord {
            source_start: interval.begin.i,
            source_end: interval.end.i,
            target_start: interval.begin.j,
            target_end: interval.end.j,
            source: texts(source, interval.source_range()),
            target: texts(target, interval.target_range()),
        };
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
