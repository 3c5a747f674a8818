use std::path::PathBuf;
use std::time::Instant;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, debug, warn, error, LevelFilter};
use alignable::{
    AlignableConfig,
    Aligner,
    Error,
    Result,
    config::{InputFormat, OutputFormat},
    output::{AlignmentWriter, write_plot_data},
    parser::read_corpus,
    utils::{find_document_pairs, init_logging, DocumentPair},
};

/// Extract the alignable parts of parallel documents.
///
/// Every `<name>.<l1>.<ext>` file of the input directory is paired with
/// `<name>.<l2>.<ext>`; the sentences of the spans that follow a dense
/// diagonal of n-gram matches are written to the output directory.
#[derive(Parser, Debug)]
#[command(author, about, disable_version_flag = true)]
struct Args {
    /// INI configuration file; command-line values override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input directory
    #[arg(long = "inputDir", value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Output directory
    #[arg(long = "outputDir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Source language code
    #[arg(long = "l1")]
    source_lang: Option<String>,

    /// Target language code
    #[arg(long = "l2")]
    target_lang: Option<String>,

    /// File name pattern; group 1 captures the document name
    #[arg(short = 'f', long = "filePattern")]
    file_pattern: Option<String>,

    /// Input format (txt, arc, ces)
    #[arg(short = 'i', long = "inputFormat")]
    input_format: Option<String>,

    /// Output format (txt, ces, arc, jsonl)
    #[arg(short = 'o', long = "outputFormat")]
    output_format: Option<String>,

    /// Character n-gram size
    #[arg(short = 'n', long = "ngram")]
    ngram_size: Option<usize>,

    /// Minimum Dice score of a candidate pair
    #[arg(short = 'd', long = "diceThreshold")]
    dice_threshold: Option<f64>,

    /// Number of best candidates kept per sentence
    #[arg(short = 'k', long = "kBest")]
    k_best: Option<usize>,

    /// Half-width of the density window along the source axis
    #[arg(short = 'x', long = "deltaX")]
    delta_x: Option<usize>,

    /// Half-height of the density window around the diagonal
    #[arg(short = 'y', long = "deltaY")]
    delta_y: Option<usize>,

    /// Minimum ratio of points per source sentence in an interval
    #[arg(short = 'H', long = "minHorizontalDensity")]
    min_horizontal_density: Option<f64>,

    /// Maximum distance between a point and the interval's diagonal
    #[arg(short = 'm', long = "maxDistToTheDiagonal")]
    max_dist_to_the_diagonal: Option<usize>,

    /// Minimum ratio between local and average density
    #[arg(short = 'D', long = "minDensityRatio")]
    min_density_ratio: Option<f64>,

    /// Maximum distance between two consecutive points of an interval
    #[arg(short = 'g', long = "maxGapSize")]
    max_gap_size: Option<f64>,

    /// Width of the band scanned around the diagonal (0 = full scan)
    #[arg(long = "diagWidth")]
    diag_width: Option<usize>,

    /// Worker threads for the parallel stages (0 = all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Write scatter-plot data next to the output files
    #[arg(short = 'p', long, alias = "printPlot")]
    plot: bool,

    /// Debug output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Trace output
    #[arg(short = 'V', long = "veryVerbose")]
    very_verbose: bool,
}

impl Args {
    /// Overlay the command-line values on `config`.
    fn apply(&self, config: &mut AlignableConfig) -> Result<()> {
        let files = &mut config.files;
        if let Some(dir) = &self.input_dir { files.input_dir = dir.clone(); }
        if let Some(dir) = &self.output_dir { files.output_dir = dir.clone(); }
        if let Some(lang) = &self.source_lang { files.source_lang = lang.clone(); }
        if let Some(lang) = &self.target_lang { files.target_lang = lang.clone(); }
        if let Some(pattern) = &self.file_pattern { files.file_pattern = pattern.clone(); }
        if let Some(format) = &self.input_format {
            files.input_format = InputFormat::from_str(format)
                .ok_or_else(|| Error::config(format!("Unknown input format: {}", format)))?;
        }
        if let Some(format) = &self.output_format {
            files.output_format = OutputFormat::from_str(format)
                .ok_or_else(|| Error::config(format!("Unknown output format: {}", format)))?;
        }
        if self.plot { files.plot = true; }

        let aligner = &mut config.aligner;
        if let Some(v) = self.ngram_size { aligner.ngram_size = v; }
        if let Some(v) = self.dice_threshold { aligner.dice_threshold = v; }
        if let Some(v) = self.k_best { aligner.k_best = v; }
        if let Some(v) = self.delta_x { aligner.delta_x = v; }
        if let Some(v) = self.delta_y { aligner.delta_y = v; }
        if let Some(v) = self.min_horizontal_density { aligner.min_horizontal_density = v; }
        if let Some(v) = self.max_dist_to_the_diagonal { aligner.max_dist_to_the_diagonal = v; }
        if let Some(v) = self.min_density_ratio { aligner.min_density_ratio = v; }
        if let Some(v) = self.max_gap_size { aligner.max_gap_size = v; }
        if let Some(v) = self.diag_width { aligner.diag_width = v; }

        if let Some(threads) = self.threads { config.processor.thread_count = threads; }
        Ok(())
    }

    fn log_level(&self, config: &AlignableConfig) -> LevelFilter {
        if self.very_verbose {
            LevelFilter::Trace
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            config.processor.get_log_level()
        }
    }
}

fn load_config(args: &Args) -> Result<AlignableConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            AlignableConfig::from_ini_str(&content)?
        },
        None => AlignableConfig::default(),
    };
    args.apply(&mut config)?;
    config.validate()?;
    Ok(config)
}

struct PairOutcome {
    intervals: usize,
    files: Vec<PathBuf>,
}

fn process_pair(
    pair: &DocumentPair,
    config: &AlignableConfig,
    aligner: &Aligner,
    writer: &AlignmentWriter,
) -> Result<Option<PairOutcome>> {
    let start_time = Instant::now();
    let files = &config.files;

    let source = read_corpus(&pair.source_path, files.input_format, aligner.indexer())?;
    let target = read_corpus(&pair.target_path, files.input_format, aligner.indexer())?;
    if source.is_empty() || target.is_empty() {
        warn!("{}: empty {} side, skipping",
            pair.name,
            if source.is_empty() { files.source_lang.as_str() } else { files.target_lang.as_str() });
        return Ok(None);
    }

    let alignment = aligner.align(&source, &target)?;
    let mut written = writer.write(&pair.name, &source, &target, &alignment.intervals)?;

    if files.plot {
        let stem = format!("{}.{}-{}", pair.name, files.source_lang, files.target_lang);
        let (points_path, intervals_path) = write_plot_data(
            &files.output_dir,
            &stem,
            &alignment.selected,
            &alignment.points,
            &alignment.intervals,
        )?;
        written.push(points_path);
        written.push(intervals_path);
    }

    info!("{}: {} intervals, {} source sentences kept out of {} in {:.2?}",
        pair.name,
        alignment.stats.intervals,
        alignment.intervals.iter().map(|iv| iv.source_range().count()).sum::<usize>(),
        source.len(),
        start_time.elapsed());

    Ok(Some(PairOutcome { intervals: alignment.intervals.len(), files: written }))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_logging(args.log_level(&config), config.processor.log_file.as_deref())?;
    info!("Starting alignable with configuration:\n{}", config.aligner.describe());
    debug!("Files: {:?}", config.files);

    let total_start = Instant::now();
    let aligner = Aligner::new(config.aligner.clone(), &config.processor)?;
    let writer = AlignmentWriter::new(
        &config.files.output_dir,
        config.files.output_format,
        &config.files.source_lang,
        &config.files.target_lang,
    );

    let pairs = find_document_pairs(&config.files)?;
    if pairs.is_empty() {
        warn!("No document pair found in {:?}", config.files.input_dir);
        return Ok(());
    }

    let progress = ProgressBar::new(pairs.len() as u64);
    progress.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .unwrap()
        .progress_chars("#>-"));

    let mut aligned = 0;
    let mut skipped = 0;
    let mut failed = 0;
    let mut total_intervals = 0;

    for pair in &pairs {
        progress.set_message(pair.name.clone());
        match process_pair(pair, &config, &aligner, &writer) {
            Ok(Some(outcome)) => {
                aligned += 1;
                total_intervals += outcome.intervals;
                debug!("{}: wrote {:?}", pair.name, outcome.files);
            },
            Ok(None) => skipped += 1,
            Err(e) => {
                failed += 1;
                error!("Failed to align {}: {}", pair.name, e);
            },
        }
        progress.inc(1);
    }
    progress.finish_with_message("done");

    info!("Processed {} pairs ({} aligned, {} skipped, {} failed), {} intervals in {:.2?}",
        pairs.len(), aligned, skipped, failed, total_intervals, total_start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_options_and_aliases() {
        let args = Args::try_parse_from(["alignable", "--ngram", "3", "--printPlot", "--diceThreshold", "0.1"]).unwrap();
        assert_eq!(args.ngram_size, Some(3));
        assert!(args.plot);

        let args = Args::try_parse_from(["alignable", "-n", "5", "-p"]).unwrap();
        assert_eq!(args.ngram_size, Some(5));
        assert!(args.plot);

        assert!(Args::try_parse_from(["alignable", "--ngram_size", "3"]).is_err());
    }

    #[test]
    fn command_line_overrides_defaults() {
        let args = Args::try_parse_from(["alignable", "-n", "3", "-g", "25", "--l2", "de", "-o", "jsonl"]).unwrap();
        let mut config = AlignableConfig::default();
        args.apply(&mut config).unwrap();
        assert_eq!(config.aligner.ngram_size, 3);
        assert_eq!(config.aligner.max_gap_size, 25.0);
        assert_eq!(config.files.target_lang, "de");
        assert_eq!(config.files.output_format, OutputFormat::Jsonl);
        assert_eq!(config.aligner.k_best, 4);
    }
}
