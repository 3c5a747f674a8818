// src/config/subsystems/aligner.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;

/// Run parameters of the alignment engine. Built once, validated, then only
/// read by the pipeline stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignerConfig {
    // Candidate scoring
    pub ngram_size: usize,
    pub dice_threshold: f64,
    pub min_sent_length: usize,
    pub min_sent_length_ratio: f64,
    // Width of the search band around the diagonal, 0 scans the whole target side
    pub diag_width: usize,

    // Point selection
    pub k_best: usize,

    // Local space: +/- delta_x horizontally, +/- delta_y around the local diagonal
    pub delta_x: usize,
    pub delta_y: usize,
    pub min_density_ratio: f64,

    // Interval extraction
    pub min_horizontal_density: f64,
    pub max_dist_to_the_diagonal: usize,
    pub max_gap_size: f64,
    /// Off-diagonal points whose density falls below this fraction of the
    /// previous point's density are skipped as noise.
    pub density_drop_ratio: f64,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            ngram_size: 4,
            dice_threshold: 0.05,
            min_sent_length: 1,
            min_sent_length_ratio: 0.2,
            diag_width: 0,
            k_best: 4,
            delta_x: 12,
            delta_y: 2,
            min_density_ratio: 0.5,
            min_horizontal_density: 0.2,
            max_dist_to_the_diagonal: 4,
            max_gap_size: 10.0,
            density_drop_ratio: 0.5,
        }
    }
}

fn parse_count(key: &str, value: &str, min: usize) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(v) if v >= min => Ok(v),
        _ => Err(Error::Config(
            format!("Invalid {} (must be an integer >= {}): {}", key, min, value)
        )),
    }
}

fn parse_ratio(key: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
        _ => Err(Error::Config(
            format!("Invalid {} (must be between 0 and 1): {}", key, value)
        )),
    }
}

fn parse_non_negative(key: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(Error::Config(
            format!("Invalid {} (must be a non-negative number): {}", key, value)
        )),
    }
}

impl FromIni for AlignerConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "aligner" {
            return None;
        }

        let result = match key {
            "ngram_size" => parse_count(key, value, 1).map(|v| self.ngram_size = v),
            "dice_threshold" => parse_ratio(key, value).map(|v| self.dice_threshold = v),
            "min_sent_length" => parse_count(key, value, 0).map(|v| self.min_sent_length = v),
            "min_sent_length_ratio" => parse_ratio(key, value).map(|v| self.min_sent_length_ratio = v),
            "diag_width" => parse_count(key, value, 0).map(|v| self.diag_width = v),
            "k_best" => parse_count(key, value, 1).map(|v| self.k_best = v),
            "delta_x" => parse_count(key, value, 0).map(|v| self.delta_x = v),
            "delta_y" => parse_count(key, value, 0).map(|v| self.delta_y = v),
            "min_density_ratio" => parse_non_negative(key, value).map(|v| self.min_density_ratio = v),
            "min_horizontal_density" => parse_non_negative(key, value).map(|v| self.min_horizontal_density = v),
            "max_dist_to_the_diagonal" => parse_count(key, value, 0).map(|v| self.max_dist_to_the_diagonal = v),
            "max_gap_size" => parse_non_negative(key, value).map(|v| self.max_gap_size = v),
            "density_drop_ratio" => parse_ratio(key, value).map(|v| self.density_drop_ratio = v),
            // Unknown key
            _ => return None,
        };
        Some(result)
    }
}

impl AlignerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ngram_size == 0 {
            return Err(Error::InvalidNgramSize(
                "ngram_size must be greater than 0".to_string()
            ));
        }
        if self.k_best == 0 {
            return Err(Error::config("k_best must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&self.dice_threshold) {
            return Err(Error::config("dice_threshold must be between 0 and 1"));
        }
        if !(0.0..=1.0).contains(&self.min_sent_length_ratio) {
            return Err(Error::config("min_sent_length_ratio must be between 0 and 1"));
        }
        if !(0.0..=1.0).contains(&self.density_drop_ratio) {
            return Err(Error::config("density_drop_ratio must be between 0 and 1"));
        }
        if !self.min_density_ratio.is_finite() || self.min_density_ratio < 0.0 {
            return Err(Error::config("min_density_ratio must be a non-negative number"));
        }
        if !self.min_horizontal_density.is_finite() || self.min_horizontal_density < 0.0 {
            return Err(Error::config("min_horizontal_density must be a non-negative number"));
        }
        if !self.max_gap_size.is_finite() || self.max_gap_size < 0.0 {
            return Err(Error::config("max_gap_size must be a non-negative number"));
        }
        Ok(())
    }

    /// Returns a human-readable description of the configuration
    pub fn describe(&self) -> String {
        format!(
            "Aligner configuration:\n\
             - NGram size: {} characters, dice > {}\n\
             - Search space: {}\n\
             - k-best: {}\n\
             - Local space: +/-{} x +/-{}, min density ratio {}\n\
             - Intervals: max gap {}, max distance to diagonal {}, min horizontal density {}",
            self.ngram_size,
            self.dice_threshold,
            if self.diag_width > 0 {
                format!("band of width {} around the diagonal", self.diag_width)
            } else {
                "full matrix".to_string()
            },
            self.k_best,
            self.delta_x,
            self.delta_y,
            self.min_density_ratio,
            self.max_gap_size,
            self.max_dist_to_the_diagonal,
            self.min_horizontal_density,
        )
    }
}
