use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use reelseed_core::{Customer, Payment, Transaction, TransactionRequest, Video};

pub const DEFAULT_CUSTOMERS: usize = 50;
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory the CSV files are written to.
    pub out_dir: PathBuf,
    /// Seed for every random draw of the run.
    pub seed: u64,
    /// Date treated as "today" for join and rental dates.
    pub today: NaiveDate,
    /// Number of customers to synthesize.
    pub customers: usize,
    /// Number of rentals; videos and customers are sampled this many times.
    pub sample_size: usize,
    /// Write a header row at the top of each file.
    pub include_headers: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            seed: 0,
            today: chrono::Local::now().date_naive(),
            customers: DEFAULT_CUSTOMERS,
            sample_size: DEFAULT_SAMPLE_SIZE,
            include_headers: false,
        }
    }
}

/// All records produced by one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    pub videos: Vec<Video>,
    pub customers: Vec<Customer>,
    pub payments: Vec<Payment>,
    pub transactions: Vec<Transaction>,
    pub transaction_requests: Vec<TransactionRequest>,
}

/// Per-genre counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreReport {
    pub catalog_id: u32,
    pub label: String,
    /// Movies the catalog listed for the genre.
    pub fetched: u64,
    /// Videos carrying the genre label after dedup.
    pub videos: u64,
}

/// Summary of a written output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub name: String,
    pub path: PathBuf,
    pub rows: u64,
    pub bytes: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub catalog: String,
    pub seed: u64,
    pub today: NaiveDate,
    pub genres: Vec<GenreReport>,
    pub videos: u64,
    pub duplicates_dropped: u64,
    pub customers: u64,
    pub payments: u64,
    pub transactions: u64,
    pub transaction_requests: u64,
    pub files: Vec<FileReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, catalog: &str, options: &GenerateOptions) -> Self {
        Self {
            run_id,
            catalog: catalog.to_string(),
            seed: options.seed,
            today: options.today,
            genres: Vec::new(),
            videos: 0,
            duplicates_dropped: 0,
            customers: 0,
            payments: 0,
            transactions: 0,
            transaction_requests: 0,
            files: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_file(&mut self, file: FileReport) {
        self.bytes_written += file.bytes;
        self.files.push(file);
    }

    pub fn file(&self, name: &str) -> Option<&FileReport> {
        self.files.iter().find(|file| file.name == name)
    }
}
