use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{info, warn};

use reelseed_catalog::CatalogSource;
use reelseed_core::GENRES;

use crate::errors::GenerationError;
use crate::generators::{FetchedVideos, assemble_rentals, fetch_videos, generate_customers};
use crate::model::{FileReport, GenerateOptions, GenerationReport, GenreReport, SeedData};
use crate::output::{
    CUSTOMER_FILE, PAYMENT_FILE, TRANSACTION_FILE, TRANSACTION_REQUEST_FILE, VIDEO_FILE,
    write_records,
};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub data: SeedData,
    pub report: GenerationReport,
}

/// Entry point for generating the seed files.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Fetch, generate and write all five files.
    pub async fn run(
        &self,
        source: &dyn CatalogSource,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = GenerationReport::new(run_id.clone(), source.name(), &self.options);

        info!(
            run_id = %run_id,
            catalog = source.name(),
            seed = self.options.seed,
            today = %self.options.today,
            out_dir = %self.options.out_dir.display(),
            "generation started"
        );

        let data = match self.generate(source, &mut report).await {
            Ok(data) => data,
            Err(err) => {
                warn!(run_id = %run_id, error = %err, "generation failed");
                return Err(err);
            }
        };

        if let Err(err) = self.write(&data, &mut report) {
            warn!(run_id = %run_id, error = %err, "writing output failed");
            return Err(err);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            videos = report.videos,
            customers = report.customers,
            rentals = report.transactions,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { data, report })
    }

    /// Build every record without touching the filesystem.
    pub async fn generate(
        &self,
        source: &dyn CatalogSource,
        report: &mut GenerationReport,
    ) -> Result<SeedData, GenerationError> {
        let options = &self.options;
        if options.sample_size > options.customers {
            return Err(GenerationError::InvalidOptions(format!(
                "sample size {} exceeds customer count {}",
                options.sample_size, options.customers
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(options.seed);

        let fetched = fetch_videos(source, &GENRES, &mut rng).await?;
        report.genres = genre_reports(&fetched);
        report.videos = fetched.videos.len() as u64;
        report.duplicates_dropped = fetched.duplicates_dropped;
        info!(
            videos = report.videos,
            duplicates_dropped = report.duplicates_dropped,
            "videos assembled"
        );

        let customers = generate_customers(options.customers, options.today, &mut rng);
        report.customers = customers.len() as u64;
        info!(customers = report.customers, "customers generated");

        let rentals = assemble_rentals(
            &fetched.videos,
            &customers,
            options.sample_size,
            options.today,
            &mut rng,
        )?;
        report.payments = rentals.payments.len() as u64;
        report.transactions = rentals.transactions.len() as u64;
        report.transaction_requests = rentals.transaction_requests.len() as u64;
        info!(rentals = report.transactions, "rentals assembled");

        Ok(SeedData {
            videos: fetched.videos,
            customers,
            payments: rentals.payments,
            transactions: rentals.transactions,
            transaction_requests: rentals.transaction_requests,
        })
    }

    /// Write the five CSV files into `out_dir`, replacing earlier runs.
    pub fn write(
        &self,
        data: &SeedData,
        report: &mut GenerationReport,
    ) -> Result<(), GenerationError> {
        let out_dir = &self.options.out_dir;
        std::fs::create_dir_all(out_dir)?;

        let headers = self.options.include_headers;
        report.record_file(write_file(out_dir, VIDEO_FILE, &data.videos, headers)?);
        report.record_file(write_file(out_dir, CUSTOMER_FILE, &data.customers, headers)?);
        report.record_file(write_file(out_dir, PAYMENT_FILE, &data.payments, headers)?);
        report.record_file(write_file(
            out_dir,
            TRANSACTION_FILE,
            &data.transactions,
            headers,
        )?);
        report.record_file(write_file(
            out_dir,
            TRANSACTION_REQUEST_FILE,
            &data.transaction_requests,
            headers,
        )?);
        Ok(())
    }
}

fn write_file<T: Serialize>(
    out_dir: &Path,
    name: &str,
    records: &[T],
    include_headers: bool,
) -> Result<FileReport, GenerationError> {
    let path = out_dir.join(name);
    let bytes = write_records(&path, records, include_headers)?;
    info!(file = name, rows = records.len(), bytes, "file written");
    Ok(FileReport {
        name: name.to_string(),
        path,
        rows: records.len() as u64,
        bytes,
    })
}

fn genre_reports(fetched: &FetchedVideos) -> Vec<GenreReport> {
    fetched
        .fetched
        .iter()
        .map(|(genre, count)| GenreReport {
            catalog_id: genre.catalog_id,
            label: genre.label.to_string(),
            fetched: *count,
            videos: fetched
                .videos
                .iter()
                .filter(|video| video.genre == genre.label)
                .count() as u64,
        })
        .collect()
}
