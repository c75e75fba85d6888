use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use sha2::{Digest, Sha256};

use reelseed_catalog::{
    CatalogError, CatalogMovie, CatalogResult, CatalogSource, StaticCatalog,
};
use reelseed_core::{GENRES, Genre, RENTAL_PERIOD_DAYS};
use reelseed_generate::output::OUTPUT_FILES;
use reelseed_generate::{GenerateOptions, GenerationEngine, GenerationError};

/// Catalog that answers the first genre and fails on the next.
struct FailingCatalog;

#[async_trait]
impl CatalogSource for FailingCatalog {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn movies_for_genre(&self, genre: &Genre) -> CatalogResult<Vec<CatalogMovie>> {
        if genre.catalog_id == 28 {
            return Ok(Vec::new());
        }
        Err(CatalogError::Status {
            genre: genre.catalog_id,
            status: 503,
        })
    }
}

fn fixture_catalog() -> StaticCatalog {
    let path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/catalog.sample.json");
    StaticCatalog::from_path(&path).expect("load catalog fixture")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

fn options_for(out_dir: &Path, seed: u64) -> GenerateOptions {
    GenerateOptions {
        out_dir: out_dir.to_path_buf(),
        seed,
        today: today(),
        ..GenerateOptions::default()
    }
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("reelseed_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn hash_file(path: &Path) -> String {
    let mut file = File::open(path).expect("open output file");
    let mut content = Vec::new();
    file.read_to_end(&mut content).expect("read output file");
    hex::encode(Sha256::digest(&content))
}

fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("open csv");
    reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .expect("parse csv")
}

#[tokio::test]
async fn generated_collections_reference_each_other() {
    let out_dir = temp_out_dir("refs");
    let engine = GenerationEngine::new(options_for(&out_dir, 42));
    let result = engine.run(&fixture_catalog()).await.expect("run generation");
    let data = &result.data;

    let labels: HashSet<&str> = GENRES.iter().map(|genre| genre.label).collect();
    let video_ids: Vec<u32> = data.videos.iter().map(|video| video.id).collect();
    assert_eq!(video_ids, (1..=18).collect::<Vec<u32>>());
    let catalog_ids: HashSet<u64> = data.videos.iter().map(|video| video.catalog_id).collect();
    assert_eq!(catalog_ids.len(), data.videos.len());
    assert!(data.videos.iter().all(|video| labels.contains(video.genre.as_str())));

    let customer_ids: Vec<u32> = data.customers.iter().map(|customer| customer.id).collect();
    assert_eq!(customer_ids, (1..=50).collect::<Vec<u32>>());

    assert_eq!(data.payments.len(), 10);
    assert_eq!(data.transactions.len(), 10);
    assert_eq!(data.transaction_requests.len(), 10);

    let mut sampled_videos = HashSet::new();
    let mut sampled_customers = HashSet::new();
    for (idx, ((payment, transaction), request)) in data
        .payments
        .iter()
        .zip(&data.transactions)
        .zip(&data.transaction_requests)
        .enumerate()
    {
        let id = idx as u32 + 1;
        assert_eq!(payment.id, id);
        assert_eq!(transaction.id, id);
        assert_eq!(request.id, id);
        assert_eq!(transaction.payment_id, payment.id);
        assert_eq!(request.transaction_id, transaction.id);
        assert_eq!(
            transaction.date_due,
            transaction.date_rented + Duration::days(RENTAL_PERIOD_DAYS)
        );
        assert_eq!(payment.date_paid, transaction.date_rented);
        assert!(transaction.date_rented <= today());

        let customer = data
            .customers
            .iter()
            .find(|customer| customer.id == transaction.customer_id)
            .expect("transaction references a customer");
        assert!(transaction.date_rented >= customer.date_joined);

        let video = data
            .videos
            .iter()
            .find(|video| video.id == request.video_id)
            .expect("request references a video");
        assert_eq!(payment.amount, video.price);

        sampled_videos.insert(request.video_id);
        sampled_customers.insert(transaction.customer_id);
    }
    assert_eq!(sampled_videos.len(), 10, "videos are sampled without replacement");
    assert_eq!(sampled_customers.len(), 10, "customers are sampled without replacement");
}

#[tokio::test]
async fn report_counts_videos_per_genre() {
    let out_dir = temp_out_dir("report");
    let engine = GenerationEngine::new(options_for(&out_dir, 9));
    let result = engine.run(&fixture_catalog()).await.expect("run generation");
    let report = &result.report;

    assert_eq!(report.catalog, "static");
    assert_eq!(report.videos, 18);
    assert_eq!(report.duplicates_dropped, 3);
    assert_eq!(report.genres.len(), 12);

    let per_genre: Vec<(&str, u64, u64)> = report
        .genres
        .iter()
        .map(|genre| (genre.label.as_str(), genre.fetched, genre.videos))
        .collect();
    assert_eq!(per_genre[0], ("Action", 3, 3));
    assert_eq!(per_genre[1], ("Adventure", 2, 1));
    assert_eq!(per_genre[3], ("Crime", 3, 2));
    assert_eq!(per_genre[9], ("Sci-Fi", 2, 1));
    assert_eq!(
        report.genres.iter().map(|genre| genre.videos).sum::<u64>(),
        report.videos
    );

    assert_eq!(report.files.len(), 5);
    let video_file = report.file("video.csv").expect("video file report");
    assert_eq!(video_file.rows, 18);
    assert_eq!(
        video_file.bytes,
        fs::metadata(out_dir.join("video.csv")).expect("stat").len()
    );
}

#[tokio::test]
async fn generate_is_deterministic() {
    let out_dir_a = temp_out_dir("run_a");
    let out_dir_b = temp_out_dir("run_b");
    let catalog = fixture_catalog();

    GenerationEngine::new(options_for(&out_dir_a, 1234))
        .run(&catalog)
        .await
        .expect("run generation A");
    GenerationEngine::new(options_for(&out_dir_b, 1234))
        .run(&catalog)
        .await
        .expect("run generation B");

    for name in OUTPUT_FILES {
        assert_eq!(
            hash_file(&out_dir_a.join(name)),
            hash_file(&out_dir_b.join(name)),
            "{name} should be byte-identical"
        );
    }
}

#[tokio::test]
async fn different_seeds_change_customers() {
    let out_dir_a = temp_out_dir("seed_a");
    let out_dir_b = temp_out_dir("seed_b");
    let catalog = fixture_catalog();

    GenerationEngine::new(options_for(&out_dir_a, 1))
        .run(&catalog)
        .await
        .expect("run generation A");
    GenerationEngine::new(options_for(&out_dir_b, 2))
        .run(&catalog)
        .await
        .expect("run generation B");

    assert_ne!(
        hash_file(&out_dir_a.join("customer.csv")),
        hash_file(&out_dir_b.join("customer.csv"))
    );
}

#[tokio::test]
async fn rerun_overwrites_previous_files() {
    let out_dir = temp_out_dir("overwrite");
    let stale = "stale,row\n".repeat(500);
    fs::write(out_dir.join("payment.csv"), &stale).expect("write stale file");

    let catalog = fixture_catalog();
    let engine = GenerationEngine::new(options_for(&out_dir, 77));
    engine.run(&catalog).await.expect("first run");
    let first = hash_file(&out_dir.join("video.csv"));
    engine.run(&catalog).await.expect("second run");

    assert_eq!(first, hash_file(&out_dir.join("video.csv")));
    assert_eq!(read_rows(&out_dir.join("video.csv")).len(), 18);
    assert_eq!(read_rows(&out_dir.join("customer.csv")).len(), 50);
    assert_eq!(read_rows(&out_dir.join("payment.csv")).len(), 10);
    assert_eq!(read_rows(&out_dir.join("transaction.csv")).len(), 10);
    assert_eq!(read_rows(&out_dir.join("transaction_request.csv")).len(), 10);
}

#[tokio::test]
async fn files_follow_fixed_column_order() {
    let out_dir = temp_out_dir("columns");
    let engine = GenerationEngine::new(options_for(&out_dir, 5));
    let result = engine.run(&fixture_catalog()).await.expect("run generation");
    let data = &result.data;

    let videos = read_rows(&out_dir.join("video.csv"));
    assert!(videos.iter().all(|row| row.len() == 8));
    let first = &videos[0];
    assert_eq!(&first[0], "1");
    assert_eq!(&first[1], "The Dark Knight");
    assert_eq!(&first[3], "2008");
    assert_eq!(&first[4], data.videos[0].price.to_string());
    assert_eq!(&first[6], "Action");
    assert_eq!(&first[7], data.videos[0].classification.as_str());

    let undated = videos
        .iter()
        .find(|row| &row[1] == "Untitled Coastline Documentary")
        .expect("undated documentary");
    assert_eq!(&undated[3], "");
    assert_eq!(&undated[6], "Epics");

    let quoted = videos
        .iter()
        .find(|row| &row[1] == "Fight Club")
        .expect("fight club row");
    assert_eq!(&quoted[2], "An insomniac and a soap salesman, with \"rules\".");

    let customers = read_rows(&out_dir.join("customer.csv"));
    assert!(customers.iter().all(|row| row.len() == 10));
    let customer = &data.customers[0];
    assert_eq!(&customers[0][1], customer.first_name);
    assert_eq!(&customers[0][5], "Queensland");
    assert_eq!(&customers[0][6], "4610");
    assert_eq!(&customers[0][7], customer.contact_number);
    assert_eq!(&customers[0][9], customer.date_joined.format("%Y-%m-%d").to_string());

    let payments = read_rows(&out_dir.join("payment.csv"));
    assert!(payments.iter().all(|row| row.len() == 4));

    let transactions = read_rows(&out_dir.join("transaction.csv"));
    assert!(transactions.iter().all(|row| row.len() == 7));
    let transaction = &data.transactions[0];
    assert_eq!(&transactions[0][1], transaction.customer_id.to_string());
    assert_eq!(&transactions[0][4], transaction.date_due.format("%Y-%m-%d").to_string());
    assert!(["pick-up", "delivery"].contains(&&transactions[0][5]));

    let requests = read_rows(&out_dir.join("transaction_request.csv"));
    assert!(requests.iter().all(|row| row.len() == 5));
    assert!(["DVD", "Blu-ray"].contains(&&requests[0][3]));
}

#[tokio::test]
async fn headers_are_opt_in() {
    let out_dir = temp_out_dir("headers");
    let mut options = options_for(&out_dir, 5);
    options.include_headers = true;
    GenerationEngine::new(options)
        .run(&fixture_catalog())
        .await
        .expect("run generation");

    let video = fs::read_to_string(out_dir.join("video.csv")).expect("read video.csv");
    assert_eq!(
        video.lines().next(),
        Some("id,title,description,year,price,quantity,genre,classification")
    );
    let transaction =
        fs::read_to_string(out_dir.join("transaction.csv")).expect("read transaction.csv");
    assert_eq!(
        transaction.lines().next(),
        Some("id,customer_id,payment_id,date_rented,date_due,fulfillment,note")
    );
}

#[tokio::test]
async fn too_few_videos_fails_before_writing() {
    let out_dir = temp_out_dir("few_videos");
    let catalog = StaticCatalog::new().with_genre(
        28,
        (1..=3)
            .map(|id| CatalogMovie {
                id,
                title: format!("Movie {id}"),
                overview: String::new(),
                release_date: Some("2020-01-01".to_string()),
            })
            .collect(),
    );

    let result = GenerationEngine::new(options_for(&out_dir, 5)).run(&catalog).await;
    assert!(matches!(
        result,
        Err(GenerationError::InsufficientData {
            kind: "videos",
            requested: 10,
            available: 3
        })
    ));
    assert!(!out_dir.join("video.csv").exists());
}

#[tokio::test]
async fn catalog_failure_aborts_run() {
    let out_dir = temp_out_dir("catalog_failure");
    let result = GenerationEngine::new(options_for(&out_dir, 5))
        .run(&FailingCatalog)
        .await;
    assert!(matches!(result, Err(GenerationError::Catalog(_))));
    assert!(!out_dir.join("video.csv").exists());
}

#[tokio::test]
async fn sample_size_above_customer_count_is_rejected() {
    let out_dir = temp_out_dir("options");
    let mut options = options_for(&out_dir, 5);
    options.customers = 5;
    let result = GenerationEngine::new(options).run(&fixture_catalog()).await;
    assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));
}
