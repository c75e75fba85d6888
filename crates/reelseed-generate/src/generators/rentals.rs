use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::company::en::CatchPhrase;
use rand::seq::index;
use rand::{Rng, RngCore};
use tracing::debug;

use reelseed_core::{
    Customer, FulfillmentMode, MediaType, Payment, PaymentMethod, RENTAL_PERIOD_DAYS,
    Transaction, TransactionRequest, Video,
};

use super::pick;
use crate::errors::GenerationError;

/// Matching payments, transactions and transaction requests.
///
/// Entry `i` of each list belongs to the same rental.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalSet {
    pub payments: Vec<Payment>,
    pub transactions: Vec<Transaction>,
    pub transaction_requests: Vec<TransactionRequest>,
}

/// Sample `sample_size` distinct videos and customers and pair them into
/// rentals.
pub fn assemble_rentals(
    videos: &[Video],
    customers: &[Customer],
    sample_size: usize,
    today: NaiveDate,
    rng: &mut dyn RngCore,
) -> Result<RentalSet, GenerationError> {
    ensure_available("videos", videos.len(), sample_size)?;
    ensure_available("customers", customers.len(), sample_size)?;

    let video_samples = index::sample(rng, videos.len(), sample_size).into_vec();
    let customer_samples = index::sample(rng, customers.len(), sample_size).into_vec();

    let mut rentals = RentalSet::default();
    for (idx, (video_idx, customer_idx)) in
        video_samples.into_iter().zip(customer_samples).enumerate()
    {
        let id = idx as u32 + 1;
        let video = &videos[video_idx];
        let customer = &customers[customer_idx];
        let date_rented = date_between(customer.date_joined, today, rng);

        let payment = Payment {
            id,
            method: pick(&PaymentMethod::ALL, rng),
            amount: video.price,
            date_paid: date_rented,
        };

        let transaction = Transaction {
            id,
            customer_id: customer.id,
            payment_id: payment.id,
            date_rented,
            date_due: date_rented + Duration::days(RENTAL_PERIOD_DAYS),
            fulfillment: pick(&FulfillmentMode::ALL, rng),
            note: CatchPhrase().fake_with_rng(rng),
        };

        let request = TransactionRequest {
            id,
            transaction_id: transaction.id,
            video_id: video.id,
            media_type: pick(&MediaType::ALL, rng),
            note: CatchPhrase().fake_with_rng(rng),
        };

        debug!(
            rental = id,
            video_id = video.id,
            customer_id = customer.id,
            method = %payment.method,
            fulfillment = %transaction.fulfillment,
            media_type = %request.media_type,
            "rental assembled"
        );

        rentals.payments.push(payment);
        rentals.transactions.push(transaction);
        rentals.transaction_requests.push(request);
    }

    Ok(rentals)
}

fn ensure_available(
    kind: &'static str,
    available: usize,
    requested: usize,
) -> Result<(), GenerationError> {
    if available < requested {
        return Err(GenerationError::InsufficientData {
            kind,
            requested,
            available,
        });
    }
    Ok(())
}

/// Uniform date in `start..=end`; `start` when the range is empty.
fn date_between(start: NaiveDate, end: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    start + Duration::days(rng.random_range(0..=span))
}
