use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::address::en::StreetName;
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::name::en::{FirstName, LastName};
use rand::{Rng, RngCore};

use reelseed_core::{AREA_CODES, Customer, POSTCODE, STATE, SUBURBS};

use super::pick;

/// How far back join dates reach.
pub const JOIN_WINDOW_DAYS: i64 = 365;

const BUILDING_NUMBERS: RangeInclusive<u32> = 1..=9999;

/// Synthesize `count` customers with ids `1..=count`.
pub fn generate_customers(count: usize, today: NaiveDate, rng: &mut dyn RngCore) -> Vec<Customer> {
    (1..=count)
        .map(|id| generate_customer(id as u32, today, rng))
        .collect()
}

fn generate_customer(id: u32, today: NaiveDate, rng: &mut dyn RngCore) -> Customer {
    let first_name: String = FirstName().fake_with_rng(rng);
    let last_name: String = LastName().fake_with_rng(rng);
    let building = rng.random_range(BUILDING_NUMBERS);
    let street: String = StreetName().fake_with_rng(rng);
    let suburb = pick(&SUBURBS, rng);
    let contact_number = contact_number(rng);
    let email = email_for(&first_name, rng);
    let days_ago = rng.random_range(1..=JOIN_WINDOW_DAYS);

    Customer {
        id,
        first_name,
        last_name,
        street_address: format!("{building} {street}"),
        suburb: suburb.to_string(),
        state: STATE.to_string(),
        postcode: POSTCODE,
        contact_number,
        email,
        date_joined: today - Duration::days(days_ago),
    }
}

/// `7` + area code + 4-digit suffix, e.g. `741620087`.
fn contact_number(rng: &mut dyn RngCore) -> String {
    let area_code = pick(&AREA_CODES, rng);
    let suffix: u32 = rng.random_range(1..=9999);
    format!("7{area_code}{suffix:04}")
}

fn email_for(first_name: &str, rng: &mut dyn RngCore) -> String {
    let local: String = first_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    let number: u32 = rng.random_range(1..=99);
    let provider: String = FreeEmailProvider().fake_with_rng(rng);
    format!("{local}{number}@{provider}")
}
