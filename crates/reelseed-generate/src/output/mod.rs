pub mod csv;

pub use self::csv::{
    CUSTOMER_FILE, OUTPUT_FILES, PAYMENT_FILE, TRANSACTION_FILE, TRANSACTION_REQUEST_FILE,
    VIDEO_FILE, remove_existing, write_records,
};
