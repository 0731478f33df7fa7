pub mod common;
pub mod u501_qr_batch;
