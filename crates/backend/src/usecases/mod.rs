pub mod u501_qr_batch;
