pub mod executor;

pub use executor::QrBatchExecutor;
