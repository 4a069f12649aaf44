pub mod executor;

pub use executor::ContactExecutor;
