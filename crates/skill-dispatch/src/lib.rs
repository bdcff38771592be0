pub mod config;
pub mod dispatch;
pub mod error;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;
