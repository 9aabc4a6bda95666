pub mod app;
pub mod modules;
pub mod telemetry;

pub use modules::account;

#[cfg(test)]
mod tests;
