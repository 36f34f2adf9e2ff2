mod config;
mod demo;

pub use config::DemoConfig;
pub use demo::run;
