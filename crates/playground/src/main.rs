use anyhow::Result;
use playground::{DemoConfig, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let stdout = std::io::stdout();
  run(&DemoConfig::default(), &mut stdout.lock())
}
