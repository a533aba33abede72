//! Init command implementation
//!
//! Writes a starter configuration file pointing at a placeholder catalog
//! service, with credentials pulled from the environment.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "quire.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("  Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your catalog URL", self.output);
                println!("  2. Set QUIRE_CATALOG_USERNAME and QUIRE_CATALOG_PASSWORD");
                println!("  3. Validate the configuration: quire validate-config");
                println!("  4. Run an export: quire export --format ead");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("  Error: {e}");
                Ok(6)
            }
        }
    }

    /// Starter configuration content
    fn starter_config() -> &'static str {
        r#"# Quire configuration file
# Archival finding aid export tool

[application]
log_level = "info"

[catalog]
base_url = "https://catalog.example.edu/api"
username = "${QUIRE_CATALOG_USERNAME}"
password = "${QUIRE_CATALOG_PASSWORD}"
timeout_seconds = 20
tls_verify = true

[export]
workers = 8
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_config_is_parseable_toml() {
        let parsed: toml::Value = toml::from_str(InitArgs::starter_config()).unwrap();
        assert!(parsed.get("catalog").is_some());
        assert!(parsed.get("export").is_some());
    }

    #[tokio::test]
    async fn test_init_refuses_existing_file_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("quire.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_str().unwrap().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_init_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("quire.toml");

        let args = InitArgs {
            output: output.to_str().unwrap().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(output.exists());
    }
}
