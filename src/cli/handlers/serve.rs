//! Serve command handler
//!
//! Handles `serve --dry-run`. Actual startup lives in [`crate::server::Server`].

use crate::config::settings::Settings;
use crate::error::AppResult;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate configuration without starting the server
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ API key header: {} (secret configured)",
            self.config.api_key.header
        );
        println!(
            "✓ API docs: {}",
            if self.config.server.enable_docs {
                "enabled at /swagger"
            } else {
                "disabled"
            }
        );
        println!("✓ Database URL is configured");

        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
