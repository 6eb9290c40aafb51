//! Config command - Prints the settings the server would start with.

use crate::config::Settings;
use crate::errors::{AppError, AppResult};

/// Execute the config command
pub async fn execute(settings: Settings) -> AppResult<()> {
    let json = serde_json::to_string_pretty(&settings)
        .map_err(|e| AppError::internal(format!("Failed to serialize settings: {}", e)))?;
    println!("{}", json);
    Ok(())
}
