//! Check command implementation
//!
//! Prints the effective configuration and validates it.

use serde::Serialize;
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::output::{print_rows, Tabular};
use crate::Result;

/// One configuration setting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingRow {
    pub setting: &'static str,
    pub value: String,
}

impl Tabular for SettingRow {
    fn headers() -> &'static [&'static str] {
        &["Setting", "Value"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.setting.to_string(), self.value.clone()]
    }
}

/// Effective settings, in config-file order.
pub fn setting_rows(config: &CliConfig) -> Vec<SettingRow> {
    let row = |setting, value: String| SettingRow { setting, value };
    vec![
        row("seed", config.seed.map_or_else(|| "random".to_string(), |s| s.to_string())),
        row("num_paths", config.num_paths.to_string()),
        row("chunk_size", config.chunk_size.to_string()),
        row("contracts", config.contracts.to_string()),
        row("log_level", config.log_level.to_string()),
        row("output_format", config.output_format.to_string()),
    ]
}

/// Run the check command
pub fn run(config: &CliConfig, format: OutputFormat) -> Result<()> {
    print_rows(format, &setting_rows(config))?;
    config.validate()?;
    info!("Configuration OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_rows() {
        let rows = setting_rows(&CliConfig::default());
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], SettingRow { setting: "seed", value: "random".to_string() });
        assert_eq!(rows[5].value, "table");
    }
}
