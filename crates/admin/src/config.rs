use std::{env, path::PathBuf};

/// Default snapshot file of the local backend.
pub const DEFAULT_DATA_FILE: &str = "humanbench-data.json";
/// Default DynamoDB table.
pub const DEFAULT_TABLE_NAME: &str = "humanbench";
/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Admin configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON snapshot used by the local backend (default: "humanbench-data.json")
    pub data_file: PathBuf,
    /// DynamoDB table name (default: "humanbench")
    pub table_name: String,
    /// Custom endpoint URL, for local DynamoDB.
    /// Note: Only used when the `dynamodb` feature is enabled.
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HUMANBENCH_DATA_FILE` - Local snapshot path (default: "humanbench-data.json")
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "humanbench")
    /// - `AWS_ENDPOINT_URL` - Use local DynamoDB (e.g., http://localhost:8000)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            data_file: non_empty("HUMANBENCH_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            table_name: non_empty("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            endpoint_url: non_empty("AWS_ENDPOINT_URL"),
            region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
        }
    }

    /// Overrides the snapshot path, typically from `--data-file`.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config.data_file, PathBuf::from("humanbench-data.json"));
        assert_eq!(config.table_name, "humanbench");
        assert_eq!(config.endpoint_url, None);
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("HUMANBENCH_DATA_FILE", "/tmp/seed.json"),
            ("DYNAMODB_TABLE_NAME", "humanbench-staging"),
            ("AWS_ENDPOINT_URL", "http://localhost:8000"),
            ("AWS_REGION", "eu-west-1"),
        ]));

        assert_eq!(config.data_file, PathBuf::from("/tmp/seed.json"));
        assert_eq!(config.table_name, "humanbench-staging");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("AWS_REGION", "  "), ("AWS_ENDPOINT_URL", "")]));

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn test_data_file_override() {
        let config = Config::from_lookup(lookup(&[("HUMANBENCH_DATA_FILE", "env.json")]));

        let kept = config.clone().with_data_file(None);
        assert_eq!(kept.data_file, PathBuf::from("env.json"));

        let overridden = config.with_data_file(Some(PathBuf::from("cli.json")));
        assert_eq!(overridden.data_file, PathBuf::from("cli.json"));
    }
}
