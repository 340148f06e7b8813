use crate::error::ConfigError;

/// Parses a comma separated list of difficulties, e.g. `"50000, 100000"`.
/// Blank items are skipped; order is kept as given.
pub fn parse_difficulties(raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>()
                .map_err(|source| ConfigError::InvalidDifficulty {
                    item: item.to_string(),
                    source,
                })
        })
        .collect()
}
