use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Header declares {found} column(s), expected at least {expected} (player name + 11 stats)")]
    Schema { found: usize, expected: usize },

    #[error("Row {row}: failed to parse '{value}' as integer for column '{column}'")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("{0}")]
    Config(String),

    #[error("Webhook delivery failed: {0}")]
    Delivery(String),
}
