use chrono::NaiveDate;

// The structured intent extracted from one free-text command. Built fresh
// per submission and discarded after execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCommand {
    /// Uppercase 4-letter token, last match wins. Never the literal "MACD".
    pub ticker: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// Defaults to today at consumption time when absent.
    pub end_date: Option<NaiveDate>,
    /// Matched case-insensitively against {ambil, tampilkan, hitung};
    /// original casing preserved.
    pub actions: Vec<String>,
    /// Matched case-insensitively against {rsi, macd, ma50, ma20};
    /// original casing preserved.
    pub indicators: Vec<String>,
}
