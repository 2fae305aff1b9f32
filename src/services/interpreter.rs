use chrono::NaiveDate;

use crate::models::ParsedCommand;

const ACTIONS: [&str; 3] = ["ambil", "tampilkan", "hitung"];
const INDICATORS: [&str; 4] = ["rsi", "macd", "ma50", "ma20"];

/// Indonesian month names and the English spellings `%B` understands.
const INDONESIAN_MONTHS: [(&str, &str); 12] = [
    ("januari", "January"),
    ("februari", "February"),
    ("maret", "March"),
    ("april", "April"),
    ("mei", "May"),
    ("juni", "June"),
    ("juli", "July"),
    ("agustus", "August"),
    ("september", "September"),
    ("oktober", "October"),
    ("november", "November"),
    ("desember", "December"),
];

/// Splits a raw command into tokens after dropping every comma and period.
/// Case is preserved; blank input yields an empty vec.
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .replace([',', '.'], "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Parses a "day month year" triple where the month may be Indonesian or
/// English, case-insensitive. Returns `None` for anything that is not a
/// date; the scanning loop treats that as "keep going", never as a failure.
pub fn parse_date(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let lowered = month.to_lowercase();
    let month = INDONESIAN_MONTHS
        .iter()
        .find(|(id, _)| *id == lowered)
        .map(|(_, en)| *en)
        .unwrap_or(month);
    NaiveDate::parse_from_str(&format!("{day} {month} {year}"), "%d %B %Y").ok()
}

/// Single left-to-right scan over the tokens. Each rule is evaluated
/// independently per token, so one token can satisfy several. Unrecognized
/// tokens are ignored and the result is always a best-effort struct.
pub fn extract_keywords(tokens: &[String]) -> ParsedCommand {
    let mut command = ParsedCommand::default();

    for (i, token) in tokens.iter().enumerate() {
        // Exactly 4 uppercase letters, and never the MACD keyword written
        // in uppercase. Last match wins.
        if token.len() == 4
            && token.chars().all(|c| c.is_ascii_uppercase())
            && token != "MACD"
        {
            command.ticker = Some(token.clone());
        }

        // A date is three consecutive tokens starting at an all-digits one.
        // First parsed triple fills the start slot, the second fills the
        // end slot, anything later is dropped.
        if i + 2 < tokens.len() && token.chars().all(|c| c.is_ascii_digit()) {
            if let Some(date) = parse_date(token, &tokens[i + 1], &tokens[i + 2]) {
                if command.start_date.is_none() {
                    command.start_date = Some(date);
                } else if command.end_date.is_none() {
                    command.end_date = Some(date);
                }
            }
        }

        let lowered = token.to_lowercase();
        if ACTIONS.contains(&lowered.as_str()) {
            command.actions.push(token.clone());
        }
        if INDICATORS.contains(&lowered.as_str()) {
            command.indicators.push(token.clone());
        }
    }

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(sentence: &str) -> Vec<String> {
        tokenize(sentence)
    }

    #[test]
    fn test_tokenize_strips_commas_and_periods() {
        assert_eq!(
            tokens("AAPL, 1. Januari 2023"),
            vec!["AAPL", "1", "Januari", "2023"]
        );
    }

    #[test]
    fn test_tokenize_blank_input_is_empty() {
        assert!(tokens("   ").is_empty());
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_parse_date_indonesian_matches_english() {
        let id = parse_date("15", "Maret", "2023").unwrap();
        let en = parse_date("15", "March", "2023").unwrap();
        assert_eq!(id, en);
        assert_eq!(id, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_is_case_insensitive() {
        assert_eq!(
            parse_date("1", "DESEMBER", "2022"),
            NaiveDate::from_ymd_opt(2022, 12, 1)
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("15", "Bukanbulan", "2023").is_none());
        assert!(parse_date("32", "Maret", "2023").is_none());
        assert!(parse_date("15", "Maret", "tahun").is_none());
    }

    #[test]
    fn test_extract_full_fetch_command() {
        let command = extract_keywords(&tokens(
            "ambil harga saham AAPL dari 1 Januari 2023 sampai 31 Januari 2023",
        ));
        assert_eq!(command.ticker.as_deref(), Some("AAPL"));
        assert_eq!(
            command.start_date,
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
        assert_eq!(
            command.end_date,
            NaiveDate::from_ymd_opt(2023, 1, 31)
        );
        assert_eq!(command.actions, vec!["ambil"]);
        assert!(command.indicators.is_empty());
    }

    #[test]
    fn test_no_ticker_without_uppercase_token() {
        let command = extract_keywords(&tokens("ambil harga saham dari 1 Januari 2023"));
        assert!(command.ticker.is_none());
    }

    #[test]
    fn test_uppercase_macd_is_keyword_not_ticker() {
        let command = extract_keywords(&tokens("hitung MACD untuk saham ini"));
        assert!(command.ticker.is_none());
        assert_eq!(command.indicators, vec!["MACD"]);
        assert_eq!(command.actions, vec!["hitung"]);
    }

    #[test]
    fn test_last_ticker_wins() {
        let command = extract_keywords(&tokens("ambil AAPL lalu BBRI"));
        assert_eq!(command.ticker.as_deref(), Some("BBRI"));
    }

    #[test]
    fn test_indicator_appended_per_occurrence_with_casing() {
        let command = extract_keywords(&tokens("hitung RSI dan rsi lagi"));
        assert_eq!(command.indicators, vec!["RSI", "rsi"]);
    }

    #[test]
    fn test_third_date_is_ignored() {
        let command = extract_keywords(&tokens(
            "dari 1 Januari 2023 sampai 31 Januari 2023 bukan 15 Februari 2023",
        ));
        assert_eq!(command.start_date, NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(command.end_date, NaiveDate::from_ymd_opt(2023, 1, 31));
    }

    #[test]
    fn test_date_needs_two_following_tokens() {
        let command = extract_keywords(&tokens("ambil 1 Januari"));
        assert!(command.start_date.is_none());
        assert!(command.end_date.is_none());
    }

    #[test]
    fn test_display_only_command_is_valid() {
        let command = extract_keywords(&tokens("tampilkan"));
        assert!(command.ticker.is_none());
        assert!(command.start_date.is_none());
        assert_eq!(command.actions, vec!["tampilkan"]);
    }

    #[test]
    fn test_digit_bearing_token_is_not_a_ticker() {
        let command = extract_keywords(&tokens("grafik AB1C sekarang"));
        assert!(command.ticker.is_none());
    }
}
