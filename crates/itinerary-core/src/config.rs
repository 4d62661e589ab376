//! Environment-derived defaults: locale currency, system timezone and the
//! default store location.

use std::{env, path::PathBuf};

use jiff::tz::TimeZone;
use log::warn;

use crate::error::{ItineraryError, Result};

/// Currency used when neither the caller nor the locale supplies one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Environment variable that overrides the locale-derived currency.
pub const CURRENCY_ENV: &str = "ITINERARY_CURRENCY";

/// Locale variables consulted in priority order.
const LOCALE_ENVS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Region code to ISO 4217 currency.
const REGION_CURRENCIES: &[(&str, &str)] = &[
    ("US", "USD"),
    ("GB", "GBP"),
    ("CA", "CAD"),
    ("AU", "AUD"),
    ("NZ", "NZD"),
    ("JP", "JPY"),
    ("CN", "CNY"),
    ("KR", "KRW"),
    ("IN", "INR"),
    ("CH", "CHF"),
    ("SE", "SEK"),
    ("NO", "NOK"),
    ("DK", "DKK"),
    ("PL", "PLN"),
    ("CZ", "CZK"),
    ("BR", "BRL"),
    ("MX", "MXN"),
    ("SG", "SGD"),
    ("HK", "HKD"),
    ("ZA", "ZAR"),
    ("DE", "EUR"),
    ("FR", "EUR"),
    ("ES", "EUR"),
    ("IT", "EUR"),
    ("NL", "EUR"),
    ("BE", "EUR"),
    ("AT", "EUR"),
    ("PT", "EUR"),
    ("IE", "EUR"),
    ("FI", "EUR"),
    ("GR", "EUR"),
];

/// Locale defaults applied when a trip is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// ISO 4217 currency code
    pub currency: String,
    /// IANA timezone name, when the system exposes one
    pub timezone: Option<String>,
}

impl Locale {
    /// Detects the locale from the process environment and the system
    /// timezone database.
    pub fn detect() -> Self {
        let locale_tags: Vec<String> = LOCALE_ENVS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .collect();

        Self {
            currency: resolve_currency(env::var(CURRENCY_ENV).ok().as_deref(), &locale_tags),
            timezone: system_timezone(),
        }
    }
}

/// Picks the default currency: a valid override, else the first locale tag
/// with a known region, else [`DEFAULT_CURRENCY`].
///
/// An override that is not a currency code is logged and skipped.
fn resolve_currency(override_code: Option<&str>, locale_tags: &[String]) -> String {
    override_code
        .filter(|code| !code.trim().is_empty())
        .and_then(|code| match normalize_currency(code) {
            Ok(code) => Some(code),
            Err(e) => {
                warn!("Ignoring {CURRENCY_ENV}: {e}");
                None
            }
        })
        .or_else(|| {
            locale_tags
                .iter()
                .find_map(|tag| currency_for_locale(tag).map(String::from))
        })
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// Uppercases a three-letter ISO 4217 code, rejecting anything else.
pub(crate) fn normalize_currency(code: &str) -> Result<String> {
    let code = code.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ItineraryError::invalid_input("currency")
            .with_reason(format!("expected a three-letter ISO 4217 code, got '{code}'")));
    }
    Ok(code)
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            timezone: None,
        }
    }
}

/// Maps a POSIX locale tag such as `en_GB.UTF-8` or `de-DE` to a currency.
///
/// Returns `None` for tags without a region (`C`, `POSIX`, `en`) or regions
/// missing from the table.
pub fn currency_for_locale(tag: &str) -> Option<&'static str> {
    let tag = tag.split(['.', '@']).next()?;
    let region = tag.split(['_', '-']).nth(1)?;
    let region = region.to_ascii_uppercase();
    REGION_CURRENCIES
        .iter()
        .find(|(code, _)| *code == region)
        .map(|(_, currency)| *currency)
}

/// IANA name of the system timezone, if known.
pub fn system_timezone() -> Option<String> {
    TimeZone::system().iana_name().map(String::from)
}

/// Returns the default store path following the XDG Base Directory
/// specification: `$XDG_DATA_HOME/itinerary/itinerary.db`.
pub fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("itinerary")
        .place_data_file("itinerary.db")
        .map_err(|e| ItineraryError::XdgDirectory(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_for_locale() {
        assert_eq!(currency_for_locale("en_GB.UTF-8"), Some("GBP"));
        assert_eq!(currency_for_locale("de_DE"), Some("EUR"));
        assert_eq!(currency_for_locale("ja-jp"), Some("JPY"));
        assert_eq!(currency_for_locale("en_US.UTF-8@euro"), Some("USD"));
        assert_eq!(currency_for_locale("C.UTF-8"), None);
        assert_eq!(currency_for_locale("POSIX"), None);
        assert_eq!(currency_for_locale("xx_ZZ"), None);
    }

    #[test]
    fn test_currency_override_must_be_a_code() {
        let tags = vec!["C.UTF-8".to_string(), "en_GB.UTF-8".to_string()];
        assert_eq!(resolve_currency(Some(" jpy "), &tags), "JPY");
        assert_eq!(resolve_currency(Some("euro"), &tags), "GBP");
        assert_eq!(resolve_currency(Some("E1R"), &tags), "GBP");
        assert_eq!(resolve_currency(Some("   "), &tags), "GBP");
        assert_eq!(resolve_currency(Some("euro"), &[]), "USD");
        assert_eq!(resolve_currency(None, &["POSIX".to_string()]), "USD");
    }

    #[test]
    fn test_default_locale() {
        let locale = Locale::default();
        assert_eq!(locale.currency, "USD");
        assert!(locale.timezone.is_none());
    }
}
