//! Month and weekday name lookup.
//!
//! Engines only depend on [`NameLookup`]; [`ChronoCulture`] is the default
//! implementation backed by the locale tables shipped with `chrono`.

use std::env;

use chrono::{Locale, NaiveDate, NaiveTime, Weekday};
use tracing::debug;

use crate::error::{PickerError, PickerResult};

/// Localized calendar names consumed by the date picker.
pub trait NameLookup {
    /// Abbreviated month name, `month` in 1-12.
    fn abbreviated_month_name(&self, month: u32) -> String;

    fn abbreviated_day_name(&self, weekday: Weekday) -> String;

    fn month_name(&self, month: u32) -> String;

    fn day_name(&self, weekday: Weekday) -> String;
}

/// Default territories for bare language tags whose territory code differs
/// from the uppercased language code.
const LANGUAGE_DEFAULT_TERRITORIES: &[(&str, &str)] = &[
    ("en", "en_US"),
    ("hi", "hi_IN"),
    ("ja", "ja_JP"),
    ("zh", "zh_CN"),
    ("ko", "ko_KR"),
    ("ar", "ar_SA"),
    ("sv", "sv_SE"),
    ("da", "da_DK"),
    ("cs", "cs_CZ"),
    ("el", "el_GR"),
    ("uk", "uk_UA"),
    ("he", "he_IL"),
    ("nb", "nb_NO"),
    ("fa", "fa_IR"),
    ("vi", "vi_VN"),
];

const SYSTEM_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Reference Monday used to format weekday names.
const REFERENCE_MONDAY: (i32, u32, u32) = (2024, 1, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronoCulture {
    locale: Locale,
}

impl Default for ChronoCulture {
    fn default() -> Self {
        Self {
            locale: Locale::POSIX,
        }
    }
}

impl ChronoCulture {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub fn locale(self) -> Locale {
        self.locale
    }

    /// Resolves a culture identifier such as `"en"`, `"hi-IN"` or `"fr_FR"`.
    ///
    /// Absent or blank identifiers use the system locale. An explicit
    /// identifier that matches no known locale is an error.
    pub fn from_identifier(identifier: Option<&str>) -> PickerResult<Self> {
        match identifier.map(str::trim).filter(|value| !value.is_empty()) {
            None => Ok(Self::system()),
            Some(identifier) => parse_locale(identifier)
                .map(Self::new)
                .ok_or_else(|| PickerError::InvalidCulture(identifier.to_owned())),
        }
    }

    /// Locale from `LC_ALL`, `LC_TIME` or `LANG`, falling back to POSIX.
    #[must_use]
    pub fn system() -> Self {
        let resolved = SYSTEM_LOCALE_VARS.iter().find_map(|name| {
            let value = env::var(name).ok()?;
            let tag = value.split(['.', '@']).next()?.trim().to_owned();
            if tag.is_empty() || tag == "C" {
                return None;
            }
            parse_locale(&tag)
        });
        let culture = resolved.map_or_else(Self::default, Self::new);
        debug!(locale = ?culture.locale, "resolved system culture");
        culture
    }

    fn format_date(self, date: NaiveDate, pattern: &str) -> String {
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(pattern, self.locale)
            .to_string()
    }

    fn month_date(month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(REFERENCE_MONDAY.0, month, 1)
    }

    fn weekday_date(weekday: Weekday) -> Option<NaiveDate> {
        let (year, month, day) = REFERENCE_MONDAY;
        NaiveDate::from_ymd_opt(year, month, day + weekday.num_days_from_monday())
    }
}

fn parse_locale(identifier: &str) -> Option<Locale> {
    let normalized = identifier.replace('-', "_");
    if let Ok(locale) = Locale::try_from(normalized.as_str()) {
        return Some(locale);
    }
    if normalized.contains('_') {
        // Territory case differs in some host tags ("en_us").
        let (language, territory) = normalized.split_once('_')?;
        let canonical = format!("{}_{}", language.to_lowercase(), territory.to_uppercase());
        return Locale::try_from(canonical.as_str()).ok();
    }

    let language = normalized.to_lowercase();
    let fallback = LANGUAGE_DEFAULT_TERRITORIES
        .iter()
        .find(|(tag, _)| *tag == language)
        .map(|(_, locale)| (*locale).to_owned())
        .unwrap_or_else(|| format!("{language}_{}", language.to_uppercase()));
    Locale::try_from(fallback.as_str()).ok()
}

impl NameLookup for ChronoCulture {
    fn abbreviated_month_name(&self, month: u32) -> String {
        Self::month_date(month)
            .map(|date| self.format_date(date, "%b"))
            .unwrap_or_default()
    }

    fn abbreviated_day_name(&self, weekday: Weekday) -> String {
        Self::weekday_date(weekday)
            .map(|date| self.format_date(date, "%a"))
            .unwrap_or_default()
    }

    fn month_name(&self, month: u32) -> String {
        Self::month_date(month)
            .map(|date| self.format_date(date, "%B"))
            .unwrap_or_default()
    }

    fn day_name(&self, weekday: Weekday) -> String {
        Self::weekday_date(weekday)
            .map(|date| self.format_date(date, "%A"))
            .unwrap_or_default()
    }
}

/// Fixed English names; useful for hosts that do not want locale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnglishNames;

impl NameLookup for EnglishNames {
    fn abbreviated_month_name(&self, month: u32) -> String {
        self.month_name(month).chars().take(3).collect()
    }

    fn abbreviated_day_name(&self, weekday: Weekday) -> String {
        weekday.to_string()
    }

    fn month_name(&self, month: u32) -> String {
        u8::try_from(month)
            .ok()
            .and_then(|month| chrono::Month::try_from(month).ok())
            .map(|month| month.name().to_owned())
            .unwrap_or_default()
    }

    fn day_name(&self, weekday: Weekday) -> String {
        let name = match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        };
        name.to_owned()
    }
}
