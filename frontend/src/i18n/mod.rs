//! Translation lookups for the page.
//!
//! Catalogs are nested JSON documents flattened into dotted keys, so
//! `{"hero": {"form": {"title": "..."}}}` answers `hero.form.title`.
//! Components never reach for a global: they receive an [`I18n`] handle.

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

const EN_CATALOG: &str = include_str!("locales/en.json");
const HE_CATALOG: &str = include_str!("locales/he.json");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::He];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    /// Accepts bare codes and browser tags like `he-IL`.
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "he" | "iw" => Some(Language::He),
            _ => None,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::He => Direction::Rtl,
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::En => Language::He,
            Language::He => Language::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum I18nError {
    #[error("invalid catalog json: {0}")]
    Parse(String),
    #[error("catalog root must be an object")]
    NotAnObject,
    #[error("catalog entry `{key}` is not a string")]
    NonStringValue { key: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_json(source: &str) -> Result<Self, I18nError> {
        let root: Value =
            serde_json::from_str(source).map_err(|e| I18nError::Parse(e.to_string()))?;
        let Value::Object(map) = root else {
            return Err(I18nError::NotAnObject);
        };

        let mut entries = HashMap::new();
        for (key, value) in map {
            flatten_into(&mut entries, key, value)?;
        }
        Ok(Self { entries })
    }

    pub fn bundled(language: Language) -> Result<Self, I18nError> {
        match language {
            Language::En => Self::from_json(EN_CATALOG),
            Language::He => Self::from_json(HE_CATALOG),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten_into(
    entries: &mut HashMap<String, String>,
    prefix: String,
    value: Value,
) -> Result<(), I18nError> {
    match value {
        Value::String(text) => {
            entries.insert(prefix, text);
            Ok(())
        }
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(entries, format!("{}.{}", prefix, key), child)?;
            }
            Ok(())
        }
        _ => Err(I18nError::NonStringValue { key: prefix }),
    }
}

/// Translator handed to components: the active language plus its catalog,
/// with English as the fallback.
#[derive(Debug, Clone)]
pub struct I18n {
    language: Language,
    catalog: Rc<Catalog>,
    fallback: Rc<Catalog>,
}

impl I18n {
    pub fn new(language: Language, catalog: Catalog, fallback: Catalog) -> Self {
        Self {
            language,
            catalog: Rc::new(catalog),
            fallback: Rc::new(fallback),
        }
    }

    /// Loads the catalogs compiled into the binary. A broken catalog is
    /// logged and replaced by an empty one so keys render verbatim.
    pub fn bundled(language: Language) -> Self {
        let load = |language: Language| {
            Catalog::bundled(language).unwrap_or_else(|err| {
                log::error!("Failed to load {} catalog: {}", language.code(), err);
                Catalog::default()
            })
        };
        let fallback = load(Language::En);
        let catalog = if language == Language::En {
            fallback.clone()
        } else {
            load(language)
        };
        Self::new(language, catalog, fallback)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn t(&self, key: &str) -> String {
        if let Some(text) = self.catalog.get(key).or_else(|| self.fallback.get(key)) {
            return text.to_string();
        }
        log::debug!("Missing translation for {} ({})", key, self.language.code());
        key.to_string()
    }
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && Rc::ptr_eq(&self.catalog, &other.catalog)
            && Rc::ptr_eq(&self.fallback, &other.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_objects_flatten_to_dotted_keys() {
        let catalog =
            Catalog::from_json(r#"{"hero": {"form": {"title": "Hi"}, "subheadline": "Sub"}}"#)
                .unwrap();
        assert_eq!(catalog.get("hero.form.title"), Some("Hi"));
        assert_eq!(catalog.get("hero.subheadline"), Some("Sub"));
        assert_eq!(catalog.get("hero.form"), None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn non_string_leaves_are_rejected() {
        let err = Catalog::from_json(r#"{"hero": {"count": 3}}"#).unwrap_err();
        assert_eq!(
            err,
            I18nError::NonStringValue {
                key: "hero.count".to_string()
            }
        );
        assert_eq!(Catalog::from_json("[]").unwrap_err(), I18nError::NotAnObject);
        assert!(matches!(
            Catalog::from_json("{").unwrap_err(),
            I18nError::Parse(_)
        ));
    }

    #[test]
    fn lookup_falls_back_to_english_then_key() {
        let he = Catalog::from_json(r#"{"hero": {"subheadline": "שלום"}}"#).unwrap();
        let en = Catalog::from_json(r#"{"hero": {"subheadline": "Hello", "benefit1": "Free"}}"#)
            .unwrap();
        let i18n = I18n::new(Language::He, he, en);

        assert_eq!(i18n.t("hero.subheadline"), "שלום");
        assert_eq!(i18n.t("hero.benefit1"), "Free");
        assert_eq!(i18n.t("hero.unknown"), "hero.unknown");
    }

    #[test]
    fn hebrew_is_right_to_left() {
        assert_eq!(Language::He.direction(), Direction::Rtl);
        assert_eq!(Language::En.direction(), Direction::Ltr);
        assert_eq!(Direction::Rtl.as_str(), "rtl");
        assert_eq!(I18n::bundled(Language::He).direction(), Direction::Rtl);
    }

    #[test]
    fn language_codes_accept_browser_tags() {
        assert_eq!(Language::from_code("he-IL"), Some(Language::He));
        assert_eq!(Language::from_code("iw"), Some(Language::He));
        assert_eq!(Language::from_code("en_US"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn bundled_catalogs_share_the_same_keys() {
        let en = Catalog::bundled(Language::En).unwrap();
        let he = Catalog::bundled(Language::He).unwrap();
        assert!(!en.is_empty());
        let mut en_keys: Vec<_> = en.entries.keys().collect();
        let mut he_keys: Vec<_> = he.entries.keys().collect();
        en_keys.sort();
        he_keys.sort();
        assert_eq!(en_keys, he_keys);
    }

    #[test]
    fn language_round_trips_through_storage_format() {
        assert_eq!(serde_json::to_string(&Language::He).unwrap(), "\"he\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}
