//! Display locales
//!
//! The bridge supports a small closed set of locales. The host reports its
//! configured locale as a free-form tag; [`Locale::resolve`] maps that tag
//! onto the supported set, falling back to English.

use core::fmt;

/// Supported display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English, the universal fallback.
    #[default]
    En,
    /// Japanese (kanji).
    Ja,
    /// Japanese (hiragana only).
    JaHira,
    /// Simplified Chinese.
    ZhCn,
}

impl Locale {
    /// Every supported locale, fallback first.
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Ja, Locale::JaHira, Locale::ZhCn];

    /// Host locale tag for this locale.
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::JaHira => "ja-Hira",
            Locale::ZhCn => "zh-cn",
        }
    }

    /// Exact (case-sensitive) match of a host tag against the supported set.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.as_str() == tag)
    }

    /// Resolve the host's configured locale, defaulting to English.
    ///
    /// Total over all inputs: an unsupported or empty tag yields
    /// [`Locale::En`].
    pub fn resolve(configured: &str) -> Locale {
        Self::from_tag(configured).unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One display string per supported locale.
///
/// Every locale must be filled in at construction; an empty string is
/// treated as missing and falls back to the English text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub ja: &'static str,
    pub ja_hira: &'static str,
    pub zh_cn: &'static str,
}

impl LocalizedText {
    /// Text for `locale`, or the English text if that entry is empty.
    pub const fn get(&self, locale: Locale) -> &'static str {
        let text = match locale {
            Locale::En => self.en,
            Locale::Ja => self.ja,
            Locale::JaHira => self.ja_hira,
            Locale::ZhCn => self.zh_cn,
        };
        if text.is_empty() {
            self.en
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: LocalizedText = LocalizedText {
        en: "takeoff",
        ja: "離陸する",
        ja_hira: "",
        zh_cn: "起飞",
    };

    #[test]
    fn test_resolve_supported_tags() {
        assert_eq!(Locale::resolve("en"), Locale::En);
        assert_eq!(Locale::resolve("ja"), Locale::Ja);
        assert_eq!(Locale::resolve("ja-Hira"), Locale::JaHira);
        assert_eq!(Locale::resolve("zh-cn"), Locale::ZhCn);
    }

    #[test]
    fn test_resolve_unsupported_falls_back() {
        assert_eq!(Locale::resolve("fr"), Locale::En);
        assert_eq!(Locale::resolve(""), Locale::En);
        assert_eq!(Locale::resolve("en-US"), Locale::En);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        // Hosts report "zh-cn"; any other spelling is not in the set
        assert_eq!(Locale::resolve("zh-CN"), Locale::En);
        assert_eq!(Locale::resolve("ja-hira"), Locale::En);
    }

    #[test]
    fn test_as_str_roundtrips_through_from_tag() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.as_str()), Some(locale));
        }
    }

    #[test]
    fn test_localized_text_lookup() {
        assert_eq!(SAMPLE.get(Locale::En), "takeoff");
        assert_eq!(SAMPLE.get(Locale::Ja), "離陸する");
        assert_eq!(SAMPLE.get(Locale::ZhCn), "起飞");
    }

    #[test]
    fn test_localized_text_empty_entry_uses_english() {
        assert_eq!(SAMPLE.get(Locale::JaHira), "takeoff");
    }
}
