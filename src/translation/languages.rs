//! 支持的语言表
//!
//! 必应翻译支持的语言代码与名称的静态映射，由 `/languages` 端点原样返回。

use serde_json::{Map, Value};

/// 语言代码 -> 语言名称
pub static LANGS: &[(&str, &str)] = &[
    ("auto-detect", "Auto-detect"),
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("bg", "Bulgarian"),
    ("bn", "Bangla"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fj", "Fijian"),
    ("fr", "French"),
    ("fr-CA", "French (Canada)"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("ht", "Haitian Creole"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("ku", "Kurdish (Central)"),
    ("ky", "Kyrgyz"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mg", "Malagasy"),
    ("mi", "Māori"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn-Cyrl", "Mongolian (Cyrillic)"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("mww", "Hmong Daw"),
    ("my", "Myanmar (Burmese)"),
    ("nb", "Norwegian"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("otq", "Querétaro Otomi"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("prs", "Dari"),
    ("ps", "Pashto"),
    ("pt", "Portuguese (Brazil)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sm", "Samoan"),
    ("so", "Somali"),
    ("sq", "Albanian"),
    ("sr-Cyrl", "Serbian (Cyrillic)"),
    ("sr-Latn", "Serbian (Latin)"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("ti", "Tigrinya"),
    ("tlh-Latn", "Klingon (Latin)"),
    ("to", "Tongan"),
    ("tr", "Turkish"),
    ("ty", "Tahitian"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek (Latin)"),
    ("vi", "Vietnamese"),
    ("yua", "Yucatec Maya"),
    ("yue", "Cantonese (Traditional)"),
    ("zh-Hans", "Chinese Simplified"),
    ("zh-Hant", "Chinese Traditional"),
    ("zu", "Zulu"),
];

/// 构造语言表的 JSON 对象
pub fn language_map() -> Value {
    let mut map = Map::with_capacity(LANGS.len());
    for (code, name) in LANGS {
        map.insert((*code).to_string(), Value::String((*name).to_string()));
    }
    Value::Object(map)
}

/// 语言代码是否在支持列表中
pub fn is_supported(code: &str) -> bool {
    LANGS.iter().any(|(lang, _)| *lang == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_map_contains_core_codes() {
        let map = language_map();
        assert_eq!(map["en"], "English");
        assert_eq!(map["zh-Hans"], "Chinese Simplified");
        assert_eq!(map["auto-detect"], "Auto-detect");
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("ja"));
        assert!(is_supported("zh-Hant"));
        assert!(!is_supported("zh-CN"));
        assert!(!is_supported(""));
    }
}
