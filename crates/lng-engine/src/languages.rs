//! Known language codes and their native names.
//!
//! Resource files are named after a language code (`de_DE.lng`). Older
//! resources use bare two-letter codes (`de.lng`); those map onto the full
//! code for display purposes.

/// `(code, native name)` for every language with a known display name.
pub const KNOWN_LANGUAGES: &[(&str, &str)] = &[
    ("af_ZA", "Afrikaans"),
    ("ar_SA", "العربية"),
    ("be_BY", "Беларуская мова"),
    ("bg_BG", "Български"),
    ("ca_ES", "Català"),
    ("cs_CZ", "Čeština"),
    ("da_DK", "Dansk"),
    ("de_DE", "Deutsch"),
    ("el_GR", "Ελληνικά"),
    ("en_GB", "English (United Kingdom)"),
    ("en_US", "English (United States)"),
    ("eo_UY", "Esperanto"),
    ("es_ES", "Español"),
    ("et_EE", "Eesti"),
    ("eu_ES", "Euskara"),
    ("fa_IR", "فارسی"),
    ("fi_FI", "Suomi"),
    ("fr_FR", "Français"),
    ("ga_IE", "Gaeilge"),
    ("gl_ES", "Galego"),
    ("he_IL", "עִבְרִית"),
    ("hr_HR", "Hrvatski"),
    ("hu_HU", "Magyar"),
    ("hy_AM", "Հայերեն"),
    ("it_IT", "Italiano"),
    ("ja_JP", "日本語"),
    ("jbo_EN", "lo jbobau"),
    ("ko_KR", "한국어"),
    ("la_LA", "Latin"),
    ("mn_MN", "Монгол хэл"),
    ("ms_MY", "Bahasa Melayu"),
    ("nb_NO", "Norsk"),
    ("nl_NL", "Nederlands"),
    ("oc_FR", "Lenga d'òc"),
    ("or_OR", "ଓଡ଼ିଆ"),
    ("pl_PL", "Polski"),
    ("pt_BR", "Português Brasileiro"),
    ("pt_PT", "Português"),
    ("ro_RO", "Română"),
    ("ru_RU", "Pусский язык"),
    ("sk_SK", "Slovenčina"),
    ("sl_SI", "Slovenščina"),
    ("sr_SP", "Српски"),
    ("sv_SE", "Svenska"),
    ("th_TH", "ภาษาไทย"),
    ("tl", "Filipino"),
    ("tr_TR", "Türkçe"),
    ("ug", "ئۇيغۇر"),
    ("uk_UA", "Українська мова"),
    ("vi_VN", "Tiếng Việt"),
    ("zh_CN", "简体中文"),
    ("zh_TW", "繁體中文"),
];

/// Legacy short codes and the full code they stand for.
pub const LEGACY_CODES: &[(&str, &str)] = &[
    ("af", "af_ZA"),
    ("ar", "ar_SA"),
    ("be", "be_BY"),
    ("bg", "bg_BG"),
    ("ca", "ca_ES"),
    ("cs", "cs_CZ"),
    ("da", "da_DK"),
    ("de", "de_DE"),
    ("el", "el_GR"),
    ("en", "en_US"),
    ("eo", "eo_UY"),
    ("es", "es_ES"),
    ("et", "et_EE"),
    ("eu", "eu_ES"),
    ("fa", "fa_IR"),
    ("fi", "fi_FI"),
    ("fr", "fr_FR"),
    ("gl", "gl_ES"),
    ("he", "he_IL"),
    ("hr", "hr_HR"),
    ("hu", "hu_HU"),
    ("hy", "hy_AM"),
    ("it", "it_IT"),
    ("ja", "ja_JP"),
    ("jbo", "jbo_EN"),
    ("ko", "ko_KR"),
    ("la", "la_LA"),
    ("mn", "mn_MN"),
    ("ms", "ms_MY"),
    ("nb", "nb_NO"),
    ("nl", "nl_NL"),
    ("no", "nb_NO"),
    ("oc", "oc_FR"),
    ("or", "or_OR"),
    ("pl", "pl_PL"),
    ("pt", "pt_PT"),
    ("ro", "ro_RO"),
    ("ru", "ru_RU"),
    ("sk", "sk_SK"),
    ("sl", "sl_SI"),
    ("sr", "sr_SP"),
    ("sv", "sv_SE"),
    ("th", "th_TH"),
    ("tr", "tr_TR"),
    ("uk", "uk_UA"),
    ("vi", "vi_VN"),
];

pub const DEFAULT_LANGUAGE: &str = "en";

/// File-name form of a language code: `pt-BR` → `pt_BR`.
pub fn normalize_code(code: &str) -> String {
    code.trim().replace('-', "_")
}

/// The full code for `code`, going through the legacy map if needed.
pub fn canonical_code(code: &str) -> Option<&'static str> {
    let code = normalize_code(code);
    if let Some((known, _)) = KNOWN_LANGUAGES.iter().find(|(c, _)| *c == code) {
        return Some(*known);
    }
    LEGACY_CODES
        .iter()
        .find(|(short, _)| *short == code)
        .map(|(_, full)| *full)
}

/// Native display name for `code`, or the code itself when unknown.
pub fn full_name(code: &str) -> &str {
    canonical_code(code)
        .and_then(|full| KNOWN_LANGUAGES.iter().find(|(c, _)| *c == full))
        .map_or(code, |(_, name)| *name)
}
