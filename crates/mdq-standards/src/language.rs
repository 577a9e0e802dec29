//! Language detection backed by `whatlang`.

use whatlang::{Detector, Lang};

use mdq_model::LanguageDetector;

/// Statistical language detector restricted to a caller-supplied allowlist.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, sample: &str, allowlist: &[String]) -> Option<String> {
        let langs: Vec<Lang> = allowlist
            .iter()
            .filter_map(|code| lang_from_639_3(code))
            .collect();
        if langs.is_empty() {
            return None;
        }
        let detector = Detector::with_allowlist(langs);
        detector
            .detect_lang(sample)
            .map(|lang| lang_to_639_3(lang).to_string())
    }
}

/// `whatlang` models Chinese as Mandarin ("cmn") while the ISO 639 registry
/// reaches it through the macrolanguage code "zho"; bridge both directions.
fn lang_from_639_3(code: &str) -> Option<Lang> {
    match code {
        "zho" => Some(Lang::Cmn),
        code => Lang::from_code(code),
    }
}

fn lang_to_639_3(lang: Lang) -> &'static str {
    match lang {
        Lang::Cmn => "zho",
        lang => lang.code(),
    }
}
