//! Environment locale detection.
//!
//! Default-locale derivation matches environment candidates against the
//! registered locales. The candidate list comes from a [`LocaleInfo`]
//! provider so production code can read the operating system while tests
//! inject a fixed list.

use unic_langid::LanguageIdentifier;

/// Supplies the environment's locale identifier candidates, most specific
/// first.
pub trait LocaleInfo {
    fn candidates(&self) -> Vec<String>;
}

/// Derives candidates from the operating system's reported locale.
///
/// For a system locale of `fr-FR` the candidates are `fr-FR`, `fr`, `fra`,
/// `fre`: the full tag, the two-letter code, and the ISO 639-2 terminology
/// and bibliographic codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocaleInfo;

impl LocaleInfo for SystemLocaleInfo {
    fn candidates(&self) -> Vec<String> {
        match sys_locale::get_locale() {
            Some(raw) => candidates_from_tag(&raw),
            None => Vec::new(),
        }
    }
}

/// A fixed candidate list, for tests and embedders that do their own locale
/// detection.
#[derive(Debug, Clone, Default)]
pub struct FixedLocaleInfo {
    candidates: Vec<String>,
}

impl FixedLocaleInfo {
    pub fn new(candidates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        FixedLocaleInfo {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }
}

impl LocaleInfo for FixedLocaleInfo {
    fn candidates(&self) -> Vec<String> {
        self.candidates.clone()
    }
}

/// Expands one raw locale tag into its candidate identifiers.
///
/// The tag is normalized (`pt_BR` → `pt-BR`, case per BCP 47) before
/// expansion. A tag that does not parse is returned as the sole candidate,
/// since it may still match a registered identifier verbatim.
pub fn candidates_from_tag(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let normalized = trimmed.replace('_', "-");
    let id = match normalized.parse::<LanguageIdentifier>() {
        Ok(id) => id,
        Err(_) => return vec![trimmed.to_string()],
    };

    let mut candidates = Vec::new();
    push_unique(&mut candidates, id.to_string());
    push_unique(&mut candidates, id.language.to_string());

    let two_letter = id.language.as_str();
    if let Some(&(_, terminology, bibliographic)) =
        ISO_639_2.iter().find(|&&(two, _, _)| two == two_letter)
    {
        push_unique(&mut candidates, terminology.to_string());
        push_unique(&mut candidates, bibliographic.to_string());
    }

    candidates
}

fn push_unique(candidates: &mut Vec<String>, candidate: String) {
    if !candidates.contains(&candidate) {
        candidates.push(candidate);
    }
}

/// ISO 639-1 → ISO 639-2 terminology (T) and bibliographic (B) codes.
///
/// T and B coincide for most languages; the divergent pairs (`fra`/`fre`,
/// `deu`/`ger`, …) are the reason both columns exist.
static ISO_639_2: &[(&str, &str, &str)] = &[
    ("ar", "ara", "ara"),
    ("bg", "bul", "bul"),
    ("bn", "ben", "ben"),
    ("bo", "bod", "tib"),
    ("ca", "cat", "cat"),
    ("cs", "ces", "cze"),
    ("cy", "cym", "wel"),
    ("da", "dan", "dan"),
    ("de", "deu", "ger"),
    ("el", "ell", "gre"),
    ("en", "eng", "eng"),
    ("es", "spa", "spa"),
    ("et", "est", "est"),
    ("eu", "eus", "baq"),
    ("fa", "fas", "per"),
    ("fi", "fin", "fin"),
    ("fr", "fra", "fre"),
    ("ga", "gle", "gle"),
    ("gl", "glg", "glg"),
    ("he", "heb", "heb"),
    ("hi", "hin", "hin"),
    ("hr", "hrv", "hrv"),
    ("hu", "hun", "hun"),
    ("hy", "hye", "arm"),
    ("id", "ind", "ind"),
    ("is", "isl", "ice"),
    ("it", "ita", "ita"),
    ("ja", "jpn", "jpn"),
    ("ka", "kat", "geo"),
    ("ko", "kor", "kor"),
    ("lt", "lit", "lit"),
    ("lv", "lav", "lav"),
    ("mi", "mri", "mao"),
    ("mk", "mkd", "mac"),
    ("ms", "msa", "may"),
    ("my", "mya", "bur"),
    ("nb", "nob", "nob"),
    ("nl", "nld", "dut"),
    ("no", "nor", "nor"),
    ("pl", "pol", "pol"),
    ("pt", "por", "por"),
    ("ro", "ron", "rum"),
    ("ru", "rus", "rus"),
    ("sk", "slk", "slo"),
    ("sl", "slv", "slv"),
    ("sq", "sqi", "alb"),
    ("sr", "srp", "srp"),
    ("sv", "swe", "swe"),
    ("th", "tha", "tha"),
    ("tr", "tur", "tur"),
    ("uk", "ukr", "ukr"),
    ("vi", "vie", "vie"),
    ("zh", "zho", "chi"),
];
