use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes text for pronunciation comparison.
///
/// Transliterated Sanskrit carries diacritics (ā, ś, ṛ) that speech-to-text
/// output never reproduces, so letters are decomposed and their combining
/// marks dropped before comparing. Case is folded, punctuation removed, and
/// whitespace collapsed to single spaces.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .filter(|&c| c.is_alphanumeric() || c == '_' || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Dharma  Kshetra "), "dharma kshetra");
    }

    #[test]
    fn strips_diacritics_to_base_letters() {
        assert_eq!(normalize("Śrī Kṛṣṇa uvāca"), "sri krsna uvaca");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(normalize("dharma-kshetre, kuru-kshetre!"), "dharmakshetre kurukshetre");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
    }

    #[test]
    fn idempotent_on_normalized_text() {
        let once = normalize("Yadā yadā hi dharmasya...");
        assert_eq!(normalize(&once), once);
    }
}
