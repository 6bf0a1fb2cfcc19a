use crate::application::ports::util::SlugGenerator;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lower-cases, strips diacritics and joins every run of characters outside
/// `[a-z0-9]` with a single hyphen.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let folded: String = input
            .trim()
            .to_lowercase()
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .nfc()
            .collect();

        let mut slug = String::with_capacity(folded.len());
        let mut pending_separator = false;
        for c in folded.chars() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                if pending_separator && !slug.is_empty() {
                    slug.push('-');
                }
                pending_separator = false;
                slug.push(c);
            } else {
                pending_separator = true;
            }
        }
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugify(input: &str) -> String {
        DefaultSlugGenerator.slugify(input)
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(slugify("Educación y Civismo"), "educacion-y-civismo");
        assert_eq!(slugify("Über Straße"), "uber-stra-e");
    }

    #[test]
    fn collapses_separators_and_trims() {
        assert_eq!(slugify("  Hello,   World!! "), "hello-world");
        assert_eq!(slugify("--a--b--"), "a-b");
        assert_eq!(slugify("Año 2024: balance"), "ano-2024-balance");
    }

    #[test]
    fn punctuation_only_yields_empty() {
        assert_eq!(slugify("!!! ... ???"), "");
        assert_eq!(slugify("日本語"), "");
    }
}
