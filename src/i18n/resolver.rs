//! Path-based language resolution and localized path construction.

use crate::i18n::{Language, LocaleRegistry};
use std::borrow::Cow;

/// Resolves the display language from request paths.
///
/// The first path segment decides: when it names a supported language it
/// is the language, otherwise the registry default applies. A content slug
/// that happens to equal a language code (`/es` for a post called "es") is
/// read as the language; that imprecision is accepted.
#[derive(Debug, Clone, Copy)]
pub struct LanguageResolver<'a> {
    registry: &'a LocaleRegistry,
}

impl<'a> LanguageResolver<'a> {
    pub fn new(registry: &'a LocaleRegistry) -> Self {
        Self { registry }
    }

    /// Resolver over the built-in registry.
    pub fn builtin() -> LanguageResolver<'static> {
        LanguageResolver::new(LocaleRegistry::builtin())
    }

    /// Resolve the language of a path. Never fails.
    ///
    /// Accepts bare paths (`/es/blog`, `es/blog`) and full URLs
    /// (`https://host/es/blog?page=2`); query and fragment are ignored.
    pub fn resolve(&self, path: &str) -> Language {
        self.leading_language(path)
            .unwrap_or_else(|| self.registry.default_language())
    }

    /// The language named by the first path segment, if any.
    pub fn leading_language(&self, path: &str) -> Option<Language> {
        self.split_language(PathParts::parse(path).path).0
    }

    /// Prefix a path with a language segment.
    ///
    /// A missing leading slash is added; the root path maps to `/{lang}`
    /// without a trailing slash. Query and fragment are kept at the end.
    pub fn build_localized_path(&self, lang: Language, path: &str) -> String {
        build_localized_path(lang, path)
    }

    /// Split a leading language segment off a path or URL.
    ///
    /// Returns the language and the remaining path (`/` when nothing is
    /// left) with origin, query and fragment kept, or `None` and the input
    /// unchanged. Agrees with [`Self::leading_language`] on every input.
    pub fn strip_language<'p>(&self, path: &'p str) -> (Option<Language>, Cow<'p, str>) {
        let parts = PathParts::parse(path);
        let (lang, rest) = self.split_language(parts.path);
        let Some(lang) = lang else {
            return (None, Cow::Borrowed(path));
        };

        let rest = if rest.is_empty() { "/" } else { rest };
        if parts.origin.is_empty() && parts.suffix.is_empty() {
            (Some(lang), Cow::Borrowed(rest))
        } else {
            (
                Some(lang),
                Cow::Owned(format!("{}{}{}", parts.origin, rest, parts.suffix)),
            )
        }
    }

    /// The same page localized for every supported language, in registry
    /// order. Used by language switchers.
    pub fn alternate_paths(&self, path: &str) -> Vec<(Language, String)> {
        let parts = PathParts::parse(path);
        let (_, rest) = self.split_language(parts.path);
        let unlocalized = format!("{}{}", rest, parts.suffix);

        self.registry
            .languages()
            .into_iter()
            .map(|lang| {
                let localized = build_localized_path(lang, &unlocalized);
                (lang, format!("{}{}", parts.origin, localized))
            })
            .collect()
    }

    /// Split the first segment of a bare path off when it names a language.
    /// The remainder keeps its leading slash and may be empty.
    fn split_language<'p>(&self, path: &'p str) -> (Option<Language>, &'p str) {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let (first, rest) = match trimmed.find('/') {
            Some(i) => (&trimmed[..i], &trimmed[i..]),
            None => (trimmed, ""),
        };

        match self.registry.get(first) {
            Some(lang) => (Some(lang), rest),
            None => (None, path),
        }
    }
}

/// Prefix a path with a language segment. See
/// [`LanguageResolver::build_localized_path`].
pub fn build_localized_path(lang: Language, path: &str) -> String {
    let (path, suffix) = split_suffix(path);

    if path.is_empty() || path == "/" {
        format!("/{}{}", lang.code(), suffix)
    } else if path.starts_with('/') {
        format!("/{}{}{}", lang.code(), path, suffix)
    } else {
        format!("/{}/{}{}", lang.code(), path, suffix)
    }
}

/// A path or URL split into origin (`https://host`), path and the
/// query/fragment suffix. Concatenating the three gives back the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathParts<'a> {
    origin: &'a str,
    path: &'a str,
    suffix: &'a str,
}

impl<'a> PathParts<'a> {
    fn parse(raw: &'a str) -> Self {
        let origin_len = match raw.find("://") {
            Some(i) if is_scheme(&raw[..i]) => {
                let authority = &raw[i + 3..];
                i + 3
                    + authority
                        .find(|c| c == '/' || c == '?' || c == '#')
                        .unwrap_or(authority.len())
            }
            _ => 0,
        };

        let (path, suffix) = split_suffix(&raw[origin_len..]);
        Self {
            origin: &raw[..origin_len],
            path,
            suffix,
        }
    }
}

/// URL scheme: a letter followed by letters, digits, `+`, `-` or `.`.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split a path at the first `?` or `#`.
fn split_suffix(path: &str) -> (&str, &str) {
    let end = path.find(|c| c == '?' || c == '#').unwrap_or(path.len());
    path.split_at(end)
}
