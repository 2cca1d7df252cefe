//! UI string dictionaries.
//!
//! Every dictionary has the same nested shape, enforced by the type: a
//! missing entry is a compile error for the built-in tables and a
//! deserialization error for dictionaries loaded from JSON.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;

/// A single UI string: borrowed for built-in tables, owned when loaded.
pub type Text = Cow<'static, str>;

const fn text(s: &'static str) -> Text {
    Cow::Borrowed(s)
}

/// Site identity strings used in page titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetaStrings {
    pub brand: Text,
    pub home: Text,
    pub blog: Text,
}

/// Navigation bar labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavStrings {
    pub about: Text,
    pub projects: Text,
    pub blog: Text,
    pub contact: Text,
    pub language_switcher_label: Text,
}

/// Landing page hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroStrings {
    pub name: Text,
    pub role: Text,
    pub description: Text,
    pub view_work: Text,
    pub cta: Text,
}

/// Featured projects section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectsStrings {
    pub title: Text,
    pub view_code: Text,
    pub go_to_app: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LatestArticlesStrings {
    pub title: Text,
    pub description: Text,
    pub view_all: Text,
    pub read_article: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlogListStrings {
    pub title: Text,
    pub description: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactStrings {
    pub title: Text,
    pub description: Text,
    pub email_intro: Text,
    pub email_link_text: Text,
    pub resume_cta: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PostStrings {
    pub back_to_blog: Text,
}

/// Locale identifiers for the renderer (`<html lang>`, date formatting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocaleStrings {
    /// Date locale identifier; must match the registry's `date_locale`
    pub date: Text,
}

/// All UI strings for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Dictionary {
    pub meta: MetaStrings,
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub projects: ProjectsStrings,
    pub latest_articles: LatestArticlesStrings,
    pub blog_list: BlogListStrings,
    pub contact: ContactStrings,
    pub post: PostStrings,
    pub locale: LocaleStrings,
}

impl Dictionary {
    /// Every entry as a dotted key (`nav.languageSwitcherLabel`) paired
    /// with its text, in declaration order. Keys match the JSON field names.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("meta.brand", &self.meta.brand),
            ("meta.home", &self.meta.home),
            ("meta.blog", &self.meta.blog),
            ("nav.about", &self.nav.about),
            ("nav.projects", &self.nav.projects),
            ("nav.blog", &self.nav.blog),
            ("nav.contact", &self.nav.contact),
            ("nav.languageSwitcherLabel", &self.nav.language_switcher_label),
            ("hero.name", &self.hero.name),
            ("hero.role", &self.hero.role),
            ("hero.description", &self.hero.description),
            ("hero.viewWork", &self.hero.view_work),
            ("hero.cta", &self.hero.cta),
            ("projects.title", &self.projects.title),
            ("projects.viewCode", &self.projects.view_code),
            ("projects.goToApp", &self.projects.go_to_app),
            ("latestArticles.title", &self.latest_articles.title),
            ("latestArticles.description", &self.latest_articles.description),
            ("latestArticles.viewAll", &self.latest_articles.view_all),
            ("latestArticles.readArticle", &self.latest_articles.read_article),
            ("blogList.title", &self.blog_list.title),
            ("blogList.description", &self.blog_list.description),
            ("contact.title", &self.contact.title),
            ("contact.description", &self.contact.description),
            ("contact.emailIntro", &self.contact.email_intro),
            ("contact.emailLinkText", &self.contact.email_link_text),
            ("contact.resumeCta", &self.contact.resume_cta),
            ("post.backToBlog", &self.post.back_to_blog),
            ("locale.date", &self.locale.date),
        ]
        .into_iter()
        .map(|(key, value): (&'static str, &Text)| (key, value.as_ref()))
        .collect()
    }

    /// Look up an entry by dotted key. Intended for tooling; templates use
    /// the typed fields.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    /// Load a dictionary from a JSON file.
    ///
    /// # Errors
    /// Fails when the file cannot be read or when any entry is missing,
    /// unknown or not a string.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let to_error = |reason: String| ConfigError::DictionaryFile {
            path: path.display().to_string(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| to_error(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| to_error(e.to_string()))
    }
}

/// Built-in dictionary for a language code, if one ships with the crate.
pub fn builtin_dictionary(code: &str) -> Option<&'static Dictionary> {
    match code {
        "en" => Some(&ENGLISH_DICTIONARY),
        "es" => Some(&SPANISH_DICTIONARY),
        _ => None,
    }
}

// ==================== English Strings ====================

pub static ENGLISH_DICTIONARY: Dictionary = Dictionary {
    meta: MetaStrings {
        brand: text("AlfredoPrograma"),
        home: text("Portfolio"),
        blog: text("Blog"),
    },
    nav: NavStrings {
        about: text("About"),
        projects: text("Projects"),
        blog: text("Blog"),
        contact: text("Contact"),
        language_switcher_label: text("Language"),
    },
    hero: HeroStrings {
        name: text("Alfredo Arvelaez"),
        role: text("Software Developer & Cloud Engineer"),
        description: text(
            "Cloud-focused developer who thrives at the intersection of backend engineering and \
             infrastructure management, transforming business logic into high-performance systems",
        ),
        view_work: text("View my work"),
        cta: text("Get in touch"),
    },
    projects: ProjectsStrings {
        title: text("Featured projects"),
        view_code: text("View code"),
        go_to_app: text("Go to app"),
    },
    latest_articles: LatestArticlesStrings {
        title: text("Latest articles"),
        description: text(
            "Thoughts on development, cloud design, and the ever-evolving backend, infrastructure \
             and devops topics",
        ),
        view_all: text("View all"),
        read_article: text("Read article"),
    },
    blog_list: BlogListStrings {
        title: text("WebBlog"),
        description: text(
            "Thoughts on development, cloud design, and the ever-evolving backend, infrastructure \
             and devops topics",
        ),
    },
    contact: ContactStrings {
        title: text("Let's work together"),
        description: text(
            "I'm always interested in new opportunities and collaborations. Feel free to reach \
             out if you'd like to discuss a project or just say hello",
        ),
        email_intro: text("Or send me an email at"),
        email_link_text: text("alfredoprograma.dev@gmail.com"),
        resume_cta: text("Download resume"),
    },
    post: PostStrings {
        back_to_blog: text("Back to blog"),
    },
    locale: LocaleStrings {
        date: text("en-US"),
    },
};

// ==================== Spanish Strings ====================

pub static SPANISH_DICTIONARY: Dictionary = Dictionary {
    meta: MetaStrings {
        brand: text("AlfredoPrograma"),
        home: text("Portafolio"),
        blog: text("Blog"),
    },
    nav: NavStrings {
        about: text("Sobre mí"),
        projects: text("Proyectos"),
        blog: text("Blog"),
        contact: text("Contacto"),
        language_switcher_label: text("Idioma"),
    },
    hero: HeroStrings {
        name: text("Alfredo Arvelaez"),
        role: text("Desarrollador de Software y Cloud Engineer"),
        description: text(
            "Desarrollador enfocado en la nube que une backend e infraestructura para convertir \
             la lógica de negocio en sistemas de alto rendimiento",
        ),
        view_work: text("Ver proyectos"),
        cta: text("Contáctame"),
    },
    projects: ProjectsStrings {
        title: text("Proyectos destacados"),
        view_code: text("Ver código"),
        go_to_app: text("Ir a la aplicación"),
    },
    latest_articles: LatestArticlesStrings {
        title: text("Últimos artículos"),
        description: text(
            "Ideas sobre desarrollo, arquitectura en la nube y temas de backend, infraestructura \
             y DevOps",
        ),
        view_all: text("Ver todos"),
        read_article: text("Leer artículo"),
    },
    blog_list: BlogListStrings {
        title: text("Blog"),
        description: text(
            "Ideas sobre desarrollo, arquitectura en la nube y temas de backend, infraestructura \
             y DevOps",
        ),
    },
    contact: ContactStrings {
        title: text("Trabajemos juntos"),
        description: text(
            "Siempre estoy abierto a nuevas oportunidades y colaboraciones. Escríbeme si quieres \
             conversar sobre un proyecto o simplemente saludar",
        ),
        email_intro: text("O envíame un correo a"),
        email_link_text: text("alfredoprograma.dev@gmail.com"),
        resume_cta: text("Descargar CV"),
    },
    post: PostStrings {
        back_to_blog: text("Volver al blog"),
    },
    locale: LocaleStrings {
        date: text("es-ES"),
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn flatten_json(prefix: &str, value: &serde_json::Value, out: &mut BTreeSet<String>) {
        match value {
            serde_json::Value::Object(map) => {
                for (k, v) in map {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{}.{}", prefix, k)
                    };
                    flatten_json(&key, v, out);
                }
            }
            _ => {
                out.insert(prefix.to_string());
            }
        }
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_entries_match_serialized_keys() {
        let json = serde_json::to_value(&ENGLISH_DICTIONARY).unwrap();
        let mut serialized = BTreeSet::new();
        flatten_json("", &json, &mut serialized);

        let listed: BTreeSet<String> = ENGLISH_DICTIONARY
            .entries()
            .into_iter()
            .map(|(k, _)| k.to_string())
            .collect();

        assert_eq!(listed, serialized);
    }

    #[test]
    fn test_entries_have_no_duplicate_keys() {
        let entries = ENGLISH_DICTIONARY.entries();
        let unique: BTreeSet<_> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(unique.len(), entries.len());
    }

    #[test]
    fn test_builtin_entries_not_empty() {
        for dict in [&ENGLISH_DICTIONARY, &SPANISH_DICTIONARY] {
            for (key, value) in dict.entries() {
                assert!(!value.trim().is_empty(), "empty entry {}", key);
            }
        }
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_by_dotted_key() {
        assert_eq!(ENGLISH_DICTIONARY.lookup("nav.about"), Some("About"));
        assert_eq!(SPANISH_DICTIONARY.lookup("nav.about"), Some("Sobre mí"));
        assert_eq!(
            SPANISH_DICTIONARY.lookup("post.backToBlog"),
            Some("Volver al blog")
        );
    }

    #[test]
    fn test_lookup_unknown_key() {
        assert_eq!(ENGLISH_DICTIONARY.lookup("nav.missing"), None);
        assert_eq!(ENGLISH_DICTIONARY.lookup(""), None);
    }

    #[test]
    fn test_builtin_dictionary() {
        assert_eq!(builtin_dictionary("en"), Some(&ENGLISH_DICTIONARY));
        assert_eq!(builtin_dictionary("es"), Some(&SPANISH_DICTIONARY));
        assert_eq!(builtin_dictionary("fr"), None);
    }

    #[test]
    fn test_locale_entries() {
        assert_eq!(ENGLISH_DICTIONARY.locale.date, "en-US");
        assert_eq!(SPANISH_DICTIONARY.locale.date, "es-ES");
    }

    // ==================== JSON Loading Tests ====================

    #[test]
    fn test_json_round_trip_preserves_entries() {
        let json = serde_json::to_string(&SPANISH_DICTIONARY).unwrap();
        let loaded: Dictionary = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, SPANISH_DICTIONARY);
    }

    #[test]
    fn test_json_missing_entry_is_rejected() {
        let mut json = serde_json::to_value(&ENGLISH_DICTIONARY).unwrap();
        json["nav"].as_object_mut().unwrap().remove("about");

        let result = serde_json::from_value::<Dictionary>(json);
        assert!(result.unwrap_err().to_string().contains("about"));
    }

    #[test]
    fn test_json_unknown_entry_is_rejected() {
        let mut json = serde_json::to_value(&ENGLISH_DICTIONARY).unwrap();
        json["nav"]["careers"] = serde_json::Value::String("Careers".to_string());

        assert!(serde_json::from_value::<Dictionary>(json).is_err());
    }

    #[test]
    fn test_from_json_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("es.json");
        std::fs::write(&path, "{\"meta\": {}}").unwrap();

        let error = Dictionary::from_json_file(&path).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::DictionaryFile { ref path, .. } if path.ends_with("es.json")
        ));
    }

    #[test]
    fn test_from_json_file_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Dictionary::from_json_file(&dir.path().join("fr.json"));
        assert!(matches!(result, Err(ConfigError::DictionaryFile { .. })));
    }
}
