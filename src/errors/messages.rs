use std::collections::HashMap;

/// Resolves an error code to a localized message template.
///
/// The catalog is supplied by the embedding application; the classifier only
/// asks for a template and falls back to the code's literal default message
/// when the lookup misses.
pub trait MessageResolver: Send + Sync {
    fn resolve(&self, code: &str, locale: &str, args: &[String]) -> Option<String>;
}

/// In-memory catalog keyed by (locale, code).
///
/// Templates carry positional placeholders: `{0}` is replaced with the first
/// argument, `{1}` with the second, and so on.
#[derive(Debug, Default)]
pub struct MessageCatalog {
    templates: HashMap<(String, String), String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, locale: &str, code: &str, template: &str) -> Self {
        self.templates
            .insert((locale.to_string(), code.to_string()), template.to_string());
        self
    }
}

impl MessageResolver for MessageCatalog {
    fn resolve(&self, code: &str, locale: &str, args: &[String]) -> Option<String> {
        self.templates
            .get(&(locale.to_string(), code.to_string()))
            .map(|template| interpolate(template, args))
    }
}

/// Substitute positional `{N}` placeholders with the matching argument.
pub fn interpolate(template: &str, args: &[String]) -> String {
    let mut message = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        message = message.replace(&format!("{{{}}}", index), arg);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_template_for_locale() {
        let catalog = MessageCatalog::new()
            .with_message("en", "ERR_2000", "User not found")
            .with_message("pt", "ERR_2000", "Usuario nao encontrado");

        assert_eq!(
            catalog.resolve("ERR_2000", "pt", &[]),
            Some("Usuario nao encontrado".to_string())
        );
    }

    #[test]
    fn missing_translation_returns_none() {
        let catalog = MessageCatalog::new().with_message("en", "ERR_2000", "User not found");

        assert_eq!(catalog.resolve("ERR_2000", "de", &[]), None);
        assert_eq!(catalog.resolve("ERR_5000", "en", &[]), None);
    }

    #[test]
    fn interpolates_positional_arguments() {
        let catalog =
            MessageCatalog::new().with_message("en", "ERR_2000", "No user with email {0}");

        assert_eq!(
            catalog.resolve("ERR_2000", "en", &["a@x.com".to_string()]),
            Some("No user with email a@x.com".to_string())
        );
    }

    #[test]
    fn interpolate_handles_repeated_and_multiple_placeholders() {
        let out = interpolate("{0} and {1}, again {0}", &["a".to_string(), "b".to_string()]);
        assert_eq!(out, "a and b, again a");
    }

    #[test]
    fn interpolate_leaves_unmatched_placeholders() {
        assert_eq!(interpolate("missing {0}", &[]), "missing {0}");
    }
}
