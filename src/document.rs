use indexmap::IndexMap;

use crate::error::Error;

/// A fully parsed configuration document.
///
/// Sections keep the order in which their headers first appeared, which is
/// the order lookup errors enumerate them in. The document is built in one
/// parse pass and never mutated afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    /// Enter the named section, creating it if this is the first time its
    /// header appears. Reopening an existing section keeps its keys.
    pub(crate) fn open_section(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_owned()).or_default()
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Resolve a dotted `"section.key"` path to the stored raw value.
    ///
    /// The path is split at the FIRST dot only, so keys may themselves
    /// contain dots. Misses report every known section or key name to make
    /// typos easy to spot.
    ///
    /// # Errors
    ///
    /// Fails when the path has no dot or an empty component, or when the
    /// section or key does not exist.
    pub fn resolve(&self, path: &str) -> Result<&str, Error> {
        let Some((section, key)) = path.split_once('.') else {
            return Err(Error::MalformedPath {
                path: path.to_owned(),
            });
        };

        if section.is_empty() || key.is_empty() {
            return Err(Error::EmptyPathComponent {
                path: path.to_owned(),
            });
        }

        let Some(entries) = self.section(section) else {
            return Err(Error::SectionNotFound {
                section: section.to_owned(),
                available: join_names(self.section_names()),
            });
        };

        entries.get(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_owned(),
            section: section.to_owned(),
            available: join_names(entries.keys()),
        })
    }
}

/// One named group of key/value pairs. Keys keep insertion order; assigning
/// an existing key again overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: IndexMap<String, String>,
}

impl Section {
    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<&str>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut document = Document::default();
        let first = document.open_section("Section1");
        first.insert("var1".to_owned(), "5".to_owned());
        first.insert("var2".to_owned(), "hello".to_owned());
        document.open_section("Section2");
        document
    }

    #[test]
    fn resolves_stored_value() {
        let document = sample();

        assert_eq!(document.resolve("Section1.var1").expect("lookup failed"), "5");
    }

    #[test]
    fn splits_path_at_first_dot_only() {
        let mut document = Document::default();
        document
            .open_section("net")
            .insert("host.primary".to_owned(), "10.0.0.1".to_owned());

        assert_eq!(
            document.resolve("net.host.primary").expect("lookup failed"),
            "10.0.0.1"
        );
    }

    #[test]
    fn path_without_dot_is_malformed() {
        let document = sample();

        let result = document.resolve("SectionOnly");

        assert!(matches!(result, Err(Error::MalformedPath { .. })));
    }

    #[test]
    fn empty_path_components_are_rejected() {
        let document = sample();

        assert!(matches!(
            document.resolve(".var1"),
            Err(Error::EmptyPathComponent { .. })
        ));
        assert!(matches!(
            document.resolve("Section1."),
            Err(Error::EmptyPathComponent { .. })
        ));
    }

    #[test]
    fn missing_section_lists_known_sections_in_order() {
        let document = sample();

        let result = document.resolve("Missing.var1");

        let Err(Error::SectionNotFound { section, available }) = result else {
            panic!("expected SectionNotFound, got {result:?}");
        };
        assert_eq!(section, "Missing");
        assert_eq!(available, "Section1, Section2");
    }

    #[test]
    fn missing_key_lists_known_keys() {
        let document = sample();

        let result = document.resolve("Section1.nope");

        let Err(Error::KeyNotFound {
            key,
            section,
            available,
        }) = result
        else {
            panic!("expected KeyNotFound, got {result:?}");
        };
        assert_eq!(key, "nope");
        assert_eq!(section, "Section1");
        assert_eq!(available, "var1, var2");
    }

    #[test]
    fn empty_section_renders_no_key_names() {
        let document = sample();

        let result = document.resolve("Section2.anything");

        let Err(Error::KeyNotFound { available, .. }) = result else {
            panic!("expected KeyNotFound, got {result:?}");
        };
        assert_eq!(available, "");
    }
}
