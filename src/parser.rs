use crate::document::Document;
use crate::error::Error;

/// Represents an on-going parse over line-oriented INI text.
#[derive(Debug, Clone)]
pub(crate) struct Parser<'a> {
    text: &'a str,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Parser<'_> {
    /// Walk every physical line once and build the document, tracking a
    /// 1-based line counter for diagnostics.
    pub fn into_document(self) -> Result<Document, Error> {
        let mut document = Document::default();
        let mut current_section = None::<String>;

        for (index, raw) in self.text.lines().enumerate() {
            let line = index + 1;
            let trimmed = normalize(raw);

            // Blank lines and whole-line comments are legal anywhere.
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix('[') {
                let Some(inner) = rest.strip_suffix(']') else {
                    return Err(Error::MalformedSection { line });
                };

                let name = normalize(inner);
                validate_section_name(name, line)?;

                // Reopening a section is idempotent; existing keys survive.
                document.open_section(name);
                current_section = Some(name.to_owned());
                continue;
            }

            let Some(section) = current_section.as_deref() else {
                return Err(Error::KeyOutsideSection { line });
            };

            // Split at the first '=' only; the value may contain more of them.
            let Some((left, right)) = trimmed.split_once('=') else {
                return Err(Error::MissingEquals { line });
            };

            let key = normalize(left);
            validate_key_name(key, line)?;

            let value = normalize(right);
            document
                .open_section(section)
                .insert(key.to_owned(), value.to_owned());
        }

        Ok(document)
    }
}

/// Strip leading/trailing horizontal whitespace; internal whitespace is kept.
fn normalize(line: &str) -> &str {
    line.trim_matches([' ', '\t'])
}

fn validate_section_name(name: &str, line: usize) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptySectionName { line });
    }

    ensure_no_whitespace(name, line)
}

fn validate_key_name(name: &str, line: usize) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptyKey { line });
    }

    ensure_no_whitespace(name, line)
}

fn ensure_no_whitespace(name: &str, line: usize) -> Result<(), Error> {
    if name.chars().any(char::is_whitespace) {
        return Err(Error::NameContainsWhitespace {
            name: name.to_owned(),
            line,
        });
    }

    Ok(())
}
