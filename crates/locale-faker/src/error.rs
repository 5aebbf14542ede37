//! Error types for the locale-faker crate.
//!
//! Loading locale data and generating values fail in different ways, so each
//! concern gets its own `thiserror` enum: [`LocaleError`] for building the
//! locale store and [`GenerationError`] for everything that happens once a
//! [`Faker`](crate::Faker) exists.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while loading locale data.
///
/// A failed load never replaces data that was already loaded; the store keeps
/// its previous tree when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// A locale directory or file could not be read.
    #[error("failed to read locale data at '{path}': {message}")]
    IoError {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A locale document is not valid JSON.
    #[error("invalid locale JSON in '{path}': {message}")]
    ParseError {
        /// Path (or bundled name) of the document.
        path: Utf8PathBuf,
        /// Description of the parse error.
        message: String,
    },

    /// A locale document does not map locale identifiers to objects.
    #[error("locale document '{path}' must map locale identifiers to objects")]
    InvalidRoot {
        /// Path (or bundled name) of the document.
        path: Utf8PathBuf,
    },

    /// A configured locale directory is not valid UTF-8.
    #[error("locale path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the rejected path.
        path: String,
    },
}

/// Errors that can occur while generating values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The key path exists in neither the current nor the default locale.
    #[error("translation missing: '{key}' in locale '{locale}' or the default locale")]
    MissingTranslation {
        /// Locale that was current when the lookup ran.
        locale: String,
        /// Key path that was requested.
        key: String,
    },

    /// A sample was requested from a collection with no elements.
    #[error("cannot sample from an empty collection")]
    EmptyCollection,

    /// A numeric argument exceeded its safety bound.
    #[error("argument {value} is too large; the limit is {limit}")]
    ArgumentTooLarge {
        /// Value supplied by the caller.
        value: usize,
        /// Largest accepted value.
        limit: usize,
    },

    /// A key path resolved to a node of the wrong shape.
    #[error("expected {expected} at '{key}'")]
    UnexpectedNode {
        /// Key path that was requested.
        key: String,
        /// Description of the accepted shape.
        expected: &'static str,
    },

    /// A MAC address prefix could not be parsed as colon-separated octets.
    #[error("invalid MAC address prefix '{prefix}'")]
    InvalidMacPrefix {
        /// Prefix supplied by the caller.
        prefix: String,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn locale_error_io_formats_correctly() {
        let err = LocaleError::IoError {
            path: Utf8PathBuf::from("/srv/locales"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read locale data at '/srv/locales': permission denied"
        );
    }

    #[test]
    fn locale_error_invalid_root_formats_correctly() {
        let err = LocaleError::InvalidRoot {
            path: Utf8PathBuf::from("extra/en.json"),
        };
        assert_eq!(
            err.to_string(),
            "locale document 'extra/en.json' must map locale identifiers to objects"
        );
    }

    #[rstest]
    #[case::missing_translation(
        GenerationError::MissingTranslation { locale: "ru".to_owned(), key: "lorem.words".to_owned() },
        "translation missing: 'lorem.words' in locale 'ru' or the default locale"
    )]
    #[case::empty_collection(
        GenerationError::EmptyCollection,
        "cannot sample from an empty collection"
    )]
    #[case::argument_too_large(
        GenerationError::ArgumentTooLarge { value: 1_000_001, limit: 1_000_000 },
        "argument 1000001 is too large; the limit is 1000000"
    )]
    #[case::unexpected_node(
        GenerationError::UnexpectedNode { key: "internet".to_owned(), expected: "a scalar or list" },
        "expected a scalar or list at 'internet'"
    )]
    fn generation_error_formats_correctly(#[case] err: GenerationError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }
}
