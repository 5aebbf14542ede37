//! Locale store: loading, merging and atomic reloading of locale data.
//!
//! The store is built from three kinds of source, applied in order:
//!
//! 1. the catalogue bundled into the crate,
//! 2. every `*.json` file found below each search-path directory,
//! 3. documents added programmatically with [`LocaleStore::add_document`].
//!
//! Each document is a JSON object whose top-level keys are locale
//! identifiers. Documents for the same locale deep-merge into one tree.
//!
//! Reloading always builds a complete new tree before swapping a single
//! `Arc`, so callers either see the old tree or the new one, never a mix.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::LocaleError;
use crate::node::Node;

/// Locale documents compiled into the crate.
const BUNDLED: &[(&str, &str)] = &[
    ("bundled/de.json", include_str!("../locales/de.json")),
    ("bundled/en.json", include_str!("../locales/en.json")),
    ("bundled/ru.json", include_str!("../locales/ru.json")),
    ("bundled/uk.json", include_str!("../locales/uk.json")),
];

/// Locale identifier to data tree.
type LocaleTree = BTreeMap<String, Node>;

/// An inline document supplied by the caller.
#[derive(Debug, Clone)]
struct InlineDocument {
    name: Utf8PathBuf,
    contents: String,
}

/// In-memory locale data, keyed by locale and then by key path.
///
/// # Example
///
/// ```
/// use locale_faker::LocaleStore;
///
/// let store = LocaleStore::bundled().expect("bundled locales load");
/// assert!(store.get("en", "lorem.words").is_some());
/// assert!(store.get("en", "lorem.nonsense").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LocaleStore {
    search_path: Vec<Utf8PathBuf>,
    documents: Vec<InlineDocument>,
    tree: Arc<LocaleTree>,
}

impl LocaleStore {
    /// Builds a store holding only the bundled catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if a bundled document fails to parse.
    pub fn bundled() -> Result<Self, LocaleError> {
        Self::with_search_path(Vec::<Utf8PathBuf>::new())
    }

    /// Builds a store from the bundled catalogue plus the given directories.
    ///
    /// Directories are read in the order given; within a directory, files
    /// are applied in path order.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if a directory cannot be read or a document
    /// is malformed.
    pub fn with_search_path<I, P>(directories: I) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        let search_path: Vec<Utf8PathBuf> = directories.into_iter().map(Into::into).collect();
        let tree = build_tree(&search_path, &[])?;
        Ok(Self {
            search_path,
            documents: Vec::new(),
            tree: Arc::new(tree),
        })
    }

    /// Looks up a key path in one locale, without fallback.
    #[must_use]
    pub fn get(&self, locale: &str, key_path: &str) -> Option<&Node> {
        self.tree.get(locale)?.get(key_path)
    }

    /// Returns `true` when any source defined the locale.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.tree.contains_key(locale)
    }

    /// Returns the identifiers of every loaded locale, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tree.keys().map(String::as_str)
    }

    /// Returns the directories searched for locale files.
    #[must_use]
    pub fn search_path(&self) -> &[Utf8PathBuf] {
        &self.search_path
    }

    /// Appends a directory to the search path.
    ///
    /// The directory is read on the next [`reload`](Self::reload).
    pub fn extend_search_path(&mut self, directory: impl Into<Utf8PathBuf>) {
        self.search_path.push(directory.into());
    }

    /// Adds a JSON document and rebuilds the tree with it.
    ///
    /// The document is kept, so later reloads apply it again after the
    /// search-path files.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the rebuilt tree cannot be loaded; the
    /// store is left unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use locale_faker::LocaleStore;
    ///
    /// let mut store = LocaleStore::bundled().expect("bundled locales load");
    /// store
    ///     .add_document("pirate", r#"{"en-pirate": {"lorem": {"words": ["arr"]}}}"#)
    ///     .expect("document loads");
    /// assert!(store.has_locale("en-pirate"));
    /// ```
    pub fn add_document(
        &mut self,
        name: impl Into<Utf8PathBuf>,
        contents: impl Into<String>,
    ) -> Result<(), LocaleError> {
        let mut documents = self.documents.clone();
        documents.push(InlineDocument {
            name: name.into(),
            contents: contents.into(),
        });
        let tree = build_tree(&self.search_path, &documents)?;
        self.documents = documents;
        self.tree = Arc::new(tree);
        Ok(())
    }

    /// Re-reads every source and swaps in the resulting tree.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if any source fails; the previous tree stays
    /// in place.
    pub fn reload(&mut self) -> Result<(), LocaleError> {
        let tree = build_tree(&self.search_path, &self.documents)?;
        self.tree = Arc::new(tree);
        info!(
            locales = self.tree.len(),
            directories = self.search_path.len(),
            "locale data reloaded"
        );
        Ok(())
    }
}

fn build_tree(
    search_path: &[Utf8PathBuf],
    documents: &[InlineDocument],
) -> Result<LocaleTree, LocaleError> {
    let mut tree = LocaleTree::new();

    for (name, contents) in BUNDLED {
        merge_document(&mut tree, Utf8Path::new(name), contents)?;
    }

    for directory in search_path {
        for (path, contents) in read_locale_files(directory)? {
            merge_document(&mut tree, &path, &contents)?;
        }
    }

    for document in documents {
        merge_document(&mut tree, &document.name, &document.contents)?;
    }

    for (locale, root) in &tree {
        debug!(
            locale = %locale,
            sections = root.as_map().map_or(0, BTreeMap::len),
            "locale loaded"
        );
    }

    Ok(tree)
}

fn merge_document(
    tree: &mut LocaleTree,
    path: &Utf8Path,
    contents: &str,
) -> Result<(), LocaleError> {
    let value: Value = serde_json::from_str(contents).map_err(|err| LocaleError::ParseError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let Value::Object(locales) = value else {
        return Err(LocaleError::InvalidRoot {
            path: path.to_path_buf(),
        });
    };

    for (locale, data) in locales {
        if !data.is_object() {
            return Err(LocaleError::InvalidRoot {
                path: path.to_path_buf(),
            });
        }
        debug!(locale = %locale, source = %path, "merging locale document");
        match tree.entry(locale) {
            Entry::Occupied(mut slot) => slot.get_mut().merge(Node::from(data)),
            Entry::Vacant(slot) => {
                slot.insert(Node::from(data));
            }
        }
    }

    Ok(())
}

/// Reads every `*.json` file below `root`, sorted by path.
fn read_locale_files(root: &Utf8Path) -> Result<Vec<(Utf8PathBuf, String)>, LocaleError> {
    let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(|err| io_error(root, &err))?;
    let mut files = Vec::new();
    collect_locale_files(&dir, root, &mut files)?;
    files.sort_by(|left, right| left.0.cmp(&right.0));
    Ok(files)
}

fn collect_locale_files(
    dir: &Dir,
    prefix: &Utf8Path,
    files: &mut Vec<(Utf8PathBuf, String)>,
) -> Result<(), LocaleError> {
    let entries = dir.entries().map_err(|err| io_error(prefix, &err))?;
    for entry_result in entries {
        let entry = entry_result.map_err(|err| io_error(prefix, &err))?;
        // Non-UTF-8 names cannot be addressed through camino paths.
        let Ok(file_name) = entry.file_name().into_string() else {
            continue;
        };
        let path = prefix.join(&file_name);
        let file_type = entry.file_type().map_err(|err| io_error(&path, &err))?;

        if file_type.is_dir() {
            let child = dir
                .open_dir(&file_name)
                .map_err(|err| io_error(&path, &err))?;
            collect_locale_files(&child, &path, files)?;
        } else if file_type.is_file() && path.extension() == Some("json") {
            let contents = dir
                .read_to_string(&file_name)
                .map_err(|err| io_error(&path, &err))?;
            files.push((path, contents));
        }
    }
    Ok(())
}

fn io_error(path: &Utf8Path, err: &io::Error) -> LocaleError {
    LocaleError::IoError {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
