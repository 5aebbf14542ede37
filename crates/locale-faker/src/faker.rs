//! The generation context: locale store, current locale and random source.
//!
//! A [`Faker`] replaces process-wide configuration. Everything a generator
//! reads (the locale data, the locale to read it in, and the random source)
//! lives here and is passed explicitly, so two contexts never interfere and a
//! seeded context replays exactly.

use std::fmt;
use std::mem;

use camino::Utf8PathBuf;
use rand::RngCore;
use rand::distr::uniform::SampleUniform;
use tracing::{info, trace};

use crate::count::Count;
use crate::error::{GenerationError, LocaleError};
use crate::generators::{Alphanumeric, Company, Internet, Lorem, Name};
use crate::node::Node;
use crate::random::{RandomSource, random_seed, seeded_source};
use crate::sampler;
use crate::settings::FakerSettings;
use crate::store::LocaleStore;

/// Locale consulted when the current locale lacks a key.
pub const DEFAULT_LOCALE: &str = "en";

/// Generation context.
///
/// # Example
///
/// ```
/// use locale_faker::Faker;
///
/// let mut first = Faker::bundled(42).expect("bundled locales load");
/// let mut second = Faker::bundled(42).expect("bundled locales load");
///
/// assert_eq!(
///     first.lorem().words(3, false).expect("words"),
///     second.lorem().words(3, false).expect("words"),
/// );
/// ```
pub struct Faker {
    store: LocaleStore,
    locale: String,
    rng: RandomSource,
}

impl Faker {
    /// Creates a context over `store` drawing from `rng`.
    ///
    /// The current locale starts as [`DEFAULT_LOCALE`].
    pub fn new(store: LocaleStore, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            store,
            locale: DEFAULT_LOCALE.to_owned(),
            rng: Box::new(rng),
        }
    }

    /// Creates a context over `store` with a deterministic generator.
    #[must_use]
    pub fn seeded(store: LocaleStore, seed: u64) -> Self {
        Self::new(store, seeded_source(seed))
    }

    /// Creates a seeded context over the bundled catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the bundled catalogue fails to load.
    pub fn bundled(seed: u64) -> Result<Self, LocaleError> {
        Ok(Self::seeded(LocaleStore::bundled()?, seed))
    }

    /// Creates a context from layered settings.
    ///
    /// A missing seed is replaced by a fresh random one, which is logged so
    /// the run can be replayed.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the locale directory is not UTF-8 or its
    /// files cannot be loaded.
    pub fn from_settings(settings: &FakerSettings) -> Result<Self, LocaleError> {
        let search_path = settings
            .locale_path
            .iter()
            .map(|path| {
                Utf8PathBuf::try_from(path.clone()).map_err(|err| LocaleError::NonUtf8Path {
                    path: err.into_path_buf().display().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let store = LocaleStore::with_search_path(search_path)?;
        let seed = settings.seed.unwrap_or_else(random_seed);

        let mut faker = Self::seeded(store, seed);
        faker.set_locale(settings.locale());
        info!(seed, locale = %faker.locale, "faker context ready");
        Ok(faker)
    }

    /// Returns the locale store.
    #[must_use]
    pub const fn store(&self) -> &LocaleStore {
        &self.store
    }

    /// Returns the locale store for search-path changes and reloads.
    pub const fn store_mut(&mut self) -> &mut LocaleStore {
        &mut self.store
    }

    /// Returns the current locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Sets the current locale for subsequent calls.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Replaces the random source; the next draw comes from `rng`.
    pub fn set_rng(&mut self, rng: impl RngCore + Send + 'static) {
        self.rng = Box::new(rng);
    }

    /// Replaces the random source with a fresh deterministic one.
    pub fn reseed(&mut self, seed: u64) {
        self.set_rng(seeded_source(seed));
    }

    /// Runs `op` with the current locale temporarily set to `locale`.
    ///
    /// The previous locale is restored when `op` returns, whatever it
    /// returned.
    ///
    /// # Example
    ///
    /// ```
    /// use locale_faker::Faker;
    ///
    /// let mut faker = Faker::bundled(1).expect("bundled locales load");
    /// faker.set_locale("ru");
    /// let name = faker.with_locale("en", |inner| inner.name().first_name());
    /// assert!(name.expect("name").is_ascii());
    /// assert_eq!(faker.locale(), "ru");
    /// ```
    pub fn with_locale<T, F>(&mut self, locale: &str, op: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        let previous = mem::replace(&mut self.locale, locale.to_owned());
        let outcome = op(self);
        self.locale = previous;
        outcome
    }

    /// Resolves a key path in the current locale, falling back to
    /// [`DEFAULT_LOCALE`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::MissingTranslation`] when neither locale
    /// has the key.
    pub fn resolve(&self, key_path: &str) -> Result<&Node, GenerationError> {
        resolve_in(&self.store, &self.locale, key_path)
    }

    /// Resolves a key path to a single string.
    ///
    /// Scalars are returned as-is; lists are sampled.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the key is missing, the list is
    /// empty, or the node (or sampled element) is not a scalar.
    pub fn fetch(&mut self, key_path: &str) -> Result<String, GenerationError> {
        let node = resolve_in(&self.store, &self.locale, key_path)?;
        let picked = match node {
            Node::Scalar(value) => return Ok(value.clone()),
            Node::List(items) => sampler::sample_one(&mut *self.rng, items)?,
            Node::Map(_) => return Err(unexpected(key_path, "a scalar or list")),
        };
        picked
            .as_scalar()
            .map(str::to_owned)
            .ok_or_else(|| unexpected(key_path, "a list of scalars"))
    }

    /// Resolves a key path to every string in a list.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the key is missing or is not a list
    /// of scalars.
    pub fn fetch_all(&self, key_path: &str) -> Result<Vec<String>, GenerationError> {
        let items = self
            .resolve(key_path)?
            .as_list()
            .ok_or_else(|| unexpected(key_path, "a list"))?;
        items
            .iter()
            .map(|item| {
                item.as_scalar()
                    .map(str::to_owned)
                    .ok_or_else(|| unexpected(key_path, "a list of scalars"))
            })
            .collect()
    }

    /// Fetches a template and expands its `#{token}` placeholders.
    ///
    /// A token with a dot is an absolute key path; a bare token is looked up
    /// next to the template (`company.name` expands `#{suffix}` from
    /// `company.suffix`). Each placeholder is fetched, so lists are sampled.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the template or any placeholder fails
    /// to resolve.
    pub fn parse(&mut self, key_path: &str) -> Result<String, GenerationError> {
        let template = self.fetch(key_path)?;
        let namespace = key_path.rsplit_once('.').map_or("", |(parent, _)| parent);

        let mut expanded = String::with_capacity(template.len());
        let mut rest = template.as_str();
        while let Some((literal, after_open)) = rest.split_once("#{") {
            expanded.push_str(literal);
            let Some((token, tail)) = after_open.split_once('}') else {
                expanded.push_str("#{");
                expanded.push_str(after_open);
                return Ok(expanded);
            };
            let token_path = if token.contains('.') || namespace.is_empty() {
                token.to_owned()
            } else {
                format!("{namespace}.{token}")
            };
            expanded.push_str(&self.fetch(&token_path)?);
            rest = tail;
        }
        expanded.push_str(rest);
        Ok(expanded)
    }

    /// Picks one element uniformly from `items`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyCollection`] when `items` is empty.
    pub fn sample<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GenerationError> {
        sampler::sample_one(&mut *self.rng, items)
    }

    /// Returns a shuffled copy of `items`.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        sampler::shuffle(&mut *self.rng, items)
    }

    /// Resolves a count specifier.
    pub fn resolve_count(&mut self, count: impl Into<Count>) -> usize {
        sampler::resolve_count(&mut *self.rng, &count.into())
    }

    /// Samples between `min` and `max`, both included.
    pub fn random_in_range<T>(&mut self, min: T, max: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        sampler::random_in_range(&mut *self.rng, min, max)
    }

    /// Samples from `[0, bound)`, or returns `0` when `bound` is zero.
    pub fn random_below(&mut self, bound: usize) -> usize {
        sampler::random_below(&mut *self.rng, bound)
    }

    /// Fills `dest` with random bytes.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    /// Alphanumeric string generators.
    pub const fn alphanumeric(&mut self) -> Alphanumeric<'_> {
        Alphanumeric::new(self)
    }

    /// Lorem-ipsum text generators.
    pub const fn lorem(&mut self) -> Lorem<'_> {
        Lorem::new(self)
    }

    /// Personal name generators.
    pub const fn name(&mut self) -> Name<'_> {
        Name::new(self)
    }

    /// Company name generators.
    pub const fn company(&mut self) -> Company<'_> {
        Company::new(self)
    }

    /// Internet identity and network generators.
    pub const fn internet(&mut self) -> Internet<'_> {
        Internet::new(self)
    }
}

impl fmt::Debug for Faker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Faker")
            .field("locale", &self.locale)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

fn resolve_in<'s>(
    store: &'s LocaleStore,
    locale: &str,
    key_path: &str,
) -> Result<&'s Node, GenerationError> {
    if let Some(node) = store.get(locale, key_path) {
        return Ok(node);
    }
    if locale != DEFAULT_LOCALE {
        if let Some(node) = store.get(DEFAULT_LOCALE, key_path) {
            trace!(locale, key = key_path, "falling back to default locale");
            return Ok(node);
        }
    }
    Err(GenerationError::MissingTranslation {
        locale: locale.to_owned(),
        key: key_path.to_owned(),
    })
}

fn unexpected(key_path: &str, expected: &'static str) -> GenerationError {
    GenerationError::UnexpectedNode {
        key: key_path.to_owned(),
        expected,
    }
}
