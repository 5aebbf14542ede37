//! Username generation.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::Internet;
use super::normalize::normalize;
use crate::count::ordered;
use crate::error::GenerationError;
use crate::faker::{DEFAULT_LOCALE, Faker};

/// Largest minimum length a username may be asked for.
pub const MAX_USERNAME_LENGTH: usize = 1_000_000;

/// Candidates tried before settling for a username of the wrong length.
const MAX_ATTEMPTS: usize = 7;

/// Unicode word runs: letters, marks, digits and connector punctuation.
#[expect(clippy::expect_used, reason = "the pattern is a valid constant")]
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// What a username should be built from.
///
/// # Example
///
/// ```
/// use locale_faker::UsernameSpec;
///
/// assert_eq!(UsernameSpec::from("bo peep"), UsernameSpec::Text("bo peep".to_owned()));
/// assert_eq!(UsernameSpec::from(8_usize), UsernameSpec::MinLength(8));
/// assert_eq!(UsernameSpec::from(5_usize..=8), UsernameSpec::LengthRange(5..=8));
/// assert_eq!(UsernameSpec::default(), UsernameSpec::Generated);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UsernameSpec {
    /// Shuffle the words of this text.
    Text(String),
    /// Generate a name-based username at least this many characters long.
    MinLength(usize),
    /// Generate a name-based username whose length lies in this range.
    LengthRange(RangeInclusive<usize>),
    /// Generate a username from a random first (and maybe last) name.
    #[default]
    Generated,
}

impl From<&str> for UsernameSpec {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for UsernameSpec {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<usize> for UsernameSpec {
    fn from(length: usize) -> Self {
        Self::MinLength(length)
    }
}

impl From<RangeInclusive<usize>> for UsernameSpec {
    fn from(lengths: RangeInclusive<usize>) -> Self {
        Self::LengthRange(lengths)
    }
}

impl Internet<'_> {
    /// Returns a username, joining parts with `.` or `_`.
    ///
    /// # Errors
    ///
    /// See [`Internet::username_with_separators`].
    pub fn username(&mut self, spec: impl Into<UsernameSpec>) -> Result<String, GenerationError> {
        self.username_with_separators(spec, &super::DEFAULT_SEPARATORS)
    }

    /// Returns a username, joining parts with one of `separators`.
    ///
    /// Names are looked up in the default locale whatever the current
    /// locale is, so usernames stay ASCII.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::ArgumentTooLarge`] when a minimum length
    /// exceeds [`MAX_USERNAME_LENGTH`], [`GenerationError::EmptyCollection`]
    /// when `separators` is empty, or a lookup error from the name data.
    pub fn username_with_separators(
        &mut self,
        spec: impl Into<UsernameSpec>,
        separators: &[&str],
    ) -> Result<String, GenerationError> {
        let wanted = spec.into();
        self.faker
            .with_locale(DEFAULT_LOCALE, |faker| build(faker, &wanted, separators))
    }
}

fn build(
    faker: &mut Faker,
    spec: &UsernameSpec,
    separators: &[&str],
) -> Result<String, GenerationError> {
    match spec {
        UsernameSpec::Text(text) => from_text(faker, text, separators),
        UsernameSpec::MinLength(length) => with_min_length(faker, *length, separators),
        UsernameSpec::LengthRange(lengths) => {
            let (min, max) = ordered(*lengths.start(), *lengths.end());
            within_range(faker, min, max, separators)
        }
        UsernameSpec::Generated => generated(faker, separators),
    }
}

fn from_text(faker: &mut Faker, text: &str, separators: &[&str]) -> Result<String, GenerationError> {
    let words: Vec<&str> = WORD.find_iter(text).map(|word| word.as_str()).collect();
    let shuffled = faker.shuffle(&words);
    let separator = *faker.sample(separators)?;
    Ok(shuffled.join(separator).to_lowercase())
}

fn generated(faker: &mut Faker, separators: &[&str]) -> Result<String, GenerationError> {
    let locale = faker.locale().to_owned();
    let short = normalize(&locale, &faker.name().first_name()?);
    let first = normalize(&locale, &faker.name().first_name()?);
    let last = normalize(&locale, &faker.name().last_name()?);
    let separator = *faker.sample(separators)?;
    let candidates = [short, format!("{first}{separator}{last}")];
    faker.sample(&candidates).cloned()
}

fn with_min_length(
    faker: &mut Faker,
    min: usize,
    separators: &[&str],
) -> Result<String, GenerationError> {
    if min > MAX_USERNAME_LENGTH {
        return Err(GenerationError::ArgumentTooLarge {
            value: min,
            limit: MAX_USERNAME_LENGTH,
        });
    }

    let mut candidate = generated(faker, separators)?;
    let mut attempts = 1;
    while candidate.chars().count() < min && attempts < MAX_ATTEMPTS {
        candidate = generated(faker, separators)?;
        attempts += 1;
    }

    let length = candidate.chars().count();
    if length < min {
        debug!(min, length, attempts, "username shorter than requested; repeating");
    }
    if min == 0 || length == 0 {
        return Ok(candidate);
    }
    let copies = min.checked_div(length).unwrap_or(0) + 1;
    Ok(candidate.repeat(copies))
}

fn within_range(
    faker: &mut Faker,
    min: usize,
    max: usize,
    separators: &[&str],
) -> Result<String, GenerationError> {
    let fits = |candidate: &str| (min..=max).contains(&candidate.chars().count());

    let mut candidate = with_min_length(faker, min, separators)?;
    let mut attempts = 1;
    while !fits(&candidate) && attempts < MAX_ATTEMPTS {
        candidate = with_min_length(faker, min, separators)?;
        attempts += 1;
    }
    if !fits(&candidate) {
        debug!(min, max, attempts, "no username in range; truncating");
    }
    Ok(candidate.chars().take(max).collect())
}
