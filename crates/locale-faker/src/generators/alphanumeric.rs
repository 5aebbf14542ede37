//! Random letter and letter-or-digit strings.

use crate::count::Count;
use crate::faker::Faker;

/// Lower-case ASCII letters.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Lower-case ASCII letters followed by the decimal digits.
pub const ALPHANUMERICS: [char; 36] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Alphanumeric string generators.
///
/// # Example
///
/// ```
/// use locale_faker::Faker;
///
/// let mut faker = Faker::bundled(7).expect("bundled locales load");
/// let token = faker.alphanumeric().alphanumeric(5);
///
/// assert_eq!(token.len(), 5);
/// assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// assert_eq!(faker.alphanumeric().alphanumeric(-3), "");
/// ```
#[derive(Debug)]
pub struct Alphanumeric<'a> {
    faker: &'a mut Faker,
}

impl<'a> Alphanumeric<'a> {
    /// Conventional length when the caller has no preference.
    pub const DEFAULT_COUNT: usize = 32;

    pub(crate) const fn new(faker: &'a mut Faker) -> Self {
        Self { faker }
    }

    /// Returns `count` random lower-case letters.
    pub fn alpha(&mut self, count: impl Into<Count>) -> String {
        self.chars_from(&ALPHABET, count.into())
    }

    /// Returns `count` random lower-case letters and digits.
    pub fn alphanumeric(&mut self, count: impl Into<Count>) -> String {
        self.chars_from(&ALPHANUMERICS, count.into())
    }

    fn chars_from(&mut self, alphabet: &[char], count: Count) -> String {
        let length = self.faker.resolve_count(count);
        (0..length)
            .filter_map(|_| alphabet.get(self.faker.random_below(alphabet.len())).copied())
            .collect()
    }
}
