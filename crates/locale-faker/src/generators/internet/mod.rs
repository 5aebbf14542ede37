//! Internet identities, addresses and tokens.
//!
//! Everything that touches names (usernames, emails, domain words) is built
//! in the default locale and passed through [`normalize`], so the output is
//! always lower-case ASCII.

mod network;
mod normalize;
mod username;

pub use network::{is_private_ipv4, is_public_ipv4, is_reserved_ipv4};
pub use normalize::{fix_umlauts, normalize};
pub use username::{MAX_USERNAME_LENGTH, UsernameSpec};

use uuid::Uuid;

use crate::error::GenerationError;
use crate::faker::{DEFAULT_LOCALE, Faker};

/// Separators used by [`Internet::username`].
pub const DEFAULT_SEPARATORS: [&str; 2] = [".", "_"];

const SAFE_EMAIL_TLDS: [&str; 3] = ["org", "com", "net"];
const SLUG_GLUES: [&str; 2] = ["-", "_"];
const PASSWORD_SYMBOLS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];
const USER_AGENT_KEY: &str = "internet.user_agent";

/// Shape of a generated password.
///
/// # Example
///
/// ```
/// use locale_faker::{Faker, PasswordOptions};
///
/// let mut faker = Faker::bundled(11).expect("bundled locales load");
/// let password = faker.internet().password(PasswordOptions {
///     min_length: 12,
///     max_length: 12,
///     ..PasswordOptions::default()
/// });
///
/// assert_eq!(password.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    /// Length of the base string.
    pub min_length: usize,
    /// Upper bound on the final length.
    pub max_length: usize,
    /// Upper-case characters at even positions.
    pub mix_case: bool,
    /// Overwrite a leading run of characters with symbols.
    pub special_chars: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 16,
            mix_case: true,
            special_chars: false,
        }
    }
}

/// Internet identity and network generators.
#[derive(Debug)]
pub struct Internet<'a> {
    faker: &'a mut Faker,
}

impl<'a> Internet<'a> {
    pub(crate) const fn new(faker: &'a mut Faker) -> Self {
        Self { faker }
    }

    /// Returns `username@domain` with a generated domain.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the username or domain fails.
    pub fn email(&mut self, spec: impl Into<UsernameSpec>) -> Result<String, GenerationError> {
        self.email_with_separators(spec, &DEFAULT_SEPARATORS)
    }

    /// Like [`Internet::email`], joining username parts with `separators`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the username or domain fails.
    pub fn email_with_separators(
        &mut self,
        spec: impl Into<UsernameSpec>,
        separators: &[&str],
    ) -> Result<String, GenerationError> {
        let user = self.username_with_separators(spec, separators)?;
        let domain = self.domain_name(false)?;
        Ok(format!("{user}@{domain}"))
    }

    /// Returns an address at a free-mail provider of the current locale.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the username or provider list fails.
    pub fn free_email(&mut self, spec: impl Into<UsernameSpec>) -> Result<String, GenerationError> {
        let user = self.username(spec)?;
        let provider = self.faker.fetch("internet.free_email")?;
        Ok(format!("{user}@{provider}"))
    }

    /// Returns an address under `example.org`, `example.com` or
    /// `example.net`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the username fails.
    pub fn safe_email(&mut self, spec: impl Into<UsernameSpec>) -> Result<String, GenerationError> {
        let user = self.username(spec)?;
        let tld = self.faker.sample(&SAFE_EMAIL_TLDS)?;
        Ok(format!("{user}@example.{tld}"))
    }

    /// Returns a password shaped by `options`.
    ///
    /// A `max_length` below `min_length` is ignored.
    pub fn password(&mut self, options: PasswordOptions) -> String {
        let extra = options.max_length.saturating_sub(options.min_length);
        let mut chars: Vec<char> = self
            .faker
            .alphanumeric()
            .alphanumeric(options.min_length)
            .chars()
            .collect();
        if extra > 0 {
            let added = self.faker.random_below(extra + 1);
            chars.extend(self.faker.alphanumeric().alphanumeric(added).chars());
        }

        if options.mix_case {
            for c in chars.iter_mut().step_by(2) {
                *c = c.to_ascii_uppercase();
            }
        }

        if options.special_chars && options.min_length > 0 {
            let replaced = self.faker.random_in_range(1, options.min_length);
            for slot in chars.iter_mut().take(replaced) {
                let index = self.faker.random_below(PASSWORD_SYMBOLS.len());
                if let Some(symbol) = PASSWORD_SYMBOLS.get(index) {
                    *slot = *symbol;
                }
            }
        }

        chars.into_iter().collect()
    }

    /// Returns `word.suffix`, or `word.word.suffix` with a subdomain.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when company names or suffixes are
    /// missing.
    pub fn domain_name(&mut self, subdomain: bool) -> Result<String, GenerationError> {
        self.faker.with_locale(DEFAULT_LOCALE, |faker| {
            let mut internet = faker.internet();
            let word = internet.domain_word()?;
            let suffix = internet.domain_suffix()?;
            if subdomain {
                let sub = internet.domain_word()?;
                Ok(format!("{sub}.{word}.{suffix}"))
            } else {
                Ok(format!("{word}.{suffix}"))
            }
        })
    }

    /// Returns the normalised first word of a company name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when company names are missing.
    pub fn domain_word(&mut self) -> Result<String, GenerationError> {
        self.faker.with_locale(DEFAULT_LOCALE, |faker| {
            let company = faker.company().name()?;
            let first = company.split(' ').next().unwrap_or_default();
            Ok(normalize(faker.locale(), first))
        })
    }

    /// Returns a top-level domain from `internet.domain_suffix`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the suffix list is missing or empty.
    pub fn domain_suffix(&mut self) -> Result<String, GenerationError> {
        self.faker.fetch("internet.domain_suffix")
    }

    /// Returns six colon-separated hex octets starting with `prefix`.
    ///
    /// `prefix` holds zero or more colon-separated hex octets, e.g. `"a0:b1"`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidMacPrefix`] when an octet does not
    /// parse or the prefix has more than six octets.
    pub fn mac_address(&mut self, prefix: &str) -> Result<String, GenerationError> {
        let invalid = || GenerationError::InvalidMacPrefix {
            prefix: prefix.to_owned(),
        };
        let mut octets = if prefix.is_empty() {
            Vec::new()
        } else {
            prefix
                .split(':')
                .map(|octet| u8::from_str_radix(octet, 16).map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()?
        };
        if octets.len() > 6 {
            return Err(invalid());
        }
        while octets.len() < 6 {
            octets.push(self.faker.random_in_range(0, u8::MAX));
        }
        Ok(octets
            .iter()
            .map(|octet| format!("{octet:02x}"))
            .collect::<Vec<_>>()
            .join(":"))
    }

    /// Returns `scheme://host/path`.
    ///
    /// A missing host is a generated domain name, a missing path is
    /// `/<username>` and a missing scheme is `http`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when a generated part fails.
    pub fn url(
        &mut self,
        host: Option<&str>,
        path: Option<&str>,
        scheme: Option<&str>,
    ) -> Result<String, GenerationError> {
        let host_part = host.map_or_else(|| self.domain_name(false), |given| Ok(given.to_owned()))?;
        let path_part = path.map_or_else(
            || {
                self.username(UsernameSpec::Generated)
                    .map(|user| format!("/{user}"))
            },
            |given| Ok(given.to_owned()),
        )?;
        let scheme_part = scheme.unwrap_or("http");
        Ok(format!("{scheme_part}://{host_part}{path_part}"))
    }

    /// Returns `words` as a lower-case slug joined by `glue`.
    ///
    /// Missing words are two lorem words; a missing glue is `-` or `_`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when lorem words are needed but missing.
    pub fn slug(&mut self, words: Option<&str>, glue: Option<&str>) -> Result<String, GenerationError> {
        let joiner = glue.map_or_else(
            || self.faker.sample(&SLUG_GLUES).map(|picked| (*picked).to_owned()),
            |given| Ok(given.to_owned()),
        )?;
        let text = words.map_or_else(
            || self.faker.lorem().words(2, false).map(|picked| picked.join(" ")),
            |given| Ok(given.to_owned()),
        )?;
        Ok(text
            .replace([',', '.'], "")
            .replace(' ', &joiner)
            .to_lowercase())
    }

    /// Returns 64 random lower-case hex digits.
    pub fn device_token(&mut self) -> String {
        let mut bytes = [0_u8; 32];
        self.faker.fill_bytes(&mut bytes);
        let digits: Vec<char> = bytes
            .iter()
            .flat_map(|byte| format!("{byte:02x}").chars().collect::<Vec<_>>())
            .collect();
        self.faker.shuffle(&digits).into_iter().collect()
    }

    /// Returns a browser user-agent string.
    ///
    /// A known `vendor` picks from that vendor's list; otherwise the vendor
    /// is chosen at random.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when `internet.user_agent` is missing or
    /// is not a map of lists.
    pub fn user_agent(&mut self, vendor: Option<&str>) -> Result<String, GenerationError> {
        let vendors: Vec<String> = self
            .faker
            .resolve(USER_AGENT_KEY)?
            .as_map()
            .ok_or_else(|| GenerationError::UnexpectedNode {
                key: USER_AGENT_KEY.to_owned(),
                expected: "a map of vendor lists",
            })?
            .keys()
            .cloned()
            .collect();
        let chosen = match vendor {
            Some(known) if vendors.iter().any(|name| name == known) => known.to_owned(),
            _ => self.faker.sample(&vendors)?.clone(),
        };
        self.faker.fetch(&format!("{USER_AGENT_KEY}.{chosen}"))
    }

    /// Returns a version 4 UUID drawn from the context's random source.
    pub fn uuid(&mut self) -> Uuid {
        let mut bytes = [0_u8; 16];
        self.faker.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }

    /// Normalises `text` under the current locale; see [`normalize`].
    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        normalize(self.faker.locale(), text)
    }

    /// Folds umlauts; see [`fix_umlauts`].
    #[must_use]
    pub fn fix_umlauts(&self, text: &str) -> String {
        fix_umlauts(text)
    }
}
