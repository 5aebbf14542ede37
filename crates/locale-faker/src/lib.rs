//! Locale-aware, deterministic fake data generation.
//!
//! This crate produces plausible names, emails, lorem-ipsum text and network
//! identifiers for tests, demos and seed data. Values are resolved from
//! per-locale JSON data with fallback to English, and every random draw comes
//! from one seedable source, so a fixed seed replays exactly.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading and deep-merging locale documents from the bundled catalogue,
//!   search-path directories and inline JSON
//! - Key-path resolution with default-locale fallback and `#{token}`
//!   template expansion
//! - Sampling primitives (pick, shuffle, count and range resolution)
//! - Generator families borrowed from a [`Faker`] context: alphanumeric,
//!   lorem, name, company and internet
//!
//! # Example
//!
//! ```
//! use locale_faker::{Faker, UsernameSpec};
//!
//! let mut faker = Faker::bundled(42).expect("bundled locales load");
//!
//! let email = faker.internet().email("bo peep").expect("email");
//! assert!(email.starts_with("bo.peep@") || email.starts_with("bo_peep@")
//!     || email.starts_with("peep.bo@") || email.starts_with("peep_bo@"));
//!
//! faker.set_locale("ru");
//! let name = faker.name().name().expect("name");
//! let username = faker.internet().username(UsernameSpec::Generated).expect("username");
//! assert!(!name.is_ascii());
//! assert!(username.is_ascii());
//! ```

mod count;
mod error;
mod faker;
mod generators;
mod node;
mod random;
pub mod sampler;
mod settings;
mod store;

pub use count::Count;
pub use error::{GenerationError, LocaleError};
pub use faker::{DEFAULT_LOCALE, Faker};
pub use generators::{
    ALPHABET, ALPHANUMERICS, Alphanumeric, Company, DEFAULT_SEPARATORS, Internet, Lorem,
    MAX_USERNAME_LENGTH, Name, PasswordOptions, UsernameSpec, fix_umlauts, is_private_ipv4,
    is_public_ipv4, is_reserved_ipv4, normalize,
};
pub use node::Node;
pub use random::{RandomSource, random_seed, seeded_source};
pub use settings::FakerSettings;
pub use store::LocaleStore;
