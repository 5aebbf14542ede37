//! Generators layered over the resolver and sampler.
//!
//! Each generator family is a short-lived handle borrowed from a
//! [`Faker`](crate::Faker), e.g. `faker.internet().email(..)`. Handles own no
//! state of their own; composite generators reach other families through the
//! same context, so they share its locale and random source.

mod alphanumeric;
mod internet;
mod lorem;
mod person;

pub use alphanumeric::{ALPHABET, ALPHANUMERICS, Alphanumeric};
pub use internet::{
    DEFAULT_SEPARATORS, Internet, MAX_USERNAME_LENGTH, PasswordOptions, UsernameSpec,
    fix_umlauts, is_private_ipv4, is_public_ipv4, is_reserved_ipv4, normalize,
};
pub use lorem::Lorem;
pub use person::{Company, Name};

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
