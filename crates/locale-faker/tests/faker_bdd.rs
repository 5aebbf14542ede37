//! Behavioural tests for the locale-faker crate.
//!
//! These tests validate deterministic replay, locale fallback, username
//! composition and address filtering against Gherkin scenarios.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::net::Ipv4Addr;

use locale_faker::{
    Faker, GenerationError, MAX_USERNAME_LENGTH, PasswordOptions, UsernameSpec, is_private_ipv4,
    is_reserved_ipv4,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the context settings and whatever was generated.
#[derive(Default, ScenarioState)]
struct World {
    seed: Slot<u64>,
    locale: Slot<String>,
    first_sample: Slot<Vec<String>>,
    second_sample: Slot<Vec<String>>,
    text: Slot<String>,
    username_result: Slot<Result<String, GenerationError>>,
    addresses: Slot<Vec<Ipv4Addr>>,
}

impl World {
    /// Builds a fresh context from the configured seed and locale.
    fn faker(&self) -> Faker {
        let seed = self.seed.get().expect("seed should be set");
        let mut faker = Faker::bundled(seed).expect("bundled locales load");
        if let Some(locale) = self.locale.get() {
            faker.set_locale(locale);
        }
        faker
    }

    fn text(&self) -> String {
        self.text.get().expect("text should be generated")
    }

    fn username_result(&self) -> Result<String, GenerationError> {
        self.username_result
            .get()
            .expect("username result should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

/// Draws one value from each generator family.
fn sample_values(faker: &mut Faker) -> Vec<String> {
    vec![
        faker.name().name().expect("name"),
        faker.internet().email(UsernameSpec::Generated).expect("email"),
        faker.internet().password(PasswordOptions::default()),
        faker.internet().ip_v6_address(),
        faker.internet().mac_address("").expect("mac"),
        faker.lorem().paragraph(2, true, 2).expect("paragraph"),
        faker.alphanumeric().alphanumeric(3..=9),
        faker.internet().uuid().to_string(),
    ]
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a faker seeded with {seed:u64}")]
fn a_faker_seeded_with(world: &World, seed: u64) {
    world.seed.set(seed);
}

#[given("the current locale is {locale}")]
fn the_current_locale_is(world: &World, locale: String) {
    world.locale.set(locale);
}

// ============================================================================
// When steps
// ============================================================================

#[when("a sample of values is generated twice")]
fn a_sample_of_values_is_generated_twice(world: &World) {
    let first = sample_values(&mut world.faker());
    let second = sample_values(&mut world.faker());
    world.first_sample.set(first);
    world.second_sample.set(second);
}

#[when("a lorem sentence is generated")]
fn a_lorem_sentence_is_generated(world: &World) {
    let sentence = world
        .faker()
        .lorem()
        .sentence(5, false, 0)
        .expect("sentence");
    world.text.set(sentence);
}

#[when("a full name is generated")]
fn a_full_name_is_generated(world: &World) {
    let name = world.faker().name().name().expect("name");
    world.text.set(name);
}

#[when("a username is generated from {text}")]
fn a_username_is_generated_from(world: &World, text: String) {
    let result = world.faker().internet().username(text);
    world.username_result.set(result);
}

#[when("a username of at least {length:usize} characters is requested")]
fn a_username_of_at_least_characters_is_requested(world: &World, length: usize) {
    let result = world
        .faker()
        .internet()
        .username(UsernameSpec::MinLength(length));
    world.username_result.set(result);
}

#[when("{count:usize} public IPv4 addresses are generated")]
fn public_ipv4_addresses_are_generated(world: &World, count: usize) {
    let mut faker = world.faker();
    let addresses = (0..count)
        .map(|_| faker.internet().public_ip_v4_address())
        .collect();
    world.addresses.set(addresses);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both samples are identical")]
fn both_samples_are_identical(world: &World) {
    let first = world.first_sample.get().expect("first sample should be set");
    let second = world
        .second_sample
        .get()
        .expect("second sample should be set");
    assert_eq!(first, second, "seeded contexts should replay");
}

#[then("the sentence is capitalised and ends with a period")]
fn the_sentence_is_capitalised_and_ends_with_a_period(world: &World) {
    let sentence = world.text();
    assert!(sentence.ends_with('.'), "{sentence}");
    assert!(
        sentence.chars().next().is_some_and(char::is_uppercase),
        "{sentence}"
    );
}

#[then("the name contains Cyrillic letters")]
fn the_name_contains_cyrillic_letters(world: &World) {
    let name = world.text();
    assert!(
        name.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c)),
        "{name}"
    );
}

#[then("the username is one of bo.peep, bo_peep, peep.bo, peep_bo")]
fn the_username_is_one_of_the_shuffled_forms(world: &World) {
    let username = world.username_result().expect("username");
    assert!(
        ["bo.peep", "bo_peep", "peep.bo", "peep_bo"].contains(&username.as_str()),
        "unexpected username {username}"
    );
}

#[then("generation fails because the argument is too large")]
fn generation_fails_because_the_argument_is_too_large(world: &World) {
    match world.username_result() {
        Err(GenerationError::ArgumentTooLarge { limit, .. }) => {
            assert_eq!(limit, MAX_USERNAME_LENGTH);
        }
        other => panic!("Expected ArgumentTooLarge, got: {other:?}"),
    }
}

#[then("none of the addresses is private or reserved")]
fn none_of_the_addresses_is_private_or_reserved(world: &World) {
    let addresses = world.addresses.get().expect("addresses should be set");
    assert!(!addresses.is_empty());
    for addr in addresses {
        assert!(!is_private_ipv4(addr), "{addr} is private");
        assert!(!is_reserved_ipv4(addr), "{addr} is reserved");
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/faker.feature",
    name = "Seeded contexts replay identical values"
)]
fn seeded_contexts_replay_identical_values(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker.feature",
    name = "Keys missing from the current locale fall back to English"
)]
fn keys_missing_from_the_current_locale_fall_back_to_english(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker.feature",
    name = "Names resolve in the current locale"
)]
fn names_resolve_in_the_current_locale(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker.feature",
    name = "Text usernames shuffle their words"
)]
fn text_usernames_shuffle_their_words(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker.feature",
    name = "Oversized username lengths are rejected"
)]
fn oversized_username_lengths_are_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/faker.feature",
    name = "Public addresses avoid private and reserved ranges"
)]
fn public_addresses_avoid_private_and_reserved_ranges(world: World) {
    let _ = world;
}
