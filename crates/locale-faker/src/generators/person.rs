//! Personal and company names.
//!
//! These are thin wrappers over locale data. The internet generators depend
//! on them to build usernames and domain words.

use crate::error::GenerationError;
use crate::faker::Faker;

/// Personal name generators.
#[derive(Debug)]
pub struct Name<'a> {
    faker: &'a mut Faker,
}

impl<'a> Name<'a> {
    pub(crate) const fn new(faker: &'a mut Faker) -> Self {
        Self { faker }
    }

    /// Returns a given name from `name.first_name`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the locale data is missing or empty.
    pub fn first_name(&mut self) -> Result<String, GenerationError> {
        self.faker.fetch("name.first_name")
    }

    /// Returns a family name from `name.last_name`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the locale data is missing or empty.
    pub fn last_name(&mut self) -> Result<String, GenerationError> {
        self.faker.fetch("name.last_name")
    }

    /// Returns a full name expanded from the `name.name` templates.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when a template or its parts are missing.
    pub fn name(&mut self) -> Result<String, GenerationError> {
        self.faker.parse("name.name")
    }
}

/// Company name generators.
#[derive(Debug)]
pub struct Company<'a> {
    faker: &'a mut Faker,
}

impl<'a> Company<'a> {
    pub(crate) const fn new(faker: &'a mut Faker) -> Self {
        Self { faker }
    }

    /// Returns a company name expanded from the `company.name` templates.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when a template or its parts are missing.
    pub fn name(&mut self) -> Result<String, GenerationError> {
        self.faker.parse("company.name")
    }

    /// Returns a legal-form suffix such as `LLC`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the locale data is missing or empty.
    pub fn suffix(&mut self) -> Result<String, GenerationError> {
        self.faker.fetch("company.suffix")
    }
}
