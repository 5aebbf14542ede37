//! Lorem-ipsum text.
//!
//! Words come from `lorem.words` (and optionally `lorem.supplemental`).
//! Sentence punctuation is locale data too, with plain ASCII defaults for
//! locales that do not define it.

use crate::count::Count;
use crate::error::GenerationError;
use crate::faker::Faker;
use crate::generators::alphanumeric::ALPHANUMERICS;
use crate::generators::capitalize;

const WORDS_KEY: &str = "lorem.words";
const SUPPLEMENTAL_KEY: &str = "lorem.supplemental";
const MULTIBYTE_KEY: &str = "lorem.multibyte";

/// Words per sentence inside `sentences`, `paragraph` and friends.
const WORDS_PER_SENTENCE: usize = 3;
/// Sentences per paragraph inside `paragraphs` and `paragraph_by_chars`.
const SENTENCES_PER_PARAGRAPH: usize = 3;

/// Lorem-ipsum text generators.
///
/// # Example
///
/// ```
/// use locale_faker::Faker;
///
/// let mut faker = Faker::bundled(3).expect("bundled locales load");
/// let sentence = faker.lorem().sentence(4, false, 0).expect("sentence");
///
/// assert!(sentence.ends_with('.'));
/// assert_eq!(sentence.split(' ').count(), 4);
/// ```
#[derive(Debug)]
pub struct Lorem<'a> {
    faker: &'a mut Faker,
}

impl<'a> Lorem<'a> {
    /// Conventional length for [`Lorem::characters`].
    pub const DEFAULT_CHARACTERS: usize = 255;

    pub(crate) const fn new(faker: &'a mut Faker) -> Self {
        Self { faker }
    }

    /// Returns one word.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the word list is missing or empty.
    pub fn word(&mut self) -> Result<String, GenerationError> {
        self.faker.fetch(WORDS_KEY)
    }

    /// Returns `count` words drawn without replacement from the word pool.
    ///
    /// The pool is repeated as often as needed, so large counts still
    /// succeed but then contain repeats.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the word lists are missing, or
    /// [`GenerationError::EmptyCollection`] when the pool is empty.
    pub fn words(
        &mut self,
        count: impl Into<Count>,
        supplemental: bool,
    ) -> Result<Vec<String>, GenerationError> {
        let wanted = self.faker.resolve_count(count);
        let mut pool = self.faker.fetch_all(WORDS_KEY)?;
        if supplemental {
            pool.extend(self.faker.fetch_all(SUPPLEMENTAL_KEY)?);
        }
        if pool.is_empty() {
            return Err(GenerationError::EmptyCollection);
        }

        let copies = wanted.checked_div(pool.len()).unwrap_or(0) + 1;
        let repeated: Vec<String> = pool
            .iter()
            .cycle()
            .take(pool.len() * copies)
            .cloned()
            .collect();
        let mut shuffled = self.faker.shuffle(&repeated);
        shuffled.truncate(wanted);
        Ok(shuffled)
    }

    /// Returns one random letter or digit.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the character set is fixed and non-empty.
    pub fn character(&mut self) -> Result<char, GenerationError> {
        self.faker.sample(&ALPHANUMERICS).copied()
    }

    /// Returns `count` random letters and digits.
    pub fn characters(&mut self, count: impl Into<Count>) -> String {
        self.faker.alphanumeric().alphanumeric(count)
    }

    /// Returns one entry from `lorem.multibyte`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the list is missing or empty.
    pub fn multibyte(&mut self) -> Result<String, GenerationError> {
        self.faker.fetch(MULTIBYTE_KEY)
    }

    /// Returns a capitalised sentence ending with the locale's period.
    ///
    /// The sentence has `word_count` words plus up to
    /// `random_words_to_add - 1` extra ones.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the word lists cannot be used.
    pub fn sentence(
        &mut self,
        word_count: usize,
        supplemental: bool,
        random_words_to_add: usize,
    ) -> Result<String, GenerationError> {
        let body = self.sentence_body(word_count, supplemental, random_words_to_add)?;
        let period = self.punctuation("period", ".")?;
        Ok(format!("{body}{period}"))
    }

    /// Returns `count` three-word sentences.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the word lists cannot be used.
    pub fn sentences(
        &mut self,
        count: impl Into<Count>,
        supplemental: bool,
    ) -> Result<Vec<String>, GenerationError> {
        let total = self.faker.resolve_count(count);
        (0..total)
            .map(|_| self.sentence(WORDS_PER_SENTENCE, supplemental, 0))
            .collect()
    }

    /// Returns sentences joined by the locale's sentence space.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the word lists cannot be used.
    pub fn paragraph(
        &mut self,
        sentence_count: impl Into<Count>,
        supplemental: bool,
        random_sentences_to_add: usize,
    ) -> Result<String, GenerationError> {
        let base = self.faker.resolve_count(sentence_count);
        let extra = self.faker.random_below(random_sentences_to_add);
        let sentences = self.sentences(base + extra, supplemental)?;
        let space = self.punctuation("space", " ")?;
        Ok(sentences.join(&space))
    }

    /// Returns `count` three-sentence paragraphs.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the word lists cannot be used.
    pub fn paragraphs(
        &mut self,
        count: impl Into<Count>,
        supplemental: bool,
    ) -> Result<Vec<String>, GenerationError> {
        let total = self.faker.resolve_count(count);
        (0..total)
            .map(|_| self.paragraph(SENTENCES_PER_PARAGRAPH, supplemental, 0))
            .collect()
    }

    /// Returns text of exactly `chars` characters ending in `.`.
    ///
    /// Paragraphs are appended until the text is long enough, then the text
    /// is cut to `chars - 1` characters and a period added. A request for
    /// zero characters keeps the first paragraph minus its last character.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the word lists cannot be used.
    pub fn paragraph_by_chars(
        &mut self,
        chars: usize,
        supplemental: bool,
    ) -> Result<String, GenerationError> {
        let mut text = self.paragraph(SENTENCES_PER_PARAGRAPH, supplemental, 0)?;
        while text.chars().count() < chars {
            let more = self.paragraph(SENTENCES_PER_PARAGRAPH, supplemental, 0)?;
            text.push(' ');
            text.push_str(&more);
        }
        let kept = chars
            .checked_sub(1)
            .unwrap_or_else(|| text.chars().count().saturating_sub(1));
        let mut cut: String = text.chars().take(kept).collect();
        cut.push('.');
        Ok(cut)
    }

    /// Returns a capitalised question ending with the locale's question mark.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the word lists cannot be used.
    pub fn question(
        &mut self,
        word_count: usize,
        supplemental: bool,
        random_words_to_add: usize,
    ) -> Result<String, GenerationError> {
        let body = self.sentence_body(word_count, supplemental, random_words_to_add)?;
        let mark = self.punctuation("question_mark", "?")?;
        Ok(format!("{body}{mark}"))
    }

    /// Returns `count` three-word questions.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] when the word lists cannot be used.
    pub fn questions(
        &mut self,
        count: impl Into<Count>,
        supplemental: bool,
    ) -> Result<Vec<String>, GenerationError> {
        let total = self.faker.resolve_count(count);
        (0..total)
            .map(|_| self.question(WORDS_PER_SENTENCE, supplemental, 0))
            .collect()
    }

    fn sentence_body(
        &mut self,
        word_count: usize,
        supplemental: bool,
        random_words_to_add: usize,
    ) -> Result<String, GenerationError> {
        let extra = self.faker.random_below(random_words_to_add);
        let words = self.words(word_count + extra, supplemental)?;
        Ok(capitalize(&words.join(" ")))
    }

    /// Looks up `lorem.punctuation.<name>`, using `default` when absent.
    fn punctuation(&mut self, name: &str, default: &str) -> Result<String, GenerationError> {
        match self.faker.fetch(&format!("lorem.punctuation.{name}")) {
            Err(GenerationError::MissingTranslation { .. }) => Ok(default.to_owned()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::store::LocaleStore;

    #[fixture]
    fn faker() -> Faker {
        Faker::bundled(42).expect("bundled locales load")
    }

    fn word_pool(faker: &Faker, supplemental: bool) -> HashSet<String> {
        let mut pool: HashSet<String> = faker
            .fetch_all(WORDS_KEY)
            .expect("words")
            .into_iter()
            .collect();
        if supplemental {
            pool.extend(faker.fetch_all(SUPPLEMENTAL_KEY).expect("supplemental"));
        }
        pool
    }

    #[rstest]
    fn words_come_from_the_pool(mut faker: Faker) {
        let pool = word_pool(&faker, false);
        let words = faker.lorem().words(10, false).expect("words");
        assert_eq!(words.len(), 10);
        assert!(words.iter().all(|word| pool.contains(word)));
    }

    #[rstest]
    fn supplemental_words_extend_the_pool(mut faker: Faker) {
        let pool = word_pool(&faker, true);
        let words = faker.lorem().words(500, true).expect("words");
        assert_eq!(words.len(), 500);
        assert!(words.iter().all(|word| pool.contains(word)));
    }

    #[rstest]
    fn words_larger_than_pool_repeat(mut faker: Faker) {
        let pool_size = word_pool(&faker, false).len();
        let words = faker.lorem().words(pool_size * 2 + 1, false).expect("words");
        assert_eq!(words.len(), pool_size * 2 + 1);
    }

    #[rstest]
    fn words_accept_ranges(mut faker: Faker) {
        for _ in 0..20 {
            let words = faker.lorem().words(2..=4, false).expect("words");
            assert!((2..=4).contains(&words.len()));
        }
    }

    #[rstest]
    fn empty_pool_is_an_error() {
        let mut store = LocaleStore::bundled().expect("bundled locales load");
        store
            .add_document("empty.json", r#"{"en": {"lorem": {"words": []}}}"#)
            .expect("document loads");
        let mut faker = Faker::seeded(store, 1);

        assert_eq!(
            faker.lorem().words(3, false),
            Err(GenerationError::EmptyCollection)
        );
    }

    #[rstest]
    fn sentence_is_capitalised_and_terminated(mut faker: Faker) {
        let sentence = faker.lorem().sentence(4, false, 0).expect("sentence");
        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().is_some_and(char::is_uppercase));
        assert_eq!(sentence.split(' ').count(), 4);
    }

    #[rstest]
    fn random_words_to_add_bounds_sentence_length(mut faker: Faker) {
        for _ in 0..20 {
            let sentence = faker.lorem().sentence(2, false, 3).expect("sentence");
            let count = sentence.split(' ').count();
            assert!((2..=4).contains(&count), "{count} words in {sentence}");
        }
    }

    #[rstest]
    fn question_ends_with_question_mark(mut faker: Faker) {
        let question = faker.lorem().question(3, false, 0).expect("question");
        assert!(question.ends_with('?'));
    }

    #[rstest]
    fn collections_honour_counts(mut faker: Faker) {
        assert_eq!(faker.lorem().sentences(4, false).expect("sentences").len(), 4);
        assert_eq!(faker.lorem().questions(2, false).expect("questions").len(), 2);
        assert_eq!(faker.lorem().paragraphs(3, false).expect("paragraphs").len(), 3);
    }

    #[rstest]
    fn paragraph_joins_sentences(mut faker: Faker) {
        let paragraph = faker.lorem().paragraph(3, false, 0).expect("paragraph");
        assert_eq!(paragraph.matches(". ").count(), 2);
        assert!(paragraph.ends_with('.'));
    }

    #[rstest]
    #[case(1)]
    #[case(50)]
    #[case(256)]
    #[case(1000)]
    fn paragraph_by_chars_has_exact_length(mut faker: Faker, #[case] chars: usize) {
        let text = faker.lorem().paragraph_by_chars(chars, false).expect("text");
        assert_eq!(text.chars().count(), chars);
        assert!(text.ends_with('.'));
    }

    #[test]
    fn paragraph_by_chars_zero_keeps_a_whole_paragraph() {
        let mut expected_source = Faker::bundled(5).expect("bundled locales load");
        let paragraph = expected_source
            .lorem()
            .paragraph(3, false, 0)
            .expect("paragraph");

        let mut faker = Faker::bundled(5).expect("bundled locales load");
        let text = faker.lorem().paragraph_by_chars(0, false).expect("text");

        assert!(paragraph.ends_with('.'));
        assert_eq!(text, paragraph);
    }

    #[rstest]
    fn character_is_alphanumeric(mut faker: Faker) {
        let character = faker.lorem().character().expect("character");
        assert!(ALPHANUMERICS.contains(&character));
        assert_eq!(faker.lorem().characters(12).len(), 12);
        assert_eq!(
            faker.lorem().characters(Lorem::DEFAULT_CHARACTERS).len(),
            255
        );
    }

    #[rstest]
    fn multibyte_returns_non_ascii_text(mut faker: Faker) {
        let text = faker.lorem().multibyte().expect("multibyte");
        assert!(!text.is_ascii());
    }

    #[test]
    fn locale_punctuation_overrides_defaults() {
        let mut store = LocaleStore::bundled().expect("bundled locales load");
        store
            .add_document(
                "ja.json",
                r#"{"ja": {"lorem": {"punctuation": {"period": "。", "space": "", "question_mark": "？"}}}}"#,
            )
            .expect("document loads");
        let mut faker = Faker::seeded(store, 1);
        faker.set_locale("ja");

        let paragraph = faker.lorem().paragraph(2, false, 0).expect("paragraph");
        let question = faker.lorem().question(2, false, 0).expect("question");

        assert!(paragraph.ends_with('。'));
        assert!(!paragraph.contains(". "));
        assert!(question.ends_with('？'));
    }
}
