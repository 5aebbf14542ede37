//! Folding names into URL- and mailbox-safe tokens.

/// Replaces German umlauts and `ß` with their two-letter spellings.
///
/// Matching is case-insensitive and replacements are always lower-case;
/// every other character is kept as-is.
///
/// # Example
///
/// ```
/// use locale_faker::fix_umlauts;
///
/// assert_eq!(fix_umlauts("Jürgen Österreicher"), "Juergen oesterreicher");
/// ```
#[must_use]
pub fn fix_umlauts(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'ä' | 'Ä' => folded.push_str("ae"),
            'ö' | 'Ö' => folded.push_str("oe"),
            'ü' | 'Ü' => folded.push_str("ue"),
            'ß' | 'ẞ' => folded.push_str("ss"),
            other => folded.push(other),
        }
    }
    folded
}

/// Reduces `text` to lower-case ASCII word characters.
///
/// Under `ru` and `uk` Cyrillic letters are romanised first; umlauts are
/// always folded. Anything that is still not `[A-Za-z0-9_]` afterwards is
/// dropped.
///
/// # Example
///
/// ```
/// use locale_faker::normalize;
///
/// assert_eq!(normalize("ru", "Юлия"), "yulyya");
/// assert_eq!(normalize("en", "Jäger-Müller"), "jaegermueller");
/// assert_eq!(normalize("en", "Юлия"), "");
/// ```
#[must_use]
pub fn normalize(locale: &str, text: &str) -> String {
    let romanised = Romaniser::for_locale(locale)
        .map_or_else(|| text.to_owned(), |romaniser| romaniser.apply(text));
    fix_umlauts(&romanised)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Cyrillic romanisation following the BGN/PCGN conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Romaniser {
    Russian,
    Ukrainian,
}

impl Romaniser {
    fn for_locale(locale: &str) -> Option<Self> {
        match locale {
            "ru" => Some(Self::Russian),
            "uk" => Some(Self::Ukrainian),
            _ => None,
        }
    }

    const fn replaces(self, c: char) -> bool {
        let basic = matches!(c, 'а'..='я' | 'А'..='Я');
        match self {
            Self::Russian => basic,
            Self::Ukrainian => {
                basic || matches!(c, 'і' | 'ї' | 'є' | 'ґ' | 'І' | 'Ї' | 'Є' | 'Ґ')
            }
        }
    }

    fn apply(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if self.replaces(c) {
                out.push_str(latin(c));
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Latin spelling of a Cyrillic letter; letters without one are dropped.
fn latin(c: char) -> &'static str {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "h",
        'ґ' => "g",
        'д' => "d",
        'е' => "e",
        'є' => "ye",
        'ж' => "zh",
        'з' => "z",
        'и' | 'й' => "y",
        'і' => "i",
        'ї' => "yi",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ю' => "yu",
        'я' => "ya",
        _ => "",
    }
}
