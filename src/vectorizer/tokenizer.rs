/// Non-ASCII symbols stripped before splitting.
/// Typographic quotes and dashes, bullets (including the private-use glyphs
/// PDF extraction emits for Symbol/Wingdings bullets), currency, trademark,
/// degree, superscripts, box drawing and a few stray letters.
pub const DENYLIST: &[char] = &[
    '\u{201C}', // “
    '\u{201D}', // ”
    '\u{2013}', // –
    '\u{2014}', // —
    '\u{2022}', // •
    '\u{00FC}', // ü
    '\u{F0FC}',
    '\u{2010}', // ‐
    '\u{F0A9}',
    '\u{25AA}', // ▪
    '\u{2015}', // ―
    '\u{2016}', // ‖
    '\u{2019}', // ’
    '\u{F0B7}',
    '\u{20AC}', // €
    '\u{2018}', // ‘
    '\u{01E5}', // ǥ
    '\u{0374}', // ʹ
    '\u{00B9}', // ¹
    '\u{00B2}', // ²
    '\u{0336}', // combining long stroke
    '\u{00AD}', // soft hyphen
    '\u{03B4}', // δ
    '\u{00A2}', // ¢
    '\u{00AB}', // «
    '\u{00BB}', // »
    '\u{00B0}', // °
    '\u{00AE}', // ®
    '\u{00A9}', // ©
    '\u{2122}', // ™
    '\u{2502}', // │
];

/// Tokenizer
/// Turns raw document text into normalized word tokens.
///
/// Normalization steps, in order:
/// 1. drop ASCII punctuation, ASCII digits and every character of the denylist
/// 2. lowercase
/// 3. split on whitespace, counting the ASCII separators U+001C..U+001F as whitespace
///
/// No stemming and no stop-word removal.
///
/// # Examples
/// ```
/// use tf_idf_corpus::Tokenizer;
/// let tokens = Tokenizer::new().tokenize("Hello, WORLD! 123");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    denylist: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Tokenizer with the default denylist
    pub fn new() -> Self {
        Self { denylist: DENYLIST.to_vec() }
    }

    /// Tokenizer with extra characters removed on top of the default denylist
    pub fn with_extra_denylist<I>(extra: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut tokenizer = Self::new();
        for c in extra {
            if !tokenizer.denylist.contains(&c) {
                tokenizer.denylist.push(c);
            }
        }
        tokenizer
    }

    /// Whether the character is removed during normalization
    #[inline]
    pub fn is_stripped(&self, c: char) -> bool {
        c.is_ascii_punctuation() || c.is_ascii_digit() || self.denylist.contains(&c)
    }

    /// Strip and lowercase the text, keeping whitespace intact
    ///
    /// # Arguments
    /// * `text` - raw document text
    ///
    /// # Returns
    /// * `String` - normalized text
    pub fn normalize(&self, text: &str) -> String {
        let stripped: String = text.chars().filter(|&c| !self.is_stripped(c)).collect();
        stripped.to_lowercase()
    }

    /// Tokenize the text
    ///
    /// # Arguments
    /// * `text` - raw document text
    ///
    /// # Returns
    /// * `Vec<String>` - normalized tokens in document order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Unicode whitespace plus the file, group, record and unit separators
#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
