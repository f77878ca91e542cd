//! Word tokenizer.
//!
//! A word is a maximal run of ASCII letters or digits. Every other character,
//! including non-ASCII letters, is a separator.

#[inline]
const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Iterator over the words of a text, in order.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && !is_word_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < bytes.len() && is_word_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        // Word bytes are ASCII, so both bounds are char boundaries.
        Some(&self.text[start..self.pos])
    }
}

/// Splits `text` into words.
#[must_use]
pub fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}

/// Counts words without allocating.
#[must_use]
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for &b in text.as_bytes() {
        if is_word_byte(b) {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else {
            in_word = false;
        }
    }
    count
}
