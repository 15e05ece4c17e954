//! Symbol tables and the mapping stage of the encode pipeline

use crate::bits::Sextet;

/// Padding symbol of the standard alphabet.
pub const PAD: char = '=';

const STANDARD_SYMBOLS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// How sextets become text.
///
/// Every alphabet maps through the standard table first. Variants then swap
/// individual symbols and may strip trailing padding, so the URL-safe
/// alphabet is configuration rather than a separate encoder.
///
/// Bit-level padding means this encoder never emits [`PAD`], so stripping
/// is a no-op on its own output; the flag is kept for symmetry with
/// encoders that do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    name: &'static str,
    substitutions: &'static [(char, char)],
    strip_padding: bool,
}

impl Alphabet {
    /// `A-Z a-z 0-9 + /`
    pub const STANDARD: Alphabet = Alphabet {
        name: "standard",
        substitutions: &[],
        strip_padding: false,
    };

    /// `A-Z a-z 0-9 - _`, never padded
    pub const URL_SAFE: Alphabet = Alphabet {
        name: "url-safe",
        substitutions: &[('+', '-'), ('/', '_')],
        strip_padding: true,
    };

    /// Short name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether encoded output has trailing [`PAD`] symbols removed.
    #[must_use]
    pub fn strips_padding(&self) -> bool {
        self.strip_padding
    }

    /// The symbol this alphabet emits for `sextet`.
    #[must_use]
    pub fn symbol(&self, sextet: Sextet) -> char {
        self.substitute(standard_symbol(sextet))
    }

    /// Whether `ch` is one of the 64 symbols of this alphabet.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        STANDARD_SYMBOLS
            .iter()
            .any(|&symbol| self.substitute(char::from(symbol)) == ch)
    }

    fn substitute(&self, ch: char) -> char {
        self.substitutions
            .iter()
            .find(|(from, _)| *from == ch)
            .map_or(ch, |&(_, to)| to)
    }

    fn restore(&self, ch: char) -> char {
        self.substitutions
            .iter()
            .find(|(_, to)| *to == ch)
            .map_or(ch, |&(from, _)| from)
    }

    /// Apply this alphabet's substitutions and padding rule to text produced
    /// with the standard table.
    pub(crate) fn finish(&self, standard: &str) -> String {
        let mut encoded: String = standard.chars().map(|ch| self.substitute(ch)).collect();
        if self.strip_padding {
            let trimmed = encoded.trim_end_matches(PAD).len();
            encoded.truncate(trimmed);
        }
        encoded
    }

    /// Turn text in this alphabet back into padded standard-alphabet text.
    ///
    /// Returns the first symbol that belongs to neither this alphabet nor the
    /// padding as the error.
    pub(crate) fn to_standard(&self, encoded: &str) -> Result<String, char> {
        let body = encoded.trim_end_matches(PAD);
        if let Some(bad) = body.chars().find(|&ch| !self.contains(ch)) {
            return Err(bad);
        }
        let mut standard: String = body.chars().map(|ch| self.restore(ch)).collect();
        standard.push_str(&encoded[body.len()..]);
        while standard.len() % 4 != 0 {
            standard.push(PAD);
        }
        Ok(standard)
    }
}

fn standard_symbol(sextet: Sextet) -> char {
    char::from(STANDARD_SYMBOLS[usize::from(sextet.value())])
}

/// Map each sextet to its symbol and concatenate, in order.
#[must_use]
pub fn map_to_alphabet(chunks: &[Sextet], alphabet: &Alphabet) -> String {
    let standard: String = chunks.iter().copied().map(standard_symbol).collect();
    alphabet.finish(&standard)
}
