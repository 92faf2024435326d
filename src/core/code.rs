//! Mastermind code representation
//!
//! A Code is the ordered symbol sequence used for both the secret solution and each guess.

use super::CodeError;
use std::fmt;
use std::str::FromStr;

/// Symbols a code may be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Every character is a valid symbol
    #[default]
    Any,
    /// Decimal digits `0`-`9` only
    Digits,
}

impl Alphabet {
    /// Check whether `symbol` belongs to this alphabet
    #[inline]
    #[must_use]
    pub const fn contains(self, symbol: char) -> bool {
        match self {
            Self::Any => true,
            Self::Digits => symbol.is_ascii_digit(),
        }
    }

    /// Name used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Digits => "digits",
        }
    }
}

impl FromStr for Alphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "digits" | "digit" | "numeric" => Ok(Self::Digits),
            other => Err(format!("Unknown alphabet: {other} (expected 'any' or 'digits')")),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered, fixed-length sequence of symbols
///
/// Keeps the original text for display alongside the decoded symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    text: String,
    symbols: Vec<char>,
}

impl Code {
    /// Create a code from any string, treating every `char` as one symbol
    ///
    /// # Examples
    /// ```
    /// use mastermind_scorer::core::Code;
    ///
    /// let code = Code::new("1234");
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.symbols(), &['1', '2', '3', '4']);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let symbols = text.chars().collect();
        Self { text, symbols }
    }

    /// Create a code, rejecting symbols outside `alphabet`
    ///
    /// # Errors
    /// Returns [`CodeError::InvalidSymbol`] for the first symbol not in the alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind_scorer::core::{Alphabet, Code};
    ///
    /// assert!(Code::parse("1234", Alphabet::Digits).is_ok());
    /// assert!(Code::parse("12a4", Alphabet::Digits).is_err());
    /// assert!(Code::parse("12a4", Alphabet::Any).is_ok());
    /// ```
    pub fn parse(text: impl Into<String>, alphabet: Alphabet) -> Result<Self, CodeError> {
        let code = Self::new(text);

        if let Some((position, &symbol)) = code
            .symbols
            .iter()
            .enumerate()
            .find(|&(_, &symbol)| !alphabet.contains(symbol))
        {
            return Err(CodeError::InvalidSymbol { symbol, position });
        }

        Ok(code)
    }

    /// Get the code as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the decoded symbols in order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Same symbols in reverse order
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.text.chars().rev().collect::<String>())
    }
}

impl From<&str> for Code {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Code {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
