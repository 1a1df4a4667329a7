use std::fmt;

use unicode_normalization::UnicodeNormalization;

// The page's loose `local@domain.tld` shape. No RFC-level correctness is
// attempted.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

const MIN_MESSAGE_CHARS: usize = 10;

pub type FieldVerdict = std::result::Result<(), FieldError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    InvalidEmailFormat,
    MessageTooShort,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidEmailFormat => "Please enter a valid email address",
            Self::MessageTooShort => "Message must be at least 10 characters",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

pub fn validate_email(value: &str) -> FieldVerdict {
    let trimmed = value.trim();
    let matched = fancy_regex::Regex::new(EMAIL_PATTERN)
        .ok()
        .map(|pattern| pattern.is_match(trimmed).unwrap_or(false))
        .unwrap_or(false);
    if matched {
        Ok(())
    } else {
        Err(FieldError::InvalidEmailFormat)
    }
}

// Characters are counted after NFC normalization so a decomposed accent
// pair counts as one character.
pub fn validate_message(value: &str) -> FieldVerdict {
    if value.trim().nfc().count() >= MIN_MESSAGE_CHARS {
        Ok(())
    } else {
        Err(FieldError::MessageTooShort)
    }
}
