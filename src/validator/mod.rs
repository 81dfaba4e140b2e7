mod types;

pub use types::*;

use std::path::PathBuf;
use tracing::debug;

/// Characters rejected in every value because common filesystems forbid them
pub const ILLEGAL_CHARS: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Extra characters rejected in words, which must stay inside a single file name
const WORD_ONLY_ILLEGAL_CHARS: [char; 3] = ['/', '\\', '\0'];

fn find_illegal_char(value: &str, word: bool) -> Option<char> {
    value.chars().find(|c| {
        ILLEGAL_CHARS.contains(c) || (word && WORD_ONLY_ILLEGAL_CHARS.contains(c))
    })
}

/// Validate the target directory value
pub fn validate_directory(value: Option<&str>) -> Result<PathBuf, ArgumentError> {
    let value = value.unwrap_or_default();

    if value.is_empty() {
        return Err(ArgumentError::MissingValue { name: DIR_ARG });
    }

    if let Some(ch) = find_illegal_char(value, false) {
        return Err(ArgumentError::IllegalCharacter {
            name: DIR_ARG,
            value: value.to_string(),
            ch,
        });
    }

    debug!(dir = %value, "Directory argument accepted");
    Ok(PathBuf::from(value))
}

/// Validate the match word; it must be non-empty
pub fn validate_match_word(value: Option<&str>) -> Result<String, ArgumentError> {
    let value = value.unwrap_or_default();

    if value.is_empty() {
        return Err(ArgumentError::MissingValue { name: WORD_ARG });
    }

    if let Some(ch) = find_illegal_char(value, true) {
        return Err(ArgumentError::IllegalCharacter {
            name: WORD_ARG,
            value: value.to_string(),
            ch,
        });
    }

    Ok(value.to_string())
}

/// Validate the replacement word. Empty (or absent) means the match is deleted.
pub fn validate_replacement(value: Option<&str>) -> Result<String, ArgumentError> {
    let value = value.unwrap_or_default();

    if let Some(ch) = find_illegal_char(value, true) {
        return Err(ArgumentError::IllegalCharacter {
            name: NEW_ARG,
            value: value.to_string(),
            ch,
        });
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_directory() {
        let path = validate_directory(Some("/tmp/photos")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/photos"));
    }

    #[test]
    fn test_directory_required() {
        assert_eq!(
            validate_directory(None),
            Err(ArgumentError::MissingValue { name: DIR_ARG })
        );
        assert_eq!(
            validate_directory(Some("")),
            Err(ArgumentError::MissingValue { name: DIR_ARG })
        );
    }

    #[test]
    fn test_directory_illegal_characters() {
        for bad in ["photos<1", "a>b", "c:d", "x\"y", "p|q", "what?", "all*"] {
            let result = validate_directory(Some(bad));
            assert!(
                matches!(result, Err(ArgumentError::IllegalCharacter { name: DIR_ARG, .. })),
                "expected rejection for {}",
                bad
            );
        }
    }

    #[test]
    fn test_directory_allows_separators() {
        assert!(validate_directory(Some("./some/nested dir")).is_ok());
    }

    #[test]
    fn test_empty_match_word_rejected() {
        assert_eq!(
            validate_match_word(Some("")),
            Err(ArgumentError::MissingValue { name: WORD_ARG })
        );
    }

    #[test]
    fn test_match_word_rejects_path_separator() {
        let result = validate_match_word(Some("a/b"));
        assert_eq!(
            result,
            Err(ArgumentError::IllegalCharacter {
                name: WORD_ARG,
                value: "a/b".to_string(),
                ch: '/',
            })
        );
    }

    #[test]
    fn test_replacement_may_be_empty() {
        assert_eq!(validate_replacement(None).unwrap(), "");
        assert_eq!(validate_replacement(Some("")).unwrap(), "");
        assert_eq!(validate_replacement(Some("_final")).unwrap(), "_final");
    }

    #[test]
    fn test_replacement_illegal_character() {
        let err = validate_replacement(Some("new*")).unwrap_err();
        assert_eq!(err.argument(), NEW_ARG);
        assert!(err.to_string().contains("new*"));
    }
}
