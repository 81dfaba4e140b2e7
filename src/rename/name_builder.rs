use std::ffi::{OsStr, OsString};

/// Replace the first occurrence of `match_word` in `name`.
///
/// Returns `None` when the name does not contain the word (or the word is
/// empty), meaning the entry is left alone. An empty `replacement` deletes
/// the occurrence.
pub fn replace_first(name: &str, match_word: &str, replacement: &str) -> Option<String> {
    if match_word.is_empty() || !name.contains(match_word) {
        return None;
    }

    Some(name.replacen(match_word, replacement, 1))
}

/// Same as [`replace_first`] on a raw file name, so names that are not
/// valid UTF-8 can still be matched and renamed.
#[cfg(unix)]
pub fn replace_first_os(name: &OsStr, match_word: &str, replacement: &str) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    let needle = match_word.as_bytes();

    if needle.is_empty() || needle.len() > bytes.len() {
        return None;
    }

    let start = bytes.windows(needle.len()).position(|w| w == needle)?;
    let end = start + needle.len();

    let mut renamed = Vec::with_capacity(bytes.len() - needle.len() + replacement.len());
    renamed.extend_from_slice(&bytes[..start]);
    renamed.extend_from_slice(replacement.as_bytes());
    renamed.extend_from_slice(&bytes[end..]);

    Some(OsString::from_vec(renamed))
}

/// Same as [`replace_first`] on a raw file name. Names that are not valid
/// Unicode never match here.
#[cfg(not(unix))]
pub fn replace_first_os(name: &OsStr, match_word: &str, replacement: &str) -> Option<OsString> {
    name.to_str()
        .and_then(|n| replace_first(n, match_word, replacement))
        .map(OsString::from)
}
