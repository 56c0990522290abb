//! Rebuilding scan-ready SQL from template literal segments.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::config::SQL_PLACEHOLDER;

const BLOCK_COMMENT_PATTERN: &str = r"(?s)/\*.*?\*/";
const LINE_COMMENT_PATTERN: &str = r"--[^\n]*";
const WHITESPACE_PATTERN: &str = r"\s+";

/// Join literal segments, putting the placeholder where each expression was.
pub fn flatten_template<S: AsRef<str>>(quasis: &[S]) -> String {
    quasis
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SQL_PLACEHOLDER)
}

/// Strip `--` and `/* */` comments and collapse whitespace runs.
pub fn normalize_sql(sql: &str) -> String {
    static BLOCK: OnceLock<Option<Regex>> = OnceLock::new();
    static LINE: OnceLock<Option<Regex>> = OnceLock::new();
    static SPACE: OnceLock<Option<Regex>> = OnceLock::new();

    let text = replace(&BLOCK, BLOCK_COMMENT_PATTERN, Cow::Borrowed(sql));
    let text = replace(&LINE, LINE_COMMENT_PATTERN, text);
    let text = replace(&SPACE, WHITESPACE_PATTERN, text);
    text.trim().to_string()
}

fn replace<'a>(
    cell: &'static OnceLock<Option<Regex>>,
    pattern: &str,
    text: Cow<'a, str>,
) -> Cow<'a, str> {
    match cell.get_or_init(|| Regex::new(pattern).ok()) {
        Some(re) => Cow::Owned(re.replace_all(&text, " ").into_owned()),
        None => text,
    }
}
