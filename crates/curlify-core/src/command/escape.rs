//! Single-quote shell escaping.

/// Quote `value` as one literal POSIX shell word.
///
/// The value is wrapped in single quotes and each embedded `'` becomes
/// `'\''`. Nothing else is touched: inside single quotes the shell treats
/// every byte, newlines and `$` included, literally.
pub fn bash_escape(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
