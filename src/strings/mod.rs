//! String validation and grouped-number parsing
//!
//! Character-class checks on whole strings, email validation, and parsing of
//! numbers written with `,` thousands separators and a `.` decimal point
//! ("1,234.56"). The separator convention is fixed; locale-aware formats are
//! a platform concern this crate deliberately leaves outside its scope.

use std::sync::OnceLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// Extension methods on `str`
///
/// The character-class checks return `false` for the empty string: an empty
/// string is neither numeric, alphabetic, nor alphanumeric.
///
/// # Example
///
/// ```
/// use collkit::strings::StrExt;
///
/// assert!("12345".is_numeric());
/// assert!("HelloWorld".is_alphabetic());
/// assert!("abc123".is_alphanumeric());
/// assert!("test@example.com".is_valid_email());
///
/// assert_eq!("1,234".grouped_int(), Some(1234));
/// assert_eq!("1,234.56".grouped_f64(), Some(1234.56));
/// ```
pub trait StrExt {
    /// Nonempty and every character is numeric
    fn is_numeric(&self) -> bool;

    /// Nonempty and every character is alphabetic
    fn is_alphabetic(&self) -> bool;

    /// Nonempty and every character is alphabetic or numeric
    fn is_alphanumeric(&self) -> bool;

    /// Whether the string is a plausible email address
    fn is_valid_email(&self) -> bool;

    /// Parse an integer that may carry `,` thousands separators
    ///
    /// Accepts an optional leading sign and surrounding whitespace. When
    /// separators are present, the leading digit group must have one to
    /// three digits and every following group exactly three. Returns `None`
    /// on any malformed input, including a decimal point.
    fn grouped_int(&self) -> Option<i64>;

    /// Parse a float that may carry `,` thousands separators in its integer
    /// part and a `.` decimal point
    ///
    /// Same grouping rules as [`grouped_int`](StrExt::grouped_int); the
    /// fractional part, when present, must be nonempty and all digits.
    fn grouped_f64(&self) -> Option<f64>;
}

impl StrExt for str {
    fn is_numeric(&self) -> bool {
        !self.is_empty() && self.chars().all(char::is_numeric)
    }

    fn is_alphabetic(&self) -> bool {
        !self.is_empty() && self.chars().all(char::is_alphabetic)
    }

    fn is_alphanumeric(&self) -> bool {
        !self.is_empty() && self.chars().all(char::is_alphanumeric)
    }

    fn is_valid_email(&self) -> bool {
        email_re().is_match(self)
    }

    fn grouped_int(&self) -> Option<i64> {
        let digits = ungrouped(self)?;
        if digits.contains('.') {
            return None;
        }
        digits.parse().ok()
    }

    fn grouped_f64(&self) -> Option<f64> {
        ungrouped(self)?.parse().ok()
    }
}

/// Strip a validated grouping layout, leaving a plain numeric literal
fn ungrouped(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if body.is_empty() {
        return None;
    }

    let mut plain = String::with_capacity(trimmed.len());
    plain.push_str(sign);

    if !body.contains(',') {
        plain.push_str(body);
        return Some(plain);
    }

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    let mut groups = int_part.split(',');
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || !all_ascii_digits(first) {
        return None;
    }
    plain.push_str(first);
    for group in groups {
        if group.len() != 3 || !all_ascii_digits(group) {
            return None;
        }
        plain.push_str(group);
    }

    if let Some(frac) = frac_part {
        if frac.is_empty() || !all_ascii_digits(frac) {
            return None;
        }
        plain.push('.');
        plain.push_str(frac);
    }

    Some(plain)
}

fn all_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!("12345".is_numeric());
        assert!(!"12a45".is_numeric());
        assert!(!"".is_numeric());
    }

    #[test]
    fn test_is_alphabetic() {
        assert!("HelloWorld".is_alphabetic());
        assert!(!"Hello World".is_alphabetic());
        assert!(!"abc123".is_alphabetic());
        assert!(!"".is_alphabetic());
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!("abc123".is_alphanumeric());
        assert!(!"abc 123".is_alphanumeric());
        assert!(!"abc-123".is_alphanumeric());
        assert!(!"".is_alphanumeric());
    }

    #[test]
    fn test_valid_emails() {
        assert!("test@example.com".is_valid_email());
        assert!("first.last+tag@sub.domain.org".is_valid_email());
        assert!("USER_99%x@host-name.io".is_valid_email());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!"".is_valid_email());
        assert!(!"plainaddress".is_valid_email());
        assert!(!"missing@tld".is_valid_email());
        assert!(!"@no-local.com".is_valid_email());
        assert!(!"spaces in@example.com".is_valid_email());
    }

    #[test]
    fn test_grouped_int() {
        assert_eq!("1,234".grouped_int(), Some(1234));
        assert_eq!("12,345,678".grouped_int(), Some(12_345_678));
        assert_eq!("1234".grouped_int(), Some(1234));
        assert_eq!("-1,234".grouped_int(), Some(-1234));
        assert_eq!("+42".grouped_int(), Some(42));
        assert_eq!("  7  ".grouped_int(), Some(7));
    }

    #[test]
    fn test_grouped_int_rejects_malformed() {
        assert_eq!("".grouped_int(), None);
        assert_eq!("-".grouped_int(), None);
        assert_eq!("abc".grouped_int(), None);
        assert_eq!("1,23".grouped_int(), None);
        assert_eq!("1,2345".grouped_int(), None);
        assert_eq!("1234,567".grouped_int(), None);
        assert_eq!(",123".grouped_int(), None);
        assert_eq!("1,234.56".grouped_int(), None);
    }

    #[test]
    fn test_grouped_f64() {
        assert_eq!("1,234.56".grouped_f64(), Some(1234.56));
        assert_eq!("1,234".grouped_f64(), Some(1234.0));
        assert_eq!("0.5".grouped_f64(), Some(0.5));
        assert_eq!("-12,345.25".grouped_f64(), Some(-12345.25));
    }

    #[test]
    fn test_grouped_f64_rejects_malformed() {
        assert_eq!("1,234.".grouped_f64(), None);
        assert_eq!("1,234.5a".grouped_f64(), None);
        assert_eq!("12,34.5".grouped_f64(), None);
        assert_eq!("".grouped_f64(), None);
    }
}
