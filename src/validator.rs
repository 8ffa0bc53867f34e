//! Pure validation for the waitlist form. Callers decide how to surface a
//! failure; nothing here touches the DOM.

pub fn has_required_fields(name: &str, email: &str) -> bool {
    !name.trim().is_empty() && !email.trim().is_empty()
}

/// Permissive `local@domain.tld` check, not RFC 5322: exactly one `@`, a
/// non-empty local part, a dot in the domain with characters before it and a
/// non-empty segment after the last one, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_must_be_non_blank() {
        assert!(has_required_fields("Alice", "alice@example.com"));
        assert!(!has_required_fields("", "alice@example.com"));
        assert!(!has_required_fields("Alice", ""));
        assert!(!has_required_fields("   ", "alice@example.com"));
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+tag@mail.example.co"));
    }

    #[test]
    fn rejects_missing_at_or_dot() {
        assert!(!is_valid_email("alice.example.com"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice@.com"));
        assert!(!is_valid_email("alice@example."));
    }

    #[test]
    fn rejects_domains_ending_in_a_dot() {
        assert!(!is_valid_email("alice@example.com."));
        assert!(!is_valid_email("alice@example.co.uk."));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("al ice@example.com"));
        assert!(!is_valid_email("alice@exa mple.com"));
        assert!(!is_valid_email("alice@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }
}
