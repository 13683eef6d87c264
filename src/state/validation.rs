//! Email syntax checks matching what a browser enforces for `type=email` inputs

/// Characters allowed in the local part besides ASCII alphanumerics
const LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Maximum length of a single domain label
const MAX_LABEL_LEN: usize = 63;

/// Returns true if `email` is a syntactically valid address.
///
/// The grammar is the one browsers apply to email inputs: a non-empty local
/// part of atext characters and dots, a single `@`, and a domain made of
/// dot-separated labels. Each label is 1-63 alphanumerics or hyphens and may
/// not start or end with a hyphen. A bare host such as `a@localhost` is valid.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
