//! Inbound host parsing for multi-tenant resolution.
//!
//! Every visitor request carries a `Host` header that must be matched
//! against either a website's custom domain or its platform subdomain.
//! The helpers here are pure string functions; the actual lookups live
//! in the API layer's resolver.

/// Normalize a raw `Host` header value for comparison.
///
/// Strips a trailing `:port` suffix and lowercases the remainder, so
/// `Shop.Example.COM:8080` compares equal to `shop.example.com`.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let without_port = match host.rfind(':') {
        // Only treat the suffix as a port when it is all digits; an IPv6
        // literal like `[::1]` keeps its colons.
        Some(idx)
            if !host[idx + 1..].is_empty()
                && host[idx + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            &host[..idx]
        }
        _ => host,
    };
    without_port.to_ascii_lowercase()
}

/// Extract the tenant label from a `<label>.<platform_domain>` host.
///
/// Returns `None` for the bare platform apex, for hosts under a
/// different domain, and for multi-label prefixes (`a.b.platform.com`
/// is not a tenant subdomain). The host must already be normalized.
pub fn subdomain_label<'a>(host: &'a str, platform_domain: &str) -> Option<&'a str> {
    let prefix = host.strip_suffix(platform_domain)?;
    let label = prefix.strip_suffix('.')?;
    if label.is_empty() || label.contains('.') {
        return None;
    }
    Some(label)
}

/// Whether a string is acceptable as a platform subdomain label:
/// 1-63 chars, lowercase ASCII alphanumerics and hyphens, no leading or
/// trailing hyphen.
pub fn is_valid_subdomain(label: &str) -> bool {
    if label.is_empty() || label.len() > 63 {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_port_and_lowercases() {
        assert_eq!(normalize_host("Shop.Example.COM:8080"), "shop.example.com");
        assert_eq!(normalize_host("shop.example.com"), "shop.example.com");
        assert_eq!(normalize_host("LOCALHOST:3000"), "localhost");
    }

    #[test]
    fn normalize_keeps_ipv6_literals_intact() {
        assert_eq!(normalize_host("[::1]:8080"), "[::1]");
        assert_eq!(normalize_host("[::1]"), "[::1]");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize_host(" shop.example.com "), "shop.example.com");
    }

    #[test]
    fn subdomain_label_extracts_single_label() {
        assert_eq!(
            subdomain_label("shop.pagesmith.site", "pagesmith.site"),
            Some("shop")
        );
    }

    #[test]
    fn subdomain_label_rejects_apex() {
        assert_eq!(subdomain_label("pagesmith.site", "pagesmith.site"), None);
    }

    #[test]
    fn subdomain_label_rejects_other_domains() {
        assert_eq!(subdomain_label("shop.example.com", "pagesmith.site"), None);
        // Suffix match alone is not enough; the label boundary must be a dot.
        assert_eq!(
            subdomain_label("evilpagesmith.site", "pagesmith.site"),
            None
        );
    }

    #[test]
    fn subdomain_label_rejects_nested_labels() {
        assert_eq!(
            subdomain_label("a.b.pagesmith.site", "pagesmith.site"),
            None
        );
    }

    #[test]
    fn valid_subdomains() {
        assert!(is_valid_subdomain("shop"));
        assert!(is_valid_subdomain("my-shop-2"));
        assert!(is_valid_subdomain("a"));
    }

    #[test]
    fn invalid_subdomains() {
        assert!(!is_valid_subdomain(""));
        assert!(!is_valid_subdomain("-shop"));
        assert!(!is_valid_subdomain("shop-"));
        assert!(!is_valid_subdomain("My-Shop"));
        assert!(!is_valid_subdomain("sh.op"));
        assert!(!is_valid_subdomain(&"a".repeat(64)));
    }
}
