// Domain module tests.

use super::*;

fn test_extractor() -> psl::List {
    psl::List
}

#[test]
fn test_registrable_domain_basic() {
    let extractor = test_extractor();
    assert_eq!(
        registrable_domain(&extractor, "https://www.example.com/path"),
        "example.com"
    );
}

#[test]
fn test_registrable_domain_multi_part_suffix() {
    let extractor = test_extractor();
    assert_eq!(
        registrable_domain(&extractor, "https://www.news.example.co.uk/story"),
        "example.co.uk"
    );
    assert_eq!(
        registrable_domain(&extractor, "https://shop.example.com.au"),
        "example.com.au"
    );
}

#[test]
fn test_registrable_domain_with_port_query_and_fragment() {
    let extractor = test_extractor();
    assert_eq!(
        registrable_domain(&extractor, "https://www.example.com:8080/path?query=1#fragment"),
        "example.com"
    );
}

#[test]
fn test_registrable_domain_multiple_subdomains() {
    let extractor = test_extractor();
    assert_eq!(
        registrable_domain(&extractor, "https://a.b.c.example.com"),
        "example.com"
    );
}

#[test]
fn test_registrable_domain_uppercase_host() {
    let extractor = test_extractor();
    assert_eq!(
        registrable_domain(&extractor, "https://WWW.Example.COM/"),
        "example.com"
    );
}

#[test]
fn test_registrable_domain_private_suffix_is_ignored() {
    // github.io is a private PSL entry; only ICANN suffixes are honoured
    let extractor = test_extractor();
    assert_eq!(
        registrable_domain(&extractor, "https://someone.github.io/blog"),
        "github.io"
    );
}

#[test]
fn test_registrable_domain_bare_suffix() {
    let extractor = test_extractor();
    assert_eq!(registrable_domain(&extractor, "http://co.uk/"), "co.uk");
}

#[test]
fn test_registrable_domain_unlisted_suffix_keeps_last_label() {
    let extractor = test_extractor();
    assert_eq!(
        registrable_domain(&extractor, "http://localhost:3000/"),
        "localhost"
    );
    assert_eq!(
        registrable_domain(&extractor, "http://foo.bar.internaltld/"),
        "internaltld"
    );
}

#[test]
fn test_registrable_domain_ip_addresses() {
    let extractor = test_extractor();
    assert_eq!(
        registrable_domain(&extractor, "http://127.0.0.1:8080/page"),
        "127.0.0.1"
    );
    assert_eq!(registrable_domain(&extractor, "http://[::1]/"), "::1");
}

#[test]
fn test_registrable_domain_invalid_url_is_empty() {
    let extractor = test_extractor();
    assert_eq!(registrable_domain(&extractor, "not-a-url"), "");
    assert_eq!(registrable_domain(&extractor, ""), "");
    assert_eq!(registrable_domain(&extractor, "mailto:someone@example.com"), "");
}

#[test]
fn test_registrable_domain_subdomain_insensitive() {
    let extractor = test_extractor();
    assert_eq!(
        registrable_domain(&extractor, "https://a.b.example.co.uk"),
        registrable_domain(&extractor, "https://example.co.uk")
    );
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_registrable_domain_ignores_subdomains(
        subdomains in prop::collection::vec("[a-z][a-z0-9]{0,8}", 0..4),
        name in "[a-z][a-z0-9]{1,10}",
        suffix in prop::sample::select(vec!["com", "org", "co.uk", "com.au", "de"]),
    ) {
        let extractor = test_extractor();
        let base = format!("{name}.{suffix}");
        let mut host = subdomains.join(".");
        if !host.is_empty() {
            host.push('.');
        }
        host.push_str(&base);

        let resolved = registrable_domain(&extractor, &format!("https://{host}/x"));
        prop_assert_eq!(&resolved, &base);
    }

    #[test]
    fn prop_registrable_domain_is_idempotent(
        name in "[a-z][a-z0-9]{1,10}",
        suffix in prop::sample::select(vec!["com", "net", "co.uk", "org.au"]),
        sub in "[a-z]{1,6}",
    ) {
        let extractor = test_extractor();
        let once = registrable_domain(&extractor, &format!("https://{sub}.{name}.{suffix}/"));
        let twice = registrable_domain(&extractor, &format!("https://{once}/"));
        prop_assert_eq!(once, twice);
    }
}
