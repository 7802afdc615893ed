//! End-to-end tests for robotstxt.
//!
//! These tests run whole configuration objects through the engine and check
//! the exact text produced.

use std::fs;

use percent_encoding::percent_decode_str;
use robotstxt_core::FileSource;
use robotstxt_generator::{RobotsError, generate_robotstxt};
use serde_json::{Value, json};

fn generate(options: Value) -> Result<String, RobotsError> {
    generate_robotstxt(&options, &FileSource)
}

fn output(options: Value) -> String {
    generate(options).expect("options should be valid")
}

#[test]
fn test_default_output_without_options() {
    assert_eq!(output(json!({})), "User-agent: *\nAllow: /\n");
}

#[test]
fn test_single_policy_with_allow() {
    let text = output(json!({ "policy": [{ "allow": "/", "userAgent": "Google" }] }));
    assert_eq!(text, "User-agent: Google\nAllow: /\n");
}

#[test]
fn test_two_policies_with_allow() {
    let text = output(json!({
        "policy": [
            { "allow": "/", "userAgent": "Google" },
            { "allow": "/", "userAgent": "Yandex" }
        ]
    }));
    assert_eq!(
        text,
        "User-agent: Google\nAllow: /\n\nUser-agent: Yandex\nAllow: /\n"
    );
}

#[test]
fn test_two_policies_with_allow_and_disallow() {
    let text = output(json!({
        "policy": [
            { "allow": "/", "disallow": "/search-foo", "userAgent": "Google" },
            { "allow": "/", "disallow": "/search-bar", "userAgent": "Yandex" }
        ]
    }));
    assert_eq!(
        text,
        "User-agent: Google\nAllow: /\nDisallow: /search-foo\n\n\
         User-agent: Yandex\nAllow: /\nDisallow: /search-bar\n"
    );
}

#[test]
fn test_multiple_user_agents_in_one_policy() {
    let text = output(json!({
        "policy": [
            { "allow": "/", "disallow": "/search-foo", "userAgent": ["Google", "AnotherBot"] },
            { "allow": "/", "disallow": "/search-bar", "userAgent": "Yandex" }
        ]
    }));
    assert_eq!(
        text,
        "User-agent: Google\nUser-agent: AnotherBot\nAllow: /\nDisallow: /search-foo\n\n\
         User-agent: Yandex\nAllow: /\nDisallow: /search-bar\n"
    );

    let first_block = text.split("\n\n").next().expect("first block");
    let agents: Vec<&str> = first_block
        .lines()
        .filter_map(|line| line.strip_prefix("User-agent: "))
        .collect();
    assert_eq!(agents, ["Google", "AnotherBot"]);
}

#[test]
fn test_allow_and_disallow_are_percent_encoded() {
    let text = output(json!({
        "policy": [{
            "allow": "/корзина",
            "disallow": "/личный-кабинет",
            "userAgent": "Google"
        }]
    }));
    assert_eq!(
        text,
        "User-agent: Google\n\
         Allow: /%D0%BA%D0%BE%D1%80%D0%B7%D0%B8%D0%BD%D0%B0\n\
         Disallow: /%D0%BB%D0%B8%D1%87%D0%BD%D1%8B%D0%B9-%D0%BA%D0%B0%D0%B1%D0%B8%D0%BD%D0%B5%D1%82\n"
    );
}

#[test]
fn test_encoded_paths_decode_to_input() {
    let paths = ["/корзина", "/a b?c#d", "/100%/x", "/日本/*.html$"];
    let text = output(json!({ "policy": [{ "userAgent": "*", "disallow": paths }] }));

    assert!(text.is_ascii());
    let decoded: Vec<String> = text
        .lines()
        .filter_map(|line| line.strip_prefix("Disallow: "))
        .map(|value| {
            percent_decode_str(value)
                .decode_utf8()
                .expect("utf-8")
                .into_owned()
        })
        .collect();
    assert_eq!(decoded, paths);
}

#[test]
fn test_policy_must_be_array() {
    let err = generate(json!({ "policy": "string" })).unwrap_err();
    assert!(matches!(err, RobotsError::InvalidPolicyType));
    assert_eq!(err.to_string(), "Options `policy` must be array");
}

#[test]
fn test_policy_without_user_agent() {
    let err = generate(json!({ "policy": [{}] })).unwrap_err();
    assert!(matches!(err, RobotsError::MissingUserAgent));

    let err = generate(json!({ "policy": [{ "userAgent": [] }] })).unwrap_err();
    assert!(matches!(err, RobotsError::MissingUserAgent));
}

#[test]
fn test_sitemap() {
    assert_eq!(
        output(json!({ "sitemap": "sitemap.xml" })),
        "User-agent: *\nAllow: /\nSitemap: sitemap.xml\n"
    );
    assert_eq!(
        output(json!({ "sitemap": ["sitemap.xml", "sitemap1.xml"] })),
        "User-agent: *\nAllow: /\nSitemap: sitemap.xml\nSitemap: sitemap1.xml\n"
    );
}

#[test]
fn test_host_variants() {
    let cases = [
        ("http://domain.com", "domain.com"),
        ("http://domain.com/", "domain.com"),
        ("интернет-магазин.рф", "xn----8sbalhasbh9ahbi6a2ae.xn--p1ai"),
        ("domain.com:80", "domain.com"),
        ("www.domain.com", "www.domain.com"),
        ("https://domain.com", "https://domain.com"),
        (
            "http://www.domain.com:8080/foo/bar/foobar.php?foo=bar#foobar",
            "www.domain.com:8080",
        ),
        ("domain.com/?next=http://x", "domain.com"),
    ];

    for (host, expected) in cases {
        assert_eq!(
            output(json!({ "host": host })),
            format!("User-agent: *\nAllow: /\nHost: {expected}\n"),
            "host {host}"
        );
    }
}

#[test]
fn test_invalid_host() {
    let err = generate(json!({ "host": "?:foobar" })).unwrap_err();
    assert!(matches!(err, RobotsError::InvalidHost));
    assert_eq!(err.to_string(), "Option `host` does not contain correct host");
}

#[test]
fn test_host_ip_addresses_rejected() {
    for host in ["127.0.0.1", "0:0:0:0:0:0:7f00:1"] {
        let err = generate(json!({ "host": host })).unwrap_err();
        assert!(matches!(err, RobotsError::HostIsIpAddress), "host {host}");
    }
}

#[test]
fn test_host_must_be_single_string() {
    let err = generate(json!({ "host": ["http://domain.com", "http://domain1.com"] })).unwrap_err();
    assert!(matches!(err, RobotsError::InvalidHostType));
    assert_eq!(err.to_string(), "Options `host` must be `string` and single");
}

#[test]
fn test_crawl_delay() {
    let text = output(json!({
        "policy": [
            { "allow": "/", "crawlDelay": 10, "userAgent": "Google" },
            { "allow": "/", "crawlDelay": 0.5, "userAgent": "Yandex" }
        ]
    }));
    assert_eq!(
        text,
        "User-agent: Google\nAllow: /\nCrawl-delay: 10\n\n\
         User-agent: Yandex\nAllow: /\nCrawl-delay: 0.5\n"
    );
}

#[test]
fn test_invalid_crawl_delay() {
    let err = generate(json!({
        "policy": [{ "allow": "/", "crawlDelay": "foo", "userAgent": "Google" }]
    }))
    .unwrap_err();
    assert!(matches!(err, RobotsError::InvalidCrawlDelay));
    assert_eq!(err.to_string(), "Option `crawlDelay` must be integer or float");
}

#[test]
fn test_clean_param() {
    assert_eq!(
        output(json!({
            "policy": [{ "allow": "/", "cleanParam": "s /forum/showthread.php", "userAgent": "Yandex" }]
        })),
        "User-agent: Yandex\nAllow: /\nClean-param: s /forum/showthread.php\n"
    );
    assert_eq!(
        output(json!({
            "policy": [{
                "allow": "/",
                "cleanParam": ["s /forum/showthread.php", "ref /forum/showthread.php"],
                "userAgent": "Yandex"
            }]
        })),
        "User-agent: Yandex\nAllow: /\n\
         Clean-param: s /forum/showthread.php\n\
         Clean-param: ref /forum/showthread.php\n"
    );
}

#[test]
fn test_clean_param_errors() {
    let long = "a".repeat(501);
    let with = |clean_param: Value| {
        json!({ "policy": [{ "allow": "/", "cleanParam": clean_param, "userAgent": "Yandex" }] })
    };

    let err = generate(with(json!(long.as_str()))).unwrap_err();
    assert!(matches!(err, RobotsError::CleanParamTooLong));

    let err = generate(with(json!([long.as_str()]))).unwrap_err();
    assert!(matches!(err, RobotsError::CleanParamEntryTooLong));

    let err = generate(with(json!({}))).unwrap_err();
    assert!(matches!(err, RobotsError::InvalidCleanParamType));
    assert_eq!(err.to_string(), "Option `cleanParam` should be string or array");

    let err = generate(with(json!([{}]))).unwrap_err();
    assert!(matches!(err, RobotsError::InvalidCleanParamEntryType));
}

#[test]
fn test_load_toml_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("robots.toml");
    fs::write(&path, "host = \"some-domain.com\"\n").expect("write");

    let text = output(json!({ "configFile": path.to_string_lossy() }));
    assert_eq!(text, "User-agent: *\nAllow: /\nHost: some-domain.com\n");
}

#[test]
fn test_load_yaml_config_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("robots.yml");
    fs::write(&path, "host: some-some-domain.com\n").expect("write");

    let text = output(json!({ "configFile": path.to_string_lossy() }));
    assert_eq!(text, "User-agent: *\nAllow: /\nHost: some-some-domain.com\n");
}

#[test]
fn test_load_json_config_file_with_policies() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("robots.json");
    fs::write(
        &path,
        r#"{
            "policy": [
                { "userAgent": "Googlebot", "disallow": "/private" },
                { "userAgent": "Yandex", "crawlDelay": 1.5, "cleanParam": "utm /" }
            ],
            "sitemap": "https://example.com/sitemap.xml"
        }"#,
    )
    .expect("write");

    let text = output(json!({ "configFile": path.to_string_lossy() }));
    assert_eq!(
        text,
        "User-agent: Googlebot\nDisallow: /private\n\n\
         User-agent: Yandex\nCrawl-delay: 1.5\nClean-param: utm /\n\
         Sitemap: https://example.com/sitemap.xml\n"
    );
}

#[test]
fn test_config_file_is_validated() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("robots.toml");
    fs::write(&path, "host = \"127.0.0.1\"\n").expect("write");

    let err = generate(json!({ "configFile": path.to_string_lossy() })).unwrap_err();
    assert!(matches!(err, RobotsError::HostIsIpAddress));
}

#[test]
fn test_missing_config_file() {
    let err = generate(json!({ "configFile": "/nonexistent/robots.toml" })).unwrap_err();
    assert!(matches!(err, RobotsError::Config(_)));
    assert!(err.to_string().contains("not found"));
}
