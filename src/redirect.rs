//! URL normalization and redirect planning for the create-app form

use crate::error::FormError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use url::Url;

/// Name of the hidden field carrying each icon URL
pub const ICON_FIELD_NAME: &str = "icons[]";

/// Characters left untouched by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Field values captured at the moment the create-app button is pressed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub target_url: String,
    pub icon_urls: Vec<String>,
}

impl FormState {
    pub fn new(target_url: impl Into<String>, icon_urls: Vec<String>) -> FormState {
        FormState {
            target_url: target_url.into(),
            icon_urls,
        }
    }

    /// Validate the form and split the target URL.
    ///
    /// Algorithm:
    /// 1. Trim the URL; empty → `MissingUrl`
    /// 2. Prepend `https://` unless it already starts with `http://` or `https://`
    /// 3. Parse; failure → `InvalidUrl`
    /// 4. domain = host, path = path + `?query` + `#fragment`
    /// 5. Keep trimmed icon URLs that are not blank, in order
    ///
    /// Examples:
    /// - `example.com/path?x=1#frag` → domain `example.com`, path `/path?x=1#frag`
    /// - `http://localhost:3000` → domain `localhost`, path `/`
    /// - `http://` → `InvalidUrl`
    pub fn into_request(self) -> Result<RedirectRequest, FormError> {
        let target = trim_input(&self.target_url);
        if target.is_empty() {
            return Err(FormError::MissingUrl);
        }

        let normalized = normalize_url(target);
        let url = Url::parse(&normalized).map_err(|source| FormError::InvalidUrl {
            input: normalized.clone(),
            source,
        })?;

        // Only http(s) is reachable here and both require a host
        let domain = url.host_str().unwrap_or_default().to_string();

        Ok(RedirectRequest {
            domain,
            path: path_query_fragment(&url),
            icons: collect_icons(&self.icon_urls),
        })
    }
}

/// Where the browser is sent and what it posts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedirectRequest {
    pub domain: String,
    pub path: String,
    pub icons: Vec<String>,
}

/// Plain-object view of a redirect handed to JavaScript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedirectPlan {
    pub domain: String,
    pub path: String,
    pub icons: Vec<String>,
    pub action: String,
    pub body: String,
}

impl RedirectRequest {
    /// `<base>/a/<encoded domain><path>`
    pub fn action_url(&self, redirect_base: &str) -> String {
        format!(
            "{}/a/{}{}",
            redirect_base.trim_end_matches('/'),
            encode_uri_component(&self.domain),
            self.path
        )
    }

    /// Everything the page needs to redirect: split URL, target and body
    pub fn plan(&self, redirect_base: &str) -> RedirectPlan {
        RedirectPlan {
            domain: self.domain.clone(),
            path: self.path.clone(),
            icons: self.icons.clone(),
            action: self.action_url(redirect_base),
            body: self.encoded_body(),
        }
    }

    /// Hidden form fields in submission order
    pub fn form_fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.icons.iter().map(|icon| (ICON_FIELD_NAME, icon.as_str()))
    }

    /// The `application/x-www-form-urlencoded` body the browser will post
    pub fn encoded_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.form_fields())
            .finish()
    }
}

/// Default to https when the user typed a bare host
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

/// Trim icon URLs and drop the blank ones, keeping order
pub fn collect_icons(icon_urls: &[String]) -> Vec<String> {
    icon_urls
        .iter()
        .map(|icon| trim_input(icon))
        .filter(|icon| !icon.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim like `String.prototype.trim`, which also strips the byte order mark
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

fn path_query_fragment(url: &Url) -> String {
    let mut path = url.path().to_string();

    // An empty `?` or `#` is dropped, same as `location.search` / `location.hash`
    if let Some(query) = url.query().filter(|q| !q.is_empty()) {
        path.push('?');
        path.push_str(query);
    }
    if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
        path.push('#');
        path.push_str(fragment);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_REDIRECT_BASE;

    fn request_for(url: &str) -> Result<RedirectRequest, FormError> {
        FormState::new(url, Vec::new()).into_request()
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("ftp://example.com"), "https://ftp://example.com");
    }

    #[test]
    fn test_bare_host_with_path_query_fragment() {
        let request = request_for("example.com/path?x=1#frag").unwrap();

        assert_eq!(request.domain, "example.com");
        assert_eq!(request.path, "/path?x=1#frag");
        assert_eq!(
            request.action_url(DEFAULT_REDIRECT_BASE),
            "https://intopwa.xyofn8h7t.workers.dev/a/example.com/path?x=1#frag"
        );
    }

    #[test]
    fn test_domain_matches_host() {
        let cases = [
            ("https://www.google.com/search?q=rust", "www.google.com"),
            ("http://news.bbc.co.uk/article", "news.bbc.co.uk"),
            ("GitHub.com/rust-lang", "github.com"),
            ("http://localhost:3000/app", "localhost"),
            ("127.0.0.1:8080", "127.0.0.1"),
        ];

        for (input, host) in cases {
            let request = request_for(input).unwrap();
            assert_eq!(request.domain, host, "input {input}");
        }
    }

    #[test]
    fn test_root_path() {
        let request = request_for("https://example.com").unwrap();

        assert_eq!(request.path, "/");
        assert_eq!(
            request.action_url("https://worker.test"),
            "https://worker.test/a/example.com/"
        );
    }

    #[test]
    fn test_empty_query_and_fragment_dropped() {
        let request = request_for("https://example.com/app?#").unwrap();
        assert_eq!(request.path, "/app");
    }

    #[test]
    fn test_input_is_trimmed() {
        let request = request_for("   example.com/docs  ").unwrap();

        assert_eq!(request.domain, "example.com");
        assert_eq!(request.path, "/docs");
    }

    #[test]
    fn test_missing_url() {
        assert_eq!(request_for(""), Err(FormError::MissingUrl));
        assert_eq!(request_for("   \t "), Err(FormError::MissingUrl));
    }

    #[test]
    fn test_invalid_url() {
        for input in ["http://", "https://", "exa mple.com", "https://[::1"] {
            match request_for(input) {
                Err(FormError::InvalidUrl { .. }) => {}
                other => panic!("expected InvalidUrl for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_url_keeps_normalized_input() {
        match request_for("exa mple.com") {
            Err(FormError::InvalidUrl { input, .. }) => assert_eq!(input, "https://exa mple.com"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_domain_is_percent_encoded() {
        let request = request_for("http://[::1]:8080/x").unwrap();

        assert_eq!(request.domain, "[::1]");
        assert_eq!(
            request.action_url("https://worker.test"),
            "https://worker.test/a/%5B%3A%3A1%5D/x"
        );
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("example.com"), "example.com");
        assert_eq!(encode_uri_component("a b/c?d"), "a%20b%2Fc%3Fd");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
    }

    #[test]
    fn test_blank_icons_filtered() {
        let icons = vec![
            "  ".to_string(),
            "http://icon1.png".to_string(),
            "".to_string(),
        ];
        let request = FormState::new("example.com", icons).into_request().unwrap();

        assert_eq!(request.icons, vec!["http://icon1.png".to_string()]);
        let fields: Vec<_> = request.form_fields().collect();
        assert_eq!(fields, vec![("icons[]", "http://icon1.png")]);
    }

    #[test]
    fn test_icon_order_preserved() {
        let icons = vec![
            " https://a.test/192.png ".to_string(),
            "".to_string(),
            "not a url".to_string(),
            "\t".to_string(),
            "https://a.test/512.png".to_string(),
        ];

        assert_eq!(
            collect_icons(&icons),
            vec![
                "https://a.test/192.png".to_string(),
                "not a url".to_string(),
                "https://a.test/512.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_encoded_body() {
        let icons = vec!["https://a.test/i.png?s=1&t=2".to_string(), "b.png".to_string()];
        let request = FormState::new("example.com", icons).into_request().unwrap();

        assert_eq!(
            request.encoded_body(),
            "icons%5B%5D=https%3A%2F%2Fa.test%2Fi.png%3Fs%3D1%26t%3D2&icons%5B%5D=b.png"
        );
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(request_for("\u{FEFF}"), Err(FormError::MissingUrl));
        assert_eq!(request_for("\u{FEFF} \u{FEFF}"), Err(FormError::MissingUrl));

        let request = request_for("\u{FEFF}example.com/x\u{FEFF}").unwrap();
        assert_eq!(request.domain, "example.com");
        assert_eq!(request.path, "/x");

        let icons = vec!["\u{FEFF}".to_string(), "\u{FEFF}a.png ".to_string()];
        assert_eq!(collect_icons(&icons), vec!["a.png".to_string()]);
    }

    #[test]
    fn test_plan_serializes_as_flat_struct() {
        let icons = vec!["a.png".to_string(), " ".to_string()];
        let request = FormState::new("example.com/app?x=1", icons).into_request().unwrap();

        let plan = request.plan("https://worker.test/");
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "domain": "example.com",
                "path": "/app?x=1",
                "icons": ["a.png"],
                "action": "https://worker.test/a/example.com/app?x=1",
                "body": "icons%5B%5D=a.png",
            })
        );
    }

    #[test]
    fn test_no_icons_empty_body() {
        let request = request_for("example.com").unwrap();

        assert!(request.icons.is_empty());
        assert_eq!(request.encoded_body(), "");
    }
}
