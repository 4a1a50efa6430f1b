//! End-to-end formatting: requests built the way callers build them, checked
//! against the exact command line they should produce.

mod common;

use common::sample_requests::{streaming_post, FailsAfter};
use curlify_core::{
    curl_command, Body, FormatError, HttpClient, HttpRequest, MemoryCookieJar, StoredCookie,
};

#[test]
fn get_with_query_and_header() {
    let mut req = HttpRequest::new("GET", "http://example.com/a?b=c").header("X-Test", "1");
    let cmd = curl_command(&mut req, None).unwrap();
    assert_eq!(
        cmd.to_string(),
        "curl -X 'GET' -H 'X-Test: 1' -H 'Cookie: ' 'http://example.com/a?b=c'"
    );
}

#[test]
fn post_json_body_before_headers() {
    let mut req = HttpRequest::new("POST", "http://example.com")
        .header("Content-Type", "application/json")
        .body(r#"{"k":"v"}"#);
    let cmd = curl_command(&mut req, None).unwrap();
    let tokens = cmd.tokens();
    let d = tokens.iter().position(|t| t == "-d").unwrap();
    assert_eq!(tokens[d + 1], r#"'{"k":"v"}'"#);
    let h = tokens
        .iter()
        .position(|t| t == "'Content-Type: application/json'")
        .unwrap();
    assert!(d < h);
    assert_eq!(tokens[h - 1], "-H");
}

#[test]
fn streamed_body_is_captured_and_restored() {
    let payload = b"line one\nline 'two'\n";
    let mut req = streaming_post("http://example.com/upload", payload);
    let cmd = curl_command(&mut req, None).unwrap();
    assert!(cmd
        .to_string()
        .contains(r"-d 'line one
line '\''two'\''
'"));

    let mut body = req.body.take().unwrap();
    assert_eq!(body.read_all().unwrap(), payload);
}

#[test]
fn formatting_twice_gives_same_output() {
    let mut req = streaming_post("http://example.com/upload", b"abc").header("A", "1");
    let first = curl_command(&mut req, None).unwrap();
    let second = curl_command(&mut req, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn failed_body_read_returns_error_only() {
    let mut req = HttpRequest::new("PUT", "http://example.com");
    req.set_body(Body::from_reader(FailsAfter::new()));
    let result = curl_command(&mut req, None);
    match result {
        Err(FormatError::BodyRead(e)) => assert_eq!(e.to_string(), "peer went away"),
        other => panic!("expected body read error, got {other:?}"),
    }
    assert_eq!(req.method, "PUT");
    assert!(req.body.is_some());
}

#[test]
fn jar_cookies_scoped_to_url_follow_request_cookies() {
    let jar: MemoryCookieJar = [
        StoredCookie::new("example.com", "jar_sid", "j1"),
        StoredCookie::new("elsewhere.org", "other", "no"),
    ]
    .into_iter()
    .collect();
    let client = HttpClient::with_jar(jar);

    let mut req = HttpRequest::new("GET", "https://www.example.com/home").cookie("req", "r1");
    let cmd = curl_command(&mut req, Some(&client)).unwrap();
    assert_eq!(
        cmd.to_string(),
        "curl -X 'GET' -H 'Cookie: req=r1; jar_sid=j1' 'https://www.example.com/home'"
    );
}

#[test]
fn malformed_url_is_passed_through() {
    let mut req = HttpRequest::new("GET", "::not a url::");
    let client = HttpClient::with_jar(MemoryCookieJar::new());
    let cmd = curl_command(&mut req, Some(&client)).unwrap();
    assert_eq!(cmd.tokens().last().unwrap(), "'::not a url::'");
}
