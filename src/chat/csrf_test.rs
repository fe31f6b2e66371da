use super::*;

#[test]
fn cookie_jar_finds_csrf_among_other_cookies() {
    let jar = CookieJar::new("patient_id=1f0c; csrftoken=abc123; theme=dark");
    assert_eq!(jar.csrf_token(), "abc123");
}

#[test]
fn cookie_jar_first_entry_without_leading_space() {
    let jar = CookieJar::new("csrftoken=first;csrftoken=second");
    assert_eq!(jar.get("csrftoken").as_deref(), Some("first"));
}

#[test]
fn cookie_jar_does_not_match_name_suffix() {
    let jar = CookieJar::new("xcsrftoken=nope");
    assert_eq!(jar.get("csrftoken"), None);
    assert_eq!(jar.csrf_token(), "");
}

#[test]
fn cookie_jar_keeps_equals_inside_value() {
    let jar = CookieJar::new("session=a=b=c");
    assert_eq!(jar.get("session").as_deref(), Some("a=b=c"));
}

#[test]
fn cookie_jar_percent_decodes_values() {
    let jar = CookieJar::new("patient_id=1; csrftoken=ab%2Bcd");
    assert_eq!(jar.csrf_token(), "ab+cd");
}

#[test]
fn cookie_jar_skips_malformed_pairs() {
    let jar = CookieJar::new("garbage; csrftoken=tok");
    assert_eq!(jar.csrf_token(), "tok");
}

#[test]
fn cookie_jar_empty() {
    let jar = CookieJar::default();
    assert!(jar.is_empty());
    assert_eq!(jar.csrf_token(), "");
}
