use rstest::rstest;

use rustyheaders::{
    HeaderConfig, HeaderField, HeaderSet, is_token, join_field, parse_block, split_field,
};

#[rstest]
#[case("Content-Type: text/html", "Content-Type", "text/html")]
#[case("X-Flag:yes", "X-Flag", "yes")]
fn split_well_formed_line(#[case] line: &str, #[case] name: &str, #[case] value: &str) {
    let field = split_field(line).unwrap();
    assert_eq!(field.name, name);
    assert_eq!(field.value, value);
}

#[rstest]
#[case("not-a-header-line")]
#[case("Bad Name: v")]
#[case("")]
fn split_rejects_malformed_line(#[case] line: &str) {
    assert!(split_field(line).is_none());
}

#[test]
fn join_is_deterministic() {
    assert_eq!(join_field("Accept", "*/*"), "Accept: */*");
}

#[test]
fn round_trip_for_token_names() {
    let names = ["Accept", "X-Request-Id", "a", "#!$%&'*+-.^_`|~09AZaz"];
    let values = ["", "*/*", "Bearer abc.def", "x:y: z", "trailing  ", "\ttab"];

    for name in names {
        assert!(is_token(name), "{name}");
        for value in values {
            let line = join_field(name, value);
            assert_eq!(split_field(&line), Some(HeaderField::new(name, value)), "{line:?}");
        }
    }
}

#[test]
fn set_get_flush_cycle() {
    let mut headers = HeaderSet::new();
    headers.set_field("A", "1");
    headers.set_field("B", "2");
    assert_eq!(headers.count(), 2);

    headers.flush();
    assert_eq!(headers.count(), 0);
}

#[test]
fn overwrite_preserves_single_entry() {
    let mut headers = HeaderSet::new();
    headers.set_field("A", "1");
    headers.set_field("A", "2");

    assert_eq!(headers.count(), 1);
    assert_eq!(headers.get_field("A"), Some("2"));
}

#[test]
fn default_fallback_on_empty_set() {
    let headers = HeaderSet::new();
    assert_eq!(headers.get_field_or("Missing", "fallback"), "fallback");
    assert_eq!(headers.get_field("Missing"), None);
}

#[test]
fn full_iteration_matches_insertion_order() {
    let mut headers = HeaderSet::new();
    headers.set_field("A", "1");
    headers.set_field("B", "2");
    headers.set_field("C", "3");

    let mut keys = Vec::new();
    let mut steps = 0;
    for (key, _) in &headers {
        keys.push(key);
        steps += 1;
    }

    assert_eq!(keys, ["A", "B", "C"]);
    assert_eq!(steps, headers.count());

    // a second traversal starts from the beginning again
    assert_eq!(headers.iter().next(), Some(("A", "1")));
}

#[test]
fn token_response_headers() {
    let raw = "HTTP/1.1 200 OK\r\n\
               Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
               Content-Type: application/json;charset=UTF-8\r\n\
               Content-Length: 27\r\n\
               Cache-Control: no-store\r\n\
               \r\n";

    let headers = parse_block(raw, &HeaderConfig::default()).unwrap();

    assert_eq!(headers.count(), 4);
    assert_eq!(headers.content_length(), Some(27));
    assert!(headers.date("Date").is_some());
    assert_eq!(
        headers.stringify(),
        "Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
         Content-Type: application/json;charset=UTF-8\r\n\
         Content-Length: 27\r\n\
         Cache-Control: no-store\r\n"
    );
}
