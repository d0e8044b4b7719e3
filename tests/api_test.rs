// api_test.rs - Idiomatic layer: string normal forms, typed errors,
// grapheme iteration, prelude surface.

use ferrune::prelude::*;

#[test]
fn normal_forms_on_str() {
    assert_eq!(nfc("A\u{030A}").unwrap(), "\u{00C5}");
    assert_eq!(nfd("\u{00C5}").unwrap(), "A\u{030A}");
    assert_eq!(nfkd("\u{FB01}nd").unwrap(), "find");
    assert_eq!(nfkc("\u{2460} + \u{2461}").unwrap(), "1 + 2");
    assert_eq!(nfkc_casefold("Gr\u{00FC}\u{1E9E}E").unwrap(), "gr\u{00FC}sse");
}

#[test]
fn already_normalized_is_identity() {
    for text in ["", "hello", "caf\u{00E9}", "\u{AC01}\u{D55C}"] {
        assert_eq!(nfc(text).unwrap(), text);
    }
}

#[test]
fn typed_errors() {
    // idiomatic layer only sees valid &str input, so errors surface from
    // the raw byte layer
    let err = ferrune::normalize::nfc(b"\x80").unwrap_err();
    assert_eq!(UnicodeError::from(err), UnicodeError::InvalidUtf8);
    let err = ferrune::normalize::map(b"a", ferrune::types::OPTION_STRIPMARK).unwrap_err();
    assert_eq!(UnicodeError::from(err), UnicodeError::InvalidOptions);
    assert_eq!(
        UnicodeError::InvalidOptions.to_string(),
        "invalid option combination"
    );
}

#[test]
fn grapheme_iteration() {
    let text = "he\u{0301}llo \u{1F1FA}\u{1F1F8}\u{1F1FA}\u{1F1F8} \u{AC01}";
    let clusters: Vec<&str> = graphemes(text).collect();
    assert_eq!(
        clusters,
        [
            "h",
            "e\u{0301}",
            "l",
            "l",
            "o",
            " ",
            "\u{1F1FA}\u{1F1F8}",
            "\u{1F1FA}\u{1F1F8}",
            " ",
            "\u{AC01}"
        ]
    );
    // concatenation is lossless
    assert_eq!(clusters.concat(), text);
}

#[test]
fn grapheme_iteration_emoji() {
    let kiss = "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}";
    let clusters: Vec<&str> = graphemes(kiss).collect();
    assert_eq!(clusters, [kiss]);
}

#[test]
fn versions_exported() {
    assert_eq!(unicode_version(), "13.0.0");
    assert!(version().split('.').count() >= 2);
}

#[test]
fn category_query() {
    use ferrune::property::category;
    assert_eq!(category(0x41), Category::Lu);
    assert_eq!(category(0x1F600), Category::So);
}
