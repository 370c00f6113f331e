use super::*;

#[test]
fn symbol_set() {
    for c in ['-', '=', '+'] {
        assert!(is_symbol_char(c), "{c} should be a symbol");
    }
    for c in [';', '*', '/', 'a', '1', ' '] {
        assert!(!is_symbol_char(c), "{c} should not be a symbol");
    }
}

#[test]
fn display_renders_source_like_text() {
    assert_eq!(Token::Symbol(';').to_string(), ";");
    assert_eq!(
        Token::StringLiteral("hello world".into()).to_string(),
        "\"hello world\""
    );
    assert_eq!(Token::Number(5.0).to_string(), "5");
    assert_eq!(Token::Number(3.25).to_string(), "3.25");
    assert_eq!(Token::Name("x".into()).to_string(), "x");
}

#[test]
fn accessors() {
    let name = Token::Name("total".into());
    assert_eq!(name.as_name(), Some("total"));
    assert_eq!(name.as_number(), None);
    assert_eq!(name.as_string_literal(), None);
    assert!(!name.is_symbol('='));

    assert_eq!(Token::Number(2.5).as_number(), Some(2.5));
    assert_eq!(
        Token::StringLiteral(String::new()).as_string_literal(),
        Some("")
    );
    assert!(Token::Symbol('=').is_symbol('='));
    assert!(!Token::Symbol('=').is_symbol('+'));
}
