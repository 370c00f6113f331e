use super::*;
use test_case::test_case;

// === Numbers ===

#[test_case("5" => Some(5.0); "integer")]
#[test_case("2.75" => Some(2.75); "decimal")]
#[test_case(".5" => Some(0.5); "leading dot")]
#[test_case("5." => Some(5.0); "trailing dot")]
#[test_case("007" => Some(7.0); "leading zeros")]
#[test_case("-2" => Some(-2.0); "negative")]
#[test_case("+2" => Some(2.0); "explicit plus")]
#[test_case("1e3" => Some(1000.0); "exponent")]
#[test_case("2.5E-1" => Some(0.25); "signed exponent")]
#[test_case("." => None; "lone dot")]
#[test_case("-" => None; "lone minus")]
#[test_case("+" => None; "lone plus")]
#[test_case("1e" => None; "empty exponent")]
#[test_case("1.2.3" => None; "two dots")]
#[test_case("5x" => None; "trailing letters")]
#[test_case("inf" => None; "infinity spelling")]
#[test_case("NaN" => None; "nan spelling")]
#[test_case("" => None; "empty")]
fn number(word: &str) -> Option<f64> {
    as_number(word)
}

// === Symbols ===

#[test_case("-" => Some('-'); "minus")]
#[test_case("=" => Some('='); "equals")]
#[test_case("+" => Some('+'); "plus")]
#[test_case(";" => None; "semicolon is dispatched elsewhere")]
#[test_case("==" => None; "no multi-char operators")]
#[test_case("*" => None; "star")]
fn symbol(word: &str) -> Option<char> {
    as_symbol(word)
}

// === Names ===

#[test_case("x" => true; "lowercase")]
#[test_case("Total" => true; "uppercase")]
#[test_case("A" => true; "range start")]
#[test_case("z" => true; "range end")]
#[test_case("_tmp" => true; "underscore")]
#[test_case("[x" => true; "bracket between letter blocks")]
#[test_case("`" => true; "backtick")]
#[test_case("{" => false; "just past range")]
#[test_case("@" => false; "just before range")]
#[test_case("#" => false; "hash")]
#[test_case("1abc" => false; "digit start")]
#[test_case("\u{e9}t\u{e9}" => false; "non-ascii start")]
fn name(word: &str) -> bool {
    as_name(word).is_some()
}

// === Ordered classification ===

#[test]
fn number_wins_over_everything() {
    use pretty_assertions::assert_eq;

    assert_eq!(classify_bareword("42"), Some(Token::Number(42.0)));
    assert_eq!(classify_bareword("-1"), Some(Token::Number(-1.0)));
}

#[test]
fn symbol_after_failed_number() {
    use pretty_assertions::assert_eq;

    assert_eq!(classify_bareword("-"), Some(Token::Symbol('-')));
    assert_eq!(classify_bareword("="), Some(Token::Symbol('=')));
    assert_eq!(classify_bareword("+"), Some(Token::Symbol('+')));
}

#[test]
fn name_keeps_whole_word() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        classify_bareword("x\"y"),
        Some(Token::Name("x\"y".to_string()))
    );
    assert_eq!(
        classify_bareword("inf"),
        Some(Token::Name("inf".to_string()))
    );
}

#[test]
fn unclassifiable_words() {
    use pretty_assertions::assert_eq;

    assert_eq!(classify_bareword("#"), None);
    assert_eq!(classify_bareword("1e"), None);
    assert_eq!(classify_bareword("+x"), None);
}

// === Numeric runs ===

#[test_case("1" => true; "digit")]
#[test_case("3." => true; "digit then dot")]
#[test_case(".5" => true; "dot then digit")]
#[test_case("" => false; "empty")]
#[test_case("-" => false; "minus")]
#[test_case("x" => false; "letter")]
#[test_case("1e" => false; "exponent marker")]
fn numeric_run(word: &str) -> bool {
    is_numeric_run(word)
}
