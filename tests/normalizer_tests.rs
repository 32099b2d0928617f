// Integration tests for the normalizer: multi-item parsing and deduplication

use essen_check::Normalizer;

fn parse(text: &str) -> Vec<String> {
    Normalizer::new().unwrap().parse_items(text)
}

// ============ Separator Handling ============

#[test]
fn test_comma_separated_list() {
    let items = parse("Mehl, Zucker, Eier, Vanille");
    assert_eq!(items, vec!["Mehl", "Zucker", "Eier", "Vanille"]);
}

#[test]
fn test_newline_separated_list_yields_same_items() {
    let commas = parse("Mehl, Zucker, Eier, Vanille");
    let newlines = parse("Mehl\nZucker\nEier\nVanille");
    assert_eq!(commas, newlines);
}

#[test]
fn test_semicolons_split() {
    assert_eq!(parse("Mehl; Zucker; Salz"), vec!["Mehl", "Zucker", "Salz"]);
}

#[test]
fn test_und_splits_two_items() {
    assert_eq!(parse("Mehl und Zucker"), vec!["Mehl", "Zucker"]);
}

#[test]
fn test_mixed_separators() {
    let items = parse("Mehl, Zucker\nEier; Salz");
    assert_eq!(items, vec!["Mehl", "Zucker", "Eier", "Salz"]);
}

#[test]
fn test_crlf_input() {
    let items = parse("Mehl\r\nZucker\r\nEier");
    assert_eq!(items, vec!["Mehl", "Zucker", "Eier"]);
}

// ============ "und" Word Boundary ============

#[test]
fn test_und_not_split_inside_words() {
    // Compounds and names containing "und" must stay intact
    assert_eq!(parse("Pudding"), vec!["Pudding"]);
    assert_eq!(parse("Gesundheit"), vec!["Gesundheit"]);
    assert_eq!(parse("Hundekuchen"), vec!["Hundekuchen"]);
    assert_eq!(parse("Vanillepudding"), vec!["Vanillepudding"]);
}

#[test]
fn test_und_any_casing() {
    assert_eq!(parse("Mehl Und Zucker"), vec!["Mehl", "Zucker"]);
    assert_eq!(parse("Mehl UND Zucker"), vec!["Mehl", "Zucker"]);
}

// ============ Numbered Lists ============

#[test]
fn test_numbered_list_dot() {
    assert_eq!(parse("1. Mehl\n2. Eier"), vec!["Mehl", "Eier"]);
}

#[test]
fn test_numbered_list_parenthesis() {
    assert_eq!(parse("1) Mehl\n2) Eier"), vec!["Mehl", "Eier"]);
}

#[test]
fn test_long_numbered_list() {
    let items = parse("1. Mehl\n2. Zucker\n10. Eier\n11. Salz");
    assert_eq!(items, vec!["Mehl", "Zucker", "Eier", "Salz"]);
}

#[test]
fn test_marker_without_whitespace_kept() {
    // "3.Mehl" has no whitespace after the marker and is left alone
    assert_eq!(parse("3.Mehl"), vec!["3.Mehl"]);
}

// ============ Deduplication ============

#[test]
fn test_case_insensitive_dedup() {
    assert_eq!(parse("Mehl, mehl, MEHL"), vec!["Mehl"]);
}

#[test]
fn test_dedup_keeps_first_seen_casing() {
    assert_eq!(parse("MEHL, mehl"), vec!["MEHL"]);
}

#[test]
fn test_dedup_preserves_order_of_remaining_items() {
    let items = parse("Zucker, Mehl, zucker, Eier, MEHL");
    assert_eq!(items, vec!["Zucker", "Mehl", "Eier"]);
}

// ============ Empty and Degenerate Input ============

#[test]
fn test_empty_input_yields_nothing() {
    assert!(parse("").is_empty());
    assert!(parse("   ").is_empty());
    assert!(parse("\n\n\n").is_empty());
    assert!(parse(",;,;").is_empty());
}

#[test]
fn test_single_item_mode() {
    let items = parse("Spiegelei");
    assert_eq!(items, vec!["Spiegelei"]);
}

#[test]
fn test_single_line_with_delimiter_yields_multiple() {
    let items = parse("Spiegelei mit Speck, Brot");
    assert_eq!(items, vec!["Spiegelei mit Speck", "Brot"]);
}

#[test]
fn test_parsing_is_deterministic() {
    let text = "1. Mehl\n2. Eier und Butter; milch, MEHL";
    assert_eq!(parse(text), parse(text));
}
