// Host-side tests for headline splitting.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod text {
    include!("../src/text.rs");
}

use text::*;

#[test]
fn splits_each_visible_character() {
    let tokens = split_chars("Hi there");
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["H", "i", " ", "t", "h", "e", "r", "e"]);
    assert_eq!(animated_count(&tokens), 7);
    assert!(!tokens[2].animated);
}

#[test]
fn collapses_and_trims_whitespace() {
    let tokens = split_chars("  Built \n\t to   last ");
    let texts: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, "Built to last");
    assert_eq!(animated_count(&tokens), 11);
}

#[test]
fn keeps_multibyte_characters_whole() {
    let tokens = split_chars("Café — ünï");
    assert_eq!(tokens[3].text, "é");
    assert_eq!(animated_count(&tokens), 8);
}

#[test]
fn resplitting_source_text_is_stable() {
    let first = split_chars("Made for motion");
    let rejoined: String = first.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(split_chars(&rejoined), first);
}

#[test]
fn empty_text_produces_no_tokens() {
    assert!(split_chars("").is_empty());
    assert!(split_chars("   ").is_empty());
}
