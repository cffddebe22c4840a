//! Lossless source reconstruction through rope values.
//!
//! A syntax token in a trivia-preserving parser carries three texts:
//! leading trivia, the token's own span, and trailing trivia. Concatenating
//! every token's three texts in document order must reproduce the original
//! source exactly. These tests drive the rope surface the way such a
//! tokenizer does: one shared source buffer, carved into pieces by `split`
//! alone, then reassembled with `join` and `append`.

#![allow(clippy::unwrap_used)]

use weft::Text;

/// A stand-in for a syntax token: (leading trivia, value, trailing trivia).
type Token = (Text, Text, Text);

/// Carves `source` into tokens by splitting at the given boundaries.
/// Each boundary triple is (trivia end, value end, trailing end).
fn carve(source: &str, boundaries: &[(usize, usize, usize)]) -> Vec<Token> {
    let mut rest = Text::from(source);
    let mut consumed = 0;
    let mut tokens = Vec::new();
    for &(lead_end, value_end, trail_end) in boundaries {
        let lead = rest.split(lead_end - consumed).unwrap();
        let value = lead.after.split(value_end - lead_end).unwrap();
        let trail = value.after.split(trail_end - value_end).unwrap();
        tokens.push((lead.before, value.before, trail.before));
        rest = trail.after;
        consumed = trail_end;
    }
    tokens
}

fn reconstruct(tokens: &[Token]) -> Text {
    Text::join(tokens.iter().flat_map(|(lead, value, trail)| {
        [lead.clone(), value.clone(), trail.clone()]
    }))
}

#[test]
fn test_token_triples_reconstruct_source() {
    let source = "  { \"a\" : [ 1 , 2 ] }\n";
    // lead/value/trail boundaries for: {  "a"  :  [  1  ,  2  ]  }
    let boundaries = [
        (2, 3, 4),   // "  " "{" " "
        (4, 7, 8),   // "" "\"a\"" " "
        (8, 9, 10),  // "" ":" " "
        (10, 11, 12),// "" "[" " "
        (12, 13, 14),// "" "1" " "
        (14, 15, 16),// "" "," " "
        (16, 17, 18),// "" "2" " "
        (18, 19, 20),// "" "]" " "
        (20, 21, 22),// "" "}" "\n"
    ];
    let tokens = carve(source, &boundaries);
    assert_eq!(tokens.len(), 9);

    let rebuilt = reconstruct(&tokens);
    assert_eq!(rebuilt.to_string(), source);
    assert_eq!(rebuilt.len(), source.chars().count());
}

#[test]
fn test_reconstruction_fuses_back_to_contiguous_views() {
    // Every piece is a view of the one source buffer and the pieces are
    // rejoined in order, so no materialization should be needed to compare
    // character by character.
    let source = "let x = 1;";
    let boundaries = [(0, 3, 4), (4, 5, 6), (6, 7, 8), (8, 10, 10)];
    let rebuilt = reconstruct(&carve(source, &boundaries));

    assert!(rebuilt.chars().eq(source.chars()));
    assert_eq!(rebuilt, Text::from(source));
}

#[test]
fn test_tokens_with_empty_trivia() {
    let source = "ab";
    let tokens = carve(source, &[(0, 1, 1), (1, 2, 2)]);
    for (lead, _, trail) in &tokens {
        assert!(lead.is_empty());
        assert!(trail.is_empty());
    }
    assert_eq!(reconstruct(&tokens), "ab");
}

#[test]
fn test_reordering_tokens_changes_content() {
    // Sanity check that reconstruction order matters: the rope preserves
    // exactly the order it is given.
    let source = "ab cd";
    let mut tokens = carve(source, &[(0, 2, 3), (3, 5, 5)]);
    tokens.swap(0, 1);
    assert_eq!(reconstruct(&tokens), "cdab ");
}
