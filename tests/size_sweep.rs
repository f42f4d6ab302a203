//! Size sweep tests for the scanner:
//!  - all target lengths < 32 (0..=31), run by default
//!  - powers of two from 32 up to ~1,000,000, opt-in (ignored by default)
//!
//! Sources are generated from a fixed vocabulary with a seeded RNG, so the
//! expected token stream is known up front.

use std::collections::{HashMap, HashSet};

use dfalex::lexer::{
    Scanner, TokenId,
    tables::{Automaton, TokenCategory, load_final_states_json_bytes},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

use TokenCategory::*;

const VOCAB: &[(&str, Option<TokenCategory>)] = &[
    ("class", Some(Keyword)),
    ("while", Some(Keyword)),
    ("x", Some(Identifier)),
    ("foo1", Some(Identifier)),
    ("_tmp", Some(Identifier)),
    ("42", Some(IntegerLiteral)),
    ("0", Some(IntegerLiteral)),
    ("3.14", Some(FloatingPointLiteral)),
    ("'c'", Some(CharacterLiteral)),
    ("\"str ing\"", Some(StringLiteral)),
    ("+", Some(Operator)),
    ("++", Some(Operator)),
    ("=", Some(Operator)),
    ("==", Some(Operator)),
    ("/", Some(Operator)),
    ("(", Some(Separator)),
    (";", Some(Separator)),
    ("null", Some(NullLiteral)),
    ("true", Some(BooleanLiteral)),
    ("// skipped\n", None),
];

const GAPS: &[&str] = &[" ", "\n", "\t", "  ", "\r\n"];

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

fn mini_java() -> Automaton {
    let finals =
        load_final_states_json_bytes(include_bytes!("../tables/mini_java.finals.json")).unwrap();
    Automaton::from_spec_str(include_str!("../tables/mini_java.lexer"), finals).unwrap()
}

/// Produces at least `target_len` bytes of whitespace-separated vocabulary
/// words, plus the tokens a scan of it must yield.
fn gen_source(rng: &mut StdRng, target_len: usize) -> (String, Vec<(TokenCategory, &'static str)>) {
    let mut src = String::new();
    let mut expected = Vec::new();
    while src.len() < target_len {
        if !src.is_empty() {
            src.push_str(GAPS[rng.random_range(0..GAPS.len())]);
        }
        let (text, category) = VOCAB[rng.random_range(0..VOCAB.len())];
        src.push_str(text);
        if let Some(category) = category {
            expected.push((category, text));
        }
    }
    (src, expected)
}

fn check_len(a: &Automaton, rng: &mut StdRng, target_len: usize) {
    let (src, expected) = gen_source(rng, target_len);

    let mut sc = Scanner::new(a, src.as_str());
    let toks = sc
        .tokenize()
        .unwrap_or_else(|e| panic!("len={target_len}: {e} in {src:?}"));

    let got: Vec<(TokenCategory, &str)> = toks
        .iter()
        .map(|t| (t.category, sc.lexeme(t.id).unwrap()))
        .collect();
    assert_eq!(got, expected, "len={target_len} src={src:?}");
    assert!(sc.is_at_end());

    // Same text, same id; different text, different id.
    let mut ids: HashMap<&str, TokenId> = HashMap::new();
    for t in &toks {
        let text = sc.lexeme(t.id).unwrap();
        assert_eq!(*ids.entry(text).or_insert(t.id), t.id, "{text:?} re-interned");
    }
    let distinct: HashSet<TokenId> = ids.values().copied().collect();
    assert_eq!(distinct.len(), ids.len());

    let again = Scanner::new(a, src.as_str()).run();
    assert_eq!(again.tokens, toks, "rescan differs for len={target_len}");
}

#[test]
fn sweep_small_lengths() {
    let a = mini_java();
    let mut rng = StdRng::seed_from_u64(env_u64("SWEEP_SEED", 0x5EED_1E55));
    for target_len in 0..=31 {
        check_len(&a, &mut rng, target_len);
    }
}

#[test]
#[ignore]
fn sweep_powers_of_two() {
    let a = mini_java();
    let mut rng = StdRng::seed_from_u64(env_u64("SWEEP_SEED", 0x5EED_1E55));
    let max = env_u64("SWEEP_MAX", 1 << 20) as usize;
    let mut target_len = 32usize;
    while target_len <= max {
        check_len(&a, &mut rng, target_len);
        target_len *= 2;
    }
}
