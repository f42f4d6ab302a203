//! Token sinks, the drive loop, parallel scanning and table persistence.

use std::sync::Arc;

use anyhow::Result;
use dfalex::lexer::{
    LexError, LineSink, Scanner, Token, TokenSink, drive, scan_many,
    tables::{
        Automaton, TokenCategory, load_automaton_json_bytes, load_final_states_json_bytes,
        save_automaton_json,
    },
};

fn mini_java() -> Automaton {
    let finals =
        load_final_states_json_bytes(include_bytes!("../tables/mini_java.finals.json")).unwrap();
    Automaton::from_spec_str(include_str!("../tables/mini_java.lexer"), finals).unwrap()
}

fn write_lines(a: &Automaton, src: &str) -> (String, dfalex::lexer::DriveReport) {
    let mut scanner = Scanner::new(a, src);
    let mut sink = LineSink::new(Vec::new());
    let report = drive(&mut scanner, &mut sink).unwrap();
    (String::from_utf8(sink.into_inner()).unwrap(), report)
}

#[test]
fn line_sink_writes_category_and_lexeme() {
    let a = mini_java();
    let (out, report) = write_lines(&a, "int x = 1;\n");
    assert_eq!(
        out,
        "KEYWORD int\nIDENTIFIER x\nOPERATOR =\nINTEGER_LITERAL 1\nSEPARATOR ;\n"
    );
    assert_eq!(report.tokens, 5);
    assert_eq!(report.error, None);
}

#[test]
fn line_sink_reports_the_error_position_and_stops() {
    let a = mini_java();
    let (out, report) = write_lines(&a, "x @ y");
    assert_eq!(out, "IDENTIFIER x\nLexer Error at character number 2");
    assert_eq!(report.tokens, 1);
    assert_eq!(report.error, Some(LexError { position: 2 }));
}

#[derive(Default)]
struct Collect {
    seen: Vec<(TokenCategory, String)>,
    errors: Vec<usize>,
}

impl TokenSink for Collect {
    fn accept(&mut self, token: Token, lexeme: &str) -> Result<()> {
        self.seen.push((token.category, lexeme.to_string()));
        Ok(())
    }

    fn error(&mut self, err: LexError) -> Result<()> {
        self.errors.push(err.position);
        Ok(())
    }
}

#[test]
fn custom_sink_sees_every_token_once() {
    let a = mini_java();
    let mut scanner = Scanner::new(&a, "a a 'z' @");
    let mut sink = Collect::default();
    drive(&mut scanner, &mut sink).unwrap();
    assert_eq!(
        sink.seen,
        vec![
            (TokenCategory::Identifier, "a".to_string()),
            (TokenCategory::Identifier, "a".to_string()),
            (TokenCategory::CharacterLiteral, "'z'".to_string()),
        ]
    );
    assert_eq!(sink.errors, vec![8]);
}

struct Failing;

impl TokenSink for Failing {
    fn accept(&mut self, _: Token, _: &str) -> Result<()> {
        anyhow::bail!("disk full")
    }

    fn error(&mut self, _: LexError) -> Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failures_propagate() {
    let a = mini_java();
    let mut scanner = Scanner::new(&a, "x");
    let err = drive(&mut scanner, Failing).unwrap_err();
    assert_eq!(err.to_string(), "disk full");
}

#[test]
fn scan_many_keeps_input_order_and_separate_interners() {
    let a = mini_java();
    let buffers = ["b a b", "1 @", "class", ""];
    let out = scan_many(&a, &buffers);
    assert_eq!(out.len(), 4);

    assert_eq!(out[0].tokens.len(), 3);
    assert_eq!(out[0].error, None);
    assert_eq!(out[0].tokens[0].id, out[0].tokens[2].id);
    assert_eq!(out[0].lexeme(&out[0].tokens[1]), Some("a"));

    assert_eq!(out[1].tokens.len(), 1);
    assert_eq!(out[1].error, Some(LexError { position: 2 }));

    assert_eq!(out[2].tokens[0].category, TokenCategory::Keyword);
    assert_eq!(out[2].tokens[0].id, 0);
    assert_eq!(out[2].lexeme(&out[2].tokens[0]), Some("class"));

    assert!(out[3].tokens.is_empty());
    assert_eq!(out[3].error, None);
}

#[test]
fn one_automaton_many_threads() {
    let a = Arc::new(mini_java());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let a = Arc::clone(&a);
            std::thread::spawn(move || {
                let src = format!("v{i} = {i};");
                Scanner::new(&a, src).run().tokens.len()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 4);
    }
}

#[test]
fn saved_tables_reload_identically() {
    let a = mini_java();
    let path = std::env::temp_dir().join(format!("dfalex-tables-{}.json", std::process::id()));
    save_automaton_json(&path, &a).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let loaded = load_automaton_json_bytes(&bytes).unwrap();
    assert_eq!(loaded, a);
}

#[test]
fn loaded_tables_are_validated() {
    let doc = serde_json::json!({
        "rows": [vec![5u32; 256]],
        "finals": { "identifier": [0] },
    });
    let err = load_automaton_json_bytes(doc.to_string().as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("past the last state"));
}
