// src/lexer/tables/io.rs
use std::{
    io::{BufWriter, Write},
    path::Path,
    time::Instant,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::{
    dfa::{Automaton, Row},
    finals::FinalStates,
};

// -------------------- JSON (de)serialization --------------------

#[serde_as]
#[derive(Serialize, Deserialize)]
struct AutomatonDisk {
    #[serde_as(as = "Vec<[_; 256]>")]
    rows: Vec<Row>,
    finals: FinalStates,
}

impl From<&Automaton> for AutomatonDisk {
    fn from(a: &Automaton) -> Self {
        Self {
            rows: a.rows().to_vec(),
            finals: a.final_states().clone(),
        }
    }
}

/// Writes an already-built automaton so it can be reloaded without replaying
/// the rule file.
pub fn save_automaton_json(path: &Path, automaton: &Automaton) -> std::io::Result<()> {
    let instant = Instant::now();
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, &AutomatonDisk::from(automaton))?;
    let flush = w.flush();
    log::debug!(
        "[tables] saved automaton to {} in {} ms",
        path.display(),
        instant.elapsed().as_millis()
    );
    flush
}

/// Loads a table written by `save_automaton_json`. The rows go through the
/// same validation as a freshly built table.
pub fn load_automaton_json_bytes(data: &[u8]) -> Result<Automaton> {
    let disk: AutomatonDisk =
        serde_json::from_slice(data).context("Failed to parse automaton JSON")?;
    let automaton = Automaton::from_parts(disk.rows, disk.finals)
        .context("Automaton JSON describes an invalid table")?;
    log::debug!(
        "[tables] loaded automaton: {} states, {} edges",
        automaton.state_count(),
        automaton.edge_count()
    );
    Ok(automaton)
}

/// Loads a final-state sidecar such as
/// `{"identifier": [1], "integer_literal": [2], ...}`. Missing keys are empty.
pub fn load_final_states_json_bytes(data: &[u8]) -> Result<FinalStates> {
    serde_json::from_slice(data).context("Failed to parse final states JSON")
}
