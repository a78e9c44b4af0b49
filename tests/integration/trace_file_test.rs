//! Trace file round-trips through real recordings.

use tempfile::TempDir;

use stepscope::recorder::AlgorithmId;
use stepscope::trace::{TraceFile, TraceHeader};
use stepscope::{Player, Recorder};

use crate::helpers::sample_trace_file;

#[test]
fn every_algorithm_roundtrips_through_a_file() {
    let dir = TempDir::new().unwrap();

    for id in AlgorithmId::ALL {
        let case = Recorder::default_case(id);
        let trace = Recorder::record(id, &case).unwrap();
        let header = TraceHeader::new(id.as_str())
            .with_case(&case.name)
            .stamped();
        let path = dir.path().join(format!("{id}.jsonl"));

        TraceFile::new(header.clone(), trace.clone())
            .write(&path)
            .unwrap();
        let parsed = TraceFile::parse(&path).unwrap();

        assert_eq!(parsed.header, header, "{id} header changed in transit");
        assert_eq!(parsed.trace, trace, "{id} steps changed in transit");
    }
}

#[test]
fn an_externally_written_trace_binds_to_a_player() {
    let file = TraceFile::parse_str(sample_trace_file()).unwrap();
    let len = file.trace.len();

    let mut player = Player::new();
    player.bind(file.trace);

    assert_eq!(player.total_steps(), len);
    assert_eq!(player.current_index(), 0);
    assert_eq!(
        player.current_step().unwrap().description,
        "start with the full range"
    );
}

#[test]
fn version_gate_rejects_future_files() {
    let bumped = sample_trace_file().replacen("\"version\":1", "\"version\":2", 1);
    let err = TraceFile::parse_str(&bumped).unwrap_err();
    assert!(err.to_string().contains("got version 2"));
}

#[test]
fn reserialized_input_is_byte_identical() {
    let file = TraceFile::parse_str(sample_trace_file()).unwrap();
    assert_eq!(file.to_string().unwrap(), sample_trace_file());
}
