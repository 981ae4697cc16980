//! Command mapping and dispatch tests.
use super::*;
use crate::filter::ClassifyResult;

#[test]
/// Both cases of each command letter map to the same command.
fn test_key_mapping_case_insensitive() {
    for (key, command) in [
        (b'F', Command::ToggleFilter),
        (b'f', Command::ToggleFilter),
        (b'C', Command::ClearFilter),
        (b'c', Command::ClearFilter),
        (b'D', Command::DumpFilter),
        (b'd', Command::DumpFilter),
        (b'R', Command::Reset),
        (b'r', Command::Reset),
    ] {
        assert_eq!(Command::from_key(key), Some(command));
    }
}

#[test]
/// Anything outside the command set maps to nothing.
fn test_unknown_keys() {
    for key in [b'x', b'0', b' ', b'\n', 0x1B, 0xFF] {
        assert_eq!(Command::from_key(key), None);
    }
}

#[test]
/// `F` flips the mode and reports the new value.
fn test_dispatch_toggle() {
    let mut engine: FilterEngine<8> = FilterEngine::new();
    assert_eq!(
        dispatch(b'f', &mut engine),
        CommandEffect::ModeChanged(FilterMode::Learning)
    );
    assert_eq!(
        dispatch(b'F', &mut engine),
        CommandEffect::ModeChanged(FilterMode::Reporting)
    );
}

#[test]
/// `C` empties the set and leaves the mode alone.
fn test_dispatch_clear() {
    let mut engine: FilterEngine<8> = FilterEngine::new();
    engine.toggle();
    engine.classify(0x123);
    assert_eq!(dispatch(b'c', &mut engine), CommandEffect::Cleared);
    assert!(engine.is_empty());
    assert_eq!(engine.mode(), FilterMode::Learning);
}

#[test]
/// `D` and `R` mutate nothing by themselves.
fn test_dispatch_dump_and_reset_leave_state() {
    let mut engine: FilterEngine<8> = FilterEngine::new();
    engine.toggle();
    engine.classify(0x123);
    assert_eq!(dispatch(b'd', &mut engine), CommandEffect::Dump);
    assert_eq!(dispatch(b'R', &mut engine), CommandEffect::ResetRequested);
    assert_eq!(engine.list(), &[0x123]);
    assert_eq!(engine.mode(), FilterMode::Learning);
}

#[test]
/// Unknown keys produce a notice effect and leave mode and set unchanged.
fn test_dispatch_unknown_is_neutral() {
    let mut engine: FilterEngine<8> = FilterEngine::new();
    engine.toggle();
    engine.classify(0x10);
    engine.classify(0x20);

    assert_eq!(dispatch(b'q', &mut engine), CommandEffect::Unknown(b'q'));
    assert_eq!(engine.mode(), FilterMode::Learning);
    assert_eq!(engine.list(), &[0x10, 0x20]);
    // Classification behaves as if no key had been pressed.
    assert_eq!(engine.classify(0x10), ClassifyResult::Silent);
}
