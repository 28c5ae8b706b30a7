//! Structural properties every successfully parsed test satisfies.

use stil_common::{CompareValue, Direction, EventValue};
use stil_conformance::{triples, StilSource, FULL_EXAMPLE};
use stil_model::StilTest;

fn full() -> StilTest {
    stil_parser::parse_str(FULL_EXAMPLE).unwrap()
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(full(), full());
    assert_eq!(triples(&full()), triples(&full()));
}

#[test]
fn every_binding_lies_within_the_period() {
    let test = full();
    let table = test.waveform_table().unwrap();
    for waveform in table.waveforms() {
        for (timestamp, _) in waveform.bindings() {
            assert!(timestamp <= table.period());
        }
    }
    for vector in test.test_vectors() {
        assert!(vector.timestamps().iter().all(|&ts| ts <= table.period()));
        assert_eq!(vector.period(), table.period());
        assert_eq!(vector.unit(), table.unit());
    }
}

#[test]
fn every_vector_signal_is_covered_by_a_waveform() {
    let test = full();
    let table = test.waveform_table().unwrap();
    for vector in test.test_vectors() {
        for events in vector.events().values() {
            for event in events {
                let waveform = table.waveform_for_signal(event.signal).unwrap();
                let signal = test.signal(event.signal).unwrap();
                assert_eq!(waveform.direction(), signal.direction());
                assert_eq!(event.value.direction(), signal.direction());
            }
        }
    }
}

#[test]
fn cycles_and_timestamps_ascend() {
    let test = full();
    let cycles: Vec<u64> = test.test_vectors().map(|v| v.tester_cycle()).collect();
    assert_eq!(cycles, vec![0, 1, 2]);
    for vector in test.test_vectors() {
        let stamps = vector.timestamps();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn multi_valued_binding_emits_one_event_per_signal() {
    let test = StilSource::new("pairs")
        .signal("q0", Direction::Output)
        .signal("q1", Direction::Output)
        .signal("q2", Direction::Output)
        .signal("q3", Direction::Output)
        .group("q", &["q0", "q1", "q2", "q3"])
        .waveform("q", "HLXT", "'40ns' H/L/X/T;")
        .cycle(0, &[("q", "TXLH")])
        .parse()
        .unwrap();
    let vector = test.test_vector(0).unwrap();
    assert_eq!(vector.event_count(), 4);
    let values: Vec<char> = vector.events_at(40).iter().map(|e| e.value.code()).collect();
    assert_eq!(values, vec!['T', 'X', 'L', 'H']);
}

#[test]
fn single_valued_binding_applies_to_every_recognized_condition() {
    let test = StilSource::new("single")
        .signal("q", Direction::Output)
        .group("g", &["q"])
        .waveform("g", "HL", "'0ns' X;")
        .cycle(0, &[("g", "H")])
        .cycle(1, &[("g", "L")])
        .parse()
        .unwrap();
    let dont_care = EventValue::Compare(CompareValue::DontCare);
    for cycle in [0, 1] {
        let events = test.test_vector(cycle).unwrap().events_at(0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].value, dont_care);
    }
}

#[test]
fn groups_share_members_but_keep_their_own_direction() {
    let test = full();
    let all_in = test.group_by_name("all_in").unwrap();
    assert_eq!(all_in.direction(), Some(Direction::Input));
    assert_eq!(test.member_names(all_in), vec!["clk", "rst_n", "din0", "din1"]);
    assert!(test.is_in_group("all_in", "din1"));
    assert!(!test.is_in_group("all_in", "dout0"));
    assert!(test.is_in_group("din", "din1"));
}
