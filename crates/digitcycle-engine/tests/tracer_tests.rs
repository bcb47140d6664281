use digitcycle_engine::{trace, TraceError, Tracer};
use pretty_assertions::assert_eq;

fn values(t: &digitcycle_engine::Trace) -> Vec<u64> {
    t.steps.iter().map(|s| s.value).collect()
}

#[test]
fn fifteen_walks_into_the_unhappy_cycle() {
    let t = trace(15);
    assert_eq!(
        values(&t),
        vec![15, 26, 40, 16, 37, 58, 89, 145, 42, 20, 4]
    );
    // Second occurrence of 16 is where iteration stopped; the first is the
    // cycle entry.
    assert_eq!(t.cycle_start_index, 3);
    assert_eq!(t.cycle_length, 8);
    assert!(t.steps[3].is_cycle_entry);
    assert!(t.steps[..3].iter().all(|s| !s.in_cycle));
    assert!(t.steps[3..].iter().all(|s| s.in_cycle));
    assert!(!t.converges_to_one());
}

#[test]
fn powers_of_ten_resolve_to_the_fixed_point_one() {
    for n in [1u64, 10, 100] {
        let t = trace(n);
        assert!(t.converges_to_one(), "trace({n}) should settle on 1");
        assert_eq!(t.cycle_length, 1);
        let entry = &t.steps[t.cycle_start_index];
        assert_eq!(entry.value, 1);
        assert_eq!(entry.index, t.cycle_start_index);
        // The entry is the first occurrence of 1 in the step list.
        assert_eq!(
            t.steps.iter().position(|s| s.value == 1),
            Some(t.cycle_start_index)
        );
    }
}

#[test]
fn zero_traces_to_a_single_self_mapping_step() {
    let t = trace(0);
    assert_eq!(values(&t), vec![0]);
    assert_eq!(t.steps[0].digits, vec![0]);
    assert_eq!(t.steps[0].next_value, 0);
    assert_eq!((t.cycle_start_index, t.cycle_length), (0, 1));
    assert!(t.is_fixed_point());
}

#[test]
fn single_digit_inputs_use_the_same_decomposition_rule() {
    let t = trace(7);
    assert_eq!(t.steps[0].digits, vec![7]);
    assert_eq!(t.steps[0].next_value, 49);
    assert_eq!(t.steps[1].value, 49);
}

#[test]
fn exactly_one_cycle_entry_when_a_repeat_is_found() {
    for n in [0u64, 1, 4, 15, 16, 99, 1234, 999_999] {
        let t = trace(n);
        assert_eq!(
            t.steps.iter().filter(|s| s.is_cycle_entry).count(),
            1,
            "trace({n}) should mark exactly one cycle entry"
        );
        assert_eq!(t.cycle_length, t.steps.len() - t.cycle_start_index);
    }
}

#[test]
fn invalid_input_never_yields_a_partial_trace() {
    let tracer = Tracer::new();
    assert_eq!(
        tracer.trace_value(-1.0),
        Err(TraceError::InvalidInput { value: -1.0 })
    );
    assert_eq!(
        tracer.trace_value(3.25),
        Err(TraceError::InvalidInput { value: 3.25 })
    );
    assert_eq!(tracer.trace_value(15.0).unwrap(), trace(15));
}

#[test]
fn configured_ceiling_bounds_the_step_count() {
    let t = Tracer::with_max_steps(5).trace(2);
    assert_eq!(t.steps.len(), 6);
    assert!(!t.cycle_found());

    // A ceiling large enough for the repeat behaves like the default.
    let full = Tracer::with_max_steps(50).trace(2);
    assert_eq!(full, trace(2));
}

#[test]
fn trace_serializes_opaquely_for_history_consumers() {
    let t = trace(15);
    let json = serde_json::to_string(&t).unwrap();
    let back: digitcycle_engine::Trace = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}
