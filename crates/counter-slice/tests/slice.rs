use counter_slice::{build, Action, CounterState};
use serde_json::json;

#[test]
fn counter_can_go_negative() {
    let slice = build("counter");
    let mut state = slice.initial_state;
    for _ in 0..3 {
        state = (slice.reducers.decrement)(&state);
    }
    assert_eq!(state, CounterState { counter: -3 });
}

#[test]
fn slices_are_independent() {
    let a = build("a");
    let b = build("b");

    let state = a.reduce(&a.initial_state, &a.increment());
    assert_eq!(state.counter, 1);
    assert_eq!(b.initial_state.counter, 0);
}

#[test]
fn wire_shapes() {
    let slice = build("counter");

    assert_eq!(serde_json::to_value(slice.initial_state).unwrap(), json!({ "counter": 0 }));
    assert_eq!(
        serde_json::to_value(slice.actions()).unwrap(),
        json!([{ "type": "counter/increment" }, { "type": "counter/decrement" }])
    );

    let action: Action = serde_json::from_value(json!({ "type": "counter/increment" })).unwrap();
    let state: CounterState = serde_json::from_value(json!({ "counter": 5 })).unwrap();
    assert_eq!(slice.reduce(&state, &action), CounterState { counter: 6 });
}
