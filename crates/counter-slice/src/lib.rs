//! Counter State Slice
//!
//! Builds the configuration for a named counter slice: the initial state
//! plus the `increment`/`decrement` reducers. The state-management runtime
//! that consumes a slice lives elsewhere; this crate only describes it.

use serde::{Deserialize, Serialize};

/// Case reducer names, in declaration order
pub const CASES: [&str; 2] = ["increment", "decrement"];

/// State owned by a counter slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub counter: i64,
}

/// Pure state transition
pub type Reducer = fn(&CounterState) -> CounterState;

/// Reducer map of a counter slice
#[derive(Debug, Clone, Copy)]
pub struct CaseReducers {
    pub increment: Reducer,
    pub decrement: Reducer,
}

/// Action dispatched to a slice, serialized as `{"type": "<slice>/<case>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,
}

/// Named slice descriptor
#[derive(Debug, Clone)]
pub struct Slice {
    pub name: String,
    pub initial_state: CounterState,
    pub reducers: CaseReducers,
}

/// Build the counter slice for `name`.
pub fn build(name: impl Into<String>) -> Slice {
    Slice::new(name)
}

pub fn increment(state: &CounterState) -> CounterState {
    CounterState { counter: state.counter + 1 }
}

pub fn decrement(state: &CounterState) -> CounterState {
    CounterState { counter: state.counter - 1 }
}

impl Slice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_state: CounterState::default(),
            reducers: CaseReducers { increment, decrement },
        }
    }

    /// Look up a case reducer by its short name (`"increment"`)
    pub fn reducer(&self, case: &str) -> Option<Reducer> {
        match case {
            "increment" => Some(self.reducers.increment),
            "decrement" => Some(self.reducers.decrement),
            _ => None,
        }
    }

    /// Fully-qualified action type for a case, e.g. `counter/increment`
    pub fn action_type(&self, case: &str) -> String {
        format!("{}/{}", self.name, case)
    }

    /// Action creator for `increment`
    pub fn increment(&self) -> Action {
        Action { action_type: self.action_type("increment") }
    }

    /// Action creator for `decrement`
    pub fn decrement(&self) -> Action {
        Action { action_type: self.action_type("decrement") }
    }

    /// All action types this slice answers to
    pub fn actions(&self) -> Vec<Action> {
        CASES
            .iter()
            .map(|case| Action { action_type: self.action_type(case) })
            .collect()
    }

    /// Route `action` to the matching case reducer.
    ///
    /// Actions addressed to another slice, or to a case this slice does not
    /// declare, return `state` unchanged.
    pub fn reduce(&self, state: &CounterState, action: &Action) -> CounterState {
        action
            .action_type
            .strip_prefix(self.name.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(|case| self.reducer(case))
            .map_or(*state, |reducer| reducer(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_descriptor() {
        let slice = build("counter");
        assert_eq!(slice.name, "counter");
        assert_eq!(slice.initial_state, CounterState { counter: 0 });
    }

    #[test]
    fn test_reducers() {
        let slice = build("counter");
        assert_eq!((slice.reducers.increment)(&CounterState { counter: 5 }), CounterState { counter: 6 });
        assert_eq!((slice.reducers.decrement)(&CounterState { counter: 0 }), CounterState { counter: -1 });
    }

    #[test]
    fn test_reducers_do_not_mutate_input() {
        let state = CounterState { counter: 3 };
        let next = increment(&state);
        assert_eq!(state.counter, 3);
        assert_eq!(next.counter, 4);
    }

    #[test]
    fn test_reducer_lookup() {
        let slice = build("counter");
        assert!(slice.reducer("increment").is_some());
        assert!(slice.reducer("decrement").is_some());
        assert!(slice.reducer("reset").is_none());
    }

    #[test]
    fn test_reduce_routes_by_action_type() {
        let slice = build("clicks");
        let state = slice.initial_state;

        let state = slice.reduce(&state, &slice.increment());
        let state = slice.reduce(&state, &slice.increment());
        let state = slice.reduce(&state, &slice.decrement());
        assert_eq!(state.counter, 1);
    }

    #[test]
    fn test_reduce_ignores_foreign_actions() {
        let slice = build("clicks");
        let state = CounterState { counter: 7 };

        let other = build("other").increment();
        assert_eq!(slice.reduce(&state, &other), state);

        let unknown = Action { action_type: "clicks/reset".to_string() };
        assert_eq!(slice.reduce(&state, &unknown), state);

        // Prefix match alone is not enough
        let lookalike = Action { action_type: "clicksincrement".to_string() };
        assert_eq!(slice.reduce(&state, &lookalike), state);
    }
}
