//! Testing utilities for melflow.
//!
//! Record fixtures shared by unit tests and benchmarks.

mod fixtures;

pub use fixtures::{
    chain_record, event_pairs, grouped_record, scenario_record, FACILITATOR_CHANNEL,
    PASS_THROUGH_TYPE,
};
