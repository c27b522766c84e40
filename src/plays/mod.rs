//! Play Resolver: play calls, probability tables and outcome draws.
//!
//! - `call`: the `PlayCall` enum and name parsing
//! - `definition`: per-play probability tables
//! - `playbook`: validated registry of table-driven plays
//! - `resolver`: outcome and kicking resolution

pub mod call;
pub mod definition;
pub mod playbook;
pub mod resolver;

pub use call::PlayCall;
pub use definition::{PlayDefinition, YardRange};
pub use playbook::{standard_definitions, Playbook};
pub use resolver::{
    attempt_extra_point, attempt_field_goal, attempt_two_point, field_goal_probability,
    punt_narrative, resolve, KickAttempt, OutcomeCategory, PlayOutcome,
};
