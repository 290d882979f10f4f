//! `tether-movement`: execution of a single manual move command.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`arrival`]  | `ArrivalRule`, `ARRIVAL_POLICY`, `evaluate_arrival`             |
//! | [`state`]    | `MovePhase` {Idle, Warmup, Polling}, `Step`, `MoveCompletion`   |
//! | [`executor`] | `MovementExecutor`, command surface and native side effects     |
//! | [`error`]    | `MovementError`, `MovementResult<T>`                            |
//!
//! # Command lifecycle
//!
//! ```text
//!  move_to ──► Warmup ──(warmup expires)──► Polling ──(arrived | failsafe)──► Idle
//!                │                                                          ▲
//!                └──────────────(failsafe expires)──────────────────────────┘
//! ```
//!
//! 1. `MovementExecutor::move_to` stops the agent, issues the native move and
//!    enters `Warmup`.  Arrival is not evaluated yet: right after a path
//!    request the host typically reports "no path", which would read as
//!    arrived.
//! 2. Each `tick` calls `MovePhase::advance`, the single transition
//!    function.  The failsafe counts down from the moment of issue.
//! 3. On arrival or failsafe expiry the executor stops the native agent and
//!    returns a [`MoveCompletion`].  There is no separate failure outcome; an
//!    unreachable target surfaces as `MoveCompletion::TimedOut`.

pub mod arrival;
pub mod error;
pub mod executor;
pub mod state;


pub use arrival::{ARRIVAL_POLICY, ArrivalRule, evaluate_arrival};
pub use error::{MovementError, MovementResult};
pub use executor::MovementExecutor;
pub use state::{MoveCompletion, MovePhase, Step};
