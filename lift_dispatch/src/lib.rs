//! # Lift Dispatch Library
//!
//! Dispatch and coordination for a bank of elevators serving a fixed set of
//! floors. Hall panels and cab panels enqueue requests, a pluggable
//! [`strategy::DispatchStrategy`] picks the elevator for each hall call, and
//! every elevator advances through a two-state motion machine.
//!
//! ## Flow
//!
//! 1. **Call sources** — [`panel::HallPanel`] (per floor) and
//!    [`panel::CabPanel`] (per elevator) raise requests.
//! 2. **Queue** — [`controller::DispatchController`] stores them as
//!    [`controller::DispatchTask`] values in FIFO order.
//! 3. **Drain** — `process_requests()` consults the strategy for hall calls,
//!    routes cab calls straight to their elevator, and drives each elevator
//!    through [`elevator::Elevator::move_to_floor`].
//!
//! Draining is single-threaded: it takes `&mut self`, so two dispatches can
//! never overlap.

pub mod config;
pub mod controller;
pub mod elevator;
pub mod error;
pub mod floor;
pub mod panel;
pub mod strategy;
