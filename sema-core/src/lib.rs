//! Board-agnostic sequencing logic for the Sema DV firmware
//!
//! This crate contains everything the DV test binaries do that does not
//! depend on the management SoC's register map:
//!
//! - Bring-up sequencer (pad modes, housekeeping, user interface)
//! - Sync-pulse marker primitive
//! - UART configuration and transmit sequences
//! - The end-to-end test scenarios
//!
//! Every routine takes its register interfaces as `sema-hal` trait handles,
//! so the same sequences run on the SoC and against recording mocks.

#![no_std]
#![deny(unsafe_code)]

pub mod bringup;
pub mod pulse;
pub mod scenario;
pub mod uart;
