//! Sema Hardware Abstraction Layer
//!
//! This crate defines the register-access traits the bring-up sequencer is
//! written against. The memory-mapped implementation for the management SoC
//! lives in `sema-hal-msoc`; the sequencer tests implement the same traits
//! with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Sequencer logic (sema-core)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sema-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ sema-hal-msoc │       │  test mocks   │
//! │ (register map)│       │  (sema-core)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`mgmt::MgmtGpio`] - management GPIO pad (the sync-marker pin)
//! - [`mgmt::Housekeeping`] - housekeeping SPI pass-through control
//! - [`mgmt::UserInterface`] - user-project interface enable
//! - [`gpio::UserPinBank`] - staged user pad configuration
//! - [`uart::UartDevice`] - UART peripheral register surface

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod mgmt;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{PinMode, UserPinBank};
pub use mgmt::{Housekeeping, MgmtGpio, UserInterface};
pub use uart::{UartDevice, UartSetup};
