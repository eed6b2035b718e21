//! Management-SoC implementation of the `sema-hal` traits
//!
//! Maps each trait onto the SoC's register blocks with volatile accesses:
//!
//! - Management GPIO pad (output-enable and data registers)
//! - Housekeeping SPI pass-through disable
//! - User pad bank with its serial-transfer commit register
//! - User-project interface enable
//! - UART register block in the user-project address space
//!
//! All unsafe register access is confined to this crate; everything above
//! it is written against the `sema-hal` traits.

#![no_std]

pub mod gpio;
pub mod mgmt;
pub mod uart;

mod reg;

pub use gpio::PinBank;
pub use mgmt::{HkSpi, MgmtPad, UserCtrl};
pub use uart::{Uart, UART0_BASE};

// Re-export shared traits from sema-hal for convenience
pub use sema_hal::{
    Housekeeping, MgmtGpio, PinMode, UartDevice, UartSetup, UserInterface, UserPinBank,
};

/// The SoC's peripheral handles, one per register block.
pub struct Peripherals {
    pub mgmt: MgmtPad,
    pub housekeeping: HkSpi,
    pub pins: PinBank,
    pub user: UserCtrl,
    pub uart0: Uart,
}

impl Peripherals {
    /// Create the peripheral handles.
    ///
    /// # Safety
    ///
    /// The handles alias the memory-mapped register blocks. Call once,
    /// from the single thread of execution.
    pub const unsafe fn new() -> Self {
        Self {
            mgmt: MgmtPad::new(),
            housekeeping: HkSpi::new(),
            pins: PinBank::new(),
            user: UserCtrl::new(),
            uart0: Uart::new(UART0_BASE),
        }
    }
}
