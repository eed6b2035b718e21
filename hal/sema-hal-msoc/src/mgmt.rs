//! Management subsystem register blocks
//!
//! The management GPIO pad, the housekeeping SPI pass-through, and the
//! user-project interface enable are single-register controls in the
//! management address space.

use sema_hal::{Housekeeping, MgmtGpio, UserInterface};

use crate::reg;

const MGMT_GPIO_BASE: u32 = 0x2100_0000;
/// Pad output level
const MGMT_GPIO_DATA: u32 = MGMT_GPIO_BASE;
/// Pad output-driver enable
const MGMT_GPIO_OE: u32 = MGMT_GPIO_BASE + 0x04;

const HK_BASE: u32 = 0x2610_0000;
/// Writing 1 disconnects the housekeeping SPI from the shared pads
const HK_SPI_DISABLE: u32 = HK_BASE;

const USER_BASE: u32 = 0x2620_0000;
/// User-project interface enable
const USER_IF_ENABLE: u32 = USER_BASE;

/// Management GPIO pad handle
pub struct MgmtPad {
    _priv: (),
}

impl MgmtPad {
    pub(crate) const fn new() -> Self {
        Self { _priv: () }
    }
}

impl MgmtGpio for MgmtPad {
    fn enable_output(&mut self) {
        reg::write(MGMT_GPIO_OE, 1);
    }

    fn set_high(&mut self) {
        reg::write(MGMT_GPIO_DATA, 1);
    }

    fn set_low(&mut self) {
        reg::write(MGMT_GPIO_DATA, 0);
    }
}

/// Housekeeping SPI control handle
pub struct HkSpi {
    _priv: (),
}

impl HkSpi {
    pub(crate) const fn new() -> Self {
        Self { _priv: () }
    }
}

impl Housekeeping for HkSpi {
    fn set_spi_enabled(&mut self, enabled: bool) {
        // The register is a disable: 1 disconnects the pass-through
        reg::write(HK_SPI_DISABLE, if enabled { 0 } else { 1 });
    }
}

/// User-project interface enable handle
pub struct UserCtrl {
    _priv: (),
}

impl UserCtrl {
    pub(crate) const fn new() -> Self {
        Self { _priv: () }
    }
}

impl UserInterface for UserCtrl {
    fn enable(&mut self) {
        reg::write(USER_IF_ENABLE, 1);
    }
}
