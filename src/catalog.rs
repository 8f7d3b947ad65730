//! Supported Razer products.

/// Razer USB vendor ID.
pub(crate) const VENDOR_ID: u16 = 0x1532;

pub(crate) mod pid {
    pub(crate) const BASILISK_V3_X_HYPERSPEED: u16 = 0x00B9;
    pub(crate) const BLACKWIDOW_V3_PRO_WIRED: u16 = 0x025A;
    pub(crate) const BLACKWIDOW_V3_PRO_WIRELESS: u16 = 0x025C;
    pub(crate) const DEATHADDER_CHROMA: u16 = 0x0A00;
    pub(crate) const MAMBA_CHROMA: u16 = 0x0A01;
    pub(crate) const CYNOSA_CHROMA: u16 = 0x0A02;
    pub(crate) const TARTARUS_CHROMA: u16 = 0x0A03;
}

/// Product ID to display name.
pub(crate) const PRODUCTS: [(u16, &str); 7] = [
    (pid::BASILISK_V3_X_HYPERSPEED, "Razer Basilisk V3 X HyperSpeed"),
    (pid::BLACKWIDOW_V3_PRO_WIRED, "Razer BlackWidow V3 Pro Wired"),
    (pid::BLACKWIDOW_V3_PRO_WIRELESS, "Razer BlackWidow V3 Pro Wireless"),
    (pid::DEATHADDER_CHROMA, "Razer DeathAdder Chroma"),
    (pid::MAMBA_CHROMA, "Razer Mamba Chroma"),
    (pid::CYNOSA_CHROMA, "Razer Cynosa Chroma"),
    (pid::TARTARUS_CHROMA, "Razer Tartarus Chroma"),
];

/// Display name of a supported product.
pub(crate) fn name_for(product_id: u16) -> Option<&'static str> {
    PRODUCTS.iter().find(|(pid, _)| *pid == product_id).map(|(_, name)| *name)
}
