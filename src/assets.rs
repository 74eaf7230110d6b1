//! Logical asset identifiers
//!
//! The simulation and frame capture tag draw instructions with these ids;
//! the platform layer resolves them to real sprites, or to placeholder
//! shapes when no bundle is loaded. The core never touches files.

/// Logical sprite id with a stable bundle name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Backdrop,
    Mountains,
    Ground,
    /// Run-cycle frame, 0-2
    Runner(u8),
    FireSmall,
    FireMedium,
    FireLarge,
    Coin,
}

impl SpriteId {
    /// Stable name used to look the image up in an asset bundle
    pub fn name(self) -> &'static str {
        match self {
            SpriteId::Backdrop => "backdrop",
            SpriteId::Mountains => "mountains",
            SpriteId::Ground => "ground",
            SpriteId::Runner(0) => "runner_0",
            SpriteId::Runner(1) => "runner_1",
            SpriteId::Runner(_) => "runner_2",
            SpriteId::FireSmall => "fire_small",
            SpriteId::FireMedium => "fire_medium",
            SpriteId::FireLarge => "fire_large",
            SpriteId::Coin => "coin",
        }
    }
}

/// The two font sizes the HUD uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Normal,
    Large,
}

impl FontSize {
    /// Point size for the HUD layer
    pub fn points(self) -> f32 {
        match self {
            FontSize::Normal => 40.0,
            FontSize::Large => 120.0,
        }
    }
}
