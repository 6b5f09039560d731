//! Grundlegende Typen für die Geometrie einer Rennstrecke.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};

use crate::{vektor::Vektor, winkel::WinkelGradmaß};

pub mod rechteck;
pub mod skalar;
pub mod vektor;
pub mod winkel;

/// Position (Pose) eines Objekts: ein Punkt und die Blickrichtung.
///
/// Bei `winkel = 0°` zeigt die Blickrichtung in Richtung der positiven y-Achse.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Der Punkt der Position.
    pub punkt: Vektor,
    /// Die Blickrichtung, im Uhrzeigersinn.
    pub winkel: WinkelGradmaß,
}

impl Position {
    /// Der Ursprung mit Blickrichtung `0°`.
    pub const URSPRUNG: Position = Position { punkt: Vektor::URSPRUNG, winkel: WinkelGradmaß::neu(0.) };

    /// Erzeuge eine neue [`Position`].
    #[must_use]
    pub const fn neu(x: f64, y: f64, winkel: f64) -> Self {
        Position { punkt: Vektor::neu(x, y), winkel: WinkelGradmaß::neu(winkel) }
    }
}
