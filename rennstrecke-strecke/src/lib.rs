//! Aneinanderreihen von Kacheln zu einer Rennstrecke, sowie Anordnen als Liste.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]

use rennstrecke_kachel::Kachel;
use rennstrecke_typen::Position;

pub mod aufbau;
pub mod austausch;
pub mod liste;

/// Eine Kachel mit ihrer berechneten Position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionierteKachel {
    /// Index der Kachel in der Eingabe.
    pub id: usize,
    /// Pose des Eingangs.
    pub position: Position,
    /// Die Kachel.
    pub kachel: Kachel,
}
