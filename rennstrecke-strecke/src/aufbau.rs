//! Aufbau einer Rennstrecke: jede Kachel beginnt am Ausgang ihres Vorgängers.

use std::collections::BTreeMap;

use log::debug;

use rennstrecke_kachel::{art::ModellId, Begrenzung, Geometrie, Kachel};
use rennstrecke_typen::{
    rechteck::Rechteck, skalar::Skalar, vektor::Vektor, winkel::WinkelGradmaß, Position,
};

use crate::PositionierteKachel;

/// Pose der ersten Kachel einer Strecke.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StreckenStart {
    /// x-Koordinate des Eingangs.
    pub x: Skalar,
    /// y-Koordinate des Eingangs.
    pub y: Skalar,
    /// Winkel am Eingang.
    pub winkel: WinkelGradmaß,
}

impl StreckenStart {
    /// Die Start-Pose als [`Position`].
    #[must_use]
    pub fn position(&self) -> Position {
        Position { punkt: Vektor { x: self.x, y: self.y }, winkel: self.winkel }
    }
}

/// Eine aufgebaute Rennstrecke.
#[derive(Debug, Clone, PartialEq)]
pub struct Strecke {
    /// Linke Kante des einschließenden Rechtecks.
    pub x: Skalar,
    /// Obere Kante des einschließenden Rechtecks.
    pub y: Skalar,
    /// Breite des einschließenden Rechtecks.
    pub breite: Skalar,
    /// Höhe des einschließenden Rechtecks.
    pub höhe: Skalar,
    /// Alle Kacheln in Reihenfolge der Eingabe.
    pub kacheln: Vec<PositionierteKachel>,
    /// Anzahl verwendeter Kacheln pro [`ModellId`].
    pub statistik: BTreeMap<ModellId, usize>,
}

impl Strecke {
    /// Das einschließende Rechteck aller Kacheln.
    #[must_use]
    pub fn rechteck(&self) -> Rechteck {
        let ecke_a = Vektor { x: self.x, y: self.y };
        let ecke_b = ecke_a + Vektor { x: self.breite, y: self.höhe };
        Rechteck { ecke_a, ecke_b }
    }
}

/// Reihe die `kacheln` beginnend bei `start` aneinander.
///
/// Jede Kachel wird am Ausgang der vorherigen Kachel platziert.
#[must_use]
pub fn baue_strecke(kacheln: &[Kachel], start: StreckenStart) -> Strecke {
    let mut aktuell = start.position();
    let mut rechteck: Option<Rechteck> = None;
    let mut positioniert = Vec::with_capacity(kacheln.len());
    let mut statistik = BTreeMap::new();
    for (id, kachel) in kacheln.iter().enumerate() {
        let Begrenzung { rechteck: kachel_rechteck, eingang, ausgang, .. } =
            kachel.rechteck(&aktuell);
        positioniert.push(PositionierteKachel { id, position: eingang, kachel: kachel.clone() });
        aktuell = ausgang;
        rechteck = Some(match rechteck {
            Some(bisher) => bisher.einschließend(&kachel_rechteck),
            None => kachel_rechteck,
        });
        let anzahl = statistik.entry(kachel.modell_id()).or_insert(0_usize);
        *anzahl = anzahl.saturating_add(1);
    }
    let start_punkt = start.position().punkt;
    let rechteck = rechteck.unwrap_or(Rechteck { ecke_a: start_punkt, ecke_b: start_punkt });
    let position = rechteck.position();
    let größe = rechteck.größe();
    debug!(
        "Strecke mit {} Kacheln aufgebaut: ({}, {}) {}x{}, {} Modelle.",
        positioniert.len(),
        position.x,
        position.y,
        größe.x,
        größe.y,
        statistik.len()
    );
    Strecke {
        x: position.x,
        y: position.y,
        breite: größe.x,
        höhe: größe.y,
        kacheln: positioniert,
        statistik,
    }
}
