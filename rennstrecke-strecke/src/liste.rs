//! Anordnung von Kacheln als Liste, z.B. für eine Auswahl verfügbarer Kacheln.
//!
//! Anders als beim [Aufbau einer Strecke](crate::aufbau::baue_strecke) sind die Kacheln
//! nicht verbunden, jede erhält eine eigene Zelle.

use log::debug;

use rennstrecke_kachel::{Geometrie, Kachel};
use rennstrecke_typen::{skalar::Skalar, vektor::Vektor, winkel::WinkelGradmaß, Position};

use crate::PositionierteKachel;

/// Einstellungen für [`baue_liste`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ListenOptionen {
    /// x-Koordinate der ersten Zelle.
    pub start_x: Skalar,
    /// y-Koordinate der ersten Zelle.
    pub start_y: Skalar,
    /// Winkel aller Kacheln.
    pub kachel_winkel: WinkelGradmaß,
    /// Mindest-Breite einer Zelle.
    pub kachel_breite: Skalar,
    /// Mindest-Höhe einer Zelle.
    pub kachel_höhe: Skalar,
    /// Abstand links und rechts jeder Zelle.
    pub h_abstand: Skalar,
    /// Abstand oberhalb und unterhalb jeder Zelle.
    pub v_abstand: Skalar,
    /// Zentriere jede Kachel in ihrer Zelle.
    pub zentriert: bool,
    /// Alle Zellen erhalten die Größe der größten Zelle.
    pub ausgerichtet: bool,
    /// Ordne die Zellen von oben nach unten an, statt von links nach rechts.
    pub vertikal: bool,
}

/// Als Liste angeordnete Kacheln.
#[derive(Debug, Clone, PartialEq)]
pub struct Liste {
    /// Linke Kante der Liste.
    pub x: Skalar,
    /// Obere Kante der Liste.
    pub y: Skalar,
    /// Breite der Liste, inklusive Abständen.
    pub breite: Skalar,
    /// Höhe der Liste, inklusive Abständen.
    pub höhe: Skalar,
    /// Alle Kacheln in Reihenfolge der Eingabe.
    pub kacheln: Vec<PositionierteKachel>,
}

/// Ordne die `kacheln` nebeneinander (oder untereinander) an.
#[must_use]
pub fn baue_liste(kacheln: &[Kachel], optionen: ListenOptionen) -> Liste {
    let ListenOptionen {
        start_x,
        start_y,
        kachel_winkel,
        kachel_breite,
        kachel_höhe,
        h_abstand,
        v_abstand,
        zentriert,
        ausgerichtet,
        vertikal,
    } = optionen;
    let ursprung = Position { punkt: Vektor::URSPRUNG, winkel: kachel_winkel };
    let begrenzungen: Vec<_> =
        kacheln.iter().map(|kachel| kachel.rechteck(&ursprung).rechteck).collect();
    let mut zellen: Vec<Vektor> = begrenzungen
        .iter()
        .map(|rechteck| {
            let größe = rechteck.größe();
            Vektor { x: größe.x.max(&kachel_breite), y: größe.y.max(&kachel_höhe) }
        })
        .collect();
    if ausgerichtet {
        let größte = zellen.iter().fold(Vektor::URSPRUNG, |größte, zelle| Vektor {
            x: größte.x.max(&zelle.x),
            y: größte.y.max(&zelle.y),
        });
        zellen.iter_mut().for_each(|zelle| *zelle = größte);
    }
    let abstand = Vektor { x: h_abstand, y: v_abstand };
    let mut aktuell = Vektor { x: start_x, y: start_y };
    let mut breite = Skalar(0.);
    let mut höhe = Skalar(0.);
    let mut positioniert = Vec::with_capacity(kacheln.len());
    for (id, ((kachel, rechteck), zelle)) in
        kacheln.iter().zip(&begrenzungen).zip(&zellen).enumerate()
    {
        let versatz =
            if zentriert { (zelle - rechteck.größe()) * Skalar(0.5) } else { Vektor::URSPRUNG };
        let punkt = aktuell + abstand + versatz - rechteck.ecke_min();
        positioniert.push(PositionierteKachel {
            id,
            position: Position { punkt, winkel: kachel_winkel },
            kachel: kachel.clone(),
        });
        let reserviert = zelle + abstand * Skalar(2.);
        if vertikal {
            aktuell.y += reserviert.y;
            breite = breite.max(&reserviert.x);
            höhe += reserviert.y;
        } else {
            aktuell.x += reserviert.x;
            breite += reserviert.x;
            höhe = höhe.max(&reserviert.y);
        }
    }
    debug!("Liste mit {} Kacheln angeordnet: {breite}x{höhe}.", positioniert.len());
    Liste { x: start_x, y: start_y, breite, höhe, kacheln: positioniert }
}
