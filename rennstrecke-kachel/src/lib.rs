//! Kacheln einer Rennstrecke und ihre Geometrie.
//!
//! Jede Kachel wird von ihrem Eingang aus beschrieben: bei Winkel `0°` liegt der Eingang
//! in der Mitte der Eingangskante und die Kachel erstreckt sich in Richtung der positiven y-Achse.
//! Positive Winkel drehen im Uhrzeigersinn, eine Rechts-Kurve erhöht also den Winkel.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]

use std::{cmp::Ordering, sync::Arc};

use rennstrecke_typen::{
    rechteck::Rechteck,
    skalar::Skalar,
    vektor::Vektor,
    winkel::{Winkel, WinkelGradmaß},
    Position,
};

use crate::{
    art::{KachelExport, KachelFehler, KachelTyp, ModellId, Richtung},
    gerade::Gerade,
    kurve::Kurve,
    kurve_erweitert::ErweiterteKurve,
    spezifikation::KachelSpezifikation,
};

pub mod art;
pub mod gerade;
pub mod kurve;
pub mod kurve_erweitert;
pub mod spezifikation;

/// Zustand, den alle Kachel-Typen teilen.
#[derive(Debug, Clone, PartialEq)]
pub struct KachelBasis {
    /// Der Typ, bestimmt die Regeln für das Größenverhältnis.
    typ: KachelTyp,
    /// Die geteilte Spezifikation.
    spezifikation: Arc<KachelSpezifikation>,
    /// Die Richtung.
    richtung: Richtung,
    /// Das zuletzt gesetzte Größenverhältnis, vor der Beschränkung.
    gewünschtes_verhältnis: f64,
    /// Das beschränkte Größenverhältnis.
    verhältnis: f64,
}

impl KachelBasis {
    /// Erzeuge den Zustand einer Kachel, das Größenverhältnis wird sofort beschränkt.
    fn neu(
        typ: KachelTyp,
        spezifikation: Arc<KachelSpezifikation>,
        richtung: Richtung,
        verhältnis: f64,
    ) -> Self {
        let beschränkt = typ.beschränke_verhältnis(&spezifikation, verhältnis);
        KachelBasis {
            typ,
            spezifikation,
            richtung,
            gewünschtes_verhältnis: verhältnis,
            verhältnis: beschränkt,
        }
    }

    /// Beschränke das gewünschte Größenverhältnis erneut.
    fn beschränke(&mut self) {
        self.verhältnis =
            self.typ.beschränke_verhältnis(&self.spezifikation, self.gewünschtes_verhältnis);
    }
}

/// Einschließendes Rechteck einer Kachel an einer bestimmten [`Position`],
/// zusammen mit den daraus folgenden Posen.
#[derive(Debug, Clone, PartialEq)]
pub struct Begrenzung {
    /// Achsenparalleles Rechteck um die gesamte Grundfläche.
    pub rechteck: Rechteck,
    /// Mittelpunkt der Kachel.
    pub zentrum: Vektor,
    /// Winkel der Kachel.
    pub winkel: WinkelGradmaß,
    /// Pose am Eingang.
    pub eingang: Position,
    /// Pose am Ausgang, Eingang der nächsten Kachel.
    pub ausgang: Position,
}

impl Begrenzung {
    /// Erzeuge eine [`Begrenzung`] aus den Eckpunkten der Grundfläche.
    ///
    /// Eingang, Ausgang und Zentrum sind immer im Rechteck enthalten.
    fn aus_punkten(
        punkte: impl IntoIterator<Item = Vektor>,
        zentrum: Vektor,
        eingang: Position,
        ausgang: Position,
    ) -> Self {
        let rechteck = Rechteck::umschließend(
            eingang.punkt,
            punkte.into_iter().chain([ausgang.punkt, zentrum]),
        );
        Begrenzung { rechteck, zentrum, winkel: eingang.winkel, eingang, ausgang }
    }
}

/// Überführe einen Punkt aus dem Koordinatensystem einer Rechts-Kachel an die `position`.
///
/// Links-Kacheln sind an der y-Achse gespiegelt.
fn platziere(lokal: Vektor, richtung: Richtung, position: &Position) -> Vektor {
    let gespiegelt = match richtung {
        Richtung::Rechts => lokal,
        Richtung::Links => Vektor { x: -lokal.x, y: lokal.y },
    };
    position.punkt + gespiegelt.rotiert(position.winkel)
}

/// Anzahl Barriere-Segmente entlang eines Bogens mit `radius` und `winkel`.
///
/// Mindestens ein Segment.
fn bogen_segmente(
    spezifikation: &KachelSpezifikation,
    radius: Skalar,
    winkel: WinkelGradmaß,
) -> f64 {
    let bogenmaß = Winkel::from(winkel).0;
    ((radius.0 * bogenmaß) / spezifikation.barriere_länge().0).round().max(1.)
}

/// Gemeinsame Geometrie aller Kachel-Typen.
pub trait Geometrie {
    /// Der geteilte Zustand.
    fn basis(&self) -> &KachelBasis;

    /// Der geteilte Zustand, veränderlich.
    fn basis_mut(&mut self) -> &mut KachelBasis;

    /// Länge der Grundfläche.
    fn länge(&self) -> Skalar;

    /// Breite der Grundfläche.
    fn breite(&self) -> Skalar;

    /// Winkel des Bogens, `180°` für Kacheln ohne Kurve.
    fn kurvenwinkel(&self) -> WinkelGradmaß;

    /// Radius der inneren Kante.
    fn innenradius(&self) -> Skalar;

    /// Radius der äußeren Kante.
    fn außenradius(&self) -> Skalar;

    /// Rotation der Grundfläche passend zur Richtung.
    fn richtungswinkel(&self) -> WinkelGradmaß;

    /// Anzahl Barriere-Segmente an den geraden Seiten.
    fn seiten_barriere_segmente(&self) -> f64;

    /// Anzahl Barriere-Segmente an der inneren Kante.
    fn innen_barriere_segmente(&self) -> f64;

    /// Anzahl Barriere-Segmente an der äußeren Kante.
    fn außen_barriere_segmente(&self) -> f64;

    /// Punkt des Ausgangs, wenn sich der Eingang an `position` befindet.
    fn ausgang(&self, position: &Position) -> Vektor;

    /// Winkel am Ausgang, wenn der Eingang den Winkel `winkel` hat.
    fn ausgangswinkel(&self, winkel: WinkelGradmaß) -> WinkelGradmaß;

    /// Mittelpunkt der Kachel, wenn sich der Eingang an `position` befindet.
    fn zentrum(&self, position: &Position) -> Vektor;

    /// Einschließendes Rechteck, wenn sich der Eingang an `position` befindet.
    fn rechteck(&self, position: &Position) -> Begrenzung;

    /// Punkt des Eingangs, immer der Punkt von `position`.
    fn eingang(&self, position: &Position) -> Vektor {
        position.punkt
    }

    /// Pose des Ausgangs, wenn sich der Eingang an `position` befindet.
    fn ausgangs_position(&self, position: &Position) -> Position {
        Position { punkt: self.ausgang(position), winkel: self.ausgangswinkel(position.winkel) }
    }

    /// Der Kachel-Typ.
    fn typ(&self) -> KachelTyp {
        self.basis().typ
    }

    /// Die geteilte Spezifikation.
    fn spezifikation(&self) -> &Arc<KachelSpezifikation> {
        &self.basis().spezifikation
    }

    /// Die Richtung.
    fn richtung(&self) -> Richtung {
        self.basis().richtung
    }

    /// Das beschränkte Größenverhältnis.
    fn verhältnis(&self) -> f64 {
        self.basis().verhältnis
    }

    /// Ersetze die Spezifikation, das Größenverhältnis wird erneut beschränkt.
    fn setze_spezifikation(&mut self, spezifikation: Arc<KachelSpezifikation>) {
        let basis = self.basis_mut();
        basis.spezifikation = spezifikation;
        basis.beschränke();
    }

    /// Setze die Richtung.
    fn setze_richtung(&mut self, richtung: Richtung) {
        self.basis_mut().richtung = richtung;
    }

    /// Setze das Größenverhältnis, es wird sofort beschränkt.
    fn setze_verhältnis(&mut self, verhältnis: f64) {
        let basis = self.basis_mut();
        basis.gewünschtes_verhältnis = verhältnis;
        basis.beschränke();
    }

    /// Wechsle zwischen [`Links`](Richtung::Links) und [`Rechts`](Richtung::Rechts).
    fn wechsle_richtung(&mut self) -> &mut Self {
        let basis = self.basis_mut();
        basis.richtung = basis.richtung.gespiegelt();
        self
    }

    /// Identifiziert Kacheln gleicher Form.
    fn modell_id(&self) -> ModellId {
        ModellId::neu(self.typ(), self.verhältnis())
    }

    /// Austauschformat der Kachel.
    fn exportiere(&self) -> KachelExport {
        KachelExport { typ: self.typ(), richtung: self.richtung(), verhältnis: self.verhältnis() }
    }

    /// Totale Ordnung über Typ, Größenverhältnis und Richtung.
    fn vergleiche(&self, other: &impl Geometrie) -> Ordering {
        self.typ()
            .als_str()
            .cmp(other.typ().als_str())
            .then_with(|| self.verhältnis().total_cmp(&other.verhältnis()))
            .then_with(|| self.richtung().cmp(&other.richtung()))
    }
}

/// Eine beliebige Kachel.
#[derive(Debug, Clone, PartialEq)]
pub enum Kachel {
    /// Eine [`Gerade`].
    Gerade(Gerade),
    /// Eine [`Kurve`].
    Kurve(Kurve),
    /// Eine [`ErweiterteKurve`].
    ErweiterteKurve(ErweiterteKurve),
}

/// Führe eine Aktion für die in einer [`Kachel`] enthaltene Variante aus.
macro_rules! mit_kachel {
    ($kachel: expr => |$name: ident| $ausdruck: expr) => {
        match $kachel {
            Kachel::Gerade($name) => $ausdruck,
            Kachel::Kurve($name) => $ausdruck,
            Kachel::ErweiterteKurve($name) => $ausdruck,
        }
    };
}

impl Kachel {
    /// Erzeuge eine neue Kachel vom angegebenen Typ.
    #[must_use]
    pub fn neu(
        spezifikation: Arc<KachelSpezifikation>,
        typ: KachelTyp,
        richtung: Richtung,
        verhältnis: f64,
    ) -> Self {
        match typ {
            KachelTyp::Gerade => Kachel::Gerade(Gerade::neu(spezifikation, richtung, verhältnis)),
            KachelTyp::Kurve => Kachel::Kurve(Kurve::neu(spezifikation, richtung, verhältnis)),
            KachelTyp::ErweiterteKurve => {
                Kachel::ErweiterteKurve(ErweiterteKurve::neu(spezifikation, richtung, verhältnis))
            },
        }
    }

    /// Erzeuge eine Kachel aus ihrem [Austauschformat](KachelExport).
    #[must_use]
    pub fn importiere(spezifikation: Arc<KachelSpezifikation>, export: KachelExport) -> Self {
        let KachelExport { typ, richtung, verhältnis } = export;
        Kachel::neu(spezifikation, typ, richtung, verhältnis)
    }
}

/// Erzeuge eine Kachel aus der Text-Darstellung von Typ und Richtung.
///
/// ## Errors
///
/// Wenn `typ` oder `richtung` unbekannt sind.
pub fn erstelle_kachel(
    spezifikation: Arc<KachelSpezifikation>,
    typ: &str,
    richtung: &str,
    verhältnis: f64,
) -> Result<Kachel, KachelFehler> {
    let typ = typ.parse()?;
    let richtung = richtung.parse()?;
    Ok(Kachel::neu(spezifikation, typ, richtung, verhältnis))
}

impl Geometrie for Kachel {
    fn basis(&self) -> &KachelBasis {
        mit_kachel!(self => |kachel| kachel.basis())
    }

    fn basis_mut(&mut self) -> &mut KachelBasis {
        mit_kachel!(self => |kachel| kachel.basis_mut())
    }

    fn länge(&self) -> Skalar {
        mit_kachel!(self => |kachel| kachel.länge())
    }

    fn breite(&self) -> Skalar {
        mit_kachel!(self => |kachel| kachel.breite())
    }

    fn kurvenwinkel(&self) -> WinkelGradmaß {
        mit_kachel!(self => |kachel| kachel.kurvenwinkel())
    }

    fn innenradius(&self) -> Skalar {
        mit_kachel!(self => |kachel| kachel.innenradius())
    }

    fn außenradius(&self) -> Skalar {
        mit_kachel!(self => |kachel| kachel.außenradius())
    }

    fn richtungswinkel(&self) -> WinkelGradmaß {
        mit_kachel!(self => |kachel| kachel.richtungswinkel())
    }

    fn seiten_barriere_segmente(&self) -> f64 {
        mit_kachel!(self => |kachel| kachel.seiten_barriere_segmente())
    }

    fn innen_barriere_segmente(&self) -> f64 {
        mit_kachel!(self => |kachel| kachel.innen_barriere_segmente())
    }

    fn außen_barriere_segmente(&self) -> f64 {
        mit_kachel!(self => |kachel| kachel.außen_barriere_segmente())
    }

    fn ausgang(&self, position: &Position) -> Vektor {
        mit_kachel!(self => |kachel| kachel.ausgang(position))
    }

    fn ausgangswinkel(&self, winkel: WinkelGradmaß) -> WinkelGradmaß {
        mit_kachel!(self => |kachel| kachel.ausgangswinkel(winkel))
    }

    fn zentrum(&self, position: &Position) -> Vektor {
        mit_kachel!(self => |kachel| kachel.zentrum(position))
    }

    fn rechteck(&self, position: &Position) -> Begrenzung {
        mit_kachel!(self => |kachel| kachel.rechteck(position))
    }
}
