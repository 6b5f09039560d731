//! Art einer Kachel: Typ, Richtung und die daraus folgenden Regeln für das Größenverhältnis.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use enum_iterator::Sequence;
use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::spezifikation::KachelSpezifikation;

/// Fehler beim Erzeugen einer Kachel aus ihrer Text-Darstellung.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KachelFehler {
    /// Der Kachel-Typ ist unbekannt.
    #[error("Ungültiger Kachel-Typ \"{0}\", erwartet \"straight-tile\", \"curved-tile\" oder \"curved-tile-enlarged\"!")]
    UnbekannterTyp(String),
    /// Die Richtung ist unbekannt.
    #[error("Ungültige Richtung \"{0}\", erwartet \"left\" oder \"right\"!")]
    UnbekannteRichtung(String),
}

/// Die verfügbaren Kachel-Typen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize,
)]
pub enum KachelTyp {
    /// Eine gerade Kachel.
    #[serde(rename = "straight-tile")]
    Gerade,
    /// Eine Kurve.
    #[serde(rename = "curved-tile")]
    Kurve,
    /// Eine Kurve mit vergrößerter Grundfläche.
    #[serde(rename = "curved-tile-enlarged")]
    ErweiterteKurve,
}

impl KachelTyp {
    /// Alle Kachel-Typen.
    pub fn alle() -> impl Iterator<Item = KachelTyp> {
        enum_iterator::all::<KachelTyp>()
    }

    /// Bezeichner im Austauschformat.
    #[must_use]
    pub const fn als_str(&self) -> &'static str {
        match self {
            KachelTyp::Gerade => "straight-tile",
            KachelTyp::Kurve => "curved-tile",
            KachelTyp::ErweiterteKurve => "curved-tile-enlarged",
        }
    }

    /// Das kleinste erlaubte Größenverhältnis.
    #[must_use]
    pub fn min_verhältnis(&self, spezifikation: &KachelSpezifikation) -> f64 {
        match self {
            KachelTyp::Gerade | KachelTyp::Kurve => 1. / spezifikation.barriere_segmente(),
            KachelTyp::ErweiterteKurve => 1.,
        }
    }

    /// Das größte erlaubte Größenverhältnis.
    #[must_use]
    pub fn max_verhältnis(&self, spezifikation: &KachelSpezifikation) -> f64 {
        spezifikation.max_verhältnis()
    }

    /// Beschränke ein Größenverhältnis auf die für diesen Typ erlaubten Werte.
    ///
    /// Ohne [entsperrtes Verhältnis](KachelSpezifikation::verhältnis_entsperrt) rasten Geraden
    /// und kleine Kurven auf Vielfache eines Barriere-Segments ein, alle anderen auf ganze Zahlen.
    /// Werte die keine endliche Zahl sind werden als `1` behandelt.
    #[must_use]
    pub fn beschränke_verhältnis(&self, spezifikation: &KachelSpezifikation, verhältnis: f64) -> f64 {
        let wert = if verhältnis.is_finite() { verhältnis } else { 1. };
        let segmente = spezifikation.barriere_segmente();
        let min = self.min_verhältnis(spezifikation);
        let max = self.max_verhältnis(spezifikation);
        let eingerastet = |wert: f64| (wert * segmente).round() / segmente;
        let beschränkt = if spezifikation.verhältnis_entsperrt() {
            beschränke(wert, min, max)
        } else {
            match self {
                KachelTyp::Gerade => beschränke(eingerastet(wert), min, 1.),
                KachelTyp::Kurve if wert < 1. => beschränke(eingerastet(wert), min, 1.),
                KachelTyp::Kurve | KachelTyp::ErweiterteKurve => beschränke(wert.round(), 1., max),
            }
        };
        #[allow(clippy::float_cmp)]
        let geändert = beschränkt != verhältnis;
        if geändert {
            trace!("Verhältnis {verhältnis} für {self} auf {beschränkt} beschränkt.");
        }
        beschränkt
    }
}

/// Beschränke `wert` auf `[min, max]`, bei `min > max` gewinnt `min`.
fn beschränke(wert: f64, min: f64, max: f64) -> f64 {
    wert.min(max).max(min)
}

impl Display for KachelTyp {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.als_str())
    }
}

impl FromStr for KachelTyp {
    type Err = KachelFehler;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        KachelTyp::alle()
            .find(|typ| typ.als_str() == string)
            .ok_or_else(|| KachelFehler::UnbekannterTyp(string.to_owned()))
    }
}

/// Richtung einer Kurve, aus Sicht der Fahrtrichtung.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize,
)]
pub enum Richtung {
    /// Links-Kurve.
    #[serde(rename = "left")]
    Links,
    /// Rechts-Kurve.
    #[serde(rename = "right")]
    Rechts,
}

impl Richtung {
    /// Bezeichner im Austauschformat.
    #[must_use]
    pub const fn als_str(&self) -> &'static str {
        match self {
            Richtung::Links => "left",
            Richtung::Rechts => "right",
        }
    }

    /// Die entgegengesetzte Richtung.
    #[must_use]
    pub const fn gespiegelt(self) -> Self {
        match self {
            Richtung::Links => Richtung::Rechts,
            Richtung::Rechts => Richtung::Links,
        }
    }
}

impl Display for Richtung {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.als_str())
    }
}

impl FromStr for Richtung {
    type Err = KachelFehler;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<Richtung>()
            .find(|richtung| richtung.als_str() == string)
            .ok_or_else(|| KachelFehler::UnbekannteRichtung(string.to_owned()))
    }
}

/// Identifiziert Kacheln gleicher Form, unabhängig von ihrer Richtung.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModellId(String);

impl ModellId {
    /// Die [`ModellId`] einer Kachel mit Typ und (bereits beschränktem) Größenverhältnis.
    #[must_use]
    pub fn neu(typ: KachelTyp, verhältnis: f64) -> Self {
        ModellId(format!("{typ}-{verhältnis}"))
    }

    /// Die Text-Darstellung.
    #[must_use]
    pub fn als_str(&self) -> &str {
        &self.0
    }
}

impl Display for ModellId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Austauschformat einer Kachel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KachelExport {
    /// Der Typ der Kachel.
    #[serde(rename = "type")]
    pub typ: KachelTyp,
    /// Die Richtung der Kachel.
    #[serde(rename = "direction")]
    pub richtung: Richtung,
    /// Das Größenverhältnis der Kachel.
    #[serde(rename = "ratio")]
    pub verhältnis: f64,
}

#[cfg(test)]
mod test {
    use rennstrecke_test_util::{expect_eq, expect_true, Expectation};
    use rennstrecke_typen::skalar::Skalar;

    use super::*;
    use crate::spezifikation::Optionen;

    fn spezifikation(max_verhältnis: f64, verhältnis_entsperrt: bool) -> KachelSpezifikation {
        KachelSpezifikation::aus_optionen(Optionen {
            spurbreite: Skalar(80.),
            barriere_breite: Skalar(5.),
            barriere_segmente: 4.,
            max_verhältnis,
            verhältnis_entsperrt,
        })
    }

    #[test]
    fn gerade_rastet_auf_segmente_ein() -> Result<(), Expectation> {
        let spezifikation = spezifikation(4., false);
        let typ = KachelTyp::Gerade;
        expect_eq(typ.beschränke_verhältnis(&spezifikation, 0.3), 0.25)?;
        expect_eq(typ.beschränke_verhältnis(&spezifikation, 0.4), 0.5)?;
        expect_eq(typ.beschränke_verhältnis(&spezifikation, 0.), 0.25)?;
        expect_eq(typ.beschränke_verhältnis(&spezifikation, 3.), 1.)?;
        expect_eq(typ.beschränke_verhältnis(&spezifikation, f64::NAN), 1.)?;
        Ok(())
    }

    #[test]
    fn kurven_runden_ab_eins() -> Result<(), Expectation> {
        let spezifikation = spezifikation(3., false);
        expect_eq(KachelTyp::Kurve.beschränke_verhältnis(&spezifikation, 0.6), 0.5)?;
        expect_eq(KachelTyp::Kurve.beschränke_verhältnis(&spezifikation, 2.4), 2.)?;
        expect_eq(KachelTyp::Kurve.beschränke_verhältnis(&spezifikation, 7.), 3.)?;
        expect_eq(KachelTyp::ErweiterteKurve.beschränke_verhältnis(&spezifikation, 0.3), 1.)?;
        expect_eq(KachelTyp::ErweiterteKurve.beschränke_verhältnis(&spezifikation, 2.6), 3.)?;
        Ok(())
    }

    #[test]
    fn entsperrt_nur_grenzen() -> Result<(), Expectation> {
        let spezifikation = spezifikation(3., true);
        expect_eq(KachelTyp::Gerade.beschränke_verhältnis(&spezifikation, 2.3), 2.3)?;
        expect_eq(KachelTyp::Kurve.beschränke_verhältnis(&spezifikation, 0.1), 0.25)?;
        expect_eq(KachelTyp::ErweiterteKurve.beschränke_verhältnis(&spezifikation, 1.5), 1.5)?;
        expect_eq(KachelTyp::ErweiterteKurve.beschränke_verhältnis(&spezifikation, 9.), 3.)?;
        Ok(())
    }

    #[test]
    fn text_darstellung() -> Result<(), Expectation> {
        for typ in KachelTyp::alle() {
            expect_eq(typ.als_str().parse::<KachelTyp>(), Ok(typ))?;
        }
        expect_eq("left".parse::<Richtung>(), Ok(Richtung::Links))?;
        expect_eq(
            "up".parse::<Richtung>(),
            Err(KachelFehler::UnbekannteRichtung("up".to_owned())),
        )?;
        expect_eq(
            "round-tile".parse::<KachelTyp>(),
            Err(KachelFehler::UnbekannterTyp("round-tile".to_owned())),
        )?;
        expect_true(Richtung::Links < Richtung::Rechts)?;
        expect_eq(Richtung::Links.gespiegelt(), Richtung::Rechts)?;
        Ok(())
    }

    #[test]
    fn modell_id() -> Result<(), Expectation> {
        expect_eq(ModellId::neu(KachelTyp::Gerade, 1.).to_string(), "straight-tile-1".to_owned())?;
        expect_eq(
            ModellId::neu(KachelTyp::Kurve, 0.25).als_str().to_owned(),
            "curved-tile-0.25".to_owned(),
        )?;
        Ok(())
    }
}
