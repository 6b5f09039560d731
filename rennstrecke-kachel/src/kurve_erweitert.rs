//! Eine Kurve mit vergrößerter, quadratischer Grundfläche.
//!
//! Der Bogen hat immer 90°. Die äußere Kante besteht aus zwei geraden Seiten
//! und einem Bogen mit kleinerem Radius.

use std::sync::Arc;

use rennstrecke_typen::{skalar::Skalar, vektor::Vektor, winkel::WinkelGradmaß, Position};

use crate::{
    art::{KachelTyp, Richtung},
    bogen_segmente, platziere,
    spezifikation::KachelSpezifikation,
    Begrenzung, Geometrie, KachelBasis,
};

/// Bogen einer [`ErweiterteKurve`].
const KURVENWINKEL: WinkelGradmaß = WinkelGradmaß::neu(90.);

/// Eine Kurve deren Grundfläche mit dem Größenverhältnis wächst.
#[derive(Debug, Clone, PartialEq)]
pub struct ErweiterteKurve {
    /// Geteilter Zustand.
    basis: KachelBasis,
}

impl ErweiterteKurve {
    /// Erzeuge eine neue [`ErweiterteKurve`].
    #[must_use]
    pub fn neu(
        spezifikation: Arc<KachelSpezifikation>,
        richtung: Richtung,
        verhältnis: f64,
    ) -> Self {
        ErweiterteKurve {
            basis: KachelBasis::neu(
                KachelTyp::ErweiterteKurve,
                spezifikation,
                richtung,
                verhältnis,
            ),
        }
    }

    /// Größenverhältnis, mindestens `1`.
    fn faktor(&self) -> Skalar {
        Skalar(self.basis.verhältnis.max(1.))
    }

    /// Länge der geraden Seiten der äußeren Kante.
    #[must_use]
    pub fn seitenlänge(&self) -> Skalar {
        self.länge().halbiert()
    }

    /// Seitenlänge der quadratischen Grundfläche, gemessen ab dem Mittelpunkt des Bogens.
    fn quadrat(&self) -> Skalar {
        self.innenradius() + self.breite()
    }

    /// Radius der Fahrspur-Mitte.
    fn radius(&self) -> Skalar {
        self.innenradius() + self.breite().halbiert()
    }

    /// Mittelpunkt des Bogens im Koordinatensystem einer Rechts-Kurve am Ursprung.
    fn bogen_zentrum(&self) -> Vektor {
        Vektor { x: -self.radius(), y: Skalar(0.) }
    }
}

impl Geometrie for ErweiterteKurve {
    fn basis(&self) -> &KachelBasis {
        &self.basis
    }

    fn basis_mut(&mut self) -> &mut KachelBasis {
        &mut self.basis
    }

    fn länge(&self) -> Skalar {
        self.basis.spezifikation.länge() * self.faktor()
    }

    fn breite(&self) -> Skalar {
        self.basis.spezifikation.breite() * self.faktor()
    }

    fn kurvenwinkel(&self) -> WinkelGradmaß {
        KURVENWINKEL
    }

    fn innenradius(&self) -> Skalar {
        let spezifikation = &self.basis.spezifikation;
        (self.faktor() - Skalar(1.)) * spezifikation.länge() + spezifikation.innenabstand()
    }

    fn außenradius(&self) -> Skalar {
        self.breite() + self.innenradius() - self.seitenlänge()
    }

    fn richtungswinkel(&self) -> WinkelGradmaß {
        match self.basis.richtung {
            Richtung::Links => WinkelGradmaß::neu(90.),
            Richtung::Rechts => WinkelGradmaß::neu(0.),
        }
    }

    fn seiten_barriere_segmente(&self) -> f64 {
        let verhältnis = self.basis.verhältnis;
        let segmente = self.basis.spezifikation.barriere_segmente();
        if verhältnis < 2. {
            segmente / 2.
        } else {
            segmente * verhältnis / 2.
        }
    }

    fn innen_barriere_segmente(&self) -> f64 {
        let verhältnis = self.basis.verhältnis;
        let spezifikation = &self.basis.spezifikation;
        if verhältnis <= 1. {
            1.
        } else if verhältnis < 2. {
            spezifikation.barriere_segmente() / 2.
        } else {
            bogen_segmente(spezifikation, self.innenradius(), KURVENWINKEL)
        }
    }

    fn außen_barriere_segmente(&self) -> f64 {
        let verhältnis = self.basis.verhältnis;
        let spezifikation = &self.basis.spezifikation;
        if verhältnis < 2. {
            spezifikation.barriere_segmente() / 2.
        } else {
            bogen_segmente(spezifikation, self.außenradius(), KURVENWINKEL)
        }
    }

    fn ausgang(&self, position: &Position) -> Vektor {
        let lokal = Vektor::polar_um(self.bogen_zentrum(), self.radius(), KURVENWINKEL);
        platziere(lokal, self.basis.richtung, position)
    }

    fn ausgangswinkel(&self, winkel: WinkelGradmaß) -> WinkelGradmaß {
        match self.basis.richtung {
            Richtung::Links => winkel - KURVENWINKEL,
            Richtung::Rechts => winkel + KURVENWINKEL,
        }
    }

    fn zentrum(&self, position: &Position) -> Vektor {
        let halbes_quadrat = self.quadrat().halbiert();
        let lokal = self.bogen_zentrum() + Vektor { x: halbes_quadrat, y: halbes_quadrat };
        platziere(lokal, self.basis.richtung, position)
    }

    fn rechteck(&self, position: &Position) -> Begrenzung {
        let bogen_zentrum = self.bogen_zentrum();
        let innenradius = self.innenradius();
        let quadrat = self.quadrat();
        let null = Skalar(0.);
        let grundfläche = [
            Vektor { x: innenradius, y: null },
            Vektor { x: quadrat, y: null },
            Vektor { x: quadrat, y: quadrat },
            Vektor { x: null, y: quadrat },
            Vektor { x: null, y: innenradius },
        ];
        let richtung = self.basis.richtung;
        Begrenzung::aus_punkten(
            grundfläche
                .into_iter()
                .map(|ecke| platziere(bogen_zentrum + ecke, richtung, position)),
            self.zentrum(position),
            *position,
            self.ausgangs_position(position),
        )
    }
}

#[cfg(test)]
mod test {
    use rennstrecke_test_util::{expect_eq, expect_nahe, Expectation};

    use super::*;

    fn spezifikation() -> Arc<KachelSpezifikation> {
        Arc::new(KachelSpezifikation::neu(Skalar(80.), Skalar(5.), 4., 3.))
    }

    #[test]
    fn einheits_kurve() -> Result<(), Expectation> {
        let kurve = ErweiterteKurve::neu(spezifikation(), Richtung::Rechts, 1.);
        expect_eq(kurve.länge(), Skalar(110.))?;
        expect_eq(kurve.breite(), Skalar(90.))?;
        expect_eq(kurve.innenradius(), Skalar(10.))?;
        expect_eq(kurve.seitenlänge(), Skalar(55.))?;
        expect_eq(kurve.außenradius(), Skalar(45.))?;
        expect_eq(kurve.seiten_barriere_segmente(), 2.)?;
        expect_eq(kurve.innen_barriere_segmente(), 1.)?;
        expect_eq(kurve.außen_barriere_segmente(), 2.)?;
        expect_eq(kurve.richtungswinkel(), WinkelGradmaß::neu(0.))?;
        let ausgang = kurve.ausgang(&Position::URSPRUNG);
        expect_nahe(ausgang.x.0, -55.)?;
        expect_nahe(ausgang.y.0, 55.)?;
        let zentrum = kurve.zentrum(&Position::URSPRUNG);
        expect_nahe(zentrum.x.0, -5.)?;
        expect_nahe(zentrum.y.0, 50.)?;
        Ok(())
    }

    #[test]
    fn quadratische_grundfläche() -> Result<(), Expectation> {
        let kurve = ErweiterteKurve::neu(spezifikation(), Richtung::Links, 2.);
        expect_eq(kurve.innenradius(), Skalar(120.))?;
        expect_eq(kurve.breite(), Skalar(180.))?;
        // Seite und äußerer Radius ergeben zusammen die Seitenlänge des Quadrats.
        expect_eq(kurve.seitenlänge() + kurve.außenradius(), Skalar(300.))?;
        let rechteck = kurve.rechteck(&Position::URSPRUNG).rechteck;
        let größe = rechteck.größe();
        expect_nahe(größe.x.0, 300.)?;
        expect_nahe(größe.y.0, 300.)?;
        // Links-Kurve: Mittelpunkt des Bogens bei (210, 0).
        let ecke_min = rechteck.ecke_min();
        expect_nahe(ecke_min.x.0, -90.)?;
        expect_nahe(ecke_min.y.0, 0.)?;
        expect_eq(kurve.ausgangswinkel(WinkelGradmaß::neu(0.)), WinkelGradmaß::neu(-90.))?;
        expect_eq(kurve.seiten_barriere_segmente(), 4.)?;
        Ok(())
    }

    #[test]
    fn verhältnis_mindestens_eins() -> Result<(), Expectation> {
        let kurve = ErweiterteKurve::neu(spezifikation(), Richtung::Rechts, 0.25);
        expect_eq(kurve.verhältnis(), 1.)?;
        expect_eq(kurve.kurvenwinkel(), WinkelGradmaß::neu(90.))?;
        Ok(())
    }
}
