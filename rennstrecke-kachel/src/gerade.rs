//! Eine gerade Kachel.

use std::sync::Arc;

use rennstrecke_typen::{skalar::Skalar, vektor::Vektor, winkel::WinkelGradmaß, Position};

use crate::{
    art::{KachelTyp, Richtung},
    platziere,
    spezifikation::KachelSpezifikation,
    Begrenzung, Geometrie, KachelBasis,
};

/// Eine gerade Kachel. Das Größenverhältnis skaliert ihre Länge.
#[derive(Debug, Clone, PartialEq)]
pub struct Gerade {
    /// Geteilter Zustand.
    basis: KachelBasis,
}

impl Gerade {
    /// Erzeuge eine neue [`Gerade`].
    #[must_use]
    pub fn neu(
        spezifikation: Arc<KachelSpezifikation>,
        richtung: Richtung,
        verhältnis: f64,
    ) -> Self {
        Gerade { basis: KachelBasis::neu(KachelTyp::Gerade, spezifikation, richtung, verhältnis) }
    }

    /// Anzahl Barriere-Segmente an jeder Kante.
    fn barriere_segmente(&self) -> f64 {
        self.basis.spezifikation.barriere_segmente() * self.basis.verhältnis
    }
}

impl Geometrie for Gerade {
    fn basis(&self) -> &KachelBasis {
        &self.basis
    }

    fn basis_mut(&mut self) -> &mut KachelBasis {
        &mut self.basis
    }

    fn länge(&self) -> Skalar {
        self.basis.spezifikation.länge() * Skalar(self.basis.verhältnis)
    }

    fn breite(&self) -> Skalar {
        self.basis.spezifikation.breite()
    }

    fn kurvenwinkel(&self) -> WinkelGradmaß {
        WinkelGradmaß::neu(180.)
    }

    fn innenradius(&self) -> Skalar {
        Skalar(0.)
    }

    fn außenradius(&self) -> Skalar {
        self.breite()
    }

    fn richtungswinkel(&self) -> WinkelGradmaß {
        WinkelGradmaß::neu(0.)
    }

    fn seiten_barriere_segmente(&self) -> f64 {
        self.barriere_segmente()
    }

    fn innen_barriere_segmente(&self) -> f64 {
        self.barriere_segmente()
    }

    fn außen_barriere_segmente(&self) -> f64 {
        self.barriere_segmente()
    }

    fn ausgang(&self, position: &Position) -> Vektor {
        let lokal = Vektor { x: Skalar(0.), y: self.länge() };
        platziere(lokal, self.basis.richtung, position)
    }

    fn ausgangswinkel(&self, winkel: WinkelGradmaß) -> WinkelGradmaß {
        winkel
    }

    fn zentrum(&self, position: &Position) -> Vektor {
        let lokal = Vektor { x: Skalar(0.), y: self.länge().halbiert() };
        platziere(lokal, self.basis.richtung, position)
    }

    fn rechteck(&self, position: &Position) -> Begrenzung {
        let halbe_breite = self.breite().halbiert();
        let länge = self.länge();
        let ecken = [
            Vektor { x: -halbe_breite, y: Skalar(0.) },
            Vektor { x: halbe_breite, y: Skalar(0.) },
            Vektor { x: halbe_breite, y: länge },
            Vektor { x: -halbe_breite, y: länge },
        ];
        let richtung = self.basis.richtung;
        Begrenzung::aus_punkten(
            ecken.into_iter().map(|ecke| platziere(ecke, richtung, position)),
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
        Arc::new(KachelSpezifikation::neu(Skalar(80.), Skalar(5.), 4., 1.))
    }

    #[test]
    fn einheits_gerade() -> Result<(), Expectation> {
        let gerade = Gerade::neu(spezifikation(), Richtung::Rechts, 1.);
        expect_eq(gerade.länge(), Skalar(110.))?;
        expect_eq(gerade.breite(), Skalar(90.))?;
        expect_eq(gerade.ausgang(&Position::URSPRUNG), Vektor::neu(0., 110.))?;
        expect_eq(gerade.ausgangswinkel(WinkelGradmaß::neu(30.)), WinkelGradmaß::neu(30.))?;
        expect_eq(gerade.zentrum(&Position::URSPRUNG), Vektor::neu(0., 55.))?;
        expect_eq(gerade.kurvenwinkel(), WinkelGradmaß::neu(180.))?;
        Ok(())
    }

    #[test]
    fn verhältnis_skaliert_länge() -> Result<(), Expectation> {
        let gerade = Gerade::neu(spezifikation(), Richtung::Links, 0.5);
        expect_eq(gerade.länge(), Skalar(55.))?;
        expect_eq(gerade.seiten_barriere_segmente(), 2.)?;
        expect_eq(gerade.innen_barriere_segmente(), 2.)?;
        expect_eq(gerade.außen_barriere_segmente(), 2.)?;
        Ok(())
    }

    #[test]
    fn gedrehtes_rechteck() -> Result<(), Expectation> {
        let gerade = Gerade::neu(spezifikation(), Richtung::Rechts, 1.);
        let position = Position::neu(10., 20., 90.);
        let begrenzung = gerade.rechteck(&position);
        // Bei 90° zeigt die Kachel in Richtung der negativen x-Achse.
        expect_nahe(begrenzung.ausgang.punkt.x.0, -100.)?;
        expect_nahe(begrenzung.ausgang.punkt.y.0, 20.)?;
        let ecke_min = begrenzung.rechteck.ecke_min();
        let ecke_max = begrenzung.rechteck.ecke_max();
        expect_nahe(ecke_min.x.0, -100.)?;
        expect_nahe(ecke_min.y.0, -25.)?;
        expect_nahe(ecke_max.x.0, 10.)?;
        expect_nahe(ecke_max.y.0, 65.)?;
        Ok(())
    }
}
