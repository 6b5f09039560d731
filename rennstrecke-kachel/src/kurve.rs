//! Eine Kurve.
//!
//! Kleine Größenverhältnisse verkleinern den Bogen, große vergrößern den Radius.
//! Die Grundfläche ist immer ein Kreisring-Ausschnitt.

use std::sync::Arc;

use rennstrecke_typen::{
    skalar::Skalar,
    vektor::Vektor,
    winkel::{Trigonometrie, WinkelGradmaß},
    Position,
};

use crate::{
    art::{KachelTyp, Richtung},
    bogen_segmente, platziere,
    spezifikation::KachelSpezifikation,
    Begrenzung, Geometrie, KachelBasis,
};

/// Eine Kurve mit konstanter Breite.
#[derive(Debug, Clone, PartialEq)]
pub struct Kurve {
    /// Geteilter Zustand.
    basis: KachelBasis,
}

impl Kurve {
    /// Erzeuge eine neue [`Kurve`].
    #[must_use]
    pub fn neu(
        spezifikation: Arc<KachelSpezifikation>,
        richtung: Richtung,
        verhältnis: f64,
    ) -> Self {
        Kurve { basis: KachelBasis::neu(KachelTyp::Kurve, spezifikation, richtung, verhältnis) }
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

impl Geometrie for Kurve {
    fn basis(&self) -> &KachelBasis {
        &self.basis
    }

    fn basis_mut(&mut self) -> &mut KachelBasis {
        &mut self.basis
    }

    fn länge(&self) -> Skalar {
        self.basis.spezifikation.länge()
    }

    fn breite(&self) -> Skalar {
        self.basis.spezifikation.breite()
    }

    fn kurvenwinkel(&self) -> WinkelGradmaß {
        let verhältnis = self.basis.verhältnis;
        if verhältnis >= 1. {
            WinkelGradmaß::neu(90. / verhältnis)
        } else {
            WinkelGradmaß::neu(90. * verhältnis)
        }
    }

    fn innenradius(&self) -> Skalar {
        let spezifikation = &self.basis.spezifikation;
        Skalar(self.basis.verhältnis.max(1.) - 1.) * spezifikation.länge()
            + spezifikation.innenabstand()
    }

    fn außenradius(&self) -> Skalar {
        self.breite() + self.innenradius()
    }

    fn richtungswinkel(&self) -> WinkelGradmaß {
        match self.basis.richtung {
            Richtung::Links => WinkelGradmaß::neu(0.),
            Richtung::Rechts => {
                let verhältnis = self.basis.verhältnis;
                WinkelGradmaß::neu(90. + (90. / verhältnis) * (verhältnis.max(1.) - 1.))
            },
        }
    }

    fn seiten_barriere_segmente(&self) -> f64 {
        0.
    }

    fn innen_barriere_segmente(&self) -> f64 {
        let verhältnis = self.basis.verhältnis;
        let spezifikation = &self.basis.spezifikation;
        if verhältnis <= 1. {
            1.
        } else if verhältnis < 2. {
            spezifikation.barriere_segmente() / 2.
        } else {
            bogen_segmente(spezifikation, self.innenradius(), self.kurvenwinkel())
        }
    }

    fn außen_barriere_segmente(&self) -> f64 {
        let verhältnis = self.basis.verhältnis;
        let spezifikation = &self.basis.spezifikation;
        #[allow(clippy::float_cmp)]
        let einheits_kurve = verhältnis == 1.;
        if verhältnis < 1. {
            (1.5 * spezifikation.barriere_segmente() * verhältnis).ceil()
        } else if einheits_kurve {
            1.5 * spezifikation.barriere_segmente()
        } else {
            bogen_segmente(spezifikation, self.außenradius(), self.kurvenwinkel())
        }
    }

    fn ausgang(&self, position: &Position) -> Vektor {
        let lokal =
            Vektor::polar_um(self.bogen_zentrum(), self.radius(), self.kurvenwinkel());
        platziere(lokal, self.basis.richtung, position)
    }

    fn ausgangswinkel(&self, winkel: WinkelGradmaß) -> WinkelGradmaß {
        match self.basis.richtung {
            Richtung::Links => winkel - self.kurvenwinkel(),
            Richtung::Rechts => winkel + self.kurvenwinkel(),
        }
    }

    fn zentrum(&self, position: &Position) -> Vektor {
        // Schnittpunkt der Senkrechten auf beide Kanten des Bogens, jeweils auf der Fahrspur-Mitte.
        let bogen_zentrum = self.bogen_zentrum();
        let radius = self.radius();
        let winkel = self.kurvenwinkel();
        let senkrecht = WinkelGradmaß::neu(90.);
        let anfang = Vektor::polar_um(bogen_zentrum, radius, WinkelGradmaß::neu(0.));
        let anfang_richtung = anfang + Vektor::polar_koordinaten(Skalar(1.), senkrecht);
        let ende = Vektor::polar_um(bogen_zentrum, radius, winkel);
        let ende_richtung = ende + Vektor::polar_koordinaten(Skalar(1.), winkel + senkrecht);
        let lokal = Vektor::schnittpunkt(&anfang, &anfang_richtung, &ende, &ende_richtung)
            .unwrap_or_else(|| Vektor::polar_um(bogen_zentrum, radius, winkel / 2.));
        platziere(lokal, self.basis.richtung, position)
    }

    fn rechteck(&self, position: &Position) -> Begrenzung {
        let bogen_zentrum = self.bogen_zentrum();
        let richtung = self.basis.richtung;
        let innenradius = self.innenradius();
        let außenradius = self.außenradius();
        let kurvenwinkel = self.kurvenwinkel();
        let mut punkte: Vec<Vektor> = [innenradius, außenradius]
            .into_iter()
            .flat_map(|radius| {
                [WinkelGradmaß::neu(0.), kurvenwinkel]
                    .map(|winkel| Vektor::polar_um(bogen_zentrum, radius, winkel))
            })
            .map(|punkt| platziere(punkt, richtung, position))
            .collect();
        // Achsen-parallele Extrempunkte des äußeren Bogens.
        let zentrum_absolut = platziere(bogen_zentrum, richtung, position);
        // Normalisiert, damit `vielfaches` auch bei großen Winkeln exakt hochzählt.
        let winkel = position.winkel.normalisiert().grad();
        let start = match richtung {
            Richtung::Rechts => winkel,
            Richtung::Links => winkel + 180. - kurvenwinkel.grad(),
        };
        let ende = start + kurvenwinkel.grad();
        let mut vielfaches = (start / 90.).ceil();
        while vielfaches * 90. <= ende {
            punkte.push(Vektor::polar_um(
                zentrum_absolut,
                außenradius,
                WinkelGradmaß::neu(vielfaches * 90.),
            ));
            vielfaches += 1.;
        }
        Begrenzung::aus_punkten(
            punkte,
            self.zentrum(position),
            *position,
            self.ausgangs_position(position),
        )
    }
}

#[cfg(test)]
mod test {
    use rennstrecke_test_util::{expect_eq, expect_nahe, expect_true, Expectation};

    use super::*;
    use crate::spezifikation::Optionen;

    fn spezifikation() -> Arc<KachelSpezifikation> {
        Arc::new(KachelSpezifikation::neu(Skalar(80.), Skalar(5.), 4., 4.))
    }

    #[test]
    fn einheits_kurve() -> Result<(), Expectation> {
        let kurve = Kurve::neu(spezifikation(), Richtung::Rechts, 1.);
        expect_eq(kurve.kurvenwinkel(), WinkelGradmaß::neu(90.))?;
        expect_eq(kurve.innenradius(), Skalar(10.))?;
        expect_eq(kurve.außenradius(), Skalar(100.))?;
        expect_eq(kurve.richtungswinkel(), WinkelGradmaß::neu(90.))?;
        expect_eq(kurve.innen_barriere_segmente(), 1.)?;
        expect_eq(kurve.außen_barriere_segmente(), 6.)?;
        expect_eq(kurve.seiten_barriere_segmente(), 0.)?;
        // Rechts-Kurve: Mittelpunkt des Bogens bei (-55, 0).
        let ausgang = kurve.ausgang(&Position::URSPRUNG);
        expect_nahe(ausgang.x.0, -55.)?;
        expect_nahe(ausgang.y.0, 55.)?;
        expect_eq(kurve.ausgangswinkel(WinkelGradmaß::neu(0.)), WinkelGradmaß::neu(90.))?;
        Ok(())
    }

    #[test]
    fn links_ist_gespiegelt() -> Result<(), Expectation> {
        let rechts = Kurve::neu(spezifikation(), Richtung::Rechts, 1.);
        let links = Kurve::neu(spezifikation(), Richtung::Links, 1.);
        let ausgang_rechts = rechts.ausgang(&Position::URSPRUNG);
        let ausgang_links = links.ausgang(&Position::URSPRUNG);
        expect_nahe(ausgang_links.x.0, -ausgang_rechts.x.0)?;
        expect_nahe(ausgang_links.y.0, ausgang_rechts.y.0)?;
        expect_eq(links.ausgangswinkel(WinkelGradmaß::neu(0.)), WinkelGradmaß::neu(-90.))?;
        expect_eq(links.richtungswinkel(), WinkelGradmaß::neu(0.))?;
        Ok(())
    }

    #[test]
    fn vier_kurven_ergeben_kreis() -> Result<(), Expectation> {
        let kurve = Kurve::neu(spezifikation(), Richtung::Rechts, 1.);
        let mut position = Position::neu(20., -10., 15.);
        let start = position;
        let mut summe = 0.;
        for _ in 0..4 {
            summe += kurve.kurvenwinkel().grad();
            position = kurve.ausgangs_position(&position);
        }
        expect_nahe(summe, 360.)?;
        expect_nahe(position.punkt.x.0, start.punkt.x.0)?;
        expect_nahe(position.punkt.y.0, start.punkt.y.0)?;
        expect_nahe(position.winkel.grad(), start.winkel.grad() + 360.)?;
        Ok(())
    }

    #[test]
    fn zentrum_und_rechteck() -> Result<(), Expectation> {
        let kurve = Kurve::neu(spezifikation(), Richtung::Rechts, 1.);
        let zentrum = kurve.zentrum(&Position::URSPRUNG);
        expect_nahe(zentrum.x.0, 0.)?;
        expect_nahe(zentrum.y.0, 55.)?;
        let rechteck = kurve.rechteck(&Position::URSPRUNG).rechteck;
        let ecke_min = rechteck.ecke_min();
        let ecke_max = rechteck.ecke_max();
        expect_nahe(ecke_min.x.0, -55.)?;
        expect_nahe(ecke_min.y.0, 0.)?;
        expect_nahe(ecke_max.x.0, 45.)?;
        expect_nahe(ecke_max.y.0, 100.)?;
        Ok(())
    }

    #[test]
    fn bogen_in_begrenzung() -> Result<(), Expectation> {
        let toleranz = Skalar(1e-9);
        for richtung in [Richtung::Links, Richtung::Rechts] {
            for verhältnis in [0.25, 0.5, 0.75, 1., 2., 3., 4.] {
                let kurve = Kurve::neu(spezifikation(), richtung, verhältnis);
                let bogen_zentrum = kurve.bogen_zentrum();
                let kurvenwinkel = kurve.kurvenwinkel();
                for grad in (-720_i32..=720).step_by(7) {
                    let position = Position::neu(15., -40., f64::from(grad));
                    let rechteck = kurve.rechteck(&position).rechteck;
                    for radius in [kurve.innenradius(), kurve.außenradius()] {
                        for schritt in 0..=40_u32 {
                            let winkel = kurvenwinkel * (f64::from(schritt) / 40.);
                            let lokal = Vektor::polar_um(bogen_zentrum, radius, winkel);
                            let punkt = platziere(lokal, richtung, &position);
                            expect_true(rechteck.enthält_punkt(&punkt, toleranz))?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn großer_winkel() -> Result<(), Expectation> {
        for richtung in [Richtung::Links, Richtung::Rechts] {
            let kurve = Kurve::neu(spezifikation(), richtung, 1.);
            for grad in [1e18, -1e18, 3.6e17 + 90.] {
                let begrenzung = kurve.rechteck(&Position::neu(0., 0., grad));
                let größe = begrenzung.rechteck.größe();
                let durchmesser = kurve.außenradius().doppelt();
                expect_true(größe.x <= durchmesser && größe.y <= durchmesser)?;
                expect_eq(begrenzung.eingang.punkt, Vektor::URSPRUNG)?;
            }
        }
        Ok(())
    }

    #[test]
    fn kleine_und_große_verhältnisse() -> Result<(), Expectation> {
        let klein = Kurve::neu(spezifikation(), Richtung::Rechts, 0.5);
        expect_eq(klein.kurvenwinkel(), WinkelGradmaß::neu(45.))?;
        expect_eq(klein.innenradius(), Skalar(10.))?;
        expect_eq(klein.außen_barriere_segmente(), 3.)?;
        let groß = Kurve::neu(spezifikation(), Richtung::Rechts, 2.);
        expect_eq(groß.kurvenwinkel(), WinkelGradmaß::neu(45.))?;
        expect_eq(groß.innenradius(), Skalar(120.))?;
        expect_eq(groß.außenradius(), Skalar(210.))?;
        expect_eq(groß.richtungswinkel(), WinkelGradmaß::neu(135.))?;
        // 120 * π/4 / 27.5 ≈ 3.43
        expect_eq(groß.innen_barriere_segmente(), 3.)?;
        // 210 * π/4 / 27.5 ≈ 5.99
        expect_eq(groß.außen_barriere_segmente(), 6.)?;
        Ok(())
    }

    #[test]
    fn entsperrtes_verhältnis() -> Result<(), Expectation> {
        let spezifikation = Arc::new(KachelSpezifikation::aus_optionen(Optionen {
            max_verhältnis: 4.,
            verhältnis_entsperrt: true,
            ..Optionen::default()
        }));
        let kurve = Kurve::neu(spezifikation, Richtung::Links, 1.5);
        expect_eq(kurve.verhältnis(), 1.5)?;
        expect_nahe(kurve.kurvenwinkel().grad(), 60.)?;
        expect_eq(kurve.innen_barriere_segmente(), 2.)?;
        expect_true(kurve.außen_barriere_segmente() >= 1.)?;
        Ok(())
    }
}
