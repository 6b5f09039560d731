//! Abmessungen aller Kacheln, abgeleitet aus Spurbreite, Barriere-Breite und Barriere-Segmenten.

use rennstrecke_typen::skalar::Skalar;

/// Benannte Einstellungen zum Erzeugen einer [`KachelSpezifikation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optionen {
    /// Breite der Fahrspur.
    pub spurbreite: Skalar,
    /// Breite der Barriere an beiden Seiten der Fahrspur.
    pub barriere_breite: Skalar,
    /// Anzahl Barriere-Segmente pro Kachel.
    pub barriere_segmente: f64,
    /// Maximales Größenverhältnis einer Kachel.
    pub max_verhältnis: f64,
    /// Erlaube beliebige Größenverhältnisse bis [`max_verhältnis`](Optionen::max_verhältnis).
    pub verhältnis_entsperrt: bool,
}

impl Default for Optionen {
    fn default() -> Self {
        Optionen {
            spurbreite: Skalar(80.),
            barriere_breite: Skalar(5.),
            barriere_segmente: 4.,
            max_verhältnis: 1.,
            verhältnis_entsperrt: false,
        }
    }
}

/// Die Abmessungen aller Kacheln einer Rennstrecke.
///
/// Abgeleitete Größen werden bei jedem Aufruf aus den aktuellen Basiswerten berechnet.
#[derive(Debug, Clone, PartialEq)]
pub struct KachelSpezifikation {
    /// Breite der Fahrspur.
    spurbreite: Skalar,
    /// Breite der Barriere an beiden Seiten.
    barriere_breite: Skalar,
    /// Anzahl Barriere-Segmente pro Kachel, ganzzahlig und mindestens 1.
    barriere_segmente: f64,
    /// Maximales Größenverhältnis, ganzzahlig und mindestens 1.
    max_verhältnis: f64,
    /// Sind beliebige Größenverhältnisse erlaubt.
    verhältnis_entsperrt: bool,
}

/// Betrag des gerundeten Wertes, `1` falls das Ergebnis `0` oder `NaN` ist.
fn ganzzahl_mindestens_eins(wert: f64) -> f64 {
    let gerundet = wert.round().abs();
    if gerundet == 0. || gerundet.is_nan() {
        1.
    } else {
        gerundet
    }
}

impl KachelSpezifikation {
    /// Erzeuge eine neue [`KachelSpezifikation`] mit gesperrtem Größenverhältnis.
    #[must_use]
    pub fn neu(
        spurbreite: Skalar,
        barriere_breite: Skalar,
        barriere_segmente: f64,
        max_verhältnis: f64,
    ) -> Self {
        KachelSpezifikation::aus_optionen(Optionen {
            spurbreite,
            barriere_breite,
            barriere_segmente,
            max_verhältnis,
            verhältnis_entsperrt: false,
        })
    }

    /// Erzeuge eine neue [`KachelSpezifikation`] aus benannten [`Optionen`].
    #[must_use]
    pub fn aus_optionen(optionen: Optionen) -> Self {
        let Optionen {
            spurbreite,
            barriere_breite,
            barriere_segmente,
            max_verhältnis,
            verhältnis_entsperrt,
        } = optionen;
        let mut spezifikation = KachelSpezifikation {
            spurbreite: Skalar(0.),
            barriere_breite: Skalar(0.),
            barriere_segmente: 1.,
            max_verhältnis: 1.,
            verhältnis_entsperrt,
        };
        spezifikation
            .setze_spurbreite(spurbreite)
            .setze_barriere_breite(barriere_breite)
            .setze_barriere_segmente(barriere_segmente)
            .setze_max_verhältnis(max_verhältnis);
        spezifikation
    }

    /// Die aktuellen Basiswerte als [`Optionen`].
    #[must_use]
    pub fn optionen(&self) -> Optionen {
        Optionen {
            spurbreite: self.spurbreite,
            barriere_breite: self.barriere_breite,
            barriere_segmente: self.barriere_segmente,
            max_verhältnis: self.max_verhältnis,
            verhältnis_entsperrt: self.verhältnis_entsperrt,
        }
    }

    /// Setze die Spurbreite, negative Werte werden positiv.
    pub fn setze_spurbreite(&mut self, spurbreite: Skalar) -> &mut Self {
        self.spurbreite = spurbreite.abs();
        self
    }

    /// Setze die Barriere-Breite, negative Werte werden positiv.
    pub fn setze_barriere_breite(&mut self, barriere_breite: Skalar) -> &mut Self {
        self.barriere_breite = barriere_breite.abs();
        self
    }

    /// Setze die Anzahl Barriere-Segmente pro Kachel.
    ///
    /// Der Wert wird gerundet und positiv, `0` und `NaN` werden zu `1`.
    pub fn setze_barriere_segmente(&mut self, barriere_segmente: f64) -> &mut Self {
        self.barriere_segmente = ganzzahl_mindestens_eins(barriere_segmente);
        self
    }

    /// Setze das maximale Größenverhältnis.
    ///
    /// Der Wert wird gerundet und positiv, `0` und `NaN` werden zu `1`.
    pub fn setze_max_verhältnis(&mut self, max_verhältnis: f64) -> &mut Self {
        self.max_verhältnis = ganzzahl_mindestens_eins(max_verhältnis);
        self
    }

    /// Erlaube (oder verbiete) beliebige Größenverhältnisse.
    pub fn setze_verhältnis_entsperrt(&mut self, verhältnis_entsperrt: bool) -> &mut Self {
        self.verhältnis_entsperrt = verhältnis_entsperrt;
        self
    }

    /// Breite der Fahrspur.
    #[must_use]
    pub fn spurbreite(&self) -> Skalar {
        self.spurbreite
    }

    /// Breite der Barriere.
    #[must_use]
    pub fn barriere_breite(&self) -> Skalar {
        self.barriere_breite
    }

    /// Anzahl Barriere-Segmente pro Kachel.
    #[must_use]
    pub fn barriere_segmente(&self) -> f64 {
        self.barriere_segmente
    }

    /// Maximales Größenverhältnis.
    #[must_use]
    pub fn max_verhältnis(&self) -> f64 {
        self.max_verhältnis
    }

    /// Sind beliebige Größenverhältnisse erlaubt.
    #[must_use]
    pub fn verhältnis_entsperrt(&self) -> bool {
        self.verhältnis_entsperrt
    }

    /// Länge einer Kachel mit Verhältnis `1`.
    #[must_use]
    pub fn länge(&self) -> Skalar {
        kachel_länge(self.spurbreite, self.barriere_breite)
    }

    /// Breite einer Kachel.
    #[must_use]
    pub fn breite(&self) -> Skalar {
        kachel_breite(self.spurbreite, self.barriere_breite)
    }

    /// Innerer Abstand einer Kurve zu ihrem Mittelpunkt.
    #[must_use]
    pub fn innenabstand(&self) -> Skalar {
        self.spurbreite / Skalar(8.)
    }

    /// Länge eines Barriere-Segments.
    #[must_use]
    pub fn barriere_länge(&self) -> Skalar {
        self.länge() / Skalar(self.barriere_segmente)
    }
}

/// Länge einer Kachel: `spurbreite * 1.25 + barriere_breite * 2`.
#[must_use]
pub fn kachel_länge(spurbreite: Skalar, barriere_breite: Skalar) -> Skalar {
    spurbreite * Skalar(1.25) + barriere_breite.doppelt()
}

/// Breite einer Kachel: `spurbreite + barriere_breite * 2`.
#[must_use]
pub fn kachel_breite(spurbreite: Skalar, barriere_breite: Skalar) -> Skalar {
    spurbreite + barriere_breite.doppelt()
}

/// Spurbreite zu einer Kachel-Breite, Umkehrfunktion von [`kachel_breite`].
#[must_use]
pub fn spurbreite(kachel_breite: Skalar, barriere_breite: Skalar) -> Skalar {
    kachel_breite - barriere_breite.doppelt()
}

/// Spurbreite zu einer Kachel-Länge, Umkehrfunktion von [`kachel_länge`].
#[must_use]
pub fn spurbreite_aus_länge(kachel_länge: Skalar, barriere_breite: Skalar) -> Skalar {
    (kachel_länge - barriere_breite.doppelt()) / Skalar(1.25)
}

#[cfg(test)]
mod test {
    use rennstrecke_test_util::{expect_eq, expect_nahe, expect_true, Expectation};

    use super::*;

    #[test]
    fn abgeleitete_größen() -> Result<(), Expectation> {
        let spezifikation = KachelSpezifikation::neu(Skalar(80.), Skalar(5.), 4., 1.);
        expect_eq(spezifikation.länge(), Skalar(110.))?;
        expect_eq(spezifikation.breite(), Skalar(90.))?;
        expect_eq(spezifikation.innenabstand(), Skalar(10.))?;
        expect_eq(spezifikation.barriere_länge(), Skalar(27.5))?;
        Ok(())
    }

    #[test]
    fn setter_korrigieren_werte() -> Result<(), Expectation> {
        let mut spezifikation = KachelSpezifikation::neu(Skalar(-80.), Skalar(-5.), -3.6, 0.);
        expect_eq(spezifikation.spurbreite(), Skalar(80.))?;
        expect_eq(spezifikation.barriere_breite(), Skalar(5.))?;
        expect_eq(spezifikation.barriere_segmente(), 4.)?;
        expect_eq(spezifikation.max_verhältnis(), 1.)?;
        let _ = spezifikation.setze_barriere_segmente(f64::NAN).setze_max_verhältnis(0.4);
        expect_eq(spezifikation.barriere_segmente(), 1.)?;
        expect_eq(spezifikation.max_verhältnis(), 1.)?;
        Ok(())
    }

    #[test]
    fn abgeleitete_größen_folgen_settern() -> Result<(), Expectation> {
        let mut spezifikation = KachelSpezifikation::neu(Skalar(80.), Skalar(5.), 4., 1.);
        let _ = spezifikation.setze_spurbreite(Skalar(40.)).setze_barriere_segmente(2.);
        expect_eq(spezifikation.länge(), Skalar(60.))?;
        expect_eq(spezifikation.breite(), Skalar(50.))?;
        expect_eq(spezifikation.barriere_länge(), Skalar(30.))?;
        Ok(())
    }

    #[test]
    fn aus_optionen() -> Result<(), Expectation> {
        let optionen = Optionen {
            max_verhältnis: 3.,
            verhältnis_entsperrt: true,
            ..Optionen::default()
        };
        let spezifikation = KachelSpezifikation::aus_optionen(optionen);
        expect_true(spezifikation.verhältnis_entsperrt())?;
        expect_eq(spezifikation.optionen(), optionen)?;
        Ok(())
    }

    #[test]
    fn verhältnis_entsperren() -> Result<(), Expectation> {
        let mut spezifikation = KachelSpezifikation::neu(Skalar(80.), Skalar(5.), 4., 2.);
        expect_true(!spezifikation.verhältnis_entsperrt())?;
        let _ = spezifikation.setze_verhältnis_entsperrt(true).setze_max_verhältnis(3.);
        expect_true(spezifikation.verhältnis_entsperrt())?;
        expect_true(spezifikation.optionen().verhältnis_entsperrt)?;
        expect_eq(spezifikation.max_verhältnis(), 3.)?;
        let _ = spezifikation.setze_verhältnis_entsperrt(false);
        expect_true(!spezifikation.verhältnis_entsperrt())?;
        Ok(())
    }

    #[test]
    fn umkehrfunktionen() -> Result<(), Expectation> {
        for (spur, barriere) in [(80., 5.), (60., 10.), (12.5, 0.75), (0., 3.)] {
            let spur = Skalar(spur);
            let barriere = Skalar(barriere);
            expect_nahe(spurbreite(kachel_breite(spur, barriere), barriere).0, spur.0)?;
            expect_nahe(spurbreite_aus_länge(kachel_länge(spur, barriere), barriere).0, spur.0)?;
        }
        Ok(())
    }
}
