//! Ein achsenparalleles Rechteck. Hauptsächlich zur Verwendung als Bounding Box.

use serde::{Deserialize, Serialize};

use crate::{skalar::Skalar, vektor::Vektor};

/// Ein achsenparalleles Rechteck. Hauptsächlich zur Verwendung als Bounding Box.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rechteck {
    /// Eine Ecke des Rechtecks.
    pub ecke_a: Vektor,
    /// Die gegenüberliegende Ecke des Rechtecks.
    pub ecke_b: Vektor,
}

impl Rechteck {
    /// Erzeuge ein Rechteck der angegebenen Größe beginnend bei `(0, 0)`.
    #[must_use]
    pub fn mit_größe(größe: Vektor) -> Self {
        Rechteck { ecke_a: Vektor::URSPRUNG, ecke_b: größe }
    }

    /// Erzeuge das kleinstmögliche Rechteck das alle Vektoren enthält.
    /// Schlägt bei einem leeren Iterator (erstes `next` gibt `None` zurück) fehl.
    pub fn aus_vektoren(vektoren: impl IntoIterator<Item = Vektor>) -> Option<Self> {
        let mut vektoren = vektoren.into_iter();
        let anfang = vektoren.next()?;
        Some(Rechteck::umschließend(anfang, vektoren))
    }

    /// Erzeuge das kleinstmögliche Rechteck das `anfang` und alle `weitere` Vektoren enthält.
    pub fn umschließend(anfang: Vektor, weitere: impl IntoIterator<Item = Vektor>) -> Self {
        let (min, max) = weitere.into_iter().fold((anfang, anfang), min_max);
        Rechteck { ecke_a: min, ecke_b: max }
    }

    /// Verschiebe das Rechteck um [`Vektor`].
    pub fn verschiebe(&mut self, bewegung: &Vektor) {
        self.ecke_a += bewegung;
        self.ecke_b += bewegung;
    }

    /// Erzeuge ein um [`Vektor`] verschobenes Rechteck.
    #[must_use]
    pub fn verschoben(mut self, bewegung: &Vektor) -> Self {
        self.verschiebe(bewegung);
        self
    }

    /// Erzeuge ein Rechteck, in dem `self` und `other` enthalten sind.
    #[must_use]
    pub fn einschließend(self, other: &Self) -> Self {
        Rechteck::umschließend(self.ecke_a, [self.ecke_b, other.ecke_a, other.ecke_b])
    }

    /// Ist `other` vollständig in `self` enthalten.
    ///
    /// Ränder dürfen um `toleranz` überstehen.
    #[must_use]
    pub fn enthält(&self, other: &Self, toleranz: Skalar) -> bool {
        let self_min = self.ecke_min();
        let self_max = self.ecke_max();
        let other_min = other.ecke_min();
        let other_max = other.ecke_max();
        other_min.x + toleranz >= self_min.x
            && other_min.y + toleranz >= self_min.y
            && other_max.x <= self_max.x + toleranz
            && other_max.y <= self_max.y + toleranz
    }

    /// Ist der Punkt im Rechteck enthalten (inklusive Rand, plus `toleranz`).
    #[must_use]
    pub fn enthält_punkt(&self, punkt: &Vektor, toleranz: Skalar) -> bool {
        self.enthält(&Rechteck { ecke_a: *punkt, ecke_b: *punkt }, toleranz)
    }

    /// Position der linken oberen Ecke des Rechtecks.
    #[must_use]
    pub fn position(&self) -> Vektor {
        self.ecke_min()
    }

    /// Größe des Rechtecks.
    #[must_use]
    pub fn größe(&self) -> Vektor {
        Vektor {
            x: (self.ecke_a.x - self.ecke_b.x).abs(),
            y: (self.ecke_a.y - self.ecke_b.y).abs(),
        }
    }

    /// Ecke mit den minimalen Koordinaten.
    #[must_use]
    pub fn ecke_min(&self) -> Vektor {
        Vektor { x: self.ecke_a.x.min(&self.ecke_b.x), y: self.ecke_a.y.min(&self.ecke_b.y) }
    }

    /// Ecke mit den maximalen Koordinaten.
    #[must_use]
    pub fn ecke_max(&self) -> Vektor {
        Vektor { x: self.ecke_a.x.max(&self.ecke_b.x), y: self.ecke_a.y.max(&self.ecke_b.y) }
    }

    /// Mittelpunkt des Rechtecks.
    #[must_use]
    pub fn mittelpunkt(&self) -> Vektor {
        (self.ecke_a + self.ecke_b) * Skalar(0.5)
    }
}

/// Erweitere das `(min, max)`-Paar, so dass `wert` enthalten ist.
fn min_max((min, max): (Vektor, Vektor), wert: Vektor) -> (Vektor, Vektor) {
    (
        Vektor { x: min.x.min(&wert.x), y: min.y.min(&wert.y) },
        Vektor { x: max.x.max(&wert.x), y: max.y.max(&wert.y) },
    )
}

#[cfg(test)]
mod test {
    use rennstrecke_test_util::{expect_eq, expect_true, Expectation};

    use super::*;

    #[test]
    fn aus_vektoren() -> Result<(), Expectation> {
        let rechteck = Rechteck::aus_vektoren([
            Vektor::neu(3., -1.),
            Vektor::neu(-2., 4.),
            Vektor::neu(1., 1.),
        ]);
        expect_eq(
            rechteck.clone(),
            Some(Rechteck { ecke_a: Vektor::neu(-2., -1.), ecke_b: Vektor::neu(3., 4.) }),
        )?;
        expect_eq(Rechteck::aus_vektoren([]), None)?;
        Ok(())
    }

    #[test]
    fn einschließend_enthält_beide() -> Result<(), Expectation> {
        let a = Rechteck::mit_größe(Vektor::neu(2., 2.));
        let b = Rechteck::mit_größe(Vektor::neu(1., 1.)).verschoben(&Vektor::neu(5., -3.));
        let beide = a.clone().einschließend(&b);
        expect_true(beide.enthält(&a, Skalar(0.)))?;
        expect_true(beide.enthält(&b, Skalar(0.)))?;
        expect_eq(beide.position(), Vektor::neu(0., -3.))?;
        expect_eq(beide.größe(), Vektor::neu(6., 5.))?;
        Ok(())
    }
}
