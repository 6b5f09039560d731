//! Vektoren über [`Skalar`] mit allen Funktionen für einen 2-dimensionen Vektorraum.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{
    skalar::Skalar,
    winkel::{Trigonometrie, Winkel, WinkelGradmaß},
};

/// Vektoren über [`Skalar`] ([`f64`]) mit allen Funktionen für einen 2-dimensionen Vektorraum.
///
/// Addition zwischen Vektoren formen einen abelsche Gruppe
/// mit dem [`URSPRUNG`](Vektor::URSPRUNG) als neutrales Element.
///
/// Multiplikation mit einem [`Skalar`] befolgt Distributivgesetzte mit der Addition von Vektoren.
/// Multiplikation und Division zweier Vektoren wirken komponentenweise.
///
/// Die y-Achse wächst nach unten, positive Winkel drehen daher im Uhrzeigersinn.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vektor {
    /// x-Koordinate des Vektors.
    pub x: Skalar,
    /// y-Koordinate des Vektors.
    pub y: Skalar,
}

impl Vektor {
    /// Der Ursprung `(0, 0)`, additiv neutrales Element.
    pub const URSPRUNG: Vektor = Vektor { x: Skalar(0.), y: Skalar(0.) };

    /// Einheitsvektor in x-Richtung.
    pub const EX: Vektor = Vektor { x: Skalar(1.), y: Skalar(0.) };

    /// Erzeuge einen Vektor aus seinen Koordinaten.
    #[must_use]
    pub const fn neu(x: f64, y: f64) -> Self {
        Vektor { x: Skalar(x), y: Skalar(y) }
    }

    /// Erzeuge einen Vektor aus seinen Polarkoordinaten.
    ///
    /// Winkel wachsen im Uhrzeigersinn.
    /// y-Koordinaten wachsen nach unten.
    #[must_use]
    pub fn polar_koordinaten(radius: Skalar, winkel: impl Into<Winkel>) -> Self {
        let winkel: Winkel = winkel.into();
        Vektor { x: radius * winkel.cos(), y: radius * winkel.sin() }
    }

    /// Erzeuge einen Vektor aus Polarkoordinaten um das `zentrum`.
    #[must_use]
    pub fn polar_um(zentrum: Vektor, radius: Skalar, winkel: impl Into<Winkel>) -> Self {
        zentrum + Vektor::polar_koordinaten(radius, winkel)
    }

    /// Normalisiere den Vektor auf länge `Skalar(1.)`.
    ///
    /// Der Nullvektor wird zum Einheitsvektor in x-Richtung, es entsteht kein [NaN](f64::NAN)-Wert.
    pub fn normalisiere(&mut self) {
        let länge = self.länge();
        if länge == Skalar(0.) {
            *self = Vektor::EX;
        } else {
            *self /= länge;
        }
    }

    /// Einheitsvektor mit identischer Richtung.
    ///
    /// Für den Nullvektor wird [`Vektor::EX`] zurückgegeben.
    #[must_use]
    pub fn einheitsvektor(mut self) -> Self {
        self.normalisiere();
        self
    }

    /// Skalarprodukt zweier Vektoren.
    ///
    /// Insbesondere gilt `self.länge() == self.skalarprodukt(self).sqrt()`
    #[must_use]
    pub fn skalarprodukt(&self, other: &Self) -> Skalar {
        self.x * other.x + self.y * other.y
    }

    /// z-Komponente des Kreuzprodukts, wenn beide Vektoren in die xy-Ebene eingebettet werden.
    ///
    /// Der Wert ist `0`, wenn beide Vektoren parallel sind.
    #[must_use]
    pub fn kreuzprodukt(&self, other: &Self) -> Skalar {
        self.x * other.y - self.y * other.x
    }

    /// Länge eines Vektors (euklidische Metrik).
    ///
    /// Definiert über [`Vektor::skalarprodukt`].
    #[must_use]
    pub fn länge(&self) -> Skalar {
        self.skalarprodukt(self).sqrt()
    }

    /// Euklidischer Abstand zweier Punkte.
    #[must_use]
    pub fn abstand(&self, other: &Self) -> Skalar {
        (self - other).länge()
    }

    /// Richtung des Vektors, gemessen von der x-Achse (im Uhrzeigersinn).
    #[must_use]
    pub fn richtung(&self) -> WinkelGradmaß {
        WinkelGradmaß::atan2(self.y, self.x)
    }

    /// Rotiere einen Vektor um `winkel` im Uhrzeigersinn um den Ursprung.
    pub fn rotiere(&mut self, winkel: impl Into<Winkel>) {
        let winkel: Winkel = winkel.into();
        let Vektor { x, y } = *self;
        let cos = winkel.cos();
        let sin = winkel.sin();
        self.x = cos * x - sin * y;
        self.y = sin * x + cos * y;
    }

    /// Erzeuge einen Vektor, der um `winkel` im Uhrzeigersinn rotiert ist.
    #[must_use]
    pub fn rotiert(mut self, winkel: impl Into<Winkel>) -> Self {
        self.rotiere(winkel);
        self
    }

    /// Rotiere einen Vektor um `winkel` im Uhrzeigersinn um das `zentrum`.
    pub fn rotiere_um(&mut self, winkel: impl Into<Winkel>, zentrum: &Vektor) {
        *self -= zentrum;
        self.rotiere(winkel);
        *self += zentrum;
    }

    /// Erzeuge einen Vektor, der um `winkel` im Uhrzeigersinn um das `zentrum` rotiert ist.
    #[must_use]
    pub fn rotiert_um(mut self, winkel: impl Into<Winkel>, zentrum: &Vektor) -> Self {
        self.rotiere_um(winkel, zentrum);
        self
    }

    /// Rotiere einen Vektor um den Ursprung, bis seine [`Richtung`](Vektor::richtung) `ziel` entspricht.
    pub fn rotiere_auf(&mut self, ziel: impl Into<Winkel>) {
        self.rotiere_um_auf(ziel, &Vektor::URSPRUNG);
    }

    /// Erzeuge einen Vektor, der um den Ursprung auf die Richtung `ziel` rotiert ist.
    #[must_use]
    pub fn rotiert_auf(mut self, ziel: impl Into<Winkel>) -> Self {
        self.rotiere_auf(ziel);
        self
    }

    /// Rotiere einen Vektor um das `zentrum`, bis die Richtung vom `zentrum` aus `ziel` entspricht.
    pub fn rotiere_um_auf(&mut self, ziel: impl Into<Winkel>, zentrum: &Vektor) {
        let ziel: Winkel = ziel.into();
        let aktuell = Winkel::from((*self - zentrum).richtung());
        self.rotiere_um(ziel - aktuell, zentrum);
    }

    /// Erzeuge einen Vektor, der um das `zentrum` auf die Richtung `ziel` rotiert ist.
    #[must_use]
    pub fn rotiert_um_auf(mut self, ziel: impl Into<Winkel>, zentrum: &Vektor) -> Self {
        self.rotiere_um_auf(ziel, zentrum);
        self
    }

    /// Schnittpunkt der Geraden durch `p1` und `p2` mit der Geraden durch `p3` und `p4`.
    ///
    /// Parallele Geraden (Determinante `0`) haben keinen Schnittpunkt, das Ergebnis ist dann [`None`].
    #[must_use]
    pub fn schnittpunkt(p1: &Vektor, p2: &Vektor, p3: &Vektor, p4: &Vektor) -> Option<Vektor> {
        let richtung_a = p2 - p1;
        let richtung_b = p4 - p3;
        let determinante = richtung_a.kreuzprodukt(&richtung_b);
        if determinante == Skalar(0.) {
            return None;
        }
        let faktor = (p3 - p1).kreuzprodukt(&richtung_b) / determinante;
        Some(p1 + faktor * richtung_a)
    }
}

/// Implementiere eine komponentenweise Rechenoperation für [`Vektor`]
/// über die `*Assign`-Variante, für Vektoren und [`Skalare`](Skalar) als rechte Seite.
macro_rules! vektor_operation {
    ($trait: ident, $methode: ident, $trait_assign: ident, $methode_assign: ident) => {
        impl $trait_assign<&Vektor> for Vektor {
            fn $methode_assign(&mut self, rhs: &Vektor) {
                self.x.$methode_assign(rhs.x);
                self.y.$methode_assign(rhs.y);
            }
        }

        impl $trait_assign<Vektor> for Vektor {
            fn $methode_assign(&mut self, rhs: Vektor) {
                self.$methode_assign(&rhs);
            }
        }

        impl $trait_assign<&Skalar> for Vektor {
            fn $methode_assign(&mut self, rhs: &Skalar) {
                self.x.$methode_assign(rhs);
                self.y.$methode_assign(rhs);
            }
        }

        impl $trait_assign<Skalar> for Vektor {
            fn $methode_assign(&mut self, rhs: Skalar) {
                self.$methode_assign(&rhs);
            }
        }

        impl<T> $trait<T> for Vektor
        where
            Vektor: $trait_assign<T>,
        {
            type Output = Vektor;

            fn $methode(mut self, rhs: T) -> Vektor {
                self.$methode_assign(rhs);
                self
            }
        }

        impl<T> $trait<T> for &Vektor
        where
            Vektor: $trait_assign<T>,
        {
            type Output = Vektor;

            fn $methode(self, rhs: T) -> Vektor {
                let mut wert = *self;
                wert.$methode_assign(rhs);
                wert
            }
        }
    };
}

// Ein Vektor-Raum ist eine (additive) abelsche Gruppe
vektor_operation! {Add, add, AddAssign, add_assign}
vektor_operation! {Sub, sub, SubAssign, sub_assign}
// Multiplikation/Division mit Skalar, bzw. komponentenweise
vektor_operation! {Mul, mul, MulAssign, mul_assign}
vektor_operation! {Div, div, DivAssign, div_assign}

// inverses Element
impl Neg for Vektor {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vektor { x: -self.x, y: -self.y }
    }
}

impl Mul<Vektor> for Skalar {
    type Output = Vektor;

    fn mul(self, rhs: Vektor) -> Self::Output {
        rhs * self
    }
}
