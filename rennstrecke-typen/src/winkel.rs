//! Winkel in Bogen- und Gradmaß.
//!
//! Öffentliche Schnittstellen verwenden [`WinkelGradmaß`],
//! Berechnungen finden intern im Bogenmaß ([`Winkel`]) statt.

use std::{
    cmp::Ordering,
    f64::consts,
    fmt::{self, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use kommandozeilen_argumente::{Beschreibung, ParseArgument, Vergleich};
use serde::{Deserialize, Serialize};

use crate::skalar::Skalar;

/// Trigonometrische Funktionen für Winkel.
pub trait Trigonometrie {
    /// Normalisiert in den äquivalenten Bereich zu [-π,π).
    #[must_use]
    fn normalisiert(self) -> Self;
    /// Kosinus
    #[must_use]
    fn cos(&self) -> Skalar;
    /// Sinus
    #[must_use]
    fn sin(&self) -> Skalar;
    /// Inverser Tangens mit Quadranten-Information (`atan2(y, x)`).
    #[must_use]
    fn atan2(y: Skalar, x: Skalar) -> Self;
}

/// τ = 2. * π, eine ganze Umdrehung.
pub const TAU: Winkel = Winkel(consts::TAU);

/// π, eine halbe Umdrehung.
pub const PI: Winkel = Winkel(consts::PI);

/// π / 2., eine viertel Umdrehung.
pub const FRAC_PI_2: Winkel = Winkel(consts::FRAC_PI_2);

/// Winkel \[`Bogenmaß\`]
///
/// Die [`PartialEq`]- und [`PartialOrd`]-Instanzen sind abgeleitet und normalisieren die Winkel NICHT,
/// bevor sie verglichen werden.
#[derive(Debug, PartialEq, Clone, Copy, PartialOrd, Default, Serialize, Deserialize)]
pub struct Winkel(pub f64);

// Soll direkt importiert werden.
#[allow(clippy::module_name_repetitions)]
/// Winkel \[`Gradmaß\`]. Positive Winkel drehen im Uhrzeigersinn (die y-Achse wächst nach unten).
///
/// Die [`PartialEq`]- und [`PartialOrd`]-Instanzen sind abgeleitet und normalisieren die Winkel NICHT,
/// bevor sie verglichen werden.
#[derive(Debug, PartialEq, Clone, Copy, PartialOrd, Default, Serialize, Deserialize)]
pub struct WinkelGradmaß(f64);

impl WinkelGradmaß {
    /// Konstruktor
    #[must_use]
    pub const fn neu(grad: f64) -> Self {
        WinkelGradmaß(grad)
    }

    /// Der Winkel in Grad.
    #[must_use]
    pub const fn grad(&self) -> f64 {
        self.0
    }
}

impl From<WinkelGradmaß> for Winkel {
    fn from(WinkelGradmaß(gradmaß): WinkelGradmaß) -> Winkel {
        Winkel(gradmaß.to_radians())
    }
}

impl From<Winkel> for WinkelGradmaß {
    fn from(Winkel(bogenmaß): Winkel) -> WinkelGradmaß {
        WinkelGradmaß(bogenmaß.to_degrees())
    }
}

impl PartialEq<WinkelGradmaß> for Winkel {
    fn eq(&self, other: &WinkelGradmaß) -> bool {
        self.eq(&Winkel::from(*other))
    }
}

impl PartialOrd<WinkelGradmaß> for Winkel {
    fn partial_cmp(&self, other: &WinkelGradmaß) -> Option<Ordering> {
        self.partial_cmp(&Winkel::from(*other))
    }
}

impl PartialEq<Winkel> for WinkelGradmaß {
    fn eq(&self, other: &Winkel) -> bool {
        Winkel::from(*self).eq(other)
    }
}

impl PartialOrd<Winkel> for WinkelGradmaß {
    fn partial_cmp(&self, other: &Winkel) -> Option<Ordering> {
        Winkel::from(*self).partial_cmp(other)
    }
}

impl Display for WinkelGradmaß {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}°", self.0)
    }
}

/// Addition/Subtraktion zwischen gleichartigen Winkeln, sowie Multiplikation/Division mit [`f64`].
macro_rules! winkel_arithmetik {
    ($typ: ident) => {
        impl AddAssign<$typ> for $typ {
            fn add_assign(&mut self, rhs: $typ) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.0 += rhs.0;
                }
            }
        }

        impl Add<$typ> for $typ {
            type Output = Self;

            fn add(mut self, rhs: $typ) -> Self {
                self += rhs;
                self
            }
        }

        impl SubAssign<$typ> for $typ {
            fn sub_assign(&mut self, rhs: $typ) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.0 -= rhs.0;
                }
            }
        }

        impl Sub<$typ> for $typ {
            type Output = Self;

            fn sub(mut self, rhs: $typ) -> Self {
                self -= rhs;
                self
            }
        }

        impl Neg for $typ {
            type Output = Self;

            fn neg(self) -> Self {
                $typ(-self.0)
            }
        }

        impl MulAssign<f64> for $typ {
            fn mul_assign(&mut self, rhs: f64) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.0 *= rhs;
                }
            }
        }

        impl Mul<f64> for $typ {
            type Output = Self;

            fn mul(mut self, rhs: f64) -> Self {
                self *= rhs;
                self
            }
        }

        impl Mul<$typ> for f64 {
            type Output = $typ;

            fn mul(self, rhs: $typ) -> $typ {
                rhs * self
            }
        }

        impl DivAssign<f64> for $typ {
            fn div_assign(&mut self, rhs: f64) {
                // Wie f64: Schlimmstenfalls wird eine NaN-Wert erzeugt.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.0 /= rhs;
                }
            }
        }

        impl Div<f64> for $typ {
            type Output = Self;

            fn div(mut self, rhs: f64) -> Self {
                self /= rhs;
                self
            }
        }
    };
}

winkel_arithmetik! {Winkel}
winkel_arithmetik! {WinkelGradmaß}

impl Add<WinkelGradmaß> for Winkel {
    type Output = Winkel;

    fn add(self, rhs: WinkelGradmaß) -> Winkel {
        self + Winkel::from(rhs)
    }
}

impl Sub<WinkelGradmaß> for Winkel {
    type Output = Winkel;

    fn sub(self, rhs: WinkelGradmaß) -> Winkel {
        self - Winkel::from(rhs)
    }
}

impl Trigonometrie for Winkel {
    fn normalisiert(self) -> Self {
        // rem_euclid liefert einen Wert in [0, τ), verschiebe anschließend nach [-π, π).
        #[allow(clippy::arithmetic_side_effects)]
        let normalisiert = (self.0 + PI.0).rem_euclid(TAU.0) - PI.0;
        Winkel(normalisiert)
    }

    fn cos(&self) -> Skalar {
        Skalar(self.0.cos())
    }

    fn sin(&self) -> Skalar {
        Skalar(self.0.sin())
    }

    fn atan2(y: Skalar, x: Skalar) -> Self {
        Winkel(y.0.atan2(x.0))
    }
}

impl Trigonometrie for WinkelGradmaß {
    fn normalisiert(self) -> Self {
        // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen.
        #[allow(clippy::arithmetic_side_effects)]
        let normalisiert = (self.0 + 180.).rem_euclid(360.) - 180.;
        WinkelGradmaß(normalisiert)
    }

    fn cos(&self) -> Skalar {
        Winkel::from(*self).cos()
    }

    fn sin(&self) -> Skalar {
        Winkel::from(*self).sin()
    }

    fn atan2(y: Skalar, x: Skalar) -> Self {
        Winkel::atan2(y, x).into()
    }
}

impl ParseArgument for WinkelGradmaß {
    fn argumente<'t>(
        beschreibung: Beschreibung<'t, Self>,
        invertiere_präfix: impl Into<Vergleich<'t>>,
        invertiere_infix: impl Into<Vergleich<'t>>,
        wert_infix: impl Into<Vergleich<'t>>,
        meta_var: &'t str,
    ) -> kommandozeilen_argumente::Argumente<'t, Self, String> {
        kommandozeilen_argumente::Argumente::konvertiere(
            WinkelGradmaß,
            f64::argumente(
                beschreibung.konvertiere(|winkel| winkel.0),
                invertiere_präfix,
                invertiere_infix,
                wert_infix,
                meta_var,
            ),
        )
    }

    fn standard() -> Option<Self> {
        Some(WinkelGradmaß(0.))
    }
}

#[cfg(test)]
mod test {
    use rennstrecke_test_util::{expect_nahe, Expectation};

    use super::*;

    #[test]
    fn umrechnung() -> Result<(), Expectation> {
        let rechter_winkel = Winkel::from(WinkelGradmaß::neu(90.));
        expect_nahe(rechter_winkel.0, FRAC_PI_2.0)?;
        expect_nahe(WinkelGradmaß::from(PI).grad(), 180.)?;
        Ok(())
    }

    #[test]
    fn normalisiert() -> Result<(), Expectation> {
        expect_nahe(WinkelGradmaß::neu(270.).normalisiert().grad(), -90.)?;
        expect_nahe(WinkelGradmaß::neu(-540.).normalisiert().grad(), -180.)?;
        expect_nahe(WinkelGradmaß::neu(45.).normalisiert().grad(), 45.)?;
        expect_nahe(Winkel(2.5 * consts::PI).normalisiert().0, FRAC_PI_2.0)?;
        Ok(())
    }
}
