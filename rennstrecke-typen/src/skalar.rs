//! Skalar-Werte für Längen und Koordinaten einer Rennstrecke.

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use kommandozeilen_argumente::{Beschreibung, ParseArgument, Vergleich};
use serde::{Deserialize, Serialize};

/// Skalar-Werte für Längen und Koordinaten einer Rennstrecke.
///
/// Intern wird [`f64`] verwendet, damit lange Strecken ohne sichtbare Lücken aneinander passen.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Skalar(pub f64);

impl Skalar {
    /// Doppelter Wert.
    #[must_use]
    pub fn doppelt(&self) -> Self {
        Skalar(2. * self.0)
    }

    /// Halber Wert.
    #[must_use]
    pub fn halbiert(&self) -> Self {
        Skalar(0.5 * self.0)
    }

    /// Absoluter Wert.
    #[must_use]
    pub fn abs(&self) -> Self {
        Skalar(self.0.abs())
    }

    /// Kopie des größeren Elements.
    #[must_use]
    pub fn max(&self, other: &Self) -> Self {
        if self > other {
            *self
        } else {
            *other
        }
    }

    /// Kopie des kleineren Elements.
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        if self < other {
            *self
        } else {
            *other
        }
    }

    /// Quadratwurzel.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        Skalar(self.0.sqrt())
    }
}

impl Display for Skalar {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, formatter)
    }
}

/// Implementiere eine Rechenoperation für [`Skalar`] über die `*Assign`-Variante.
///
/// Die Varianten mit `&Skalar` und `&mut Skalar` als rechte Seite werden auf die Wert-Variante zurückgeführt.
macro_rules! skalar_operation {
    ($trait: ident, $methode: ident, $trait_assign: ident, $methode_assign: ident, $op: tt) => {
        impl $trait_assign<Skalar> for Skalar {
            fn $methode_assign(&mut self, rhs: Skalar) {
                // Wie f64: Schlimmstenfalls kommt es zu Genauigkeits-Problemen oder einem NaN-Wert.
                #[allow(clippy::arithmetic_side_effects)]
                {
                    self.0 = self.0 $op rhs.0;
                }
            }
        }

        impl $trait_assign<&Skalar> for Skalar {
            fn $methode_assign(&mut self, rhs: &Skalar) {
                self.$methode_assign(*rhs);
            }
        }

        impl $trait_assign<&mut Skalar> for Skalar {
            fn $methode_assign(&mut self, rhs: &mut Skalar) {
                self.$methode_assign(*rhs);
            }
        }

        impl<T> $trait<T> for Skalar
        where
            Skalar: $trait_assign<T>,
        {
            type Output = Skalar;

            fn $methode(mut self, rhs: T) -> Skalar {
                self.$methode_assign(rhs);
                self
            }
        }

        impl<T> $trait<T> for &Skalar
        where
            Skalar: $trait_assign<T>,
        {
            type Output = Skalar;

            fn $methode(self, rhs: T) -> Skalar {
                let mut wert = *self;
                wert.$methode_assign(rhs);
                wert
            }
        }
    };
}

// Ein Körper ist eine (additive) abelsche Gruppe ...
skalar_operation! {Add, add, AddAssign, add_assign, +}
skalar_operation! {Sub, sub, SubAssign, sub_assign, -}
// ... und ohne die 0 eine (multiplikative) abelsche Gruppe.
skalar_operation! {Mul, mul, MulAssign, mul_assign, *}
skalar_operation! {Div, div, DivAssign, div_assign, /}

// inverses Element
impl Neg for Skalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Skalar(-self.0)
    }
}

impl ParseArgument for Skalar {
    fn argumente<'t>(
        beschreibung: Beschreibung<'t, Self>,
        invertiere_präfix: impl Into<Vergleich<'t>>,
        invertiere_infix: impl Into<Vergleich<'t>>,
        wert_infix: impl Into<Vergleich<'t>>,
        meta_var: &'t str,
    ) -> kommandozeilen_argumente::Argumente<'t, Self, String> {
        kommandozeilen_argumente::Argumente::konvertiere(
            Skalar,
            f64::argumente(
                beschreibung.konvertiere(|skalar| skalar.0),
                invertiere_präfix,
                invertiere_infix,
                wert_infix,
                meta_var,
            ),
        )
    }

    fn standard() -> Option<Self> {
        None
    }
}
