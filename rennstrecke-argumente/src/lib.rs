//! Kommandozeilen-Argumente.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]
// Durch derive-Macro für Parse ausgelöst.
#![allow(clippy::shadow_unrelated)]

use std::{
    env,
    fmt::{self, Debug, Display, Formatter},
    num::NonZeroI32,
};

use kommandozeilen_argumente::{EnumArgument, Parse};

use rennstrecke_typen::{skalar::Skalar, winkel::WinkelGradmaß};

#[derive(Debug, Clone, Parse)]
/// Baue eine Rennstrecke aus Kacheln und berechne ihre Geometrie.
#[kommandozeilen_argumente(sprache: deutsch, version, hilfe(lang: [hilfe, help], kurz: h))]
#[allow(clippy::struct_excessive_bools)]
pub struct Argumente {
    /// Kacheln als kommaseparierte Liste, z.B. "straight-tile:right:1,curved-tile:left:2".
    #[kommandozeilen_argumente(kurz, meta_var: KACHELN)]
    pub kacheln: Option<String>,

    /// Lade die Kacheln aus einer JSON-Datei.
    #[kommandozeilen_argumente(kurz, meta_var: DATEI)]
    pub datei: Option<String>,

    /// Anordnung der Kacheln.
    #[kommandozeilen_argumente(standard: ModusArgument::Strecke, kurz, meta_var: MODUS)]
    pub modus: ModusArgument,

    /// Format der Ausgabe.
    #[kommandozeilen_argumente(standard: AusgabeArgument::Text, kurz, meta_var: FORMAT)]
    pub ausgabe: AusgabeArgument,

    /// Breite der Fahrspur.
    #[kommandozeilen_argumente(standard: Skalar(80.), meta_var: BREITE)]
    pub spurbreite: Skalar,

    /// Breite der Barriere an beiden Seiten der Fahrspur.
    #[kommandozeilen_argumente(standard: Skalar(5.), meta_var: BREITE)]
    pub barriere_breite: Skalar,

    /// Anzahl Barriere-Segmente entlang einer geraden Kachel.
    #[kommandozeilen_argumente(standard: 4., meta_var: ANZAHL)]
    pub barriere_segmente: f64,

    /// Maximales Größenverhältnis einer Kachel.
    #[kommandozeilen_argumente(standard: 4., meta_var: VERHÄLTNIS)]
    pub max_verhältnis: f64,

    /// Erlaube beliebige Größenverhältnisse innerhalb der Grenzen.
    pub entsperrt: bool,

    /// X-Position der ersten Kachel.
    #[kommandozeilen_argumente(standard: Skalar(0.), kurz, meta_var: X)]
    pub x: Skalar,

    /// Y-Position der ersten Kachel.
    #[kommandozeilen_argumente(standard: Skalar(0.), kurz, meta_var: Y)]
    pub y: Skalar,

    /// Winkel der ersten Kachel.
    #[kommandozeilen_argumente(standard: WinkelGradmaß::neu(0.), meta_var: WINKEL)]
    pub winkel: WinkelGradmaß,

    /// Abstand zwischen den Zellen einer Liste.
    #[kommandozeilen_argumente(standard: Skalar(10.), meta_var: ABSTAND)]
    pub abstand: Skalar,

    /// Zeige zusätzliche Informationen in der Konsole an.
    pub verbose: bool,

    /// Speichere Log-Nachrichten zusätzlich in einer Datei.
    #[kommandozeilen_argumente(kurz: l, invertiere_präfix: keine)]
    pub log_datei: bool,
}

impl Argumente {
    /// Parse Kommandozeilen-Argumente.
    /// Ein einzelnes Argument (das nicht mit "-" beginnt) wird als Liste von Kacheln interpretiert.
    ///
    /// ## Panics
    ///
    /// Programmierfehler, wenn [`NonZeroI32::new`] [`None`] für den Exit-Code zurückgibt.
    #[must_use]
    pub fn parse_aus_env_einzelnes_als_kacheln() -> Self {
        let mut args: Vec<_> = env::args_os().skip(1).collect();
        if args.len() == 1
            && !args
                .first()
                .and_then(|os_string| os_string.to_str())
                .is_some_and(|string| string.starts_with('-'))
        {
            args.insert(0, "--kacheln".to_owned().into());
        }
        Argumente::parse_mit_fehlermeldung(args.into_iter(), NonZeroI32::new(1).expect("1 != 0"))
    }
}

/// Wie werden die Kacheln angeordnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumArgument)]
#[kommandozeilen_argumente(case: insensitive)]
pub enum ModusArgument {
    /// Verbinde die Kacheln zu einer Strecke.
    Strecke,
    /// Ordne die Kacheln unverbunden als Liste an.
    Liste,
    /// Zeige alle verfügbaren Kacheln als Liste.
    Palette,
}

impl Display for ModusArgument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, formatter)
    }
}

/// Format der Ausgabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumArgument)]
#[kommandozeilen_argumente(case: insensitive)]
pub enum AusgabeArgument {
    /// Lesbare Zusammenfassung.
    Text,
    /// Die Kacheln im Austauschformat.
    Json,
}

impl Display for AusgabeArgument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, formatter)
    }
}
