//! Baue eine Rennstrecke aus Kacheln und gib ihre Geometrie aus.

// Zu viele/große dependencies, um das wirklich zu vermeiden.
#![allow(clippy::multiple_crate_versions)]

use std::{fs, io, process::ExitCode, sync::Arc};

use flexi_logger::{Duplicate, FileSpec, FlexiLoggerError, LogSpecBuilder, Logger, LoggerHandle};
use log::{info, LevelFilter};
use thiserror::Error;

use rennstrecke_argumente::{Argumente, AusgabeArgument, ModusArgument};
use rennstrecke_kachel::{
    art::{KachelTyp, Richtung},
    spezifikation::{KachelSpezifikation, Optionen},
    Geometrie, Kachel,
};
use rennstrecke_strecke::{
    aufbau::{baue_strecke, StreckenStart},
    austausch::{als_json, aus_json, parse_kacheln, StreckeFehler},
    liste::{baue_liste, ListenOptionen},
    PositionierteKachel,
};
use rennstrecke_typen::Position;

/// Ein Oval aus zwei Geraden und vier Kurven.
const OVAL: &str = "straight-tile:right:1,curved-tile:right:1,curved-tile:right:1,\
                    straight-tile:right:1,curved-tile:right:1,curved-tile:right:1";

/// Bei der [`Ausführung`](ausführen) potentiell auftretende Fehler.
#[derive(Debug, Error)]
enum Fehler {
    /// Ein Fehler beim starten des Loggers.
    #[error("Fehler beim Starten des Loggers: {0}")]
    FlexiLogger(#[from] FlexiLoggerError),
    /// Ein Fehler beim Lesen der Kachel-Datei.
    #[error("Fehler beim Lesen der Datei: {0}")]
    Io(#[from] io::Error),
    /// Ungültige Kacheln.
    #[error(transparent)]
    Strecke(#[from] StreckeFehler),
}

/// Starte den Logger, abhängig von den Kommandozeilen-Argumenten.
fn start_logger(verbose: bool, log_datei: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut log_spec_builder = LogSpecBuilder::new();
    let _ = log_spec_builder.default(LevelFilter::Error).module("rennstrecke", log_level);
    let log_spec = log_spec_builder.finalize();
    let logger_base = Logger::with(log_spec);
    let logger = if log_datei {
        logger_base
            .log_to_file(FileSpec::default().directory("log"))
            .duplicate_to_stderr(Duplicate::All)
    } else {
        logger_base.log_to_stderr()
    };
    logger.start()
}

/// Die gemeinsame Spezifikation aller Kacheln.
fn spezifikation(argumente: &Argumente) -> Arc<KachelSpezifikation> {
    Arc::new(KachelSpezifikation::aus_optionen(Optionen {
        spurbreite: argumente.spurbreite,
        barriere_breite: argumente.barriere_breite,
        barriere_segmente: argumente.barriere_segmente,
        max_verhältnis: argumente.max_verhältnis,
        verhältnis_entsperrt: argumente.entsperrt,
    }))
}

/// Lese die Kacheln aus Datei oder Kommandozeile.
fn lade_kacheln(
    argumente: &Argumente,
    spezifikation: &Arc<KachelSpezifikation>,
) -> Result<Vec<Kachel>, Fehler> {
    if argumente.modus == ModusArgument::Palette {
        let palette = KachelTyp::alle()
            .flat_map(|typ| {
                enum_iterator::all::<Richtung>()
                    .map(move |richtung| Kachel::neu(spezifikation.clone(), typ, richtung, 1.))
            })
            .collect();
        return Ok(palette);
    }
    let kacheln = if let Some(pfad) = &argumente.datei {
        info!("Lade Kacheln aus {pfad}.");
        aus_json(spezifikation, &fs::read_to_string(pfad)?)?
    } else {
        parse_kacheln(spezifikation, argumente.kacheln.as_deref().unwrap_or(OVAL))?
    };
    Ok(kacheln)
}

/// Eine Zeile der Text-Ausgabe für eine [`PositionierteKachel`].
fn beschreibe(PositionierteKachel { id, position, kachel }: &PositionierteKachel) -> String {
    let Position { punkt, winkel } = position;
    let ausgang = kachel.ausgangs_position(position);
    format!(
        "{id:>3} {:<22} {:<5} {:>5}  ({}, {}) {winkel} -> ({}, {}) {}",
        kachel.typ().als_str(),
        kachel.richtung().als_str(),
        kachel.verhältnis(),
        punkt.x,
        punkt.y,
        ausgang.punkt.x,
        ausgang.punkt.y,
        ausgang.winkel,
    )
}

/// Berechne die Anordnung der Kacheln und erzeuge die Ausgabe.
fn ausgabe(argumente: &Argumente, kacheln: &[Kachel]) -> Result<Vec<String>, Fehler> {
    if argumente.ausgabe == AusgabeArgument::Json {
        return Ok(vec![als_json(kacheln)?]);
    }
    let mut zeilen = Vec::new();
    if argumente.modus == ModusArgument::Strecke {
        let start = StreckenStart { x: argumente.x, y: argumente.y, winkel: argumente.winkel };
        let strecke = baue_strecke(kacheln, start);
        zeilen.push(format!(
            "Strecke: ({}, {}) {}x{}",
            strecke.x, strecke.y, strecke.breite, strecke.höhe
        ));
        zeilen.extend(strecke.kacheln.iter().map(beschreibe));
        zeilen.extend(
            strecke.statistik.iter().map(|(modell_id, anzahl)| format!("{anzahl:>3}x {modell_id}")),
        );
    } else {
        let optionen = ListenOptionen {
            start_x: argumente.x,
            start_y: argumente.y,
            kachel_winkel: argumente.winkel,
            h_abstand: argumente.abstand,
            v_abstand: argumente.abstand,
            zentriert: true,
            ..ListenOptionen::default()
        };
        let liste = baue_liste(kacheln, optionen);
        zeilen.push(format!("Liste: ({}, {}) {}x{}", liste.x, liste.y, liste.breite, liste.höhe));
        zeilen.extend(liste.kacheln.iter().map(beschreibe));
    }
    Ok(zeilen)
}

/// Führe das Programm mit den übergebenen Kommandozeilen-Argumenten aus.
fn ausführen(argumente: &Argumente) -> Result<(), Fehler> {
    let _logger_handle = start_logger(argumente.verbose, argumente.log_datei)?;
    let spezifikation = spezifikation(argumente);
    let kacheln = lade_kacheln(argumente, &spezifikation)?;
    info!("{} Kacheln im Modus {}.", kacheln.len(), argumente.modus);
    for zeile in ausgabe(argumente, &kacheln)? {
        #[allow(clippy::print_stdout)]
        {
            println!("{zeile}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let argumente = Argumente::parse_aus_env_einzelnes_als_kacheln();
    match ausführen(&argumente) {
        Ok(()) => ExitCode::SUCCESS,
        Err(fehler) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("{fehler}");
            }
            ExitCode::FAILURE
        },
    }
}
