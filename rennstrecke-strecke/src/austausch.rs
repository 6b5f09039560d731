//! Austauschformat einer Strecke: eine geordnete Liste von [`KachelExport`].

use std::sync::Arc;

use thiserror::Error;

use rennstrecke_kachel::{
    art::{KachelExport, KachelFehler},
    erstelle_kachel,
    spezifikation::KachelSpezifikation,
    Geometrie, Kachel,
};

/// Fehler beim Einlesen einer Strecke.
#[derive(Debug, Error)]
pub enum StreckeFehler {
    /// Eine Kachel konnte nicht erzeugt werden.
    #[error(transparent)]
    Kachel(#[from] KachelFehler),
    /// Ein Eintrag hat nicht die Form `typ:richtung:verhältnis`.
    #[error("Ungültiger Eintrag \"{0}\", erwartet \"typ:richtung:verhältnis\"!")]
    UngültigerEintrag(String),
    /// Das Größenverhältnis ist keine Zahl.
    #[error("Ungültiges Verhältnis \"{0}\"!")]
    UngültigesVerhältnis(String),
    /// Fehler beim (De-)Serialisieren als JSON.
    #[error("Fehler im JSON-Format: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exportiere alle Kacheln in Reihenfolge.
#[must_use]
pub fn exportiere_strecke(kacheln: &[Kachel]) -> Vec<KachelExport> {
    kacheln.iter().map(Geometrie::exportiere).collect()
}

/// Erzeuge die Kacheln einer exportierten Strecke.
#[must_use]
pub fn importiere_strecke(
    spezifikation: &Arc<KachelSpezifikation>,
    exporte: &[KachelExport],
) -> Vec<Kachel> {
    exporte.iter().map(|export| Kachel::importiere(spezifikation.clone(), *export)).collect()
}

/// Exportiere alle Kacheln als JSON-Array.
///
/// ## Errors
///
/// Fehler beim Serialisieren.
pub fn als_json(kacheln: &[Kachel]) -> Result<String, StreckeFehler> {
    Ok(serde_json::to_string(&exportiere_strecke(kacheln))?)
}

/// Lese die Kacheln einer Strecke aus einem JSON-Array.
///
/// ## Errors
///
/// Wenn `json` kein gültiges Array von Kacheln ist.
pub fn aus_json(
    spezifikation: &Arc<KachelSpezifikation>,
    json: &str,
) -> Result<Vec<Kachel>, StreckeFehler> {
    let exporte: Vec<KachelExport> = serde_json::from_str(json)?;
    Ok(importiere_strecke(spezifikation, &exporte))
}

/// Parse eine kommaseparierte Liste von Kacheln der Form `typ:richtung:verhältnis`,
/// z.B. `straight-tile:right:1,curved-tile:left:1`.
///
/// Leere Einträge werden ignoriert.
///
/// ## Errors
///
/// Wenn ein Eintrag nicht die erwartete Form hat, oder Typ bzw. Richtung unbekannt sind.
pub fn parse_kacheln(
    spezifikation: &Arc<KachelSpezifikation>,
    text: &str,
) -> Result<Vec<Kachel>, StreckeFehler> {
    text.split(',')
        .map(str::trim)
        .filter(|eintrag| !eintrag.is_empty())
        .map(|eintrag| {
            let teile: Vec<_> = eintrag.split(':').map(str::trim).collect();
            let [typ, richtung, verhältnis] = teile.as_slice() else {
                return Err(StreckeFehler::UngültigerEintrag(eintrag.to_owned()));
            };
            let verhältnis = verhältnis
                .parse::<f64>()
                .map_err(|_fehler| StreckeFehler::UngültigesVerhältnis((*verhältnis).to_owned()))?;
            Ok(erstelle_kachel(spezifikation.clone(), typ, richtung, verhältnis)?)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use rennstrecke_kachel::art::{KachelTyp, Richtung};
    use rennstrecke_test_util::{expect_eq, expect_true, Expectation};
    use rennstrecke_typen::skalar::Skalar;

    use super::*;

    fn spezifikation() -> Arc<KachelSpezifikation> {
        Arc::new(KachelSpezifikation::neu(Skalar(80.), Skalar(5.), 4., 3.))
    }

    fn strecke() -> Vec<Kachel> {
        let spezifikation = spezifikation();
        vec![
            Kachel::neu(spezifikation.clone(), KachelTyp::Gerade, Richtung::Rechts, 0.5),
            Kachel::neu(spezifikation.clone(), KachelTyp::Kurve, Richtung::Links, 2.),
            Kachel::neu(spezifikation, KachelTyp::ErweiterteKurve, Richtung::Rechts, 3.),
        ]
    }

    #[test]
    fn import_nach_export() -> Result<(), Expectation> {
        let kacheln = strecke();
        let importiert = importiere_strecke(&spezifikation(), &exportiere_strecke(&kacheln));
        expect_eq(importiert, kacheln)?;
        Ok(())
    }

    #[test]
    fn json_format() -> Result<(), Expectation> {
        let kacheln = strecke();
        let json = als_json(&kacheln).expect("Serialisieren schlägt nicht fehl.");
        let erste_kachel = r#"[{"type":"straight-tile","direction":"right","ratio":0.5}"#;
        expect_true(json.starts_with(erste_kachel))?;
        let gelesen = aus_json(&spezifikation(), &json).expect("Gültiges JSON.");
        expect_eq(exportiere_strecke(&gelesen), exportiere_strecke(&kacheln))?;
        expect_true(matches!(aus_json(&spezifikation(), "{}"), Err(StreckeFehler::Json(_))))?;
        Ok(())
    }

    #[test]
    fn text_darstellung() -> Result<(), Expectation> {
        let kacheln = parse_kacheln(
            &spezifikation(),
            "straight-tile:right:0.5, curved-tile:left:2,,curved-tile-enlarged:right:3",
        )
        .expect("Gültige Kachel-Liste.");
        expect_eq(exportiere_strecke(&kacheln), exportiere_strecke(&strecke()))?;
        expect_true(matches!(
            parse_kacheln(&spezifikation(), "curved-tile:left"),
            Err(StreckeFehler::UngültigerEintrag(_))
        ))?;
        expect_true(matches!(
            parse_kacheln(&spezifikation(), "curved-tile:left:groß"),
            Err(StreckeFehler::UngültigesVerhältnis(_))
        ))?;
        expect_true(matches!(
            parse_kacheln(&spezifikation(), "curved-tile:up:1"),
            Err(StreckeFehler::Kachel(KachelFehler::UnbekannteRichtung(_)))
        ))?;
        Ok(())
    }
}
