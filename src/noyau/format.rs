// src/noyau/format.rs

use super::jetons::Jeton;

/// Séquence postfixée en texte (démarche) : jetons séparés par des espaces.
pub fn format_postfix(jetons: &[Jeton<'_>]) -> String {
    jetons
        .iter()
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Résultat en texte, `digits` décimales au plus (zéros finaux retirés).
///
/// Les valeurs non finies restent des valeurs : "NaN", "inf", "-inf".
pub fn format_resultat(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let mut s = format!("{x:.digits$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // "-0" n’apporte rien à l’affichage
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
