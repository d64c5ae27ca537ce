// src/noyau/format.rs

/// Affichage d’un résultat : au plus `decimales` chiffres après la virgule,
/// zéros finaux retirés ("2.50000" -> "2.5", "9.000" -> "9"), jamais de "-0".
pub fn format_resultat(v: f64, decimales: usize) -> String {
    let mut s = format!("{v:.decimales$}");

    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // -0.0 ou un petit négatif arrondi à zéro
    if s == "-0" {
        s.remove(0);
    }

    s
}
