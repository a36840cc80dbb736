// src/noyau/lecture.rs
//
// Lecture numérique de l’affichage.
//
// Règle : on lit le plus long préfixe numérique valide
//   [signe] chiffres [. chiffres] [e [signe] chiffres]
// ou « Infinity ». Sans préfixe valide : NaN.
// Ainsi "5." -> 5, "1e+" -> 1, "Infinit" -> NaN, "-" -> NaN.

const INFINI: &str = "Infinity";

/// Valeur numérique du texte affiché (jamais d’échec : NaN au pire).
pub fn valeur_numerique(texte: &str) -> f64 {
    let s = texte.trim_start();

    let (negatif, reste) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let v = if reste.starts_with(INFINI) {
        f64::INFINITY
    } else {
        let fin = longueur_prefixe(reste);
        // Le préfixe respecte la grammaire de f64::from_str.
        reste[..fin].parse::<f64>().unwrap_or(f64::NAN)
    };

    if negatif {
        -v
    } else {
        v
    }
}

/// Longueur (en octets) du préfixe numérique de `s`, 0 si aucun chiffre.
fn longueur_prefixe(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;

    let chiffres = |i: &mut usize| {
        let debut = *i;
        while *i < b.len() && b[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - debut
    };

    let mut n = chiffres(&mut i);
    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        let apres = chiffres(&mut j);
        if n + apres > 0 {
            i = j;
            n += apres;
        }
    }
    if n == 0 {
        return 0;
    }

    // Exposant : seulement s’il porte au moins un chiffre.
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        if chiffres(&mut j) > 0 {
            i = j;
        }
    }

    i
}
