// src/noyau/format.rs

use super::lecture::valeur_numerique;
use super::operateur::Operateur;

/// Au-delà de cette longueur, l’écran passe en notation exponentielle.
const LONGUEUR_MAX_DEFAUT: usize = 12;

/// Chiffres après la virgule en notation exponentielle.
const CHIFFRES_EXP_DEFAUT: usize = 6;

/// Bornes de la notation décimale « ordinaire » pour `texte_nombre`.
const SEUIL_GRAND: f64 = 1e21;
const SEUIL_PETIT: f64 = 1e-6;

/// Un f64 a au plus 767 chiffres significatifs exacts.
const CHIFFRES_EXACTS: usize = 800;

/// Réglages d’affichage (présentation uniquement, le moteur les ignore).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigAffichage {
    pub longueur_max: usize,
    pub chiffres_exponentielle: usize,
}

impl Default for ConfigAffichage {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX_DEFAUT,
            chiffres_exponentielle: CHIFFRES_EXP_DEFAUT,
        }
    }
}

/* ------------------------ Nombre -> texte ------------------------ */

/// Forme textuelle d’un résultat :
/// - décimal le plus court qui relit la même valeur
/// - exponentielle si |v| >= 1e21 ou 0 < |v| < 1e-6 (ex: 1e+21, 1.5e-7)
/// - Infinity / -Infinity / NaN
/// - -0 s’écrit 0
pub fn texte_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    if abs >= SEUIL_GRAND || abs < SEUIL_PETIT {
        signer_exposant(format!("{v:e}"))
    } else {
        format!("{v}")
    }
}

/// Notation exponentielle à `chiffres` décimales : 1.234568e+12.
///
/// Arrondi au plus proche, égalité vers le haut (en valeur absolue) :
/// 1000000500000 -> 1.000001e+12. `{:.6e}` arrondirait au pair.
pub fn exponentielle(v: f64, chiffres: usize) -> String {
    if !v.is_finite() {
        return texte_nombre(v);
    }

    // Développement décimal exact de |v| : la garde décide seule de l’arrondi.
    let precision = chiffres.max(CHIFFRES_EXACTS);
    let exact = format!("{:.precision$e}", v.abs());
    let Some((mantisse, exposant)) = exact.split_once('e') else {
        return signer_exposant(format!("{v:.chiffres$e}"));
    };
    let mut exposant: i32 = exposant.parse().unwrap_or(0);

    let mut ch: Vec<u8> = mantisse.bytes().filter(u8::is_ascii_digit).collect();
    let garde = ch.get(chiffres + 1).copied().unwrap_or(b'0');
    ch.truncate(chiffres + 1);

    if garde >= b'5' && retenue(&mut ch) {
        // 9.999999|5 -> 10.000000 : on renormalise
        ch.insert(0, b'1');
        ch.pop();
        exposant += 1;
    }

    let mut s = String::with_capacity(chiffres + 8);
    if v < 0.0 {
        s.push('-');
    }
    s.push(char::from(ch[0]));
    if chiffres > 0 {
        s.push('.');
        s.extend(ch[1..].iter().map(|&c| char::from(c)));
    }
    let signe = if exposant < 0 { '-' } else { '+' };
    s.push_str(&format!("e{signe}{}", exposant.unsigned_abs()));
    s
}

/// +1 sur le dernier chiffre ASCII ; true si la retenue déborde à gauche.
fn retenue(ch: &mut [u8]) -> bool {
    for c in ch.iter_mut().rev() {
        if *c == b'9' {
            *c = b'0';
        } else {
            *c += 1;
            return false;
        }
    }
    true
}

/// "1.5e21" -> "1.5e+21" (Rust n’écrit pas le signe positif).
fn signer_exposant(mut s: String) -> String {
    if let Some(pos) = s.find('e') {
        if !s[pos + 1..].starts_with('-') {
            s.insert(pos + 1, '+');
        }
    }
    s
}

/* ------------------------ Écran ------------------------ */

/// Ligne principale : l’affichage tel quel, ou sa valeur en exponentielle s’il est trop long.
pub fn ecran_principal(affichage: &str, cfg: &ConfigAffichage) -> String {
    if affichage.chars().count() > cfg.longueur_max {
        exponentielle(valeur_numerique(affichage), cfg.chiffres_exponentielle)
    } else {
        affichage.to_string()
    }
}

/// Ligne au-dessus de l’écran : "12 ×".
pub fn ligne_en_attente(operande: f64, operateur: Operateur) -> String {
    format!("{} {}", texte_nombre(operande), operateur.symbole())
}
