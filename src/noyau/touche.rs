// src/noyau/touche.rs
//
// Vocabulaire des touches : ce que la vue envoie au moteur.

use thiserror::Error;

use super::chiffre::Chiffre;
use super::operateur::Operateur;

/// Erreurs de conversion à la frontière (caractère / nombre -> touche).
/// Le moteur lui-même ne peut pas échouer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurTouche {
    #[error("chiffre hors borne: {0} (attendu 0..=9)")]
    ChiffreHorsBorne(u8),

    #[error("caractère inconnu: {0:?}")]
    CaractereInconnu(char),

    #[error("opérateur inconnu: {0:?}")]
    OperateurInconnu(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(Chiffre),
    Point,
    Operateur(Operateur),
    Egal,
    /// Remise à zéro complète.
    Effacer,
    /// Retire le dernier caractère de l’affichage.
    Retour,
}

impl Touche {
    /// Texte du bouton.
    pub fn etiquette(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Point => ".".to_string(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Effacer => "Clear".to_string(),
            Touche::Retour => "DEL".to_string(),
        }
    }
}

impl From<Chiffre> for Touche {
    fn from(c: Chiffre) -> Self {
        Touche::Chiffre(c)
    }
}

impl From<Operateur> for Touche {
    fn from(op: Operateur) -> Self {
        Touche::Operateur(op)
    }
}

impl TryFrom<char> for Touche {
    type Error = ErreurTouche;

    /// `0-9 . + - × * ÷ / = C ⌫`
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'..='9' => Chiffre::try_from(c).map(Touche::Chiffre),
            '.' => Ok(Touche::Point),
            '=' => Ok(Touche::Egal),
            'C' => Ok(Touche::Effacer),
            '⌫' => Ok(Touche::Retour),
            '+' | '-' | '−' | '×' | '*' | '÷' | '/' => {
                let mut tampon = [0u8; 4];
                c.encode_utf8(&mut tampon)
                    .parse::<Operateur>()
                    .map(Touche::Operateur)
            }
            autre => Err(ErreurTouche::CaractereInconnu(autre)),
        }
    }
}

/// Convertit une suite de caractères en touches (scénarios de test).
#[cfg(test)]
pub fn touches_depuis(texte: &str) -> Result<Vec<Touche>, ErreurTouche> {
    texte
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Touche::try_from)
        .collect()
}
