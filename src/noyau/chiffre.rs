// src/noyau/chiffre.rs

use std::fmt;

use super::touche::ErreurTouche;

/// Un chiffre décimal 0..=9 (garanti par construction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chiffre(u8);

impl Chiffre {
    pub fn caractere(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Chiffre {
    type Error = ErreurTouche;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        if v <= 9 {
            Ok(Chiffre(v))
        } else {
            Err(ErreurTouche::ChiffreHorsBorne(v))
        }
    }
}

impl TryFrom<char> for Chiffre {
    type Error = ErreurTouche;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        // to_digit(10) accepte uniquement l’ASCII 0-9
        c.to_digit(10)
            .map(|d| Chiffre(d as u8))
            .ok_or(ErreurTouche::CaractereInconnu(c))
    }
}

impl fmt::Display for Chiffre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
