// src/noyau/operateur.rs

use std::fmt;
use std::str::FromStr;

use super::touche::ErreurTouche;

/// Les quatre opérations binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    #[cfg(test)]
    pub const TOUS: [Operateur; 4] = [
        Operateur::Addition,
        Operateur::Soustraction,
        Operateur::Multiplication,
        Operateur::Division,
    ];

    /// Symbole affiché sur la ligne « en attente ».
    pub const fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }

    /// a (op) b en flottant IEEE-754.
    /// Division par zéro : ±Infinity ou NaN, volontairement non interceptés.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Addition => a + b,
            Operateur::Soustraction => a - b,
            Operateur::Multiplication => a * b,
            Operateur::Division => a / b,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operateur {
    type Err = ErreurTouche;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operateur::Addition),
            "-" | "−" => Ok(Operateur::Soustraction),
            "×" | "*" => Ok(Operateur::Multiplication),
            "÷" | "/" => Ok(Operateur::Division),
            autre => Err(ErreurTouche::OperateurInconnu(autre.to_string())),
        }
    }
}
