//! src/app/etat.rs
//!
//! État UI : un moteur + les réglages d’écran.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Moteur::appuyer`.
//! - Les deux lignes d’écran sont recalculées à chaque frame depuis le moteur.

use crate::noyau::format::{ecran_principal, ligne_en_attente};
use crate::noyau::{ConfigAffichage, Moteur, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,
    config: ConfigAffichage,
}

impl AppCalc {
    /// Transmet une touche du pavé au moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.appuyer(touche);
    }

    /// Grande ligne : l’affichage, en exponentielle s’il dépasse `longueur_max`.
    pub fn ecran_principal(&self) -> String {
        ecran_principal(self.moteur.affichage(), &self.config)
    }

    /// Petite ligne au-dessus : "12 ×" si une opération attend, sinon vide.
    pub fn ecran_secondaire(&self) -> String {
        match (
            self.moteur.operande_en_attente(),
            self.moteur.operateur_en_attente(),
        ) {
            (Some(operande), Some(operateur)) => ligne_en_attente(operande, operateur),
            _ => String::new(),
        }
    }
}
