//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice : une machine à états minuscule.
//!
//! Contrats :
//! - Toutes les opérations sont totales (aucune erreur possible).
//! - Évaluation immédiate de gauche à droite, sans priorité :
//!   `1 + 2 × 3 =` donne 9, pas 7.
//! - Un opérateur en attente porte toujours son opérande (voir `Etat`).
//! - Les cas numériques limites (x/0, 0/0) restent des flottants IEEE-754
//!   et s’affichent "Infinity" / "NaN".

use super::chiffre::Chiffre;
use super::format::texte_nombre;
use super::lecture::valeur_numerique;
use super::operateur::Operateur;
use super::touche::Touche;

const AFFICHAGE_INITIAL: &str = "0";

/// Les deux états implicites de la calculatrice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Etat {
    /// Saisie du premier nombre (aucun opérateur choisi).
    #[default]
    Saisie,
    /// Opérateur choisi, saisie du second nombre.
    OperateurEnAttente {
        operande: f64,
        operateur: Operateur,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    affichage: String,
    etat: Etat,
    // true : le prochain chiffre remplace l’affichage
    saisie_neuve: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            etat: Etat::Saisie,
            saisie_neuve: false,
        }
    }
}

impl Moteur {
    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn etat(&self) -> Etat {
        self.etat
    }

    pub fn operande_en_attente(&self) -> Option<f64> {
        match self.etat {
            Etat::OperateurEnAttente { operande, .. } => Some(operande),
            Etat::Saisie => None,
        }
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        match self.etat {
            Etat::OperateurEnAttente { operateur, .. } => Some(operateur),
            Etat::Saisie => None,
        }
    }

    #[cfg(test)]
    pub fn attend_saisie_neuve(&self) -> bool {
        self.saisie_neuve
    }

    /* ------------------------ Touches ------------------------ */

    /// Point d’entrée unique de la vue.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Point => self.saisir_point(),
            Touche::Operateur(op) => self.choisir_operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer_tout(),
            Touche::Retour => self.effacer_dernier(),
        }
        tracing::debug!(
            ?touche,
            affichage = %self.affichage,
            etat = ?self.etat,
            saisie_neuve = self.saisie_neuve,
            "touche"
        );
    }

    pub fn saisir_chiffre(&mut self, c: Chiffre) {
        if self.saisie_neuve {
            self.affichage.clear();
            self.saisie_neuve = false;
        } else if self.affichage == AFFICHAGE_INITIAL {
            // "0" puis "5" => "5", jamais "05"
            self.affichage.clear();
        }
        self.affichage.push(c.caractere());
    }

    /// Au plus un point par nombre.
    pub fn saisir_point(&mut self) {
        if self.saisie_neuve {
            self.affichage = "0.".to_string();
            self.saisie_neuve = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// Retire le dernier caractère ; un affichage vidé revient à "0".
    /// Ne touche pas à `saisie_neuve`.
    pub fn effacer_dernier(&mut self) {
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage.push_str(AFFICHAGE_INITIAL);
        }
    }

    /// Mémorise l’opérateur ; s’il y en avait déjà un, le résout d’abord
    /// contre l’affichage courant (même sans nouvelle saisie : `2 + ×` affiche 4).
    pub fn choisir_operateur(&mut self, op: Operateur) {
        let v = valeur_numerique(&self.affichage);

        let etat = self.etat;
        let operande = match etat {
            Etat::Saisie => v,
            Etat::OperateurEnAttente {
                operande,
                operateur,
            } => self.resoudre(operateur, operande, v),
        };

        self.etat = Etat::OperateurEnAttente {
            operande,
            operateur: op,
        };
        self.saisie_neuve = true;
    }

    /// Sans opérateur en attente : aucun effet.
    pub fn egal(&mut self) {
        if let Etat::OperateurEnAttente {
            operande,
            operateur,
        } = self.etat()
        {
            let v = valeur_numerique(&self.affichage);
            self.resoudre(operateur, operande, v);
            self.etat = Etat::Saisie;
            self.saisie_neuve = true;
        }
    }

    pub fn effacer_tout(&mut self) {
        *self = Self::default();
    }

    /* ------------------------ Interne ------------------------ */

    /// Calcule a (op) b, dépose le résultat à l’affichage et le renvoie.
    fn resoudre(&mut self, op: Operateur, a: f64, b: f64) -> f64 {
        let r = op.appliquer(a, b);
        self.affichage = texte_nombre(r);

        tracing::trace!(a, op = op.symbole(), b, r, "opération résolue");
        if !r.is_finite() {
            tracing::debug!(resultat = %self.affichage, "résultat non fini");
        }
        r
    }
}
