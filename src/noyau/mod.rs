//! Noyau de la calculatrice (sans egui)
//!
//! Organisation interne :
//! - chiffre.rs   : chiffre 0..=9 garanti par construction
//! - operateur.rs : + - × ÷ et leur application IEEE-754
//! - touche.rs    : vocabulaire des touches + erreurs de conversion
//! - lecture.rs   : texte affiché -> nombre (préfixe numérique)
//! - format.rs    : nombre -> texte, écran principal, ligne en attente
//! - moteur.rs    : machine à états (affichage, opérande, opérateur)

pub mod chiffre;
pub mod format;
pub mod lecture;
pub mod moteur;
pub mod operateur;
pub mod touche;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use format::ConfigAffichage;
pub use moteur::Moteur;
pub use touche::Touche;
