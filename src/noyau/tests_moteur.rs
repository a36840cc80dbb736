//! Tests scénarios : suites de touches complètes, comme au pavé.
//!
//! Chaque scénario part d’un moteur remis à zéro (touche C) et vérifie
//! l’écran final. Les suites sont écrites avec les symboles du pavé.

use super::moteur::{Etat, Moteur};
use super::operateur::Operateur;
use super::touche::{touches_depuis, Touche};

fn taper(m: &mut Moteur, suite: &str) {
    let touches = touches_depuis(suite).unwrap_or_else(|e| panic!("suite={suite:?} err={e}"));
    for t in touches {
        m.appuyer(t);
    }
}

fn ecran_apres(suite: &str) -> String {
    let mut m = Moteur::default();
    taper(&mut m, suite);
    m.affichage().to_string()
}

fn assert_ecran(suite: &str, attendu: &str) {
    assert_eq!(ecran_apres(suite), attendu, "suite={suite:?}");
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn addition_simple() {
    assert_ecran("C 5 + 3 =", "8");
}

#[test]
fn decimal_fois_entier() {
    assert_ecran("C 2 . 5 × 4 =", "10");
}

#[test]
fn chaine_sans_priorite() {
    // (1+2)×3, pas 1+(2×3)
    assert_ecran("C 1 + 2 × 3 =", "9");
    assert_ecran("C 2 + 3 × 4 =", "20");
}

#[test]
fn chaine_affiche_le_resultat_intermediaire() {
    let mut m = Moteur::default();
    taper(&mut m, "C 1 + 2 ×");
    assert_eq!(m.affichage(), "3");
    assert_eq!(m.operande_en_attente(), Some(3.0));
    assert_eq!(m.operateur_en_attente(), Some(Operateur::Multiplication));
}

#[test]
fn retour_arriere_jusqu_a_zero() {
    assert_ecran("C 9 ⌫ ⌫", "0");
    assert_ecran("C 1 2 3 ⌫", "12");
    assert_ecran("C ⌫", "0");
}

#[test]
fn division_par_zero() {
    assert_ecran("C 7 ÷ 0 =", "Infinity");
    assert_ecran("C 0 ÷ 0 =", "NaN");
    assert_ecran("C 0 - 7 = ÷ 0 =", "-Infinity");
}

#[test]
fn un_seul_point() {
    assert_ecran("C . .", "0.");
    assert_ecran("C 3 . . 1", "3.1");
    assert_ecran("C 3 . 1 .", "3.1");
}

/* ------------------------ Comportements conservés ------------------------ */

#[test]
fn deux_operateurs_de_suite_resolvent_contre_l_affichage() {
    // "2 +" puis "×" : 2+2 = 4 avant de passer à ×
    let mut m = Moteur::default();
    taper(&mut m, "2 + ×");
    assert_eq!(m.affichage(), "4");
    assert_eq!(
        m.etat(),
        Etat::OperateurEnAttente {
            operande: 4.0,
            operateur: Operateur::Multiplication
        }
    );
}

#[test]
fn egal_sans_second_nombre_reutilise_l_affichage() {
    assert_ecran("6 × =", "36");
}

#[test]
fn egal_repete_sans_effet() {
    assert_ecran("5 + 3 = = =", "8");
}

#[test]
fn chiffre_apres_egal_repart() {
    let mut m = Moteur::default();
    taper(&mut m, "5 + 3 =");
    assert_eq!(m.etat(), Etat::Saisie);
    assert!(m.attend_saisie_neuve());
    taper(&mut m, "4");
    assert_eq!(m.affichage(), "4");
}

#[test]
fn resultat_reutilise_comme_operande() {
    assert_ecran("5 + 3 = × 2 =", "16");
}

#[test]
fn retour_arriere_garde_saisie_neuve() {
    // Le retour arrière n’annule pas la saisie neuve : le chiffre suivant remplace.
    let mut m = Moteur::default();
    taper(&mut m, "1 2 + ⌫");
    assert_eq!(m.affichage(), "1");
    assert!(m.attend_saisie_neuve());
    taper(&mut m, "7 =");
    assert_eq!(m.affichage(), "19");
}

#[test]
fn retour_arriere_sur_resultat_special() {
    // "Infinity" -> "Infinit" se relit NaN
    assert_ecran("7 ÷ 0 = ⌫ + 1 =", "NaN");
}

#[test]
fn operande_nan_se_propage_dans_la_chaine() {
    // 0 ÷ 0 laisse NaN en attente ; il n’est pas remplacé par 0
    let mut m = Moteur::default();
    taper(&mut m, "0 ÷ 0 +");
    assert!(m.operande_en_attente().is_some_and(f64::is_nan));
    taper(&mut m, "5 -");
    assert_eq!(m.affichage(), "NaN");
}

#[test]
fn flottants_non_arrondis() {
    assert_ecran(". 1 + . 2 =", "0.30000000000000004");
}

#[test]
fn soustraction_negative() {
    assert_ecran("3 - 5 =", "-2");
    assert_ecran("3 - 5 = × 2 =", "-4");
}

#[test]
fn grand_resultat_en_exponentielle() {
    // 10^21 : la forme textuelle bascule en notation exponentielle
    let mut m = Moteur::default();
    taper(&mut m, "1 0 0 0 0 0 0 0 0 0 0 ×");
    taper(&mut m, "1 0 0 0 0 0 0 0 0 0 0 0 =");
    assert_eq!(m.affichage(), "1e+21");
    // et se relit comme nombre
    taper(&mut m, "+ 1 =");
    assert_eq!(m.affichage(), "1e+21");
}

/* ------------------------ Remise à zéro ------------------------ */

#[test]
fn effacer_revient_a_l_etat_initial() {
    for suite in ["", "5 + 3", "7 ÷ 0 =", "1 . 5 ×", "2 + × 9 ⌫", "C"] {
        let mut m = Moteur::default();
        taper(&mut m, suite);
        m.appuyer(Touche::Effacer);
        assert_eq!(m, Moteur::default(), "suite={suite:?}");
    }
}
