// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : ligne « en attente » au-dessus, affichage principal dessous, alignés à droite
// - Pavé 5×4 : Clear et 0 occupent deux colonnes
// - Pas de raccourcis clavier : uniquement les boutons

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Touche;

/// Titre affiché en haut du widget.
const TITRE_VUE: &str = "Calculatrice";

/// Taille d’un bouton d’une colonne.
const BOUTON: [f32; 2] = [64.0, 52.0];

const ESPACEMENT: f32 = 8.0;

/// Pavé ligne par ligne : (caractère de la touche, colonnes occupées).
const PAVE: [&[(char, usize)]; 5] = [
    &[('C', 2), ('⌫', 1), ('÷', 1)],
    &[('7', 1), ('8', 1), ('9', 1), ('×', 1)],
    &[('4', 1), ('5', 1), ('6', 1), ('-', 1)],
    &[('1', 1), ('2', 1), ('3', 1), ('+', 1)],
    &[('0', 2), ('.', 1), ('=', 1)],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        ui.vertical_centered(|ui| {
            ui.heading(TITRE_VUE);
        });
        ui.add_space(10.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let largeur = Self::largeur(4);

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_width(largeur);
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne vide gardée : l’écran ne saute pas quand elle apparaît.
                    let secondaire = self.ecran_secondaire();
                    let ligne = if secondaire.is_empty() {
                        " "
                    } else {
                        secondaire.as_str()
                    };
                    ui.label(egui::RichText::new(ligne).size(14.0).weak());
                    ui.label(
                        egui::RichText::new(self.ecran_principal())
                            .size(34.0)
                            .monospace(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        for ligne in PAVE {
            ui.horizontal(|ui| {
                for &(c, colonnes) in ligne {
                    self.bouton(ui, c, colonnes);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, c: char, colonnes: usize) {
        let touche = match Touche::try_from(c) {
            Ok(t) => t,
            Err(e) => {
                // Pavé mal écrit : on garde la place vide plutôt que de paniquer.
                tracing::warn!(%e, "touche du pavé ignorée");
                ui.add_space(Self::largeur(colonnes) + ESPACEMENT);
                return;
            }
        };

        let texte = egui::RichText::new(touche.etiquette()).size(20.0);
        let resp = ui.add_sized([Self::largeur(colonnes), BOUTON[1]], egui::Button::new(texte));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    /// Largeur de `colonnes` boutons, espacements intérieurs compris.
    fn largeur(colonnes: usize) -> f32 {
        let n = colonnes as f32;
        n * BOUTON[0] + (n - 1.0).max(0.0) * ESPACEMENT
    }
}
