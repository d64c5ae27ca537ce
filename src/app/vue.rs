// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus) ; Backspace reste celui du TextEdit
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use super::etat::{AppCalc, DECIMALES_MAX};
use calculatrice_rpn::noyau::format::format_resultat;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (1 + 2) * -3, 10 % 4, -(2.5 - 1)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ est focus (pas de déclenchement “global”)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", InsertKind::CloseParen);

            ui.separator();

            for op in ["+", "-", "*", "/", "%"] {
                self.bouton_insert(ui, op, InsertKind::Op);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                self.bouton_insert(ui, "*", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                self.bouton_insert(ui, "-", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, ".", InsertKind::Digit);
                ui.label("");
                self.bouton_insert(ui, "+", InsertKind::Op);
                ui.end_row();
            });
    }

    /// DEL : retire le dernier symbole (et les espaces qui l’entourent).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisé", "demarche_normalise", &self.demarche.normalise);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.insere(label, kind);
        }
    }

    /// Insère un symbole en gérant les espaces : "1 + 2", "(1 + 2)", "3 * (4)".
    fn insere(&mut self, to_insert: &str, kind: InsertKind) {
        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::OpenParen => {
                // "2 (" est refusé (opérateur manquant) ; "2(" ne le serait qu’à l’évaluation
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if let Some(c) = last {
                    if (c.is_ascii_digit() || c == ')') && !self.entree.ends_with(' ') {
                        self.entree.push(' ');
                    }
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() && !self.entree.ends_with('(') {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(to_insert);
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match calculatrice_rpn::noyau::eval_expression(&self.entree) {
            Ok((v, demarche)) => self.set_resultat(format_resultat(v, self.decimales), demarche),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
