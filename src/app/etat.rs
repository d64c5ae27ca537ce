//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, décimales, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur le nombre de décimales affichées.

use calculatrice_rpn::noyau::eval::DemarcheNoyau;

/// Décimales affichées par défaut.
pub const DECIMALES_DEFAUT: usize = 10;

/// Au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 15;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat formaté
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: DemarcheNoyau,

    // --- paramètres ---
    pub decimales: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: DemarcheNoyau::default(),
            decimales: DECIMALES_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + décimales par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// Placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute ;
    /// la démarche, elle, ne correspond plus à rien.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// Déposer un résultat complet (valeur formatée + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: DemarcheNoyau) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        self.focus_entree = true;
    }
}
