//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, digits,
//! démarche, historique) et offrir des opérations simples (C/CLR/AC).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur digits et sur l’historique.

use std::collections::VecDeque;

/// Décimales affichées par défaut.
const DIGITS_DEFAUT: usize = 10;

/// Au-delà, un f64 n’a plus de décimales significatives.
pub const DIGITS_MAX: usize = 17;

/// Lignes d’historique conservées (les plus récentes).
const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub entree: String,
    pub rpn: String,
}

/// Une évaluation réussie (équivalent d’une ligne "Result: ..." du REPL).
#[derive(Clone, Debug)]
pub struct LigneHistorique {
    pub entree: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String, // message d’erreur (si conversion/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique (plus récent en tête) ---
    pub historique: VecDeque<LigneHistorique>,

    // --- paramètres ---
    pub digits: usize,

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
            demarche: Demarche::default(),
            historique: VecDeque::new(),
            digits: DIGITS_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur. Le dernier résultat reste affiché ; la démarche est coupée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Dépose un résultat + démarche, et l’ajoute à l’historique.
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();

        self.historique.push_front(LigneHistorique {
            entree: demarche.entree.clone(),
            resultat: self.resultat.clone(),
        });
        self.historique.truncate(HISTORIQUE_MAX);

        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }
}

/// Prépare l’entrée pour le noyau : blancs retirés, minuscules.
pub fn preparer_entree(brut: &str) -> String {
    brut.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
