//! Erreurs typées du noyau.
//!
//! Toutes structurelles : elles invalident l’expression courante seulement,
//! le shell affiche le message et continue. Les soucis de domaine flottant
//! (sqrt négatif, /0) ne sont PAS des erreurs : NaN / ±inf.

use thiserror::Error;

/// Échec de la conversion infixe -> postfixe.
///
/// `position` = index (octets) du caractère fautif dans l’entrée.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("caractère inattendu '{caractere}' (position {position})")]
    InvalidCharacter { caractere: char, position: usize },

    #[error("parenthèse non appariée (position {position})")]
    UnbalancedParen { position: usize },

    #[error("fonction inconnue '{nom}' (position {position})")]
    UnknownFunction { nom: String, position: usize },

    #[error("nombre invalide '{texte}' (position {position})")]
    InvalidNumber { texte: String, position: usize },
}

/// Échec de l’évaluation d’une séquence postfixée.
///
/// `index` = rang du jeton fautif dans la séquence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("opérandes manquants pour '{jeton}' (jeton {index})")]
    StackUnderflow { jeton: String, index: usize },

    #[error("expression invalide : {restants} valeur(s) restante(s) au lieu d’une")]
    MalformedExpression { restants: usize },

    #[error("nombre invalide '{texte}' (jeton {index})")]
    InvalidNumber { texte: String, index: usize },
}

/// Erreur du pipeline complet (conversion puis évaluation).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
