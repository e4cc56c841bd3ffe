//! Noyau flottant
//!
//! Organisation interne :
//! - jetons.rs   : modèle des jetons + prédicats + précédences
//! - rpn.rs      : shunting-yard (infixe -> postfixe)
//! - eval.rs     : pile d’opérandes + pipeline complet
//! - erreurs.rs  : erreurs typées (conversion / évaluation)
//! - format.rs   : affichage résultat + démarche

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique
pub use erreurs::{CalcError, EvalError, ParseError};
pub use eval::{eval_expression, evaluate, solve, Evaluation};
pub use jetons::{Fonction, Jeton, Operateur};
pub use rpn::convert_to_postfix;
