//! Calculatrice RPN
//!
//! Évaluateur d’expressions infixes en flottants :
//! - jetons + pile d’opérateurs (shunting-yard) -> séquence postfixée
//! - pile d’opérandes -> résultat `f64`
//!
//! Le shell interactif (egui) vit dans le binaire ; ici, seulement le noyau.

pub mod noyau;

pub use noyau::{convert_to_postfix, evaluate, solve};
