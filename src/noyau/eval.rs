//! Noyau — évaluation (pipeline réel)
//!
//! texte -> RPN (shunting-yard) -> pile d’opérandes -> f64 -> affichage
//!
//! Les soucis de domaine flottant (sqrt négatif, /0) ressortent en NaN / ±inf,
//! pas en erreur.

use log::debug;

use super::erreurs::{CalcError, EvalError};
use super::format::{format_postfix, format_resultat};
use super::jetons::Jeton;
use super::rpn::convert_to_postfix;

/// Évalue une séquence postfixée.
///
/// - Nombre   : empilé
/// - Fonction : dépile 1 opérande, empile f(x)
/// - Opérateur: dépile droite PUIS gauche, empile `gauche OP droite`
///
/// La pile doit contenir exactement une valeur à la fin.
pub fn evaluate(jetons: &[Jeton<'_>]) -> Result<f64, EvalError> {
    let mut pile: Vec<f64> = Vec::with_capacity(jetons.len());

    for (index, jeton) in jetons.iter().enumerate() {
        match *jeton {
            Jeton::Nombre(texte) => {
                let v = texte.parse::<f64>().map_err(|_| EvalError::InvalidNumber {
                    texte: texte.to_string(),
                    index,
                })?;
                pile.push(v);
            }

            Jeton::Fonction(f) => {
                let x = pile.pop().ok_or_else(|| manque(jeton, index))?;
                pile.push(f.appliquer(x));
            }

            Jeton::Operateur(op) => {
                // ordre inversé : le premier dépilé est l’opérande de droite
                let droite = pile.pop().ok_or_else(|| manque(jeton, index))?;
                let gauche = pile.pop().ok_or_else(|| manque(jeton, index))?;
                pile.push(op.appliquer(gauche, droite));
            }
        }
    }

    match pile.as_slice() {
        [resultat] => Ok(*resultat),
        _ => {
            debug!("eval: {} valeur(s) restante(s)", pile.len());
            Err(EvalError::MalformedExpression {
                restants: pile.len(),
            })
        }
    }
}

fn manque(jeton: &Jeton<'_>, index: usize) -> EvalError {
    debug!("eval: pile vide pour {jeton} (jeton {index})");
    EvalError::StackUnderflow {
        jeton: jeton.to_string(),
        index,
    }
}

/// Conversion puis évaluation ; la première erreur rencontrée est propagée.
pub fn solve(expression: &str) -> Result<f64, CalcError> {
    let rpn = convert_to_postfix(expression)?;
    let resultat = evaluate(&rpn)?;
    debug!("solve: {expression:?} = {resultat}");
    Ok(resultat)
}

/// Résultat complet pour le shell.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    /// Valeur affichable (`digits` décimales au plus).
    pub affichage: String,
    /// Démarche : séquence postfixée en texte.
    pub rpn: String,
}

/// API du shell : évalue une entrée déjà préparée (minuscules, sans blancs).
pub fn eval_expression(entree: &str, digits: usize) -> Result<Evaluation, CalcError> {
    let rpn = convert_to_postfix(entree)?;
    let rpn_txt = format_postfix(&rpn);

    let valeur = evaluate(&rpn)?;

    Ok(Evaluation {
        valeur,
        affichage: format_resultat(valeur, digits),
        rpn: rpn_txt,
    })
}
