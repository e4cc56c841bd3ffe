// src/noyau/rpn.rs
//
// Shunting-yard : expression infixe (texte) -> séquence postfixée (RPN)
//
// Règles:
// - Nombre: chiffres + '.', sorti directement (jamais empilé).
//   Un '-' en tête d’expression ou juste après '(' commence un nombre (moins unaire).
// - Fonction (sin/cos/tan/sqrt): lettres closes par '(' ; empilée, elle sortira
//   après son argument.
// - '(' : barrière sur la pile (précédence 0).
// - ')' : dépile jusqu’à la '(' correspondante, qui est jetée.
// - Opérateur: dépile tant que précédence(sommet) >= précédence(entrant).
//   Le '>=' vaut aussi pour '^' : "2^3^2" = (2^3)^2, choix conservé tel quel.
// - Fin: vide la pile (LIFO). Une '(' restante est une erreur.

use log::{debug, trace};

use super::erreurs::ParseError;
use super::jetons::{
    is_fonction_char, is_moins_unaire, is_nombre_char, Fonction, Jeton, Operateur,
};

/// Élément de la pile d’opérateurs (interne à la conversion).
#[derive(Clone, Copy, Debug)]
enum Empile {
    Operateur(Operateur),
    Fonction(Fonction),
    ParOuvrante { position: usize },
}

impl Empile {
    fn precedence(self) -> u8 {
        match self {
            Empile::Operateur(op) => op.precedence(),
            Empile::Fonction(f) => f.precedence(),
            Empile::ParOuvrante { .. } => 0,
        }
    }

    /// Forme sortie de la pile ; `None` pour une parenthèse.
    fn en_jeton<'a>(self) -> Option<Jeton<'a>> {
        match self {
            Empile::Operateur(op) => Some(Jeton::Operateur(op)),
            Empile::Fonction(f) => Some(Jeton::Fonction(f)),
            Empile::ParOuvrante { .. } => None,
        }
    }
}

fn emettre<'a>(out: &mut Vec<Jeton<'a>>, jeton: Jeton<'a>) {
    trace!("rpn: sortie {jeton}");
    out.push(jeton);
}

/// Convertit une expression infixe en séquence postfixée.
///
/// L’entrée doit déjà être en minuscules et sans blancs (responsabilité de
/// l’appelant). Les jetons `Nombre` empruntent le texte de `expression`.
///
/// Exemple:
///   "sin(2)+3*4"  ->  2 sin 3 4 * +
pub fn convert_to_postfix(expression: &str) -> Result<Vec<Jeton<'_>>, ParseError> {
    let mut out: Vec<Jeton<'_>> = Vec::new();
    let mut ops: Vec<Empile> = Vec::new();

    // Début (octets) du nombre / nom de fonction en cours.
    let mut debut_nombre: Option<usize> = None;
    let mut debut_nom: Option<usize> = None;

    let mut precedent: Option<char> = None;
    let mut chars = expression.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let suivant = chars.peek().map(|&(_, s)| s);

        if is_nombre_char(c) || is_moins_unaire(c, precedent) {
            let debut = *debut_nombre.get_or_insert(i);

            // le nombre se ferme dès que le caractère suivant ne le prolonge pas
            if !suivant.is_some_and(is_nombre_char) {
                let texte = &expression[debut..i + c.len_utf8()];
                if texte.parse::<f64>().is_err() {
                    return Err(ParseError::InvalidNumber {
                        texte: texte.to_string(),
                        position: debut,
                    });
                }
                emettre(&mut out, Jeton::Nombre(texte));
                debut_nombre = None;
            }
        } else if is_fonction_char(c) {
            let debut = *debut_nom.get_or_insert(i);

            match suivant {
                Some('(') => {
                    let nom = &expression[debut..=i];
                    let fonction =
                        Fonction::depuis_nom(nom).ok_or_else(|| ParseError::UnknownFunction {
                            nom: nom.to_string(),
                            position: debut,
                        })?;
                    ops.push(Empile::Fonction(fonction));
                    debut_nom = None;
                }
                Some(s) if is_fonction_char(s) => {}
                // lettres sans '(' derrière : ni fonction, ni variable
                _ => {
                    return Err(ParseError::UnknownFunction {
                        nom: expression[debut..=i].to_string(),
                        position: debut,
                    });
                }
            }
        } else if c == '(' {
            ops.push(Empile::ParOuvrante { position: i });
        } else if c == ')' {
            // dépile jusqu’à '(' (exclue, puis jetée)
            loop {
                match ops.pop() {
                    None => {
                        debug!("rpn: ')' sans '(' en position {i}");
                        return Err(ParseError::UnbalancedParen { position: i });
                    }
                    Some(Empile::ParOuvrante { .. }) => break,
                    Some(top) => {
                        if let Some(j) = top.en_jeton() {
                            emettre(&mut out, j);
                        }
                    }
                }
            }
        } else if let Some(op) = Operateur::depuis_char(c) {
            while let Some(&top) = ops.last() {
                if top.precedence() < op.precedence() {
                    break;
                }
                ops.pop();
                if let Some(j) = top.en_jeton() {
                    emettre(&mut out, j);
                }
            }
            ops.push(Empile::Operateur(op));
        } else {
            debug!("rpn: caractère inattendu {c:?} en position {i}");
            return Err(ParseError::InvalidCharacter {
                caractere: c,
                position: i,
            });
        }

        precedent = Some(c);
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        match top {
            Empile::ParOuvrante { position } => {
                debug!("rpn: '(' non fermée en position {position}");
                return Err(ParseError::UnbalancedParen { position });
            }
            _ => {
                if let Some(j) = top.en_jeton() {
                    emettre(&mut out, j);
                }
            }
        }
    }

    debug!("rpn: {expression:?} -> {} jeton(s)", out.len());
    Ok(out)
}
