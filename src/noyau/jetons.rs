// src/noyau/jetons.rs
//
// Modèle des jetons + prédicats partagés (nombre / opérateur / fonction)
// et table de précédence.

use std::fmt;

/// Opérateur binaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }

    /// `gauche OP droite` en flottants IEEE : /0 donne ±inf ou NaN, jamais d’erreur.
    pub fn appliquer(self, gauche: f64, droite: f64) -> f64 {
        match self {
            Operateur::Plus => gauche + droite,
            Operateur::Moins => gauche - droite,
            Operateur::Fois => gauche * droite,
            Operateur::Divise => gauche / droite,
            Operateur::Puissance => gauche.powf(droite),
        }
    }
}

/// Fonction unaire reconnue (toujours suivie de `(` dans l’entrée).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Sqrt,
}

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "sqrt" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Sqrt => "sqrt",
        }
    }

    /// Les fonctions lient plus fort que tous les opérateurs.
    pub fn precedence(self) -> u8 {
        4
    }

    /// Radians pour la trigo ; sqrt d’un négatif donne NaN (pas d’erreur).
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Sqrt => x.sqrt(),
        }
    }
}

/// Jeton d’une séquence postfixée.
///
/// `Nombre` emprunte le texte de l’entrée (ex: "-0.5") ; il n’est converti
/// en `f64` qu’à l’évaluation. Les parenthèses n’apparaissent jamais ici.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton<'a> {
    Nombre(&'a str),
    Operateur(Operateur),
    Fonction(Fonction),
}

impl fmt::Display for Jeton<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(texte) => f.write_str(texte),
            Jeton::Operateur(op) => write!(f, "{}", op.symbole()),
            Jeton::Fonction(fonction) => f.write_str(fonction.nom()),
        }
    }
}

/* ------------------------ Prédicats de classification ------------------------ */

/// Chiffre ou point décimal : continuation d’un nombre.
pub fn is_nombre_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

pub fn is_operateur_char(c: char) -> bool {
    Operateur::depuis_char(c).is_some()
}

/// Lettre de nom de fonction (minuscules seulement : la casse est pliée par l’appelant).
pub fn is_fonction_char(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Moins unaire : seulement en tête d’expression ou juste après `(`.
///
/// Après un opérateur binaire, `-` reste une soustraction (limite connue).
pub fn is_moins_unaire(c: char, precedent: Option<char>) -> bool {
    c == '-' && matches!(precedent, None | Some('('))
}
