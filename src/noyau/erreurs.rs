// src/noyau/erreurs.rs

use std::error::Error;
use std::fmt;

/// Erreurs du noyau. Le calcul est pur et déterministe : aucune reprise,
/// on remonte immédiatement à l'appelant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErreurPi {
    /// Argument hors domaine (ex: zéro chiffre demandé).
    ArgumentInvalide(String),
    /// Dénominateur nul. Inatteignable pour un indice valide (x est une
    /// puissance non nulle) : si ça arrive, c'est un invariant interne cassé.
    DivisionParZero,
}

impl fmt::Display for ErreurPi {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErreurPi::ArgumentInvalide(msg) => write!(f, "argument invalide: {msg}"),
            ErreurPi::DivisionParZero => write!(f, "division par zéro"),
        }
    }
}

impl Error for ErreurPi {}
