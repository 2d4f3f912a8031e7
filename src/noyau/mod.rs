//! Noyau exact Chudnovsky
//!
//! Organisation interne :
//! - erreurs.rs   : erreurs du noyau (argument, division)
//! - lecture.rs   : entiers scalés (×10^p) + texte décimal tronqué
//! - constante.rs : C = 426880·√10005 scalée + cache par précision
//! - termes.rs    : triplets (m, l, x) exacts (formules directes + récurrence)
//! - serie.rs     : combinaison + sommation + politique de précision

pub mod constante;
pub mod erreurs;
pub mod lecture;
pub mod serie;
pub mod termes;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use serie::evaluer_pi;
