//! π Q-pur — noyau Chudnovsky exact
//! --------------------------------
//! Calcule les décimales de π par sommation directe de la série de
//! Chudnovsky, entièrement en arithmétique exacte (entiers « scalés »
//! ×10^p). Aucun flottant machine nulle part : la précision de travail
//! appartient à la session d'évaluation, pas au matériel.
//!
//! ```
//! use pi_qpur::evaluer_pi;
//!
//! let pi = evaluer_pi(10).unwrap();
//! assert_eq!(pi, "3.141592653");
//! ```

pub mod noyau;

pub use noyau::erreurs::ErreurPi;
pub use noyau::serie::evaluer_pi;
