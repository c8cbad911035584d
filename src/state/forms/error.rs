//! Form validation and navigation errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Champs obligatoires manquants : {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("« {field} » : nombre entier attendu, reçu « {value} »")]
    InvalidNumber { field: String, value: String },

    #[error("« {field} » : date attendue au format AAAA-MM-JJ, reçu « {value} »")]
    InvalidDate { field: String, value: String },

    #[error("« {field} » : valeur « {value} » hors de la liste proposée")]
    InvalidOption { field: String, value: String },

    #[error("Veuillez sélectionner le type de texte juridique")]
    NoDocumentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("L'enregistrement n'est possible qu'à la dernière étape ({current}/{total})")]
    NotOnFinalStep { current: usize, total: usize },

    #[error(transparent)]
    Invalid(#[from] FormError),
}
