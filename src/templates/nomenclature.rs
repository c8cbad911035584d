//! Nomenclature lists shared by the templates

pub const SECTORS: &[&str] = &[
    "Commerce",
    "Civil",
    "Procédure Administratif",
    "Pénal",
    "Social",
    "Santé",
    "Éducation",
    "Transport",
    "Environnement",
    "Agriculture",
];

pub const LAW_TYPES: &[&str] = &["Constitutionnelle", "Organique", "Loi"];

pub const REASONS: &[&str] = &["Nouveau", "Modifier", "Compléter", "Abroger", "Rectifier"];

/// Reasons that refer back to an earlier text
pub const AMENDING_REASONS: &[&str] = &["Modifier", "Compléter", "Abroger", "Rectifier"];

pub const AGREEMENT_TYPES: &[&str] = &["Accord International", "Convention Internationale"];

pub const AGREEMENT_NATURES: &[&str] = &["Bilatérale", "Multilatérale"];

pub const DECREE_TYPES: &[&str] = &["Législatif", "Présidentiel", "Exécutif"];

pub const ORDER_TYPES: &[&str] = &["Arrêté", "Arrêté interministérielle", "Décision"];

pub const CIRCULAR_TYPES: &[&str] = &["Circulaire", "circulaire interministérielle"];

pub const PROCEDURE_CATEGORIES: &[&str] = &[
    "Autorisation administrative",
    "Certificat",
    "Licence",
    "Permis",
    "Déclaration",
    "Enregistrement",
];

pub const PROCEDURE_ORGANIZATIONS: &[&str] = &[
    "Ministère de l'Intérieur",
    "Ministère de la Justice",
    "Ministère de l'Économie",
    "Ministère de la Santé",
    "Ministère de l'Éducation",
    "Wilaya",
    "APC",
    "CNRC",
];

pub const TARGET_CATEGORIES: &[&str] = &[
    "citoyen",
    "administration",
    "entreprises",
    "investisseur",
    "associations",
];

pub const DOCUMENT_SOURCES: &[&str] = &["existing", "text"];

pub const VALIDITY_TYPES: &[&str] = &["periodic", "open"];

pub const FEE_TYPES: &[&str] = &["gratuit", "payant"];
