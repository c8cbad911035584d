//! Procedure templates: the single-page form and the wizard steps

use super::nomenclature::{
    DOCUMENT_SOURCES, FEE_TYPES, PROCEDURE_CATEGORIES, PROCEDURE_ORGANIZATIONS,
    TARGET_CATEGORIES, VALIDITY_TYPES,
};
use super::DocumentTypeTemplate;
use crate::state::FieldDescriptor as F;

const PERIODIC: &[&str] = &["periodic"];
const PAID: &[&str] = &["payant"];
const ENABLED: &[&str] = &["true"];

const TARGET_CATEGORY: F = F::select("targetCategory", "Catégorie Ciblée", TARGET_CATEGORIES)
    .placeholder("Sélectionner la catégorie ciblée");
const VALIDITY_TYPE: F = F::select("validityType", "Validité de la procédure", VALIDITY_TYPES);
const VALIDITY_START: F = F::date("validityStartDate", "Du").shown_when("validityType", PERIODIC);
const VALIDITY_END: F = F::date("validityEndDate", "Au").shown_when("validityType", PERIODIC);
const FEE_TYPE: F = F::select("feeType", "Frais", FEE_TYPES);
const FEE_AMOUNT: F = F::text("feeAmount", "Montant")
    .placeholder("Montant en DA")
    .shown_when("feeType", PAID);
const DIGITIZATION: F = F::toggle("digitization", "Numérisation de la procédure");
const DIGITIZATION_DATE: F = F::date("digitizationDate", "Date de la numérisation")
    .shown_when("digitization", ENABLED);
const PORTAL_LINK: F = F::text("electronicPortalLink", "Lien du portail électronique")
    .placeholder("https://...")
    .shown_when("digitization", ENABLED);
const MOBILE_LINK: F = F::text(
    "mobileAppLink",
    "Lien de l'application mobile (si elle existe)",
)
.placeholder("https://...")
.shown_when("digitization", ENABLED);
const THIRD_PARTY: F = F::toggle("thirdPartySubmission", "Dépôt par une tierce personne");
const WITHDRAWAL_TIME: F = F::text(
    "withdrawalTime",
    "Quand retirer l'acte ou le service administratif demandé",
)
.placeholder("Délai de retrait");
const WITHDRAWAL_METHOD: F = F::textarea(
    "withdrawalMethod",
    "Comment retirer l'acte ou le service administratif demandé",
)
.placeholder("Modalités de retrait");
const DOCUMENT_VALIDITY: F = F::text(
    "documentValidity",
    "Validité de l'acte ou du service administratif demandé",
)
.placeholder("Durée de validité");
const HAS_APPEAL: F = F::toggle("hasAppeal", "Recours");
const APPEAL_LOCATION: F = F::text("appealLocation", "Où déposer")
    .placeholder("Lieu de dépôt du recours")
    .shown_when("hasAppeal", ENABLED);
const APPEAL_DEADLINE: F = F::text("appealDeadline", "Les délais")
    .placeholder("Délais de recours")
    .shown_when("hasAppeal", ENABLED);
const APPEAL_FEES: F = F::text("appealFees", "Les frais")
    .placeholder("Frais de recours")
    .shown_when("hasAppeal", ENABLED);
const CONTACT_ADDRESS: F = F::textarea("contactAddress", "Adresse").placeholder("Adresse complète");

const SINGLE_PAGE_FIELDS: &[F] = &[
    F::text("name", "Nom de la procédure")
        .required()
        .placeholder("Nom de la procédure"),
    F::textarea("description", "Description")
        .required()
        .placeholder("Description de la procédure"),
    F::text("procedureType", "Type de procédure")
        .required()
        .placeholder("Type de procédure"),
    F::text("sectorAdministration", "Secteur et/ou administration")
        .required()
        .placeholder("Secteur et/ou administration"),
    F::textarea("steps", "Étapes (avec démonstration si disponible)")
        .placeholder("Décrire les étapes de la procédure..."),
    F::textarea("serviceConditions", "Conditions d'utilisation du service")
        .placeholder("Conditions d'utilisation du service..."),
    F::select("requiredDocumentsType", "Documents demandés (source)", DOCUMENT_SOURCES),
    F::textarea("requiredDocuments", "Documents demandés")
        .placeholder("Lister les documents requis..."),
    F::select(
        "additionalDocumentsType",
        "Documents Complémentaires (source)",
        DOCUMENT_SOURCES,
    ),
    F::textarea(
        "additionalDocuments",
        "Documents Complémentaires (si nécessaire après validation)",
    )
    .placeholder("Documents complémentaires..."),
    TARGET_CATEGORY,
    F::text(
        "submissionLocation",
        "Où déposer le dossier - Administration concernée",
    )
    .required()
    .placeholder("Administration concernée"),
    VALIDITY_TYPE,
    VALIDITY_START,
    VALIDITY_END,
    F::number("processingDuration", "Durée du traitement (jours)")
        .required()
        .placeholder("Nombre de jours"),
    FEE_TYPE,
    FEE_AMOUNT,
    DIGITIZATION,
    DIGITIZATION_DATE,
    PORTAL_LINK,
    MOBILE_LINK,
    THIRD_PARTY,
    WITHDRAWAL_TIME,
    WITHDRAWAL_METHOD,
    DOCUMENT_VALIDITY,
    HAS_APPEAL,
    APPEAL_LOCATION,
    APPEAL_DEADLINE,
    APPEAL_FEES,
    F::textarea("legalAnchor", "Ancrage juridique")
        .placeholder("Références légales et réglementaires..."),
    F::text("userGuide", "Guide d'utilisation à télécharger")
        .placeholder("Lien vers le guide..."),
    F::text("downloadableForm", "Formulaire à télécharger")
        .placeholder("Lien vers le formulaire..."),
    F::textarea("faq", "Questions fréquemment posées").placeholder("FAQ sur la procédure..."),
    CONTACT_ADDRESS,
    F::text("contactPhone", "N° Téléphone").placeholder("Numéro de téléphone"),
    F::text("contactGreenNumber", "N° Vert").placeholder("Numéro vert"),
    F::text("contactEmail", "E-mail").placeholder("Adresse e-mail"),
];

/// Single-page procedure form
pub static PROCEDURE_TEMPLATE: DocumentTypeTemplate = DocumentTypeTemplate {
    type_key: "procedure",
    name: "Procédure administrative",
    fields: SINGLE_PAGE_FIELDS,
};

const STEP_GENERAL: &[F] = &[
    F::text("name", "Nom de la procédure")
        .required()
        .placeholder("Nom de la procédure"),
    F::textarea("description", "Description")
        .required()
        .placeholder("Description détaillée de la procédure"),
    F::select(
        "procedureCategory",
        "Catégorie de procédure",
        PROCEDURE_CATEGORIES,
    )
    .required()
    .placeholder("Sélectionner une catégorie"),
    F::select(
        "sectorAdministration",
        "Secteur et/ou administration",
        PROCEDURE_ORGANIZATIONS,
    )
    .required()
    .placeholder("Sélectionner une organisation"),
];

const STEP_STEPS_CONDITIONS: &[F] = &[
    F::list("steps", "Étapes (avec démonstration si disponible)")
        .placeholder("Décrire une étape de la procédure..."),
    F::list("conditions", "Conditions d'utilisation du service")
        .placeholder("Condition d'utilisation..."),
];

const STEP_DOCUMENTS: &[F] = &[
    F::select("requiredDocumentsType", "Documents demandés (source)", DOCUMENT_SOURCES),
    F::list("requiredDocuments", "Documents requis").placeholder("Nom du document requis"),
    F::select(
        "complementaryDocumentsType",
        "Documents complémentaires (source)",
        DOCUMENT_SOURCES,
    ),
    F::list("complementaryDocuments", "Documents complémentaires")
        .placeholder("Nom du document complémentaire"),
];

const STEP_MODALITIES: &[F] = &[
    TARGET_CATEGORY,
    F::text(
        "submissionLocation",
        "Où déposer le dossier - Administration concernée",
    )
    .placeholder("Administration concernée"),
    VALIDITY_TYPE,
    VALIDITY_START,
    VALIDITY_END,
    F::number("processingDuration", "Durée du traitement (jours)").placeholder("Nombre de jours"),
    FEE_TYPE,
    FEE_AMOUNT,
    DIGITIZATION,
    DIGITIZATION_DATE,
    PORTAL_LINK,
    MOBILE_LINK,
    THIRD_PARTY,
    WITHDRAWAL_TIME,
    WITHDRAWAL_METHOD,
    DOCUMENT_VALIDITY,
    HAS_APPEAL,
    APPEAL_LOCATION,
    APPEAL_DEADLINE,
    APPEAL_FEES,
];

const STEP_LEGAL_BASIS: &[F] = &[
    F::list("legalBasis", "Ancrage juridique")
        .placeholder("Référence juridique (loi, décret, arrêté...)"),
    F::file("userGuide", "Guide d'utilisation à télécharger").placeholder(".pdf, .doc, .docx"),
    F::file("downloadableForm", "Formulaire à télécharger").placeholder(".pdf, .doc, .docx"),
];

const STEP_ADDITIONAL: &[F] = &[
    F::textarea("frequentQuestions", "Questions fréquemment posées")
        .placeholder("Questions et réponses fréquentes..."),
    CONTACT_ADDRESS,
    F::text("phoneNumber", "N° Téléphone").placeholder("+213 XX XX XX XX"),
    F::text("email", "E-mail").placeholder("contact@administration.dz"),
    F::text("greenNumber", "N° Vert").placeholder("3030"),
];

/// Procedure wizard steps, in navigation order
pub static PROCEDURE_WIZARD_STEPS: &[DocumentTypeTemplate] = &[
    DocumentTypeTemplate {
        type_key: "general",
        name: "Informations générales",
        fields: STEP_GENERAL,
    },
    DocumentTypeTemplate {
        type_key: "steps-conditions",
        name: "Étapes et conditions",
        fields: STEP_STEPS_CONDITIONS,
    },
    DocumentTypeTemplate {
        type_key: "documents",
        name: "Documents requis",
        fields: STEP_DOCUMENTS,
    },
    DocumentTypeTemplate {
        type_key: "modalities",
        name: "Modalités",
        fields: STEP_MODALITIES,
    },
    DocumentTypeTemplate {
        type_key: "legal-basis",
        name: "Ancrage juridique",
        fields: STEP_LEGAL_BASIS,
    },
    DocumentTypeTemplate {
        type_key: "additional",
        name: "Informations complémentaires",
        fields: STEP_ADDITIONAL,
    },
];
