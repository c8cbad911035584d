//! Legal text templates, one per document type

use super::nomenclature::{
    AGREEMENT_NATURES, AGREEMENT_TYPES, AMENDING_REASONS, CIRCULAR_TYPES, DECREE_TYPES, LAW_TYPES,
    ORDER_TYPES, REASONS, SECTORS,
};
use super::DocumentTypeTemplate;
use crate::state::FieldDescriptor as F;

// Fields shared by every published text
const JOURNAL_NUMBER: F = F::text("journalNumber", "Journal N°").required();
const JOURNAL_DATE: F = F::date("journalDate", "Date du Journal").required();
const PAGE_NUMBER: F = F::number("pageNumber", "N° de Page").required();
const REF_NUMBER: F = F::text("refNumber", "N° Réf").required();
const TITLE: F = F::text("title", "Titre").required();
const SUBJECT: F = F::textarea("subject", "Sujet").required();
const SECTOR: F = F::select("sector", "Secteur", SECTORS).required();
const REASON: F = F::select("reason", "Motif", REASONS).required();
const CREATION_DATE: F =
    F::date("creationDate", "Date de création (d'entrée en vigueur)").required();
const REFERENCES: F = F::list("references", "Références").required();
const CHAPTERS: F = F::list("chapters", "Chapitre").required();
const SECTIONS: F = F::list("sections", "Section").required();
const ARTICLES: F = F::list("articles", "Articles").required();
const ATTACHMENTS: F = F::file("attachments", "Pièce Jointe");
const OLD_DECREE_REF: F = F::text("oldDecreeRef", "Référence de l'ancien décret")
    .shown_when("reason", AMENDING_REASONS);

const CONSTITUTION: &[F] = &[
    JOURNAL_NUMBER,
    JOURNAL_DATE,
    PAGE_NUMBER,
    F::textarea("header", "En-tête").required(),
    F::list("preambles", "Préambule (plusieurs paragraphe)").required(),
    TITLE,
    CHAPTERS,
    F::text("articleNumber", "N° Article").required(),
    F::textarea("oaths", "Serments").required(),
    ATTACHMENTS,
];

const INTERNATIONAL_AGREEMENT: &[F] = &[
    JOURNAL_NUMBER,
    JOURNAL_DATE,
    PAGE_NUMBER,
    REF_NUMBER,
    CREATION_DATE,
    TITLE,
    F::select("agreementType", "Type de l'accord", AGREEMENT_TYPES).required(),
    F::select("agreementNature", "Types l'accord", AGREEMENT_NATURES).required(),
    F::date("signatureDate", "Date de signature").required(),
    F::list("parties", "Parties").required(),
    F::list("treatyReferences", "Réf Recueil de traité").required(),
    ATTACHMENTS,
];

const LAW: &[F] = &[
    JOURNAL_NUMBER,
    JOURNAL_DATE,
    PAGE_NUMBER,
    F::select("textType", "Type de Texte", SECTORS).required(),
    F::select("lawType", "Type de Loi", LAW_TYPES).required(),
    REF_NUMBER,
    F::date("date", "Date").required(),
    TITLE,
    SECTOR,
    REASON,
    OLD_DECREE_REF,
    REFERENCES,
    CHAPTERS,
    SECTIONS,
    ATTACHMENTS,
];

const ORDINANCE: &[F] = &[
    JOURNAL_NUMBER,
    JOURNAL_DATE,
    PAGE_NUMBER,
    REF_NUMBER,
    F::date("ordinanceDate", "Date de l'Ordonnance").required(),
    SUBJECT,
    SECTOR,
    REASON,
    F::text("oldOrdinanceRef", "Référence de l'ancienne ordonnance")
        .shown_when("reason", AMENDING_REASONS),
    REFERENCES,
    ARTICLES,
    ATTACHMENTS,
];

const DECREE: &[F] = &[
    JOURNAL_NUMBER,
    JOURNAL_DATE,
    PAGE_NUMBER,
    F::select("decreeType", "Type de Décret", DECREE_TYPES).required(),
    REF_NUMBER,
    F::date("decreeDate", "Date de Décret").required(),
    SUBJECT,
    SECTOR,
    REASON,
    OLD_DECREE_REF,
    REFERENCES,
    ARTICLES,
    ATTACHMENTS,
];

const ORDER: &[F] = &[
    JOURNAL_NUMBER,
    JOURNAL_DATE,
    PAGE_NUMBER,
    F::select("decreeType", "Type de Décret", ORDER_TYPES).required(),
    REF_NUMBER,
    CREATION_DATE,
    SUBJECT,
    SECTOR,
    REFERENCES,
    CHAPTERS,
    SECTIONS,
    ATTACHMENTS,
];

const CIRCULAR: &[F] = &[
    JOURNAL_NUMBER,
    JOURNAL_DATE,
    PAGE_NUMBER,
    F::select("decreeType", "Type de Décret", CIRCULAR_TYPES).required(),
    REF_NUMBER,
    F::date("circularDate", "Date de Circulaire").required(),
    SUBJECT,
    SECTOR,
    F::text("relativeReference", "Référence relative"),
    REFERENCES,
    ARTICLES,
    ATTACHMENTS,
];

const fn template(
    type_key: &'static str,
    name: &'static str,
    fields: &'static [F],
) -> DocumentTypeTemplate {
    DocumentTypeTemplate {
        type_key,
        name,
        fields,
    }
}

/// All legal text templates, in selector order
pub static LEGAL_TEXT_TEMPLATES: &[DocumentTypeTemplate] = &[
    template("constitution", "Constitution", CONSTITUTION),
    template("accord-international", "Accord International", INTERNATIONAL_AGREEMENT),
    template(
        "convention-internationale",
        "Convention Internationale",
        INTERNATIONAL_AGREEMENT,
    ),
    template("code", "Code", LAW),
    template("loi-organique", "Loi Organique", LAW),
    template("loi", "Loi", LAW),
    template("ordonnance", "Ordonnance", ORDINANCE),
    template("decret-legislatif", "Décret Législatif", DECREE),
    template("decret-presidentiel", "Décret Présidentiel", DECREE),
    template("decret-executif", "Décret Exécutif", DECREE),
    template("arrete", "Arrêté", ORDER),
    template(
        "arrete-interministerielle",
        "Arrêté interministérielle",
        ORDER,
    ),
    template("arrete-ministerielle", "Arrêté ministérielle", ORDER),
    template("decision", "Décision", ORDER),
    template("circulaire", "Circulaire", CIRCULAR),
    template("reglement", "Règlements", ORDER),
    template("instruction", "Instruction", ORDER),
];
