//! Static bilingual content used when generation fails.
//!
//! Every table has an entry for both languages.

use crate::domain::foundation::{Jurisdiction, Language};

use super::ScriptSet;

const SAY_EN: [&str; 4] = [
    "I am exercising my right to remain silent",
    "I do not consent to any searches",
    "Am I free to leave?",
    "I want to speak to a lawyer",
];

const AVOID_EN: [&str; 4] = [
    "Don't argue or resist physically",
    "Don't lie or provide false information",
    "Don't consent to searches",
    "Don't answer questions without a lawyer",
];

const SAY_ES: [&str; 4] = [
    "Estoy ejerciendo mi derecho a permanecer en silencio",
    "No consiento ningún registro",
    "¿Soy libre de irme?",
    "Quiero hablar con un abogado",
];

const AVOID_ES: [&str; 4] = [
    "No discutas o resistas físicamente",
    "No mientas o proporciones información falsa",
    "No consientas registros",
    "No respondas preguntas sin un abogado",
];

const BASIC_RIGHTS_EN: [&str; 5] = [
    "You have the right to remain silent",
    "You have the right to refuse searches without a warrant",
    "You have the right to ask if you are free to leave",
    "You have the right to an attorney",
    "You have the right to record police interactions in public",
];

const BASIC_RIGHTS_ES: [&str; 5] = [
    "Tienes derecho a permanecer en silencio",
    "Tienes derecho a rechazar registros sin una orden judicial",
    "Tienes derecho a preguntar si eres libre de irte",
    "Tienes derecho a un abogado",
    "Tienes derecho a grabar interacciones policiales en público",
];

/// Fallback "what to say / what not to say" lists.
pub fn fallback_scripts(language: Language) -> ScriptSet {
    let (say, avoid) = match language {
        Language::English => (SAY_EN, AVOID_EN),
        Language::Spanish => (SAY_ES, AVOID_ES),
    };
    ScriptSet::from_table(&say, &avoid)
}

/// Fallback guide text: names the jurisdiction, then generic rights.
pub fn fallback_guide(jurisdiction: Jurisdiction, language: Language) -> String {
    match language {
        Language::English => format!(
            "Basic rights guide for {}. You have the right to remain silent, refuse searches \
             without a warrant, and request an attorney. Always remain calm and respectful \
             during police encounters.",
            jurisdiction
        ),
        Language::Spanish => format!(
            "Guía básica de derechos para {}. Tienes derecho a permanecer en silencio, \
             rechazar registros sin una orden judicial y solicitar un abogado. Mantén siempre \
             la calma y el respeto durante los encuentros con la policía.",
            jurisdiction
        ),
    }
}

/// Basic rights statements shown regardless of jurisdiction.
pub fn basic_rights(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &BASIC_RIGHTS_EN,
        Language::Spanish => &BASIC_RIGHTS_ES,
    }
}
