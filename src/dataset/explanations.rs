//! Plain-language explanations of each gaze parameter.
//!
//! Backs the explanation overlay: a title, its abbreviation, and three short
//! paragraphs (what it measures, how to read it, a worked example).

use crate::filter::Parameter;

/// Explanation card for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDefinition {
    /// Which parameter this card explains.
    pub parameter: Parameter,
    /// Full name.
    pub name: &'static str,
    /// Abbreviation shown in parentheses.
    pub abbr: &'static str,
    /// What the parameter measures.
    pub description: &'static str,
    /// How to interpret it.
    pub explanation: &'static str,
    /// A worked example.
    pub example: &'static str,
}

const DEFINITIONS: [ParameterDefinition; 6] = [
    ParameterDefinition {
        parameter: Parameter::Ttt,
        name: "Temps Total Tracké",
        abbr: "TTT",
        description: "Le Temps Total Tracké représente la durée totale pendant laquelle le regard de l'enfant a été enregistré par le système d'eye-tracking durant toute l'expérience.",
        explanation: "Ce paramètre mesure le temps global d'engagement visuel de l'enfant avec les stimuli présentés. Un TTT plus élevé indique que l'enfant a maintenu son attention sur l'écran pendant une plus longue période.",
        example: "Si l'expérience dure 60 secondes et que le TTT est de 45 secondes, cela signifie que le regard a été capté pendant 75% du temps total.",
    },
    ParameterDefinition {
        parameter: Parameter::Tp,
        name: "Temps Passé",
        abbr: "TP",
        description: "Le Temps Passé mesure la durée totale pendant laquelle le regard s'est posé sur une zone d'intérêt spécifique (écran, tête, yeux, ou bouche).",
        explanation: "Ce paramètre permet d'identifier quelles zones du visage attirent le plus l'attention. Les différences de TP entre les groupes DT et TSA peuvent révéler des patterns d'exploration visuelle distincts.",
        example: "Si le TP sur la zone des yeux est de 8 secondes, cela signifie que l'enfant a regardé cette zone pendant 8 secondes au total durant l'observation du visage.",
    },
    ParameterDefinition {
        parameter: Parameter::Tf,
        name: "Temps de Fixation",
        abbr: "TF",
        description: "Le Temps de Fixation correspond à la durée cumulée pendant laquelle le regard reste stable sur une zone d'intérêt, sans mouvement significatif.",
        explanation: "Les fixations indiquent un traitement actif de l'information visuelle. Un TF plus long suggère une analyse plus approfondie de la zone observée.",
        example: "Un TF de 5 secondes sur la bouche signifie que l'enfant a fixé cette zone pendant 5 secondes au total, réparties en plusieurs fixations.",
    },
    ParameterDefinition {
        parameter: Parameter::Nbf,
        name: "Nombre de Fixations",
        abbr: "NBF",
        description: "Le Nombre de Fixations compte combien de fois le regard s'est stabilisé sur une zone d'intérêt donnée.",
        explanation: "Un NBF élevé peut indiquer soit un grand intérêt pour la zone, soit une difficulté à extraire l'information. Combiné avec le TF, il permet de comprendre la stratégie d'exploration visuelle.",
        example: "Si NBF = 12 pour les yeux, cela signifie que l'enfant a fixé cette zone 12 fois différentes pendant l'observation.",
    },
    ParameterDefinition {
        parameter: Parameter::Nbe,
        name: "Nombre d'Entrées",
        abbr: "NBE",
        description: "Le Nombre d'Entrées compte combien de fois le regard est entré dans une zone d'intérêt, quelle que soit la durée.",
        explanation: "Ce paramètre mesure la fréquence des visites dans une zone. Un NBE élevé suggère que l'enfant revient souvent à cette zone.",
        example: "Un NBE de 8 pour la zone de la tête signifie que le regard est entré 8 fois dans cette zone durant l'observation.",
    },
    ParameterDefinition {
        parameter: Parameter::Latence,
        name: "Latence",
        abbr: "Lat",
        description: "La Latence mesure le temps écoulé entre le début de la présentation du stimulus et la première fixation sur une zone d'intérêt.",
        explanation: "Une latence courte indique que la zone attire rapidement l'attention. Les différences de latence entre groupes peuvent révéler des priorités attentionnelles différentes.",
        example: "Une latence de 0.5 seconde pour les yeux signifie que l'enfant a regardé cette zone pour la première fois 0.5 seconde après l'apparition du visage.",
    },
];

/// Returns the explanation card for `parameter`.
pub fn definition(parameter: Parameter) -> &'static ParameterDefinition {
    // DEFINITIONS is ordered like Parameter::ALL
    let idx = Parameter::ALL
        .iter()
        .position(|p| *p == parameter)
        .unwrap_or(0);
    &DEFINITIONS[idx]
}

/// All explanation cards in selector order.
pub fn all() -> &'static [ParameterDefinition] {
    &DEFINITIONS
}

/// Maps a card title or abbreviation to a parameter.
///
/// Matching is case-insensitive substring search, checked in selector order, so
/// "Temps Total Tracké" resolves to TTT before the shorter "tp"/"tf" keys can match.
pub fn match_parameter(text: &str) -> Option<Parameter> {
    let name = text.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }
    let patterns: [(&str, &str, Parameter); 6] = [
        ("temps total tracké", "ttt", Parameter::Ttt),
        ("temps passé", "tp", Parameter::Tp),
        ("temps de fixation", "tf", Parameter::Tf),
        ("nombre de fixations", "nbf", Parameter::Nbf),
        ("nombre d'entrées", "nbe", Parameter::Nbe),
        ("latence", "lat", Parameter::Latence),
    ];
    patterns
        .into_iter()
        .find(|(full, abbr, _)| name.contains(full) || name.contains(abbr))
        .map(|(_, _, p)| p)
}
