use costcenter_core::{Text, ToText};

use super::{COST_CENTERS, CONTROLLING_AREA, valid_from, valid_to};

fn name_in(language: &str, en: &'static str, de: &'static str) -> Option<&'static str> {
    match language {
        "EN" => Some(en),
        "DE" => Some(de),
        _ => None,
    }
}

/// Texts in `language` whose name contains `fragment` (case-sensitive).
pub fn matching(language: &str, fragment: &str) -> Vec<Text> {
    COST_CENTERS
        .iter()
        .filter_map(|(cc, _, en, de)| {
            let name = name_in(language, en, de)?;
            name.contains(fragment).then(|| Text {
                controlling_area: CONTROLLING_AREA.to_string(),
                cost_center: (*cc).to_string(),
                validity_end_date: valid_to(),
                language: Some(language.to_string()),
                validity_start_date: valid_from(),
                cost_center_name: Some(name.to_string()),
                cost_center_description: Some(format!("{name} ({cc})")),
            })
        })
        .collect()
}

/// Every language's text of one cost center.
pub fn for_cost_center(cost_center: &str) -> Vec<ToText> {
    COST_CENTERS
        .iter()
        .filter(|(cc, ..)| *cc == cost_center)
        .flat_map(|(cc, _, en, de)| [("EN", *en), ("DE", *de)].map(|(lang, name)| (cc, lang, name)))
        .map(|(cc, lang, name)| ToText {
            controlling_area: CONTROLLING_AREA.to_string(),
            cost_center: (*cc).to_string(),
            validity_end_date: valid_to(),
            language: Some(lang.to_string()),
            validity_start_date: valid_from(),
            cost_center_name: Some(name.to_string()),
            cost_center_description: Some(format!("{name} ({cc})")),
        })
        .collect()
}
