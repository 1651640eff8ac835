//! Every fixture rule set classifies its own samples correctly, and integer
//! classification agrees with ICU4X's compiled CLDR data.

use cldr_plurals::{PluralCategory, PluralRules, RuleTable, RuleType, verify_rule_set};
use icu_locale_core::{Locale, locale};
use icu_plurals::{
    PluralCategory as IcuCategory, PluralRuleType as IcuRuleType, PluralRules as IcuRules,
};

fn table(rule_type: RuleType) -> RuleTable {
    let json = match rule_type {
        RuleType::Cardinal => include_str!("fixtures/plurals.json"),
        RuleType::Ordinal => include_str!("fixtures/ordinals.json"),
    };
    RuleTable::from_cldr_json(json, rule_type).unwrap()
}

fn assert_self_consistent(rule_type: RuleType) {
    let table = table(rule_type);
    for language in table.languages() {
        let mismatches = verify_rule_set(table.get(language).unwrap());
        assert!(
            mismatches.is_empty(),
            "{rule_type} rules for {language} misclassify their samples: {mismatches:?}"
        );
    }
}

#[test]
fn cardinal_samples_classify_to_their_category() {
    assert_self_consistent(RuleType::Cardinal);
}

#[test]
fn ordinal_samples_classify_to_their_category() {
    assert_self_consistent(RuleType::Ordinal);
}

#[test]
fn mismatches_are_reported() {
    let mut table = table(RuleType::Cardinal);
    let english = table.get("en").unwrap().clone();
    let swapped = english
        .iter()
        .map(|(category, text)| match category {
            PluralCategory::One => (category, text.replace("i = 1", "i = 2")),
            _ => (category, text.to_string()),
        })
        .collect();
    table.insert("en", swapped);

    let mismatches = verify_rule_set(table.get("en").unwrap());
    let expected_one: Vec<String> = mismatches
        .iter()
        .filter(|m| m.expected == PluralCategory::One)
        .map(|m| m.sample.to_string())
        .collect();
    assert_eq!(expected_one, ["1"]);
    assert!(mismatches.iter().any(|m| {
        m.expected == PluralCategory::Other
            && m.actual == Some(PluralCategory::One)
            && m.sample.to_string() == "2"
    }));
}

// =========================================================================
// ICU4X oracle
// =========================================================================

fn icu_locale(language: &str) -> Locale {
    match language {
        "ar" => locale!("ar"),
        "cy" => locale!("cy"),
        "en" => locale!("en"),
        "fr" => locale!("fr"),
        "he" => locale!("he"),
        "ja" => locale!("ja"),
        "lt" => locale!("lt"),
        "lv" => locale!("lv"),
        "pl" => locale!("pl"),
        "ru" => locale!("ru"),
        "sl" => locale!("sl"),
        "sv" => locale!("sv"),
        _ => panic!("no ICU locale mapping for {language}"),
    }
}

fn from_icu(category: IcuCategory) -> PluralCategory {
    match category {
        IcuCategory::Zero => PluralCategory::Zero,
        IcuCategory::One => PluralCategory::One,
        IcuCategory::Two => PluralCategory::Two,
        IcuCategory::Few => PluralCategory::Few,
        IcuCategory::Many => PluralCategory::Many,
        IcuCategory::Other => PluralCategory::Other,
    }
}

fn assert_matches_icu(rule_type: RuleType, languages: &[&str]) {
    let table = table(rule_type);
    let icu_type = match rule_type {
        RuleType::Cardinal => IcuRuleType::Cardinal,
        RuleType::Ordinal => IcuRuleType::Ordinal,
    };
    for &language in languages {
        let ours = PluralRules::compile(table.get(language).unwrap());
        let icu = IcuRules::try_new(icu_locale(language).into(), icu_type.into()).unwrap();
        for n in 0i64..=200 {
            assert_eq!(
                ours.category_for(n),
                from_icu(icu.category_for(n)),
                "{rule_type} {language} {n}"
            );
        }
    }
}

#[test]
fn cardinal_integers_agree_with_icu() {
    assert_matches_icu(
        RuleType::Cardinal,
        &["ar", "cy", "en", "fr", "he", "ja", "lt", "lv", "pl", "ru", "sl"],
    );
}

#[test]
fn ordinal_integers_agree_with_icu() {
    assert_matches_icu(RuleType::Ordinal, &["en", "fr", "ru", "sv"]);
}
