use std::collections::HashMap;

use tnsl_core::lang::classify;
use tnsl_core::lang::groups;
use tnsl_core::lang::keywords;
use tnsl_core::lang::operators;
use tnsl_core::lang::preproc;
use tnsl_core::lang::runes;
use tnsl_core::lang::TokenClass;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_classes_match_classifier() {
    for info in keywords::KEYWORDS {
        assert_eq!(
            classify::classify_word(info.canonical, false),
            info.class,
            "classifier disagrees with registry for {:?}",
            info.canonical
        );
        assert!(info.class.is_lexical(), "keyword {:?} has a synthetic class", info.canonical);
    }
}

#[test]
fn word_operators_are_reserved_as_augments() {
    for info in operators::OPERATORS.iter().filter(|o| o.is_word) {
        let id = keywords::from_str(info.spelling)
            .unwrap_or_else(|| panic!("word operator {:?} is not a reserved word", info.spelling));
        assert_eq!(keywords::class(id), TokenClass::Augment);
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(operators::from_str(info.spelling), Some(info.id));
        assert_eq!(operators::as_str(info.id), info.spelling);
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn operators_made_of_reserved_runes() {
    for info in operators::OPERATORS.iter().filter(|o| !o.is_word) {
        for ch in info.spelling.chars() {
            assert!(
                runes::info(ch).is_some(),
                "operator {:?} uses unreserved rune {:?}",
                info.spelling,
                ch
            );
        }
        assert_eq!(classify::classify_group(info.spelling), Some(TokenClass::Augment));
    }
}

#[test]
fn every_operator_has_a_position() {
    for info in operators::OPERATORS {
        assert!(
            info.order.is_some() || info.prefix || info.postfix,
            "operator {:?} can never be parsed",
            info.spelling
        );
    }
}

#[test]
fn groups_unique_and_disjoint_from_operators() {
    let mut seen: HashMap<&'static str, groups::GroupId> = HashMap::new();

    for info in groups::GROUPS {
        assert_eq!(groups::from_str(info.canonical), Some(info.id));
        assert_eq!(groups::as_str(info.id), info.canonical);
        assert_eq!(info.canonical.chars().count(), 2);
        assert!(
            operators::from_str(info.canonical).is_none(),
            "group {:?} collides with an operator",
            info.canonical
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate group spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn comment_markers_pair_up() {
    let openers = groups::GROUPS.iter().filter(|g| groups::opens_comment(g.id)).count();
    let closers = groups::GROUPS.iter().filter(|g| groups::closes_comment(g.id)).count();
    assert_eq!(openers, 3);
    assert_eq!(closers, 3);
}

#[test]
fn preprocessor_words_resolvable() {
    for &(id, spelling) in preproc::PREWORDS {
        assert_eq!(preproc::from_str(spelling), Some(id));
        assert_eq!(preproc::as_str(id), spelling);
        assert_eq!(classify::classify_word(spelling, true), TokenClass::PreWord);
    }
}

#[test]
fn runes_unique() {
    let mut seen = HashMap::new();
    for info in runes::RUNES {
        if let Some(prev) = seen.insert(info.rune, info.role) {
            panic!("duplicate rune {:?}: {} and {}", info.rune, prev, info.role);
        }
        assert!(!info.rune.is_alphanumeric());
        assert!(!info.rune.is_whitespace());
    }
}
