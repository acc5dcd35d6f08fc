//! Shared fixtures run through both the lenient parser and the strict
//! validator, so the two readings of the grammar stay in step.

use questionnaire::loader::normalize;
use questionnaire::parser::{parse_document, Question};
use questionnaire::profile::ProfileRegistry;
use questionnaire::validation::{StructuralError, ValidationResult, Validator};

const HEADER: &str = "# Анкета №1 по проекту \"HSE-Announce\"";

/// Well-formed fixtures with their expected block names
const WELL_FORMED: &[(&str, &[&str])] = &[
    (
        "# Анкета №1 по проекту \"HSE-Announce\"\n## Block A\n1. Q1\n- sub1\n## Block B\n1. Q2",
        &["Block A", "Block B"],
    ),
    (
        "# Анкета №7 по проекту \"HSE-Announce\"\n\n## Знакомство\n\n1. Как вас зовут?\n2. Сколько вам лет?\n   1. до 18\n   2. 18 и старше\n\n## Опыт\n1. Чем вы занимаетесь?\n* учёба\n* работа\n",
        &["Знакомство", "Опыт"],
    ),
    (
        "# Анкета №12 по проекту \"HSE-Announce\"\n<!-- черновик -->\n## Only\n1. One\n2. Two\n3. Three",
        &["Only"],
    ),
];

fn validate(text: &str) -> ValidationResult {
    let registry = ProfileRegistry::with_builtin().unwrap();
    let validator = Validator::new(registry.select(None).unwrap()).unwrap();
    validator.validate(&normalize(text))
}

#[test]
fn test_well_formed_fixtures_parse_every_block() {
    for (source, names) in WELL_FORMED {
        let result = validate(source);
        assert!(result.is_valid(), "{:?} for {}", result.errors, source);

        let doc = parse_document(&normalize(source));
        let parsed: Vec<_> = doc.blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(&parsed, names);
        assert!(doc.blocks.iter().all(|b| !b.questions.is_empty()));
    }
}

#[test]
fn test_block_count_matches_second_level_headers() {
    for (source, _) in WELL_FORMED {
        let headers = source.lines().filter(|l| l.trim().starts_with("## ")).count();
        assert_eq!(parse_document(&normalize(source)).blocks.len(), headers);
    }
}

#[test]
fn test_nested_fixture_structure() {
    let doc = parse_document(&normalize(WELL_FORMED[1].0));

    assert_eq!(doc.title, "Анкета №7 по проекту \"HSE-Announce\"");
    assert_eq!(
        doc.blocks[0].questions,
        vec![
            Question::new("Как вас зовут?"),
            Question {
                text: "Сколько вам лет?".to_string(),
                sub: vec!["до 18".to_string(), "18 и старше".to_string()],
            },
        ]
    );
    assert_eq!(doc.blocks[1].questions[0].sub, vec!["учёба", "работа"]);
}

#[test]
fn test_empty_block_scenario() {
    let source = format!("{}\n## Empty Block\n## Block B\n1. Q1", HEADER);

    let result = validate(&source);
    assert_eq!(
        result.errors,
        vec![StructuralError::EmptyBlock {
            name: "Empty Block".to_string(),
            line: 3,
        }]
    );

    let doc = parse_document(&normalize(&source));
    assert_eq!(doc.blocks.len(), 2);
    assert!(doc.blocks[0].questions.is_empty());
}

#[test]
fn test_wrong_header_scenario() {
    let result = validate("# Wrong Header\n## B\n1. Q");
    assert_eq!(result.errors.len(), 1);
    assert!(matches!(
        &result.errors[0],
        StructuralError::HeaderFormat { found: Some(found), .. } if found == "# Wrong Header"
    ));

    // The parser still extracts what it can.
    let doc = parse_document("# Wrong Header\n## B\n1. Q");
    assert_eq!(doc.title, "Wrong Header");
    assert_eq!(doc.blocks[0].questions, vec![Question::new("Q")]);
}

#[test]
fn test_hidden_block_in_comment() {
    let source = format!(
        "{}\n<!-- draft\n## Hidden Block\nstray text -->\n## Visible\n1. Q",
        HEADER
    );

    assert!(validate(&source).is_valid());

    let doc = parse_document(&normalize(&source));
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].name, "Visible");
    assert!(!format!("{:?}", doc).contains("Hidden"));
}

#[test]
fn test_empty_document_boundary() {
    for source in ["", "\n\n   \n", "<!-- nothing here -->", "\n<!--\n## B\n1. Q\n-->\n"] {
        let result = validate(source);
        assert!(matches!(
            result.errors.as_slice(),
            [StructuralError::HeaderFormat { found: None, .. }]
        ));

        let doc = parse_document(&normalize(source));
        assert_eq!(doc.title, "");
        assert!(doc.blocks.is_empty());
    }
}

#[test]
fn test_malformed_document_reports_everything_and_parses_partially() {
    let source = format!(
        "{}\n1. orphan\n## First\nintro text\n## Second\n1. Q\n- s\n## Trailing",
        HEADER
    );

    let errors = validate(&source).errors;
    assert_eq!(errors.len(), 4);
    assert!(matches!(errors[0], StructuralError::OrphanItem { line: 2, .. }));
    assert!(matches!(errors[1], StructuralError::UnexpectedText { line: 4, .. }));
    assert!(matches!(
        &errors[2],
        StructuralError::EmptyBlock { name, line: 5 } if name == "First"
    ));
    assert!(matches!(
        &errors[3],
        StructuralError::EmptyBlock { name, line: 9 } if name == "Trailing"
    ));

    let doc = parse_document(&normalize(&source));
    let names: Vec<_> = doc.blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Trailing"]);
    assert_eq!(doc.question_count(), 1);
}
