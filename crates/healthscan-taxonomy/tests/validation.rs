use std::io::Write;

use healthscan_core::models::condition::SeverityBand;
use healthscan_taxonomy::error::TaxonomyError;
use healthscan_taxonomy::Taxonomy;

const MINIMAL: &str = r#"{
    "symptoms": [
        { "id": "fever", "name": "Fever", "category": "General", "severity": "medium" },
        { "id": "cough", "name": "Cough", "category": "Respiratory", "severity": "medium",
          "keywords": ["Cough", "hacking"] }
    ],
    "conditions": [
        { "id": "cold", "name": "Cold", "required_symptoms": ["fever", "cough", "cough"],
          "severity": "mild" }
    ]
}"#;

#[test]
fn minimal_json_loads_with_defaults() {
    let taxonomy = Taxonomy::from_json(MINIMAL).unwrap();

    // Missing keywords fall back to the lowercased name.
    assert_eq!(taxonomy.symptom("fever").unwrap().keywords, vec!["fever"]);
    assert_eq!(
        taxonomy.symptom("cough").unwrap().keywords,
        vec!["cough", "hacking"]
    );

    // Repeated required ids collapse.
    assert_eq!(
        taxonomy.condition("cold").unwrap().required_symptoms,
        vec!["fever", "cough"]
    );

    // Omitted ladder falls back to the built-in one.
    assert!(!taxonomy
        .severity_recommendations(SeverityBand::Mild)
        .is_empty());
}

#[test]
fn condition_without_symptoms_is_rejected() {
    let json = r#"{
        "symptoms": [{ "id": "fever", "name": "Fever", "category": "General", "severity": "low" }],
        "conditions": [{ "id": "empty", "name": "Empty", "required_symptoms": [], "severity": "mild" }]
    }"#;
    let err = Taxonomy::from_json(json).unwrap_err();
    assert!(
        matches!(err, TaxonomyError::EmptyRequiredSymptoms { ref condition_id } if condition_id == "empty")
    );
}

#[test]
fn unknown_symptom_reference_is_rejected() {
    let json = r#"{
        "symptoms": [{ "id": "fever", "name": "Fever", "category": "General", "severity": "low" }],
        "conditions": [{ "id": "flu", "name": "Flu", "required_symptoms": ["fever", "aches"], "severity": "moderate" }]
    }"#;
    let err = Taxonomy::from_json(json).unwrap_err();
    match err {
        TaxonomyError::UnknownSymptomReference {
            condition_id,
            symptom_id,
        } => {
            assert_eq!(condition_id, "flu");
            assert_eq!(symptom_id, "aches");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_symptom_id_is_rejected() {
    let json = r#"{
        "symptoms": [
            { "id": "fever", "name": "Fever", "category": "General", "severity": "low" },
            { "id": "fever", "name": "Pyrexia", "category": "General", "severity": "high" }
        ],
        "conditions": []
    }"#;
    let err = Taxonomy::from_json(json).unwrap_err();
    assert!(matches!(err, TaxonomyError::DuplicateId { kind: "symptom", ref id } if id == "fever"));
}

#[test]
fn blank_keyword_is_rejected() {
    let json = r#"{
        "symptoms": [{ "id": "fever", "name": "Fever", "category": "General", "severity": "low",
                       "keywords": ["fever", "  "] }],
        "conditions": []
    }"#;
    let err = Taxonomy::from_json(json).unwrap_err();
    assert!(matches!(err, TaxonomyError::EmptyKeyword { .. }));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = Taxonomy::from_json("{ not json").unwrap_err();
    assert!(matches!(err, TaxonomyError::Serialization(_)));
}

#[test]
fn loads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MINIMAL.as_bytes()).unwrap();

    let taxonomy = Taxonomy::from_path(file.path()).unwrap();
    assert_eq!(taxonomy.symptoms().len(), 2);

    let missing = Taxonomy::from_path(&file.path().with_extension("missing")).unwrap_err();
    assert!(matches!(missing, TaxonomyError::Io(_)));
}

#[test]
fn keyword_whitespace_is_collapsed() {
    let json = r#"{
        "symptoms": [
            { "id": "sore_throat", "name": "Sore Throat", "category": "Respiratory",
              "severity": "low", "keywords": ["  Sore   Throat ", "scratchy\tthroat"] },
            { "id": "runny", "name": "Runny  Nose", "category": "Respiratory", "severity": "low" }
        ],
        "conditions": [
            { "id": "cold", "name": "Cold", "required_symptoms": ["sore_throat"], "severity": "mild" }
        ]
    }"#;
    let taxonomy = Taxonomy::from_json(json).unwrap();
    assert_eq!(
        taxonomy.symptom("sore_throat").unwrap().keywords,
        vec!["sore throat", "scratchy throat"]
    );
    assert_eq!(taxonomy.symptom("runny").unwrap().keywords, vec!["runny nose"]);
}
