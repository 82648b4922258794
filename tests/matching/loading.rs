//! Knowledge bases and configs loaded from disk.

use std::fs;

use super::common::{assert_answered_by, sample_corpus};
use kbmatch::{KbError, KnowledgeBase, Matcher, MatcherConfig};

fn write_sample_kb(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("kb.json");
    let json = serde_json::to_string(&sample_corpus()).unwrap();
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_exported_corpus_answers_like_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sample_kb(&dir);

    let kb = KnowledgeBase::from_file(&path).unwrap();
    let docs = sample_corpus();
    assert_eq!(kb.documents(), docs.as_slice());

    let matcher = Matcher::default();
    for query in ["What is Wasilah?", "How can I volunteer?", "Rabta?"] {
        assert_eq!(kb.answer(&matcher, query), kbmatch::answer(query, &docs));
    }
}

#[test]
fn test_loose_records_are_defaulted() {
    let json = r#"{"documents": [
        {"id": 7, "title": "Volunteer", "url": "/volunteer",
         "content": "Volunteer with us: join, help and participate."},
        {"title": "No id", "content": "Donate online."},
        {"id": "blank"}
    ]}"#;
    let kb = KnowledgeBase::from_json_str(json).unwrap();

    assert_eq!(kb.len(), 3);
    assert!(kb.get("7").is_some());
    assert!(kb.get("doc-1").is_some());
    assert!(kb.get("blank").unwrap().tokens.is_empty());

    let response = kb.answer(&Matcher::default(), "How can I volunteer?");
    assert_answered_by(&response, kb.get("7").unwrap());
}

#[test]
fn test_config_file_changes_behavior() {
    let dir = tempfile::tempdir().unwrap();
    let kb = KnowledgeBase::from_file(write_sample_kb(&dir)).unwrap();

    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{ "snippetMaxLength": 12 }"#).unwrap();
    let config = MatcherConfig::from_file(&config_path).unwrap();
    assert_eq!(config.snippet_max_length, 12);
    assert!((config.threshold - 0.4).abs() < f64::EPSILON);

    let response = kb.answer(&Matcher::new(config), "What is Wasilah?");
    assert_eq!(response.text, "Wasilah is a...");
}

#[test]
fn test_bad_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    fs::write(&path, r#"{ "threshold": 1.5 }"#).unwrap();
    assert!(matches!(
        MatcherConfig::from_file(&path),
        Err(KbError::InvalidConfig(_))
    ));

    fs::write(&path, r#"{ "treshold": 0.5 }"#).unwrap();
    assert!(matches!(MatcherConfig::from_file(&path), Err(KbError::Json(_))));
}

#[test]
fn test_missing_kb_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = KnowledgeBase::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, KbError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}
