//! Framework exchange tests: detection, conversion, the caller-side import
//! step, round-trip symmetry, and abort conditions.

use logweave_core::config::LogConfig;
use logweave_core::errors::ExchangeError;
use logweave_engine::exchange::ExchangeEngine;
use logweave_engine::ops::{Notice, OperationContext};
use logweave_engine::parser::{JavaParser, ParsedSource};
use logweave_engine::profiles::ProfileCollection;

// ---- Helpers ----

fn parse(source: &str) -> ParsedSource {
    JavaParser::new()
        .expect("grammar loads")
        .parse(source)
        .expect("source parses")
}

const SLF4J_FILE: &str = r#"package com.example;

import org.slf4j.Logger;
import org.slf4j.LoggerFactory;

public class Service {
    private static final Logger logger = LoggerFactory.getLogger(Service.class);

    void run() {
        work();
    }
}
"#;

/// Apply the exchange plus the caller-side import step.
fn exchange_fully(
    profiles: &ProfileCollection,
    config: &LogConfig,
    source: &str,
    target_title: &str,
) -> String {
    let engine = ExchangeEngine::new(profiles, config);
    let target = profiles.by_title(target_title).expect("target profile");

    let parsed = parse(source);
    let ctx = OperationContext::new(&parsed, 0, source.len());
    let exchanged = engine
        .exchange(&ctx, target)
        .expect("exchange succeeds")
        .apply(source)
        .expect("edits apply");

    let reparsed = parse(&exchanged);
    let mut set = logweave_engine::ops::EditSet::default();
    for edit in engine.import_edits(reparsed.root(), reparsed.source(), target) {
        set.push_edit(edit);
    }
    set.apply(&exchanged).expect("import edits apply")
}

// ---- Detection ----

#[test]
fn detect_names_the_convention_from_imports() {
    let collection = ProfileCollection::load(None).expect("load");
    let config = LogConfig::default();
    let engine = ExchangeEngine::new(&collection, &config);

    let parsed = parse(SLF4J_FILE);
    let detected = engine.detect(parsed.root(), parsed.source()).expect("detected");
    assert_eq!(detected.title, "SLF4J");

    let jul = r#"import java.util.logging.Logger;

class C {
    private static final Logger log = Logger.getLogger(C.class.getName());
}
"#;
    let parsed = parse(jul);
    let detected = engine.detect(parsed.root(), parsed.source()).expect("detected");
    assert_eq!(detected.title, "JDK Logging");
}

#[test]
fn detection_failure_aborts_without_edits() {
    let collection = ProfileCollection::load(None).expect("load");
    let config = LogConfig::default();
    let engine = ExchangeEngine::new(&collection, &config);

    let source = r#"import java.util.List;

class C {
    private final List<String> names = null;
}
"#;
    let parsed = parse(source);
    assert!(engine.detect(parsed.root(), parsed.source()).is_none());

    let ctx = OperationContext::new(&parsed, 0, source.len());
    let target = collection.by_title("Log4j2").unwrap();
    assert!(matches!(
        engine.exchange(&ctx, target),
        Err(ExchangeError::DetectionFailed)
    ));
}

#[test]
fn exchanging_to_the_same_convention_is_a_notice() {
    let collection = ProfileCollection::load(None).expect("load");
    let config = LogConfig::default();
    let engine = ExchangeEngine::new(&collection, &config);

    let parsed = parse(SLF4J_FILE);
    let ctx = OperationContext::new(&parsed, 0, SLF4J_FILE.len());
    let target = collection.by_title("SLF4J").unwrap();
    let set = engine.exchange(&ctx, target).expect("no-op exchange");
    assert!(set.is_empty());
    assert!(set.notices().contains(&Notice::ConventionUnchanged));
}

// ---- Conversion ----

#[test]
fn exchange_rewrites_declaration_and_imports() {
    let collection = ProfileCollection::load(None).expect("load");
    let config = LogConfig::default();
    let converted = exchange_fully(&collection, &config, SLF4J_FILE, "Log4j2");

    assert!(converted.contains(
        "private static final Logger logger = LogManager.getLogger(Service.class);"
    ));
    assert!(converted.contains("import org.apache.logging.log4j.LogManager;"));
    assert!(converted.contains("import org.apache.logging.log4j.Logger;"));
    assert!(!converted.contains("org.slf4j"));
    assert!(!converted.contains("LoggerFactory"));
    assert!(converted.contains("work();"), "unrelated code untouched");
}

#[test]
fn exchange_preserves_the_variable_name() {
    let source = r#"import org.slf4j.Logger;
import org.slf4j.LoggerFactory;

class C {
    private static final Logger _log = LoggerFactory.getLogger(C.class);
}
"#;
    let collection = ProfileCollection::load(None).expect("load");
    let config = LogConfig::default();
    let converted = exchange_fully(&collection, &config, source, "JDK Logging");

    assert!(converted.contains(
        "private static final Logger _log = Logger.getLogger(C.class.getName());"
    ));
    assert!(!converted.contains("org.slf4j"));
}

#[test]
fn exchange_without_a_logger_field_is_an_error() {
    let source = r#"import org.slf4j.Logger;

class C {
    void run() {}
}
"#;
    let collection = ProfileCollection::load(None).expect("load");
    let config = LogConfig::default();
    let engine = ExchangeEngine::new(&collection, &config);

    let parsed = parse(source);
    let ctx = OperationContext::new(&parsed, 0, source.len());
    let target = collection.by_title("Log4j2").unwrap();
    assert!(matches!(
        engine.exchange(&ctx, target),
        Err(ExchangeError::NoLoggerField)
    ));
}

// ---- Symmetry ----

#[test]
fn exchange_round_trip_restores_imports_and_declaration() {
    let collection = ProfileCollection::load(None).expect("load");
    let config = LogConfig::default();

    let there = exchange_fully(&collection, &config, SLF4J_FILE, "Log4j2");
    let back = exchange_fully(&collection, &config, &there, "SLF4J");

    assert!(back.contains("import org.slf4j.Logger;"));
    assert!(back.contains("import org.slf4j.LoggerFactory;"));
    assert!(back.contains(
        "private static final Logger logger = LoggerFactory.getLogger(Service.class);"
    ));
    assert!(!back.contains("log4j"));
}

#[test]
fn only_the_first_logger_field_is_converted() {
    let source = r#"import org.slf4j.Logger;
import org.slf4j.LoggerFactory;

class Outer {
    private static final Logger logger = LoggerFactory.getLogger(Outer.class);
    private static final Logger log = LoggerFactory.getLogger(Outer.class);
}
"#;
    let collection = ProfileCollection::load(None).expect("load");
    let config = LogConfig::default();
    let converted = exchange_fully(&collection, &config, source, "Log4j2");

    assert!(converted.contains("LogManager.getLogger(Outer.class);"));
    // The second field keeps its old initializer; multi-logger files are
    // out of scope for the exchange.
    assert!(converted.contains("LoggerFactory.getLogger(Outer.class);"));
}
