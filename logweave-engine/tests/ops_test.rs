//! Logging operation engine tests: declaration idempotence, whole-method
//! and whole-class logging, the skip-set, removal round-trips, reapply
//! idempotence, and console-print substitution.

use logweave_core::config::LogConfig;
use logweave_engine::adapter;
use logweave_engine::ops::{LoggingEngine, Notice, OperationContext};
use logweave_engine::parser::{JavaParser, ParsedSource};
use logweave_engine::profiles::ProfileCollection;

// ---- Helpers ----

fn parse(source: &str) -> ParsedSource {
    JavaParser::new()
        .expect("grammar loads")
        .parse(source)
        .expect("source parses")
}

fn profiles() -> ProfileCollection {
    ProfileCollection::load(None).expect("built-in profiles load")
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Statement count of the first method with the given name.
fn method_statement_count(parsed: &ParsedSource, name: &str) -> usize {
    for ty in adapter::types(parsed.root()) {
        for method in adapter::methods(ty) {
            if adapter::method_name(method, parsed.source()) == name {
                let body = adapter::method_body(method).expect("method has a body");
                return adapter::statements(body).len();
            }
        }
    }
    panic!("method {name} not found");
}

// ---- Declare logger ----

const SERVICE: &str = r#"package com.example;

public class Service {
    void run() {
        work();
    }
}
"#;

#[test]
fn declare_logger_inserts_declaration_and_imports() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(SERVICE);
    let ctx = OperationContext::new(&parsed, SERVICE.find("run").unwrap(), 0);
    let set = engine.declare_logger(&ctx).expect("declare succeeds");
    let applied = set.apply(SERVICE).expect("edits apply");

    assert!(applied.contains(
        "private static final Logger logger = LoggerFactory.getLogger(Service.class);"
    ));
    assert!(applied.contains("import org.slf4j.Logger;"));
    assert!(applied.contains("import org.slf4j.LoggerFactory;"));
    // Declaration lands before the first member.
    assert!(applied.find("Logger logger").unwrap() < applied.find("void run").unwrap());
}

#[test]
fn declare_logger_is_idempotent() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(SERVICE);
    let ctx = OperationContext::new(&parsed, SERVICE.find("run").unwrap(), 0);
    let once = engine
        .declare_logger(&ctx)
        .unwrap()
        .apply(SERVICE)
        .unwrap();

    let reparsed = parse(&once);
    let ctx2 = OperationContext::new(&reparsed, once.find("run").unwrap(), 0);
    let second = engine.declare_logger(&ctx2).expect("second declare succeeds");

    assert!(second.is_empty(), "second declare must produce no edits");
    assert!(second.notices().contains(&Notice::LoggerAlreadyDeclared));
    assert_eq!(count(&once, "LoggerFactory.getLogger"), 1);
}

#[test]
fn declare_logger_honors_static_final_flags() {
    let collection = profiles();
    let config = LogConfig {
        use_static: Some(false),
        ..LogConfig::default()
    };
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(SERVICE);
    let ctx = OperationContext::new(&parsed, SERVICE.find("run").unwrap(), 0);
    let applied = engine.declare_logger(&ctx).unwrap().apply(SERVICE).unwrap();

    assert!(applied.contains("private final Logger logger ="));
    assert!(!applied.contains("private static final Logger"));
}

// ---- Log method ----

const CALC: &str = r#"public class Calc {
    int add(int a, int b) {
        return a + b;
    }
}
"#;

#[test]
fn log_method_single_return_gets_entry_and_one_exit() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(CALC);
    let ctx = OperationContext::new(&parsed, CALC.find("return").unwrap(), 0);
    let applied = engine.log_method(&ctx).unwrap().apply(CALC).unwrap();

    assert_eq!(count(&applied, "add - start"), 1);
    assert_eq!(count(&applied, "add - end"), 1);
    // Entry, then exit, then the return — and no trailing exit after it.
    let start = applied.find("add - start").unwrap();
    let end = applied.find("add - end").unwrap();
    let ret = applied.find("return a + b").unwrap();
    assert!(start < end && end < ret, "statement order: {applied}");
    assert_eq!(method_statement_count(&parse(&applied), "add"), 3);
}

#[test]
fn log_method_bare_identifier_return_logs_the_value() {
    let source = r#"public class Calc {
    int pick(int a) {
        int best = a;
        return best;
    }
}
"#;
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(source);
    let ctx = OperationContext::new(&parsed, source.find("return").unwrap(), 0);
    let applied = engine.log_method(&ctx).unwrap().apply(source).unwrap();

    assert!(
        applied.contains("pick - end: {}\", best);"),
        "exit should carry the returned identifier: {applied}"
    );
}

#[test]
fn log_method_void_body_gets_trailing_exit() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(SERVICE);
    let ctx = OperationContext::new(&parsed, SERVICE.find("work").unwrap(), 0);
    let applied = engine.log_method(&ctx).unwrap().apply(SERVICE).unwrap();

    let start = applied.find("run - start").unwrap();
    let work = applied.find("work();").unwrap();
    let end = applied.find("run - end").unwrap();
    assert!(start < work && work < end, "exit appended last: {applied}");
}

#[test]
fn log_method_empty_body_gets_entry_and_exit() {
    let source = r#"public class Noop {
    void idle() {}
}
"#;
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(source);
    let ctx = OperationContext::new(&parsed, source.find("idle").unwrap() + 1, 0);
    let applied = engine.log_method(&ctx).unwrap().apply(source).unwrap();

    assert_eq!(count(&applied, "idle - start"), 1);
    assert_eq!(count(&applied, "idle - end"), 1);
    assert_eq!(method_statement_count(&parse(&applied), "idle"), 2);
}

// ---- Catch blocks ----

const IO: &str = r#"public class Io {
    void copy() {
        try {
            open();
        } catch (IOException e) {
        } catch (RuntimeException e) {
            retry();
        }
    }
}
"#;

#[test]
fn log_method_fills_only_empty_catch_blocks() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(IO);
    let ctx = OperationContext::new(&parsed, IO.find("try").unwrap(), 0);
    let applied = engine.log_method(&ctx).unwrap().apply(IO).unwrap();

    assert_eq!(count(&applied, "copy - exception"), 1);
    assert!(applied.contains("logger.error(\"copy - exception\", e);"));
    assert_eq!(count(&applied, "retry();"), 1);

    let reparsed = parse(&applied);
    let clauses = adapter::catch_clauses(reparsed.root());
    assert_eq!(clauses.len(), 2);
    for clause in clauses {
        let body = clause.child_by_field_name("body").unwrap();
        assert_eq!(
            adapter::statements(body).len(),
            1,
            "each catch block holds exactly one statement"
        );
    }
}

// ---- Round-trip: log then remove ----

#[test]
fn remove_after_log_restores_statement_counts() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(IO);
    let before = method_statement_count(&parsed, "copy");
    let ctx = OperationContext::new(&parsed, IO.find("try").unwrap(), 0);
    let logged = engine.log_method(&ctx).unwrap().apply(IO).unwrap();
    assert!(method_statement_count(&parse(&logged), "copy") > before);

    let reparsed = parse(&logged);
    let ctx2 = OperationContext::new(&reparsed, logged.find("try").unwrap(), 0);
    let restored = engine.remove_method(&ctx2).unwrap().apply(&logged).unwrap();

    assert_eq!(method_statement_count(&parse(&restored), "copy"), before);
    assert_eq!(count(&restored, "logger."), 0);
    assert_eq!(count(&restored, "retry();"), 1, "user code untouched");
}

// ---- Reapply ----

#[test]
fn reapply_method_is_idempotent() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(CALC);
    let ctx = OperationContext::new(&parsed, CALC.find("return").unwrap(), 0);
    let logged = engine.log_method(&ctx).unwrap().apply(CALC).unwrap();

    let reparsed = parse(&logged);
    let ctx2 = OperationContext::new(&reparsed, logged.find("return a + b").unwrap(), 0);
    let once = engine.reapply_method(&ctx2).unwrap().apply(&logged).unwrap();

    let reparsed2 = parse(&once);
    let ctx3 = OperationContext::new(&reparsed2, once.find("return a + b").unwrap(), 0);
    let twice = engine.reapply_method(&ctx3).unwrap().apply(&once).unwrap();

    assert_eq!(method_statement_count(&parse(&once), "add"), 3);
    assert_eq!(method_statement_count(&parse(&twice), "add"), 3);
    assert_eq!(count(&twice, "add - start"), 1);
    assert_eq!(count(&twice, "add - end"), 1);
}

// ---- Skip-set ----

const BEAN: &str = r#"public class Bean {
    private int value;

    public Bean() {
        this.value = 0;
    }

    public int getValue() {
        return value;
    }

    public void setValue(int v) {
        this.value = v;
    }

    public String toString() {
        return "Bean";
    }

    public int hashCode() {
        return value;
    }

    public boolean equals(Object other) {
        return other == this;
    }

    public void process() {
        value++;
    }
}
"#;

#[test]
fn log_class_touches_only_the_plain_method() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(BEAN);
    let ctx = OperationContext::new(&parsed, BEAN.find("class Bean").unwrap() + 6, 0);
    let applied = engine.log_class(&ctx).unwrap().apply(BEAN).unwrap();

    assert_eq!(count(&applied, " - start"), 1);
    assert_eq!(count(&applied, "process - start"), 1);
    assert_eq!(count(&applied, "getValue - start"), 0);
    assert_eq!(count(&applied, "setValue - start"), 0);
    assert_eq!(count(&applied, "toString - start"), 0);
    assert_eq!(count(&applied, "hashCode - start"), 0);
    assert_eq!(count(&applied, "equals - start"), 0);
    assert_eq!(count(&applied, "Bean - start"), 0, "constructor skipped");
}

#[test]
fn log_class_with_no_eligible_methods_is_a_notice() {
    let source = r#"public class OnlyBean {
    private int value;

    public int getValue() {
        return value;
    }
}
"#;
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(source);
    let ctx = OperationContext::new(&parsed, source.find("OnlyBean").unwrap(), 0);
    let set = engine.log_class(&ctx).unwrap();
    assert!(set.is_empty());
    assert!(set.notices().contains(&Notice::NoEligibleMethods));
}

// ---- Variable logging ----

#[test]
fn log_variable_inserts_after_the_declaration() {
    let source = r#"public class V {
    void run() {
        int total = compute();
        publish(total);
    }
}
"#;
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(source);
    let ctx = OperationContext::new(&parsed, source.find("total").unwrap(), 0);
    let applied = engine.log_variable(&ctx).unwrap().apply(source).unwrap();

    assert!(applied.contains("logger.debug(\"total: {}\", total);"));
    let decl = applied.find("int total").unwrap();
    let log = applied.find("logger.debug").unwrap();
    let publish = applied.find("publish").unwrap();
    assert!(decl < log && log < publish, "log follows the declaration");
}

#[test]
fn log_message_anchors_to_the_statement_at_the_cursor() {
    let source = r#"public class M {
    void run() {
        first();
        second();
    }
}
"#;
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);
    let parsed = parse(source);

    // Cursor on `second()` inserts before it.
    let ctx = OperationContext::new(&parsed, source.find("second").unwrap(), 0);
    let applied = engine.log_message(&ctx, "\"checkpoint\"").unwrap().apply(source).unwrap();
    let log = applied.find("logger.debug(\"checkpoint\");").unwrap();
    assert!(applied.find("first();").unwrap() < log);
    assert!(log < applied.find("second();").unwrap());

    // Cursor past the last statement appends.
    let end_offset = source.find("second();").unwrap() + "second();".len();
    let ctx = OperationContext::new(&parsed, end_offset, 0);
    let applied = engine.log_message(&ctx, "\"done\"").unwrap().apply(source).unwrap();
    assert!(applied.find("second();").unwrap() < applied.find("logger.debug(\"done\");").unwrap());
}

#[test]
fn log_variable_away_from_a_declaration_is_an_error() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(SERVICE);
    let ctx = OperationContext::new(&parsed, SERVICE.find("work").unwrap(), 0);
    assert!(engine.log_variable(&ctx).is_err());
}

// ---- Console-print substitution ----

#[test]
fn println_substitution_maps_streams_to_severities() {
    let source = r#"public class Out {
    void emit(int x) {
        System.out.println(x);
        System.err.println("boom");
    }
}
"#;
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(source);
    let ctx = OperationContext::new(&parsed, source.find("Out").unwrap(), 0);
    let applied = engine
        .replace_system_println_in_class(&ctx)
        .unwrap()
        .apply(source)
        .unwrap();

    assert!(applied.contains("logger.info(x);"));
    assert!(applied.contains("logger.error(\"boom\");"));
    assert_eq!(count(&applied, "System.out"), 0);
    assert_eq!(count(&applied, "System.err"), 0);
}

#[test]
fn println_substitution_without_prints_is_a_notice() {
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(SERVICE);
    let ctx = OperationContext::new(&parsed, SERVICE.find("Service").unwrap(), 0);
    let set = engine.replace_system_println_in_class(&ctx).unwrap();
    assert!(set.is_empty());
    assert!(set.notices().contains(&Notice::NoConsoleCalls));
}

// ---- Guarded statements ----

#[test]
fn guard_flag_wraps_and_advanced_removal_unwraps() {
    let collection = profiles();
    let config = LogConfig {
        use_guard: Some(true),
        catch_enabled: Some(false),
        ..LogConfig::default()
    };
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(SERVICE);
    let ctx = OperationContext::new(&parsed, SERVICE.find("work").unwrap(), 0);
    let applied = engine.log_method(&ctx).unwrap().apply(SERVICE).unwrap();

    assert!(applied.contains("if (logger.isDebugEnabled()) {"));
    assert_eq!(count(&applied, "run - start"), 1);

    // Plain removal must not touch the guarded unit...
    let reparsed = parse(&applied);
    let ctx2 = OperationContext::new(&reparsed, applied.find("work").unwrap(), 0);
    let method = adapter::enclosing_method(reparsed.root(), applied.find("work();").unwrap())
        .expect("method");
    let body = adapter::method_body(method).unwrap();
    assert!(engine.remove_log_statements(&ctx2, body).is_empty());

    // ...while advanced removal strips it as one unit.
    let restored = engine.remove_method(&ctx2).unwrap().apply(&applied).unwrap();
    assert_eq!(count(&restored, "logger."), 0);
    assert_eq!(count(&restored, "work();"), 1);
    assert_eq!(method_statement_count(&parse(&restored), "run"), 1);
}

// ---- Remove logger complete ----

#[test]
fn remove_logger_complete_strips_statements_field_and_imports() {
    let source = r#"package com.example;

import org.slf4j.Logger;
import org.slf4j.LoggerFactory;

public class Service {
    private static final Logger logger = LoggerFactory.getLogger(Service.class);

    void run() {
        logger.debug("run - start");
        work();
        logger.debug("run - end");
    }
}
"#;
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(source);
    let ctx = OperationContext::new(&parsed, source.find("run").unwrap(), 0);
    let applied = engine
        .remove_logger_complete(&ctx)
        .unwrap()
        .apply(source)
        .unwrap();

    assert_eq!(count(&applied, "logger."), 0);
    assert!(!applied.contains("private static final Logger"));
    assert!(!applied.contains("import org.slf4j"));
    assert_eq!(count(&applied, "work();"), 1);
}

#[test]
fn remove_logger_complete_keeps_imports_while_references_remain() {
    let source = r#"package com.example;

import org.slf4j.Logger;
import org.slf4j.LoggerFactory;

public class Service {
    private static final Logger logger = LoggerFactory.getLogger(Service.class);

    void run() {
        logger.debug("run - start");
        audit(logger);
    }
}
"#;
    let collection = profiles();
    let config = LogConfig::default();
    let engine = LoggingEngine::new(collection.default_profile().unwrap(), &config);

    let parsed = parse(source);
    let ctx = OperationContext::new(&parsed, source.find("run").unwrap(), 0);
    let applied = engine
        .remove_logger_complete(&ctx)
        .unwrap()
        .apply(source)
        .unwrap();

    assert!(applied.contains("audit(logger);"), "user code untouched");
    assert!(
        applied.contains("import org.slf4j.Logger;"),
        "imports stay while the identifier is still referenced"
    );
}
