//! Tests for the Logweave error handling system.

use logweave_core::errors::error_code::LogweaveErrorCode;
use logweave_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let parse = ParseError::Failed {
        message: "no tree".into(),
    };
    assert!(!parse.error_code().is_empty());

    let config = ConfigError::Parse {
        message: "bad toml".into(),
    };
    assert!(!config.error_code().is_empty());

    let profile = ProfileError::BuiltInImmutable {
        title: "SLF4J".into(),
    };
    assert!(!profile.error_code().is_empty());

    let render = RenderError::MissingTemplate {
        key: "LOGGER_FATAL_STATEMENT".into(),
    };
    assert!(!render.error_code().is_empty());

    let op = OpError::NoEnclosingMethod { offset: 42 };
    assert!(!op.error_code().is_empty());

    let exchange = ExchangeError::DetectionFailed;
    assert!(!exchange.error_code().is_empty());
}

#[test]
fn test_coded_string_format() {
    let op = OpError::OverlappingEdits;
    let coded = op.coded_string();
    assert!(coded.starts_with("[EDIT_CONFLICT] "), "got: {coded}");

    let render = RenderError::MissingTemplate {
        key: "LOGGER_POS_END_STATEMENT".into(),
    };
    assert!(render.coded_string().starts_with("[TEMPLATE_MISSING] "));
}

#[test]
fn test_from_conversions() {
    let render = RenderError::MissingTemplate { key: "K".into() };
    let op: OpError = render.into();
    assert!(matches!(op, OpError::Render(RenderError::MissingTemplate { .. })));

    let parse = ParseError::Failed {
        message: "m".into(),
    };
    let op: OpError = parse.into();
    assert!(matches!(op, OpError::Parse(ParseError::Failed { .. })));

    let render = RenderError::InvalidFragment {
        key: "K".into(),
        rendered: "???".into(),
    };
    let exchange: ExchangeError = render.into();
    assert!(matches!(exchange, ExchangeError::Render(_)));
}

#[test]
fn test_store_io_errors_share_code() {
    let io = ProfileError::Io {
        path: "/tmp/profiles.xml".into(),
        message: "denied".into(),
    };
    let xml = ProfileError::Xml {
        message: "unexpected eof".into(),
    };
    assert_eq!(io.error_code(), xml.error_code());
    assert_ne!(
        io.error_code(),
        ProfileError::DuplicateTitle { title: "X".into() }.error_code()
    );
}
