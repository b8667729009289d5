//! Library integration tests.

use propsy::{ErrorKind, PropsyError};

#[test]
fn error_types_are_public() {
    let err = PropsyError::NoFilesFound {
        pattern: "*.properties".into(),
    };
    assert!(err.to_string().contains("*.properties"));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> propsy::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use propsy::cli::Cli;

    let cli = Cli::parse_from(["propsy", "--file", "*.props", "--all"]);
    assert_eq!(cli.file, "*.props");
    assert!(cli.all);
}
