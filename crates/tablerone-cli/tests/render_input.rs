#![forbid(unsafe_code)]

//! Flags and JSON in, table out.

use tablerone::{Error, PaddingField, StyleError, TableError};
use tablerone_cli::cli::{Command, Opts};
use tablerone_cli::{RunError, render_input};

fn opts(args: &[&str]) -> Opts {
    match Opts::parse_from(args.iter().map(|s| s.to_string()), |_| None).unwrap() {
        Command::Render(opts) => opts,
        other => panic!("expected render, got {other:?}"),
    }
}

#[test]
fn default_box_table() {
    let out = render_input(&opts(&[]), r#"[[1, 2], [3, 4]]"#).unwrap();
    assert_eq!(out, "╔═════╗\n║ 1 2 ║\n║     ║\n║ 3 4 ║\n╚═════╝");
}

#[test]
fn merged_header_with_flags() {
    let out = render_input(
        &opts(&[
            "--style=ascii",
            "--vertical-separator",
            "--top-row-separator",
            "--align-body=left,right",
        ]),
        r#"[["totals", {"merge": "left"}], ["x", 10], ["yy", 2]]"#,
    )
    .unwrap();
    assert_eq!(
        out.split('\n').collect::<Vec<_>>(),
        vec![
            "+---------+",
            "|  totals |",
            "+----+----+",
            "| x  | 10 |",
            "|    |    |",
            "| yy |  2 |",
            "+----+----+",
        ]
    );
}

#[test]
fn markdown_output() {
    let out = render_input(&opts(&["--markdown", "--align=left"]), r#"[["k", "v"], ["a", null]]"#)
        .unwrap();
    assert_eq!(out, "| k   | v   |\n| :-- | :-- |\n| a   |     |");
}

#[test]
fn markdown_rejects_merges() {
    let err = render_input(&opts(&["--markdown"]), r#"[["a", {"merge": "left"}]]"#).unwrap_err();
    assert!(matches!(
        err,
        RunError::Render(Error::Table(TableError::MergeInMarkdown { row: 0, col: 1 }))
    ));
}

#[test]
fn negative_paddings_reported_together() {
    let err = render_input(
        &opts(&[
            "--padding-horizontal-no-border=-1",
            "--padding-vertical-no-border=-2",
        ]),
        r#"[["a"]]"#,
    )
    .unwrap_err();
    let RunError::Render(Error::Padding(errs)) = err else {
        panic!("expected padding errors, got {err:?}");
    };
    assert_eq!(
        errs.fields(),
        vec![PaddingField::HorizontalNoBorder, PaddingField::VerticalNoBorder]
    );
}

#[test]
fn style_is_checked_before_input() {
    let err = render_input(&opts(&["--style=╔╗╚╝"]), "not json").unwrap_err();
    assert!(matches!(
        err,
        RunError::Render(Error::Style(StyleError::InvalidLength { length: 4 }))
    ));
}

#[test]
fn bad_json_is_an_input_error() {
    let err = render_input(&opts(&[]), "[[1,").unwrap_err();
    assert!(matches!(err, RunError::Input(_)));
    assert!(err.to_string().starts_with("invalid JSON input"));
}
