//! End-to-end runs of the clean command over in-memory channels.

use pastewash::Config;
use pastewash::cli::{CleanArgs, run_clean};
use pastewash::io::Memory;
use pretty_assertions::assert_eq;

struct Run {
    output: Option<String>,
    out: String,
    err: String,
}

fn run(input: &str, args: CleanArgs, config: Config) -> Run {
    let mut channel = Memory::new(input);
    let mut out = Vec::new();
    let mut err = Vec::new();
    run_clean(&args, &config, &mut channel, &mut out, &mut err).unwrap();
    Run {
        output: channel.output,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

#[test]
fn test_stream_mode_writes_only_payload() {
    let result = run("a\u{200B}b\u{FEFF}c", CleanArgs::default(), Config::default());
    assert_eq!(result.output.as_deref(), Some("abc"));
    assert!(result.out.is_empty());
    assert!(result.err.is_empty());
}

#[test]
fn test_clipboard_mode_reports_length() {
    let args = CleanArgs {
        clipboard: true,
        ..Default::default()
    };
    let result = run("caf\u{e9}\u{2060}!", args, Config::default());
    assert_eq!(result.output.as_deref(), Some("caf\u{e9}!"));
    assert_eq!(result.out, "Cleaned text copied to clipboard (5 characters)\n");
}

#[test]
fn test_count_under_limit() {
    let args = CleanArgs {
        count: true,
        ..Default::default()
    };
    let result = run("short post", args, Config::default());
    assert_eq!(result.err, "\n---\nCharacter count: 10\n");
}

#[test]
fn test_count_warns_over_limit() {
    let args = CleanArgs {
        count: true,
        ..Default::default()
    };
    let input = format!("{}\u{200B}", "x".repeat(3005));
    let result = run(&input, args, Config::default());
    assert!(result.err.contains("Character count: 3005"));
    assert!(
        result
            .err
            .contains("WARNING: Exceeds LinkedIn's 3000 character limit by 5")
    );
}

#[test]
fn test_count_respects_configured_limit() {
    let args = CleanArgs {
        count: true,
        ..Default::default()
    };
    let config = Config { char_limit: 5 };
    let result = run("123456", args, config);
    assert!(result.err.contains("WARNING: Exceeds the 5 character limit by 1"));
}

#[test]
fn test_show_removed_summary() {
    let args = CleanArgs {
        show_removed: true,
        ..Default::default()
    };
    let result = run("\u{200B}hi\u{200B}\u{00AD}", args, Config::default());
    assert_eq!(result.output.as_deref(), Some("hi"));
    assert_eq!(
        result.err,
        "Removed 2 x U+200B ZERO WIDTH SPACE\nRemoved 1 x U+00AD SOFT HYPHEN\n"
    );
}

#[test]
fn test_show_removed_on_clean_text() {
    let args = CleanArgs {
        show_removed: true,
        ..Default::default()
    };
    let result = run("nothing hidden", args, Config::default());
    assert_eq!(result.err, "No hidden characters found\n");
}

#[test]
fn test_empty_input() {
    let args = CleanArgs {
        count: true,
        ..Default::default()
    };
    let result = run("", args, Config::default());
    assert_eq!(result.output.as_deref(), Some(""));
    assert_eq!(result.err, "\n---\nCharacter count: 0\n");
}

#[test]
fn test_malformed_limit_does_not_stop_a_run() {
    for bad in ["abc", "0"] {
        let config = Config::from_lookup_or_default(|_| Some(bad.to_string()));

        let plain = run("a\u{200B}b", CleanArgs::default(), config.clone());
        assert_eq!(plain.output.as_deref(), Some("ab"));

        let args = CleanArgs {
            count: true,
            ..Default::default()
        };
        let counted = run("a\u{200B}b", args, config);
        assert_eq!(counted.err, "\n---\nCharacter count: 2\n");
    }
}
