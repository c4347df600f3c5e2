use lineutils_core::{Concatenator, EffectiveFlags, NumberMode, RawFlags, Source, SourceOutcome};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn cat_lines(flags: EffectiveFlags, input: &str) -> Vec<String> {
    let mut cat = Concatenator::new(flags, Vec::new());
    cat.process_stream("input", Cursor::new(input.as_bytes().to_vec()))
        .unwrap();
    let out = String::from_utf8(cat.into_inner().unwrap()).unwrap();
    out.lines().map(str::to_string).collect()
}

#[test]
fn squeeze_off_keeps_line_count() {
    let input = "a\n\n\n\nb\n\n";
    assert_eq!(cat_lines(EffectiveFlags::default(), input).len(), 6);
}

#[test]
fn squeeze_on_leaves_one_empty_line_per_run() {
    let flags = EffectiveFlags::normalize(&RawFlags {
        squeeze_blank: true,
        ..Default::default()
    });
    let out = cat_lines(flags, "\n\nhello\n\n\nworld\n\n\n\n");
    assert_eq!(out, vec!["", "hello", "", "world", ""]);
    assert!(out.windows(2).all(|w| !(w[0].is_empty() && w[1].is_empty())));
}

#[test]
fn squeeze_end_to_end() {
    let flags = EffectiveFlags {
        squeeze_blank: true,
        ..Default::default()
    };
    assert_eq!(
        cat_lines(flags, "hello\n\n\nworld\n"),
        vec!["hello", "", "world"]
    );
}

#[test]
fn show_ends_and_tabs_end_to_end() {
    let flags = EffectiveFlags::normalize(&RawFlags {
        show_ends: true,
        show_tabs: true,
        ..Default::default()
    });
    assert_eq!(cat_lines(flags, "x\ty\n"), vec!["x^Iy$"]);
}

#[test]
fn show_all_matches_show_ends_plus_tabs() {
    let all = EffectiveFlags::normalize(&RawFlags {
        show_all: true,
        ..Default::default()
    });
    let explicit = EffectiveFlags::normalize(&RawFlags {
        show_ends: true,
        show_tabs: true,
        ..Default::default()
    });
    let input = "\ta\t\n\nb\n";
    assert_eq!(cat_lines(all, input), cat_lines(explicit, input));
}

#[test]
fn nonblank_wins_over_number_all() {
    let input = "one\n\ntwo\n\n\nthree\n";
    let both = EffectiveFlags::normalize(&RawFlags {
        number: true,
        number_nonblank: true,
        ..Default::default()
    });
    let nonblank = EffectiveFlags::normalize(&RawFlags {
        number_nonblank: true,
        ..Default::default()
    });
    let out = cat_lines(both, input);
    assert_eq!(out, cat_lines(nonblank, input));
    assert_eq!(
        out,
        vec!["     1  one", "", "     2  two", "", "", "     3  three"]
    );
}

#[test]
fn number_all_continues_across_files() {
    let first = write_file("a\nb\n");
    let second = write_file("c\n\nd");
    let flags = EffectiveFlags {
        number: NumberMode::All,
        ..Default::default()
    };

    let mut cat = Concatenator::new(flags, Vec::new());
    let summary = cat
        .run(&[
            Source::File(first.path().to_path_buf()),
            Source::File(second.path().to_path_buf()),
        ])
        .unwrap();
    assert_eq!(summary.sources, 2);
    assert_eq!(summary.lines_written, 5);
    assert!(!summary.has_failures());

    let out = String::from_utf8(cat.into_inner().unwrap()).unwrap();
    let numbers: Vec<u64> = out
        .lines()
        .map(|l| l[..6].trim().parse().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn missing_file_is_skipped() {
    let good = write_file("kept\n");
    let dir = tempfile::tempdir().unwrap();
    let sources = vec![
        Source::File(dir.path().join("absent.txt")),
        Source::File(good.path().to_path_buf()),
    ];

    let mut cat = Concatenator::new(EffectiveFlags::default(), Vec::new());
    let summary = cat.run(&sources).unwrap();
    assert_eq!(summary.sources, 2);
    assert_eq!(summary.open_failures, 1);
    assert_eq!(summary.read_failures, 0);
    assert_eq!(cat.into_inner().unwrap(), b"kept\n".to_vec());
}

#[test]
fn directory_source_fails_without_stopping_run() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_file("after\n");

    let mut cat = Concatenator::new(EffectiveFlags::default(), Vec::new());
    let first = cat.process(&Source::File(dir.path().to_path_buf())).unwrap();
    assert!(first.is_failure());
    let second = cat.process(&Source::File(good.path().to_path_buf())).unwrap();
    assert_eq!(second, SourceOutcome::Completed { lines: 1 });
    assert_eq!(cat.into_inner().unwrap(), b"after\n".to_vec());
}

#[test]
fn squeeze_state_starts_fresh_per_file() {
    let first = write_file("a\n\n");
    let second = write_file("\n\nb\n");
    let flags = EffectiveFlags {
        squeeze_blank: true,
        ..Default::default()
    };

    let mut cat = Concatenator::new(flags, Vec::new());
    cat.run(&[
        Source::File(first.path().to_path_buf()),
        Source::File(second.path().to_path_buf()),
    ])
    .unwrap();
    let out = String::from_utf8(cat.into_inner().unwrap()).unwrap();
    assert_eq!(out, "a\n\n\nb\n");
}
