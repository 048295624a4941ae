// Integration tests for wordmaster
// These tests drive a whole session through scripted input, the way the binary does

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use wordmaster::*;

fn fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("wordmaster_it_{name}.txt"));
    fs::write(&path, contents).unwrap();
    path
}

fn run_script(session: &mut Session, script: &str) -> String {
    let mut source = BufReadSource::new(Cursor::new(script.to_string()));
    let mut out = Vec::new();
    repl(session, &mut source, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_load_filter_print_workflow() {
    let path = fixture("workflow", "cat\ncar\nbat\nboat\ncoat");
    let mut session = Session::new();

    let script = format!("load \"{}\"\nlength 3\nmask C-T\nprint\nexit\n", path.display());
    let output = run_script(&mut session, &script);

    assert!(output.contains("5 entries added."));
    assert!(output.contains("Filtering for length 3..."));
    assert!(output.ends_with("---- LIST START ----\nCAT\n---- LIST   END ----\n"));
    assert_eq!(session.words().words(), ["CAT"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_normalizes_umlauts() {
    let path = fixture("umlauts", "über\nmädchen\nköln");
    let mut session = Session::new();

    run_script(&mut session, &format!("load \"{}\"\n", path.display()));
    assert_eq!(session.words().words(), ["UEBER", "MAEDCHEN", "KOELN"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_loading_accumulates_and_keeps_blank_lines() {
    let first = fixture("first", "one\n\ntwo\n");
    let second = fixture("second", "one");
    let mut session = Session::new();

    let output = run_script(
        &mut session,
        &format!("load \"{}\" \"{}\"\n", first.display(), second.display()),
    );
    assert!(output.contains("4 entries added."));
    assert!(output.contains("1 entries added."));
    assert!(output.ends_with("WordList now contains 5 words.\n"));
    assert_eq!(session.words().words(), ["ONE", "", "TWO", "", "ONE"]);

    let _ = fs::remove_file(&first);
    let _ = fs::remove_file(&second);
}

#[test]
fn test_failed_path_does_not_stop_other_paths() {
    let good = fixture("good", "alpha\nbeta");
    let missing = std::env::temp_dir().join("wordmaster_it_missing.txt");
    let _ = fs::remove_file(&missing);
    let mut session = Session::new();

    let output = run_script(
        &mut session,
        &format!("load \"{}\" \"{}\"\n", missing.display(), good.display()),
    );
    assert!(output.contains("failed to read"));
    assert_eq!(session.words().words(), ["ALPHA", "BETA"]);

    let _ = fs::remove_file(&good);
}

#[test]
fn test_mask_and_inverted_mask_on_same_start() {
    let words = ["CAT", "CAR", "BAT"].map(String::from).to_vec();

    let mut plain = WordSet::from(words.clone());
    plain.apply(&Filter::mask("C-T", false)).unwrap();
    assert_eq!(plain.words(), ["CAT"]);

    let mut inverted = WordSet::from(words);
    inverted.apply(&Filter::mask("C-T", true)).unwrap();
    assert_eq!(inverted.words(), ["CAR", "BAT"]);
}

#[test]
fn test_inverted_mask_keeps_other_lengths() {
    let mut session = Session::new();
    let path = fixture("lengths", "CAT\nCATS\nCOT");
    run_script(&mut session, &format!("load \"{}\"\n!mask C-T\n", path.display()));
    assert_eq!(session.words().words(), ["CATS"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_letters_then_forbidden_letters() {
    let path = fixture("letters", "crane\nslate\ntrace\nplace\ngrace");
    let mut session = Session::new();

    run_script(
        &mut session,
        &format!("load \"{}\"\nletters AC\n!letters R\n", path.display()),
    );
    assert_eq!(session.words().words(), ["PLACE"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_sanity_check_keeps_list_across_commands() {
    let path = fixture("sanity", "cat\ndog");
    let mut session = Session::new();

    let output = run_script(
        &mut session,
        &format!(
            "load \"{}\"\nlength 9\nlength 5 8\nmask ----\nletters Q\n!letters AO\ncount\n",
            path.display()
        ),
    );
    assert_eq!(output.matches("No words would be left").count(), 5);
    assert!(output.ends_with("WordList now contains 2 words.\n"));
    assert_eq!(session.words().words(), ["CAT", "DOG"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_bad_input_never_mutates() {
    let path = fixture("badinput", "cat\ndog");
    let mut session = Session::new();

    let output = run_script(
        &mut session,
        &format!(
            "load \"{}\"\nlength x\nlength 1 2 3\nmask\nprint now\nclean\nwhat is this\n",
            path.display()
        ),
    );
    assert!(output.contains("Invalid length"));
    assert!(output.contains("Invalid number of arguments."));
    assert!(output.contains("Missing argument."));
    assert!(output.contains("Unnecessary argument."));
    assert!(output.contains("Type \"clean yes\" if you REALLY mean it!"));
    assert!(output.contains("Unrecognized input: [what is this]"));
    assert_eq!(session.words().len(), 2);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_clean_then_reload() {
    let path = fixture("reload", "cat");
    let mut session = Session::new();

    run_script(
        &mut session,
        &format!("load \"{0}\"\nclean yes\nload \"{0}\"\n", path.display()),
    );
    assert_eq!(session.words().words(), ["CAT"]);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_tokenizer_feeds_commands() {
    assert_eq!(tokenize("load \"my file.txt\""), vec!["load", "my file.txt"]);
    assert_eq!(tokenize("mask a\\ b"), vec!["mask", "a b"]);
    assert_eq!(
        Command::parse("mask A\\ B").unwrap(),
        Some(Command::Filter(vec![Filter::mask("A B", false)]))
    );
}

#[test]
fn test_escaped_path_with_space() {
    let dir = std::env::temp_dir().join("wordmaster it dir");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("list.txt");
    fs::write(&path, "x\ny").unwrap();
    let mut session = Session::new();

    let escaped = path.display().to_string().replace(' ', "\\ ");
    run_script(&mut session, &format!("load {escaped}\n"));
    assert_eq!(session.words().words(), ["X", "Y"]);

    let _ = fs::remove_dir_all(&dir);
}
