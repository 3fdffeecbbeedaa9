//! End-to-end checks through the public API: corpus text to candidate lists
//! on disk, then back into a game.

use jamo_wordle::commands::{BuildConfig, run_build};
use jamo_wordle::core::keyboard::is_keyboard_jamo;
use jamo_wordle::core::{Feedback, JamoWord, decompose, evaluate};
use jamo_wordle::game::{GameStatus, Session};
use jamo_wordle::wordlists::loader::{load_candidates, to_json};
use jamo_wordle::wordlists::{
    BuildOptions, CorpusFormat, LengthSelector, SUPPORTED_LENGTHS, build, parse_corpus,
};
use std::fs;
use std::path::PathBuf;

const CORPUS: &str = "word\tcount\n\
바나나\t90\n\
가나다\t80\n\
사람이\t70\n\
닭고기\t60\n\
과자를\t50\n\
바나나\t40\n\
가나다라\t30\n\
하나로\t2\n";

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("jamo_wordle_it_{}_{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn corpus_to_lists_in_memory() {
    let parsed = parse_corpus(CORPUS, CorpusFormat::Tsv);
    assert!(parsed.header_skipped);
    assert_eq!(parsed.rows.len(), 8);

    let options = BuildOptions {
        min_count: Some(10),
        top_n: None,
    };
    let built = build(parsed.rows, &SUPPORTED_LENGTHS, is_keyboard_jamo, options);

    assert_eq!(built[&6].list.words(), ["ㄱㅏㄴㅏㄷㅏ", "ㅂㅏㄴㅏㄴㅏ"]);
    assert_eq!(built[&6].report.duplicates, 1);
    assert_eq!(built[&7].list.words(), ["ㅅㅏㄹㅏㅁㅇㅣ"]);
    assert_eq!(built[&7].report.filtered_keyboard, 1); // 과자를
    assert_eq!(built[&8].list.words(), ["ㄱㅏㄴㅏㄷㅏㄹㅏ", "ㄷㅏㄹㄱㄱㅗㄱㅣ"]);

    for (length, list) in &built {
        assert!(list.list.words().iter().all(|w| w.chars().count() == *length));
        assert!(list.list.words().windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn build_then_play() {
    let dir = temp_dir("play");
    let input = dir.join("corpus.tsv");
    fs::write(&input, CORPUS).unwrap();

    let mut config = BuildConfig::new(&input);
    config.format = CorpusFormat::Tsv;
    config.lengths = LengthSelector::All;
    config.out_dir = dir.join("public");
    let summary = run_build(&config).unwrap();
    assert_eq!(summary.outputs.len(), 3);

    let list = load_candidates(dir.join("public/allowed-6.json"), 6).unwrap();
    assert_eq!(
        to_json(&list).unwrap(),
        fs::read_to_string(dir.join("public/allowed-6.json")).unwrap()
    );
    assert!(list.contains(&decompose("하나로")));

    let answer = JamoWord::new("가나다").unwrap();
    let mut session = Session::new(answer, &list);

    let first = session.submit("바나나").unwrap().clone();
    assert_eq!(first.count_correct(), 4);
    assert_eq!(session.status(), GameStatus::InProgress);

    assert!(session.submit("ㄱㅏㄴㅏㄷㅏ").unwrap().is_solved());
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.key_hints()[&'ㄷ'], Feedback::Correct);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn evaluate_accepts_any_tokens() {
    let guess: Vec<char> = decompose("ㄱa가").chars().collect();
    let answer: Vec<char> = "aㄱㅏ".chars().collect();
    assert_eq!(
        evaluate(&guess, &answer),
        [Feedback::Present, Feedback::Present, Feedback::Absent, Feedback::Present]
    );
}
