use std::time::Duration;

use passgen::pass::charset;
use passgen::pass::strength::{self, Strength, StrengthCategory};
use passgen::rand::{OsRandom, RandomSource};
use passgen::settings::DEFAULT_MAX_LENGTH;
use passgen::tui::{MenuChoice, Shell};
use passgen::{Classes, Config, GenerationPolicy, HistoryLog, PolicyError, generate};

fn policy(min: usize, max: usize, classes: Classes) -> GenerationPolicy {
    GenerationPolicy::new(min, max, classes, DEFAULT_MAX_LENGTH).unwrap()
}

#[test]
fn eight_lowercase_characters() {
    let lower_only = Classes {
        lower: true,
        ..Classes::NONE
    };
    let p = policy(8, 8, lower_only);
    for _ in 0..100 {
        let pass = generate(&p, &mut OsRandom::new()).unwrap();
        assert_eq!(pass.len(), 8);
        assert!(pass.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn all_classes_twelve_to_sixteen() {
    let p = policy(12, 16, Classes::ALL);
    assert_eq!(charset::build(&p).len(), 26 + 26 + 10 + 27);

    let mut rng = OsRandom::new();
    for _ in 0..100 {
        let pass = generate(&p, &mut rng).unwrap();
        assert!((12..=16).contains(&pass.len()));
    }
    assert_eq!(
        strength::score(12, &p, strength::Strategy::Bucket),
        Strength::Category(StrengthCategory::VeryStrong)
    );
}

#[test]
fn no_class_is_refused() {
    let p = policy(8, 8, Classes::NONE);
    assert_eq!(
        generate(&p, &mut OsRandom::new()).unwrap_err(),
        PolicyError::NoCharacterClass
    );
}

#[test]
fn uniform_single_value() {
    let mut rng = OsRandom::new();
    for _ in 0..100 {
        assert_eq!(rng.uniform(5, 5), 5);
    }
}

#[test]
fn every_character_of_a_small_charset_appears() {
    let digits_only = Classes {
        numbers: true,
        ..Classes::NONE
    };
    let p = policy(100, 100, digits_only);
    let mut seen = [false; 10];
    let mut rng = OsRandom::new();
    for _ in 0..10 {
        let pass = generate(&p, &mut rng).unwrap();
        for c in pass.as_str().chars() {
            seen[c as usize - '0' as usize] = true;
        }
    }
    assert!(seen.iter().all(|&s| s), "{seen:?}");
}

#[test]
fn shell_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        prefs_path: dir.path().join("conf/prefs"),
        history_path: dir.path().join("conf/history"),
        history_limit: 10,
        max_length: DEFAULT_MAX_LENGTH,
        reveal_delay: Duration::ZERO,
        strategy: strength::Strategy::Bucket,
    };

    let mut out = Vec::new();
    Shell::new(&config, "4\n6\n0\n0\n1\n0\n".as_bytes(), &mut out)
        .dispatch(MenuChoice::SetPreferences)
        .unwrap();
    Shell::new(&config, "".as_bytes(), &mut out)
        .dispatch(MenuChoice::Generate)
        .unwrap();
    Shell::new(&config, "".as_bytes(), &mut out)
        .dispatch(MenuChoice::ShowHistory)
        .unwrap();

    let history = HistoryLog::new(&config.history_path).read_recent(10).unwrap();
    assert_eq!(history.len(), 1);
    let entry = &history[0];
    assert!((4..=6).contains(&entry.len()));
    assert!(entry.chars().all(|c| c.is_ascii_digit()));

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Preferences saved."));
    assert!(out.contains(&format!("1. {entry}")));
}
