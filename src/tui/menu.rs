use std::io::{BufRead, Write};

use log::info;

use super::input::{get_flag, get_length, get_number};
use super::text::{enter_prompt, print_banner, print_history, print_main_menu};
use crate::cli::prompts;
use crate::error::{AppError, Result};
use crate::history::HistoryLog;
use crate::pass::{self, output::reveal, strength};
use crate::rand::OsRandom;
use crate::settings::{Classes, Config, GenerationPolicy, PreferenceStore};
use crate::terminal::styled_strength;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate,
    SetPreferences,
    ShowHistory,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Generate),
            2 => Some(MenuChoice::SetPreferences),
            3 => Some(MenuChoice::ShowHistory),
            _ => None,
        }
    }
}

/// One pass through the menu: banner, a single choice, its action.
pub struct Shell<'a, R, W> {
    config: &'a Config,
    prefs: PreferenceStore,
    history: HistoryLog,
    rng: OsRandom,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(config: &'a Config, input: R, out: W) -> Self {
        Self {
            config,
            prefs: PreferenceStore::new(&config.prefs_path, config.max_length),
            history: HistoryLog::new(&config.history_path),
            rng: OsRandom::new(),
            input,
            out,
        }
    }

    /// Show the menu and run one action. `preset` skips the prompt.
    ///
    /// An unknown choice is reported and ends the run without error.
    pub fn run(&mut self, preset: Option<i64>) -> Result<()> {
        print_banner(&mut self.out)?;

        let number = match preset {
            Some(n) => n,
            None => {
                print_main_menu(&mut self.out)?;
                match get_number(&mut self.input, &mut self.out, enter_prompt()) {
                    Ok(n) => n,
                    Err(AppError::InvalidInput(_)) => 0,
                    Err(e) => return Err(e),
                }
            }
        };

        match MenuChoice::from_number(number) {
            Some(choice) => self.dispatch(choice),
            None => {
                writeln!(self.out, "Invalid choice.")?;
                Ok(())
            }
        }
    }

    /// Policy and input mistakes are printed and swallowed; store and I/O
    /// failures are returned.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        let outcome = match choice {
            MenuChoice::Generate => self.generate(),
            MenuChoice::SetPreferences => self.set_preferences(),
            MenuChoice::ShowHistory => self.show_history(),
        };

        match outcome {
            Err(AppError::Policy(e)) => {
                writeln!(self.out, "{e}")?;
                Ok(())
            }
            Err(e @ AppError::InvalidInput(_)) => {
                writeln!(self.out, "{e}")?;
                Ok(())
            }
            other => other,
        }
    }

    fn generate(&mut self) -> Result<()> {
        let policy = match self.prefs.load()? {
            Some(policy) => policy,
            None => {
                let policy = GenerationPolicy::default_within(self.config.max_length)?;
                prompts::using_default_policy(policy.min_length(), policy.max_length());
                policy
            }
        };

        writeln!(self.out, "Generating Password...")?;
        let password = pass::generate(&policy, &mut self.rng)?;
        reveal(&mut self.out, &password, self.config.reveal_delay)?;

        let strength = strength::score(password.len(), &policy, self.config.strategy);
        writeln!(self.out, "Password Strength: {}", styled_strength(strength))?;

        self.history.append(&password)?;
        info!("generated a {}-character password", password.len());
        Ok(())
    }

    fn set_preferences(&mut self) -> Result<()> {
        let (input, out) = (&mut self.input, &mut self.out);
        let min = get_length(input, out, "Enter the minimum length of the password")?;
        let max = get_length(input, out, "Enter the maximum length of the password")?;
        let classes = Classes {
            lower: get_flag(input, out, "Include lowercase characters?")?,
            upper: get_flag(input, out, "Include uppercase characters?")?,
            numbers: get_flag(input, out, "Include numbers?")?,
            symbols: get_flag(input, out, "Include symbols?")?,
        };

        let policy = GenerationPolicy::new(min, max, classes, self.config.max_length)?;
        if policy.class_count() == 0 {
            prompts::warn("No character type selected; generation stays disabled until one is.");
        }

        self.prefs.save(&policy)?;
        writeln!(self.out, "Preferences saved.")?;
        Ok(())
    }

    fn show_history(&mut self) -> Result<()> {
        let entries = self.history.read_recent(self.config.history_limit)?;
        print_history(&mut self.out, &entries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    use crate::pass::Strategy;

    fn config(dir: &tempfile::TempDir) -> Config {
        Config {
            prefs_path: dir.path().join("prefs"),
            history_path: dir.path().join("history"),
            history_limit: 10,
            max_length: 100,
            reveal_delay: Duration::ZERO,
            strategy: Strategy::Bucket,
        }
    }

    fn run(config: &Config, stdin: &str, preset: Option<i64>) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = Shell::new(config, Cursor::new(stdin.to_string()), &mut out).run(preset);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn menu_numbers_map_to_actions() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Generate));
        assert_eq!(MenuChoice::from_number(2), Some(MenuChoice::SetPreferences));
        assert_eq!(MenuChoice::from_number(3), Some(MenuChoice::ShowHistory));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(4), None);
    }

    #[test]
    fn invalid_choice_exits_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        let (result, out) = run(&config, "7\n", None);
        assert!(result.is_ok());
        assert!(out.contains("1. Generate Password"));
        assert!(out.ends_with("Invalid choice.\n"));

        let (result, out) = run(&config, "seven\n", None);
        assert!(result.is_ok());
        assert!(out.ends_with("Invalid choice.\n"));
    }

    #[test]
    fn set_preferences_then_generate() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);

        let (result, out) = run(&config, "2\n8\n8\n1\n0\n0\n0\n", None);
        result.unwrap();
        assert!(out.ends_with("Preferences saved.\n"));

        let (result, out) = run(&config, "", Some(1));
        result.unwrap();
        assert!(out.contains("Generating Password..."));
        assert!(out.contains("Password Strength: "));
        assert!(out.contains("Strong"));

        let history = HistoryLog::new(&config.history_path).read_recent(10).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].len(), 8);
        assert!(history[0].chars().all(|c| c.is_ascii_lowercase()));
        assert!(out.contains(&format!("Generated Password: {}\n", history[0])));
    }

    #[test]
    fn no_class_refuses_and_skips_history() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);

        run(&config, "8\n10\n0\n0\n0\n0\n", Some(2)).0.unwrap();
        let (result, out) = run(&config, "", Some(1));
        result.unwrap();
        assert!(out.ends_with("Please select at least one character type.\n"));
        assert!(!config.history_path.exists());
    }

    #[test]
    fn invalid_preferences_are_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);

        let (result, out) = run(&config, "10\n5\n1\n1\n1\n1\n", Some(2));
        result.unwrap();
        assert!(out.ends_with("minimum length 10 exceeds maximum length 5\n"));
        assert!(!config.prefs_path.exists());

        let (result, out) = run(&config, "10\n500\n1\n1\n1\n1\n", Some(2));
        result.unwrap();
        assert!(out.contains("exceeds the limit of 100"));
        assert!(!config.prefs_path.exists());

        let (result, out) = run(&config, "10\n12\nyes\n", Some(2));
        result.unwrap();
        assert!(out.contains("invalid input"));
        assert!(!config.prefs_path.exists());
    }

    #[test]
    fn generate_without_preferences_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        run(&config, "", Some(1)).0.unwrap();

        let history = HistoryLog::new(&config.history_path).read_recent(10).unwrap();
        assert_eq!(history.len(), 1);
        assert!((12..=16).contains(&history[0].len()));
    }

    #[test]
    fn defaults_respect_a_small_ceiling() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&dir);
        config.max_length = 8;

        for _ in 0..5 {
            run(&config, "", Some(1)).0.unwrap();
        }
        let history = HistoryLog::new(&config.history_path).read_recent(10).unwrap();
        assert_eq!(history.len(), 5);
        assert!(history.iter().all(|p| p.len() == 8));
    }

    #[test]
    fn composite_strategy_prints_a_number() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&dir);
        config.strategy = Strategy::Composite;

        run(&config, "6\n6\n1\n1\n0\n0\n", Some(2)).0.unwrap();
        let (_, out) = run(&config, "", Some(1));
        // 6 * 2 * 2
        assert!(out.contains("Password Strength: 24\n"));
    }

    #[test]
    fn show_history_lists_recent_entries() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&dir);
        config.history_limit = 2;

        for _ in 0..3 {
            run(&config, "", Some(1)).0.unwrap();
        }
        let all = HistoryLog::new(&config.history_path).read_recent(10).unwrap();

        let (result, out) = run(&config, "", Some(3));
        result.unwrap();
        assert!(out.contains("Password History"));
        assert!(out.contains(&format!("1. {}", all[1])));
        assert!(out.contains(&format!("2. {}", all[2])));
        assert!(!out.contains("│ 3. "));
    }

    #[test]
    fn corrupt_preferences_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir);
        std::fs::write(&config.prefs_path, b"short").unwrap();

        let (result, _) = run(&config, "", Some(1));
        assert!(matches!(result, Err(AppError::Store(_))));
        assert!(!config.history_path.exists());
    }
}
