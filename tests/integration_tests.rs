// Integration tests for the word-guess application
// These tests verify that all modules work together correctly

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use word_guess::cli::CliInterface;
use word_guess::*;

fn play(bank: &WordBank, input: &str, seed: u64) -> (SessionSummary, String) {
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    let mut rng = StdRng::seed_from_u64(seed);
    let summary = game_loop(bank, &mut interface, &mut rng);
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (summary, output)
}

#[test]
fn test_orange_round_through_console() {
    let bank = WordBank::new(["orange"]).unwrap();
    let input = "o\nr\nz\na\nn\ng\ne\n!\n";

    let (summary, output) = play(&bank, input, 1);

    let scores: Vec<&str> = output
        .lines()
        .filter_map(|l| l.split_once("Score is: ").map(|(_, score)| score))
        .collect();
    assert_eq!(scores, vec!["6", "7", "6", "7", "8", "9", "10"]);
    assert!(output.contains("You solved it! The word was 'orange'.\nCurrent score: 10"));
    assert!(output.contains("Ending game\nCurrent score: 10"));
    assert_eq!(summary.final_score, 10);
    assert_eq!(summary.rounds_solved, 1);
    assert_eq!(summary.end, SessionEnd::Quit);
}

#[test]
fn test_quit_right_away() {
    let bank = WordBank::new(["orange", "banana", "cherry"]).unwrap();

    let (summary, output) = play(&bank, "!\n", 8);

    assert_eq!(summary.final_score, 5);
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.rounds_solved, 0);
    assert!(output.contains("_ _ _ _ _ _"));
    assert!(output.ends_with("Ending game\nCurrent score: 5\n"));
}

#[test]
fn test_invalid_input_is_free() {
    let bank = WordBank::new(["banana"]).unwrap();
    let input = "\nab\n   \nb\n!\n";

    let (summary, output) = play(&bank, input, 4);

    assert_eq!(summary.final_score, 6);
    assert_eq!(output.matches("Please enter a letter.").count(), 2);
    assert_eq!(output.matches("Please enter exactly one character.").count(), 1);
}

#[test]
fn test_repeat_correct_guess_not_rewarded() {
    let bank = WordBank::new(["banana"]).unwrap();

    let (summary, output) = play(&bank, "a\na\n!\n", 0);

    assert!(output.contains("Right! Score is: 6\n_ a _ a _ a"));
    assert!(output.contains("Sorry, guess again. Score is: 5\n_ a _ a _ a"));
    assert_eq!(summary.final_score, 5);
}

#[test]
fn test_end_of_input_ends_session() {
    let bank = WordBank::new(["banana"]).unwrap();

    let (summary, output) = play(&bank, "b\n", 6);

    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(summary.final_score, 6);
    assert!(output.contains("Ending game"));
}

#[test]
fn test_running_out_of_points() {
    let bank = WordBank::new(["tendon"]).unwrap();
    let input = "q\nw\nx\nz\nk\nj\nt\n";

    let (summary, output) = play(&bank, input, 3);

    assert_eq!(summary.end, SessionEnd::OutOfPoints);
    assert_eq!(summary.final_score, -1);
    assert!(output.contains("Game over\nCurrent score: -1"));
    assert!(!output.contains("Right!"));
}

#[test]
fn test_text_analysis_feeds_game() {
    let text = "The heart pumps blood through arteries. Arteries carry blood away \
                from the heart, while veins return it. Capillaries connect arteries \
                and veins. Muscles surround the arteries.";

    let stats = analyze(text, 3).unwrap();
    assert_eq!(stats.ranked[0], ("artery".to_string(), 4));
    assert!(stats.ranked.len() <= 3);

    let bank = WordBank::new(stats.top_words()).unwrap();
    assert_eq!(bank.words()[0], "artery");

    let mut interface = CliInterface::new(Cursor::new("!\n"), Vec::new());
    let mut rng = StdRng::seed_from_u64(21);
    let summary = game_loop(&bank, &mut interface, &mut rng);
    assert_eq!(summary.final_score, 5);
}

#[test]
fn test_text_without_candidates_rejected() {
    // Only short words and stop words: analysis succeeds, the pool is empty
    let stats = analyze("The cat sat on the mat.", 50).unwrap();
    assert!(stats.ranked.is_empty());
    assert!(matches!(
        WordBank::new(stats.top_words()),
        Err(GameError::EmptyPool)
    ));
}

#[test]
fn test_custom_word_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("word_guess_integration_words.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Ligament").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  cartilage ").unwrap();
    }

    let bank = load_wordbank_from_file(&path).unwrap();
    assert_eq!(
        bank.words(),
        &["ligament".to_string(), "cartilage".to_string()]
    );

    let (summary, output) = play(&bank, "a\n!\n", 12);
    assert!(output.contains("Right! Score is: 6"));
    assert_eq!(summary.final_score, 6);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_multi_word_entry_is_solvable() {
    let bank = load_wordbank_from_str("x ray\n").unwrap();

    let (summary, output) = play(&bank, "x\nr\na\ny\n!\n", 5);

    assert!(output.contains("_   _ _ _"));
    assert!(output.contains("You solved it! The word was 'x ray'."));
    assert_eq!(summary.rounds_solved, 1);
    assert_eq!(summary.final_score, 9);
}

#[test]
fn test_every_round_uses_pool_word() {
    let bank = WordBank::new(["skull", "spine", "pelvis"]).unwrap();
    // Guessing every letter used by the pool solves any round
    let mut input = String::new();
    for _ in 0..5 {
        for c in "skulpinev".chars() {
            input.push(c);
            input.push('\n');
        }
    }

    let (_, output) = play(&bank, &input, 99);

    for line in output.lines() {
        if let Some(rest) = line.strip_prefix("You solved it! The word was '") {
            let word = rest.trim_end_matches("'.");
            assert!(bank.contains(word), "unexpected target {word}");
        }
    }
    assert!(output.contains("You solved it!"));
}
