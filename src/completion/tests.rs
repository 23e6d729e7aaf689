use super::*;
use crate::error::{CompletionError, MulticompleteError};

const BUFFERS: &[&str] = &[
    "",
    ",",
    "Mon, Tue",
    "Mon, ",
    "a,,b, c ,d",
    " , ,  ",
    "東京, 大阪,名古屋",
    "no separators here",
];

#[test]
fn test_current_token_never_contains_separator() {
    let mut engine = TokenAutocompleteEngine::new(Vec::<String>::new());
    for buffer in BUFFERS {
        for cursor in 0..=buffer.chars().count() {
            engine.edit(*buffer, cursor, false);
            assert!(
                !engine.current_token().contains(','),
                "buffer {buffer:?} cursor {cursor}"
            );
        }
    }
}

#[test]
fn test_current_token_is_idempotent() {
    let mut engine = TokenAutocompleteEngine::new(Vec::<String>::new());
    for buffer in BUFFERS {
        for cursor in 0..=buffer.chars().count() {
            engine.edit(*buffer, cursor, false);
            let first = engine.current_token().to_string();
            assert_eq!(first, engine.current_token());
            assert_eq!(engine.text(), *buffer);
            assert_eq!(engine.cursor(), cursor);
        }
    }
}

#[test]
fn test_token_start_plus_token_reaches_cursor() {
    let mut engine = TokenAutocompleteEngine::new(Vec::<String>::new());
    for buffer in BUFFERS {
        for cursor in 0..=buffer.chars().count() {
            engine.edit(*buffer, cursor, false);
            assert_eq!(
                engine.token_start() + engine.current_token().chars().count(),
                cursor
            );
        }
    }
}

#[test]
fn test_repeated_completion_round_trips_through_token_list() {
    let vocabulary = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
    let mut engine = TokenAutocompleteEngine::new(vocabulary);
    let accepted = ["Wednesday", "Monday", "Friday", "Monday"];

    for word in accepted {
        let mut text = engine.text().to_string();
        text.push_str(&word[..2]);
        let cursor = text.chars().count();
        engine.edit(text, cursor, true);

        let candidate = engine
            .filter_current()
            .find(|c| *c == word)
            .map(str::to_string)
            .unwrap();
        engine.accept_completion(&candidate).unwrap();
    }

    assert_eq!(engine.text(), "Wednesday, Monday, Friday, Monday, ");
    assert_eq!(engine.extract_token_list(), accepted);
}

#[test]
fn test_substring_completion_round_trip() {
    let mut engine = TokenAutocompleteEngine::builder()
        .vocabulary(["apple pie", "pineapple", "grape"])
        .match_mode(MatchMode::SubstringAnywhere)
        .separator(';')
        .build()
        .unwrap();

    engine.edit("APP", 3, true);
    let first: Vec<String> = engine.filter_current().map(str::to_string).collect();
    assert_eq!(first, vec!["apple pie", "pineapple"]);
    engine.accept_completion(&first[1]).unwrap();

    let text = format!("{}rap", engine.text());
    engine.edit(text.clone(), text.chars().count(), true);
    let second: Vec<String> = engine.filter_current().map(str::to_string).collect();
    assert_eq!(second, vec!["grape"]);
    engine.accept_completion(&second[0]).unwrap();

    assert_eq!(engine.text(), "pineapple; grape; ");
    assert_eq!(engine.extract_token_list(), vec!["pineapple", "grape"]);
}

#[test]
fn test_separator_change_closes_token() {
    let mut engine = TokenAutocompleteEngine::new(["x"]);
    engine.edit("ab;", 3, true);
    assert_eq!(engine.state(), EditState::TokenOpen);

    engine.set_separator(';').unwrap();
    assert_eq!(engine.current_token(), "");
    assert_eq!(engine.state(), EditState::Idle);
    assert!(matches!(
        engine.accept_completion("x"),
        Err(MulticompleteError::Completion(CompletionError::NoActiveToken))
    ));
    assert_eq!(engine.text(), "ab;");
}

#[test]
fn test_trailing_space_change_closes_token() {
    let mut engine = TokenAutocompleteEngine::builder()
        .vocabulary(["x"])
        .add_space_after_completing(false)
        .build()
        .unwrap();
    engine.edit("a, ", 3, true);
    assert_eq!(engine.current_token(), " ");

    engine.set_add_space_after_completing(true);
    assert_eq!(engine.current_token(), "");
    assert!(matches!(
        engine.accept_completion("x"),
        Err(MulticompleteError::Completion(CompletionError::NoActiveToken))
    ));
    assert_eq!(engine.text(), "a, ");
}

#[test]
fn test_separator_change_opens_token() {
    let mut engine = TokenAutocompleteEngine::new(["Tuesday"]);
    engine.edit("Mon;Tu", 6, true);
    engine.set_separator(';').unwrap();

    assert_eq!(engine.current_token(), "Tu");
    engine.accept_completion("Tuesday").unwrap();
    assert_eq!(engine.text(), "Mon;Tuesday; ");
}
