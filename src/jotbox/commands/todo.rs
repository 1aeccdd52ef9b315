//! Task lists kept in the conventional `todo/` directory.
//!
//! Open items are lines of `todo/todo.json`. Finishing an item moves it to
//! `todo/done.json`, prefixed with the day it was done. Nothing is written to
//! disk until the session runs `write`.

use crate::commands::{CmdMessage, CmdResult, ListedDocument};
use crate::error::{JotError, Result};
use crate::model::Document;
use crate::store::DocumentCache;
use chrono::{Local, NaiveDate};

pub const TODO_KEY: &str = "todo/todo.json";
pub const DONE_KEY: &str = "todo/done.json";

/// Returns the document under `key`, creating it with `title` if needed.
fn ensure<'a>(cache: &'a mut DocumentCache, key: &str, title: &str) -> Result<&'a mut Document> {
    if !cache.contains(key) {
        let mut doc = Document::new(key, true)?;
        doc.title = title.to_string();
        cache.insert(doc)?;
    }
    cache
        .get_mut(key)
        .ok_or_else(|| JotError::NotFound(key.to_string()))
}

pub fn add(cache: &mut DocumentCache, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::error("nothing to add")));
    }
    let todo = ensure(cache, TODO_KEY, "todo")?;
    todo.push_line(text);
    let number = todo.content.len();
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "todo {}: {}",
        number, text
    ))))
}

pub fn list(cache: &DocumentCache) -> Result<CmdResult> {
    match cache.get(TODO_KEY) {
        Some(doc) if !doc.content.is_empty() => {
            Ok(CmdResult::default().with_listed(vec![ListedDocument::new(TODO_KEY, doc)]))
        }
        _ => Ok(CmdResult::default().with_message(CmdMessage::info("nothing to do"))),
    }
}

/// Marks the 1-based item `number` as done today.
pub fn done(cache: &mut DocumentCache, number: &str) -> Result<CmdResult> {
    done_on(cache, number, Local::now().date_naive())
}

pub fn done_on(cache: &mut DocumentCache, number: &str, day: NaiveDate) -> Result<CmdResult> {
    let index = match number.trim().parse::<usize>() {
        Ok(n) if n > 0 => n - 1,
        _ => {
            return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
                "invalid todo number: {:?}",
                number
            ))))
        }
    };
    let removed = cache
        .get_mut(TODO_KEY)
        .and_then(|todo| todo.remove_line(index));
    let Some(item) = removed else {
        return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
            "no todo number {}",
            index + 1
        ))));
    };

    let done = ensure(cache, DONE_KEY, "done")?;
    done.push_line(format!("{} {}", day.format("%Y-%m-%d"), item));
    Ok(CmdResult::default().with_message(CmdMessage::success(format!("done: {}", item))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn add_creates_the_todo_document() {
        let mut env = TestEnv::new();
        add(&mut env.cache, "buy milk").unwrap();
        let result = add(&mut env.cache, "  call mom ").unwrap();
        assert_eq!(result.messages[0].content, "todo 2: call mom");

        let todo = env.cache.get(TODO_KEY).unwrap();
        assert_eq!(todo.title, "todo");
        assert_eq!(todo.content, vec!["buy milk", "call mom"]);
        assert_eq!(todo.path(), env.root.join("todo/todo.json"));
    }

    #[test]
    fn list_reports_empty_state() {
        let mut env = TestEnv::new();
        let empty = list(&env.cache).unwrap();
        assert!(empty.listed.is_empty());
        assert_eq!(empty.messages[0].content, "nothing to do");

        add(&mut env.cache, "x").unwrap();
        let listed = list(&env.cache).unwrap();
        assert_eq!(listed.listed[0].content, vec!["x"]);
    }

    #[test]
    fn done_moves_item_with_date() {
        let mut env = TestEnv::new();
        add(&mut env.cache, "first").unwrap();
        add(&mut env.cache, "second").unwrap();
        add(&mut env.cache, "third").unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let result = done_on(&mut env.cache, "2", day).unwrap();
        assert!(!result.has_errors());

        assert_eq!(env.cache.get(TODO_KEY).unwrap().content, vec!["first", "third"]);
        let done = env.cache.get(DONE_KEY).unwrap();
        assert_eq!(done.title, "done");
        assert_eq!(done.content, vec!["2024-03-09 second"]);
    }

    #[test]
    fn done_rejects_bad_numbers() {
        let mut env = TestEnv::new();
        let day = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert!(done_on(&mut env.cache, "1", day).unwrap().has_errors());

        add(&mut env.cache, "only").unwrap();
        for bad in ["0", "2", "x", "-1"] {
            assert!(done_on(&mut env.cache, bad, day).unwrap().has_errors());
        }
        assert_eq!(env.cache.get(TODO_KEY).unwrap().content, vec!["only"]);
        assert!(!env.cache.contains(DONE_KEY));
    }
}
