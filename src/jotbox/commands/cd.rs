use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentCache;
use std::fs;
use std::path::Path;

/// Re-roots the cache. Relative targets are taken from the current root;
/// the old cache is kept if the new one cannot be opened.
pub fn run(cache: &mut DocumentCache, target: &str) -> Result<CmdResult> {
    let target = Path::new(target.trim());
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        cache.root().join(target)
    };
    let root = match fs::canonicalize(&joined) {
        Ok(root) => root,
        Err(e) => {
            return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
                "{}: {}",
                joined.display(),
                e
            ))))
        }
    };
    match DocumentCache::open(&root) {
        Ok(opened) => {
            *cache = opened;
            log::info!("cache root is now {}", root.display());
            Ok(CmdResult::default()
                .with_root(root.clone())
                .with_message(CmdMessage::success(format!(
                    "changed directory to: {}",
                    root.display()
                ))))
        }
        Err(e) => Ok(CmdResult::failed(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn switches_to_subdirectory() {
        let mut env = TestEnv::new();
        fs::create_dir_all(env.root.join("work")).unwrap();
        fs::write(env.root.join("work/w.json"), r#"{"title":"W"}"#).unwrap();
        fs::write(env.root.join("top.json"), r#"{"title":"T"}"#).unwrap();
        env.cache.rescan().unwrap();
        assert_eq!(env.cache.len(), 2);

        let result = run(&mut env.cache, "work").unwrap();
        assert!(!result.has_errors());
        assert_eq!(env.cache.keys(), vec!["w.json"]);
    }

    #[test]
    fn keeps_old_cache_on_failure() {
        let mut env = TestEnv::new();
        fs::write(env.root.join("top.json"), r#"{"title":"T"}"#).unwrap();
        env.cache.rescan().unwrap();

        let result = run(&mut env.cache, "does-not-exist").unwrap();
        assert!(result.has_errors());
        assert_eq!(env.cache.root(), env.root.as_path());
        assert_eq!(env.cache.keys(), vec!["top.json"]);
    }
}
