use crate::commands::{CmdResult, ListedDocument};
use crate::error::Result;
use crate::store::DocumentCache;

/// The cache root and the override flag of every document.
pub fn run(cache: &DocumentCache) -> Result<CmdResult> {
    let listed = cache
        .iter()
        .map(|(key, doc)| ListedDocument::new(key, doc))
        .collect();
    Ok(CmdResult::default()
        .with_root(cache.root().to_path_buf())
        .with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::test_utils::TestEnv;

    #[test]
    fn reports_root_and_flags() {
        let mut env = TestEnv::new();
        create::run(&mut env.cache, "open", "", vec![], true).unwrap();
        create::run(&mut env.cache, "locked", "", vec![], false).unwrap();

        let result = run(&env.cache).unwrap();
        assert_eq!(result.root.as_deref(), Some(env.root.as_path()));
        let flags: Vec<(&str, bool)> = result
            .listed
            .iter()
            .map(|d| (d.key.as_str(), d.overridable))
            .collect();
        assert_eq!(flags, vec![("locked.json", false), ("open.json", true)]);
    }
}
