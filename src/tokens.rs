//! Input acquisition for the demo: whitespace-delimited tokens from a file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read every whitespace-delimited token from the file at `path`.
///
/// Consecutive separators collapse, so empty tokens never occur. The
/// engine itself has no file or encoding contract; this is front-end
/// glue for the demo binary.
pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file '{}'", path.display()))?;
    Ok(contents
        .split_whitespace()
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn splits_on_any_whitespace_run() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "alpha  beta\t\tgamma\n\ndelta ").unwrap();

        let tokens = read_tokens(file.path()).unwrap();
        assert_eq!(tokens, ["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn empty_file_yields_no_tokens() {
        let file = NamedTempFile::new().unwrap();
        assert!(read_tokens(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = read_tokens(Path::new("/nonexistent/tokens.txt")).unwrap_err();
        assert!(err
            .to_string()
            .contains("failed to read input file '/nonexistent/tokens.txt'"));
    }
}
