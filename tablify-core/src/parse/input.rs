use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use serde::Deserialize;
use snafu::ResultExt;
use tracing::*;

use crate::{
    consts::STDIN_PATH,
    error::{IoReadSnafu, JsonSnafu, TablifyError},
    layout::element::Fragment,
};

const STDIN_NAME: &str = "<stdin>";

/// Accepted shapes of a recognition result.
#[derive(Deserialize)]
#[serde(untagged)]
enum Recognized {
    Lines { lines: Vec<Fragment> },
    Fragments(Vec<Fragment>),
}

/// Reads recognized lines as JSON from `path`, or from stdin when `path` is
/// `None` or `-`.
pub fn load_fragments(path: Option<&Path>) -> Result<Vec<Fragment>, TablifyError> {
    match path {
        Some(path) if path != Path::new(STDIN_PATH) => {
            let name = path.display().to_string();
            let raw = fs::read_to_string(path).context(IoReadSnafu { path: name.as_str() })?;
            parse_fragments(&raw, &name)
        }
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context(IoReadSnafu { path: STDIN_NAME })?;
            parse_fragments(&raw, STDIN_NAME)
        }
    }
}

/// Decodes either a bare fragment array or an object with a `lines` array.
pub fn parse_fragments(raw: &str, origin: &str) -> Result<Vec<Fragment>, TablifyError> {
    let recognized: Recognized = serde_json::from_str(raw).context(JsonSnafu { path: origin })?;
    let fragments = match recognized {
        Recognized::Lines { lines } => lines,
        Recognized::Fragments(fragments) => fragments,
    };

    debug!(origin, fragments = fragments.len(), "fragments loaded");
    for fragment in fragments.iter().filter(|f| f.bbox.is_inverted()) {
        debug!(text = %fragment.text, bbox = ?fragment.bbox, "inverted bounding box");
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let fragments = parse_fragments(
            r#"[
                { "text": "A", "top_left": [0, 0], "bottom_right": [10, 10] },
                { "text": "BB", "top_left": [20, 0], "bottom_right": [40, 10] }
            ]"#,
            "test",
        )
        .unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[1].text, "BB");
        assert_eq!(fragments[1].right(), 40);
    }

    #[test]
    fn test_parse_lines_object() {
        let fragments = parse_fragments(
            r#"{ "lines": [ { "text": "X", "top_left": [0.5, 1.5], "bottom_right": [9.9, 10.1] } ] }"#,
            "test",
        )
        .unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].top(), 1);
        assert_eq!(fragments[0].right(), 9);
    }

    #[test]
    fn test_parse_empty_lines() {
        assert!(parse_fragments(r#"{ "lines": [] }"#, "test").unwrap().is_empty());
        assert!(parse_fragments("[]", "test").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let err = parse_fragments(r#"[{ "text": "A" }]"#, "bad.json").unwrap_err();
        assert!(matches!(err, TablifyError::Json { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_fragments(Some(Path::new("/nonexistent/fragments.json"))).unwrap_err();
        assert!(matches!(err, TablifyError::IoRead { .. }));
    }
}
