use crate::RelPath;

/// A verbatim copy rule, written in the config as a `(source, dest)` pair.
///
/// `source` is relative to the site root, `dest` to the build output root.
/// Whether `source` actually exists is checked by the engine when it copies.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(RelPath, RelPath)", into = "(RelPath, RelPath)")]
pub struct FileCopy {
    pub source: RelPath,
    pub dest: RelPath,
}

impl FileCopy {
    pub fn new(source: impl Into<RelPath>, dest: impl Into<RelPath>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

impl From<(RelPath, RelPath)> for FileCopy {
    fn from((source, dest): (RelPath, RelPath)) -> Self {
        Self { source, dest }
    }
}

impl From<FileCopy> for (RelPath, RelPath) {
    fn from(copy: FileCopy) -> Self {
        (copy.source, copy.dest)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_copy_from_pair() {
        let actual: FileCopy =
            serde_yaml::from_str("[\"extra/favicon.ico\", \"favicon.ico\"]").unwrap();
        assert_eq!(actual, FileCopy::new("extra/favicon.ico", "favicon.ico"));
    }

    #[test]
    fn file_copy_round_trips_as_pair() {
        let copy = FileCopy::new("extra/favicon.ico", "favicon.ico");
        let yaml = serde_yaml::to_string(&copy).unwrap();
        assert_eq!(yaml, "- extra/favicon.ico\n- favicon.ico\n");
    }
}
