use kstring::KString;

/// A navigation entry, written in the config as a `(label, link)` pair.
///
/// Links are site-relative (`/archives.html`), not filesystem paths.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(KString, KString)", into = "(KString, KString)")]
pub struct MenuItem {
    pub label: KString,
    pub link: KString,
}

impl MenuItem {
    pub fn new(label: impl Into<KString>, link: impl Into<KString>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

impl From<(KString, KString)> for MenuItem {
    fn from((label, link): (KString, KString)) -> Self {
        Self { label, link }
    }
}

impl From<MenuItem> for (KString, KString) {
    fn from(item: MenuItem) -> Self {
        (item.label, item.link)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn menu_item_from_pair() {
        let actual: MenuItem = serde_yaml::from_str("[\"Archives\", \"/archives.html\"]").unwrap();
        assert_eq!(actual, MenuItem::new("Archives", "/archives.html"));
    }

    #[test]
    fn menu_item_rejects_extra_elements() {
        let actual: Result<MenuItem, _> =
            serde_yaml::from_str("[\"Archives\", \"/archives.html\", \"extra\"]");
        assert!(actual.is_err());
    }

    #[test]
    fn menu_items_preserve_order() {
        let actual: Vec<MenuItem> =
            serde_yaml::from_str("[[\"B\", \"/b.html\"], [\"A\", \"/a.html\"]]").unwrap();
        assert_eq!(
            actual,
            vec![MenuItem::new("B", "/b.html"), MenuItem::new("A", "/a.html")]
        );
    }
}
