use std::fmt;
use std::path;

use kstring::KString;

use super::*;

const CONFIG_FILE_NAME: &str = "_sitegen.yml";
const DEFAULT_PER_PAGE: u32 = 10;

/// The full configuration record consumed by the generation engine.
///
/// Loaded once, read-only afterwards. Serialized keys are exactly the
/// option names the engine recognizes; `root` is derived from where the
/// file was found and never round-trips.
///
/// No semantic validation happens here. A malformed `site_url`, an unknown
/// `timezone`, or a `theme` that resolves to nothing is the engine's to
/// report when it reaches for the value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Config {
    #[serde(skip)]
    pub root: path::PathBuf,
    pub author: KString,
    pub site_name: KString,
    pub site_url: KString,
    /// IANA identifier, e.g. `America/Los_Angeles`.
    pub timezone: KString,
    pub default_language: KString,
    /// Destination of the all-content Atom feed. Unset disables it.
    pub feed_all_atom: Option<RelPath>,
    pub category_feed_atom: Option<RelPath>,
    pub translation_feed_atom: Option<RelPath>,
    pub default_pagination: u32,
    pub menu_items: Vec<MenuItem>,
    pub display_pages_on_menu: bool,
    pub files_to_copy: Vec<FileCopy>,
    /// Theme name or path, resolved by the engine.
    pub theme: KString,
    pub relative_urls: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            root: Default::default(),
            author: "".into(),
            site_name: "".into(),
            site_url: "http://localhost:8000".into(),
            timezone: "UTC".into(),
            default_language: "en".into(),
            feed_all_atom: None,
            category_feed_atom: None,
            translation_feed_atom: None,
            default_pagination: DEFAULT_PER_PAGE,
            menu_items: Default::default(),
            display_pages_on_menu: true,
            files_to_copy: Default::default(),
            theme: "default".into(),
            relative_urls: false,
        }
    }
}

impl Config {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Config> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Config> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        let mut root = path;
        root.pop(); // Remove filename
        if root == std::path::Path::new("") {
            root = std::path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Config> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<Config> {
        let file_path = find_project_file(&cwd, CONFIG_FILE_NAME);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!(
                    "No {CONFIG_FILE_NAME} file found in current directory, using default config."
                );
                let config = Config {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
