//! The configuration surface of the site generator.
//!
//! This crate owns the on-disk shape of `_sitegen.yml` and nothing else:
//! it locates the file, deserializes it into an immutable [`Config`], and
//! serializes it back out. Semantic checks (URL well-formedness, timezone
//! lookup, theme resolution, copy-source existence) belong to the engine
//! consuming the record, at the point of use.

mod assets;
mod config;
mod menu;

pub use self::assets::*;
pub use self::config::*;
pub use self::menu::*;

pub type RelPath = relative_path::RelativePathBuf;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
