//! Process-wide selection of the arbitrary-precision backend.
//!
//! [`SelectedBackend`](crate::SelectedBackend) asks this module which implementation to use.
//! The choice is made at most once per process: either explicitly, by calling [`init`] or
//! [`init_from_env`] before any big integer is created, or implicitly on first use, in which
//! case the [preferred](BackendKind::preferred) backend of this build is bound.
//!
//! A failed explicit selection is irrecoverable. When no backend was bound yet, the failure is
//! recorded and every later request for the backend panics with it, so no arithmetic can happen
//! on a backend nobody chose. Startup code which has no use for the error can call [`require`]
//! or [`require_from_env`], which panic immediately.
use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use log::{debug, error};
use thiserror::Error;

/// The environment variable consulted by [`init_from_env`]
///
/// Accepted values are `limb`, `native` and `auto`.
pub const BACKEND_ENV: &str = "UNBOXED_BIGINT_BACKEND";

static SELECTED: OnceLock<Selection> = OnceLock::new();

enum Selection {
    Bound(BackendKind),
    Failed(BackendError),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// The limb engine in `unboxed_bignum`
    Limb,
    /// num-bigint, requires the `native` feature
    Native,
}
impl BackendKind {
    /// Returns true if this backend was compiled into the current build
    pub const fn is_available(self) -> bool {
        match self {
            Self::Limb => true,
            Self::Native => cfg!(feature = "native"),
        }
    }

    /// The backend bound when nothing was selected explicitly
    pub const fn preferred() -> Self {
        if cfg!(feature = "native") {
            Self::Native
        } else {
            Self::Limb
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Limb => "limb",
            Self::Native => "native",
        }
    }
}
impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for BackendKind {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            name if name.eq_ignore_ascii_case("limb") => Ok(Self::Limb),
            name if name.eq_ignore_ascii_case("native") => Ok(Self::Native),
            name => Err(BackendError::Unknown(name.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("unknown bigint backend '{0}', expected one of: limb, native, auto")]
    Unknown(String),
    #[error("the {0} bigint backend was not compiled into this build")]
    Unavailable(BackendKind),
    #[error("cannot select the {requested} bigint backend, {selected} is already in use")]
    AlreadySelected {
        selected: BackendKind,
        requested: BackendKind,
    },
}

/// Binds the backend used by every subsequently created big integer
///
/// Selecting the backend which is already bound is a no-op, but once bound, a different
/// backend can never be selected, as values from both would otherwise coexist. Requesting a
/// backend which is not compiled in fails the selection for the rest of the process, unless
/// another backend was bound already.
pub fn init(kind: BackendKind) -> Result<(), BackendError> {
    if !kind.is_available() {
        return Err(fail(BackendError::Unavailable(kind)));
    }
    let selection = SELECTED.get_or_init(|| {
        debug!("selected {} bigint backend", kind);
        Selection::Bound(kind)
    });
    match selection {
        Selection::Bound(selected) if *selected == kind => Ok(()),
        Selection::Bound(selected) => Err(BackendError::AlreadySelected {
            selected: *selected,
            requested: kind,
        }),
        Selection::Failed(err) => Err(err.clone()),
    }
}

/// Binds the backend named by [`BACKEND_ENV`], if set, and returns the bound backend
///
/// An unset or empty variable, or `auto`, keeps the default behavior. Any other value which
/// does not name an available backend fails the selection, as with [`init`].
pub fn init_from_env() -> Result<BackendKind, BackendError> {
    match parse_env(env::var(BACKEND_ENV)).map_err(fail)? {
        None => Ok(current()),
        Some(kind) => init(kind).map(|()| kind),
    }
}

/// Like [`init`], but panics if the backend cannot be selected
pub fn require(kind: BackendKind) {
    if let Err(err) = init(kind) {
        panic!("bigint backend selection failed: {}", err);
    }
}

/// Like [`init_from_env`], but panics if the backend cannot be selected
pub fn require_from_env() -> BackendKind {
    match init_from_env() {
        Ok(kind) => kind,
        Err(err) => panic!("bigint backend selection failed: {}", err),
    }
}

/// Returns the bound backend, binding the preferred one if no selection was made yet
///
/// # Panics
///
/// Panics if an explicit selection failed before any backend was bound.
pub fn current() -> BackendKind {
    let selection = SELECTED.get_or_init(|| {
        let kind = BackendKind::preferred();
        debug!("no bigint backend selected, defaulting to {}", kind);
        Selection::Bound(kind)
    });
    match selection {
        Selection::Bound(kind) => *kind,
        Selection::Failed(err) => panic!("bigint backend selection failed: {}", err),
    }
}

/// Returns the bound backend, without binding one
pub fn selected() -> Option<BackendKind> {
    match SELECTED.get() {
        Some(Selection::Bound(kind)) => Some(*kind),
        _ => None,
    }
}

/// Returns true if a failed selection has made big integer arithmetic unavailable
pub fn is_failed() -> bool {
    matches!(SELECTED.get(), Some(Selection::Failed(_)))
}

/// Records `err` as the outcome of the selection, if nothing was bound yet
fn fail(err: BackendError) -> BackendError {
    if SELECTED.set(Selection::Failed(err.clone())).is_ok() {
        error!("{}, big integer arithmetic is disabled", err);
    }
    err
}

/// Interprets the value of [`BACKEND_ENV`], where `None` keeps the default
fn parse_env(value: Result<String, VarError>) -> Result<Option<BackendKind>, BackendError> {
    let value = match value {
        Ok(value) => value,
        Err(VarError::NotPresent) => return Ok(None),
        Err(VarError::NotUnicode(value)) => {
            return Err(BackendError::Unknown(value.to_string_lossy().into_owned()))
        }
    };
    match value.trim() {
        "" => Ok(None),
        name if name.eq_ignore_ascii_case("auto") => Ok(None),
        name => name.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_backend_names() {
        assert_eq!("limb".parse::<BackendKind>(), Ok(BackendKind::Limb));
        assert_eq!(" Native ".parse::<BackendKind>(), Ok(BackendKind::Native));
        assert_eq!(
            "gmp".parse::<BackendKind>(),
            Err(BackendError::Unknown("gmp".to_string()))
        );
        assert_eq!(BackendKind::Native.to_string(), "native");
    }

    #[test]
    fn limb_is_always_available() {
        assert!(BackendKind::Limb.is_available());
        assert_eq!(
            BackendKind::Native.is_available(),
            cfg!(feature = "native")
        );
        assert!(BackendKind::preferred().is_available());
    }

    #[test]
    fn selection_is_bound_once() {
        let bound = current();
        assert_eq!(selected(), Some(bound));
        assert_eq!(init(bound), Ok(()));
        if BackendKind::Native.is_available() {
            let other = match bound {
                BackendKind::Limb => BackendKind::Native,
                BackendKind::Native => BackendKind::Limb,
            };
            assert_eq!(
                init(other),
                Err(BackendError::AlreadySelected {
                    selected: bound,
                    requested: other
                })
            );
        }
    }

    #[test]
    fn environment_values() {
        assert_eq!(parse_env(Err(VarError::NotPresent)), Ok(None));
        assert_eq!(parse_env(Ok(String::new())), Ok(None));
        assert_eq!(parse_env(Ok(" AUTO".to_string())), Ok(None));
        assert_eq!(
            parse_env(Ok("native\n".to_string())),
            Ok(Some(BackendKind::Native))
        );
        assert_eq!(
            parse_env(Ok("gmp".to_string())),
            Err(BackendError::Unknown("gmp".to_string()))
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_environment_value_is_rejected() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let value = OsString::from_vec(vec![b'l', b'i', b'm', 0xff]);
        assert_eq!(
            parse_env(Err(VarError::NotUnicode(value))),
            Err(BackendError::Unknown("lim\u{fffd}".to_string()))
        );
    }

    #[test]
    fn error_messages() {
        let err = BackendError::AlreadySelected {
            selected: BackendKind::Native,
            requested: BackendKind::Limb,
        };
        assert_eq!(
            err.to_string(),
            "cannot select the limb bigint backend, native is already in use"
        );
        assert_eq!(
            BackendError::Unavailable(BackendKind::Native).to_string(),
            "the native bigint backend was not compiled into this build"
        );
    }
}
