//! Local user session.
//!
//! The signed-in profile (email, display name) is a JSON file in the data
//! directory; the bearer token issued by the auth provider lives in the OS
//! keyring, looked up by email. The auth provider itself is external --
//! this module only holds what it issued.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::storage::data_dir;

const KEYRING_SERVICE: &str = "habitly";
const SESSION_FILE: &str = "session.json";

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub display_name: String,
}

/// The current signed-in session, if any.
#[derive(Debug, Clone)]
pub struct AuthSession {
    profile: UserProfile,
}

impl AuthSession {
    /// Persist a new session: profile on disk, token in the keyring.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be written or the token
    /// cannot be stored.
    pub fn sign_in(profile: UserProfile, token: &str) -> Result<Self, AuthError> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, &profile.email)?;
        entry.set_password(token)?;
        save_profile(&session_path()?, &profile)?;
        Ok(Self { profile })
    }

    /// Load the persisted session. `Ok(None)` when nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file exists but cannot be parsed.
    pub fn load() -> Result<Option<Self>, AuthError> {
        let path = session_path()?;
        if !path.exists() {
            return Ok(None);
        }
        let profile = load_profile(&path)?;
        Ok(Some(Self { profile }))
    }

    /// Load the persisted session, or fail if nobody is signed in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotSignedIn`] when there is no session.
    pub fn require() -> Result<Self, AuthError> {
        Self::load()?.ok_or(AuthError::NotSignedIn)
    }

    pub fn current_user(&self) -> &UserProfile {
        &self.profile
    }

    /// Fetch the bearer token from the keyring.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyring has no entry for this user.
    pub fn token(&self) -> Result<String, AuthError> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, &self.profile.email)?;
        Ok(entry.get_password()?)
    }

    /// Remove the session file and the keyring entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be removed. A missing
    /// keyring entry is not an error -- the goal is a signed-out state.
    pub fn sign_out(self) -> Result<(), AuthError> {
        if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &self.profile.email) {
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {}
                Err(e) => return Err(e.into()),
            }
        }
        let path = session_path()?;
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| AuthError::SaveFailed {
                path,
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}

fn session_path() -> Result<PathBuf, AuthError> {
    let dir = data_dir().map_err(|e| AuthError::LoadFailed {
        path: PathBuf::from("~/.config/habitly"),
        message: e.to_string(),
    })?;
    Ok(dir.join(SESSION_FILE))
}

fn save_profile(path: &Path, profile: &UserProfile) -> Result<(), AuthError> {
    let json = serde_json::to_string_pretty(profile).map_err(|e| AuthError::SaveFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(|e| AuthError::SaveFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn load_profile(path: &Path) -> Result<UserProfile, AuthError> {
    let content = std::fs::read_to_string(path).map_err(|e| AuthError::LoadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| AuthError::LoadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        let profile = UserProfile {
            email: "user@example.com".to_string(),
            display_name: "User".to_string(),
        };
        save_profile(&path, &profile).unwrap();
        assert_eq!(load_profile(&path).unwrap(), profile);
    }

    #[test]
    fn load_profile_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            load_profile(&path),
            Err(AuthError::LoadFailed { .. })
        ));
    }

    #[test]
    fn profile_serde_shape() {
        let profile = UserProfile {
            email: "user@example.com".to_string(),
            display_name: "User".to_string(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["email"], "user@example.com");
        assert_eq!(value["display_name"], "User");
    }
}
