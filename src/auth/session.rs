use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::Role;
use crate::panels::Notice;

const PROFILE_ID: &str = "profile_id";
const FULL_NAME: &str = "full_name";
const ROLE: &str = "role";
const FLASH: &str = "flash";

/// Who is signed in. Everything the dashboards fetch is scoped by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub profile_id: i64,
    pub role: Role,
}

pub fn sign_in(session: &Session, profile_id: i64, full_name: &str, role: Role) -> Result<(), AppError> {
    session.renew();
    session
        .insert(PROFILE_ID, profile_id)
        .and_then(|_| session.insert(FULL_NAME, full_name))
        .and_then(|_| session.insert(ROLE, role))
        .map_err(|e| AppError::Session(format!("Failed to store login: {e}")))
}

pub fn get_profile_id(session: &Session) -> Option<i64> {
    session.get::<i64>(PROFILE_ID).unwrap_or(None)
}

pub fn get_full_name(session: &Session) -> Result<String, String> {
    match session.get::<String>(FULL_NAME) {
        Ok(Some(name)) => Ok(name),
        Ok(None) => Err("No name in session".to_string()),
        Err(e) => Err(format!("Session error: {}", e)),
    }
}

pub fn get_identity(session: &Session) -> Result<Identity, AppError> {
    let profile_id = get_profile_id(session)
        .ok_or_else(|| AppError::Session("Not logged in".to_string()))?;
    let role = session
        .get::<Role>(ROLE)
        .map_err(|e| AppError::Session(format!("Session error: {e}")))?
        .ok_or_else(|| AppError::Session("No role in session".to_string()))?;
    Ok(Identity { profile_id, role })
}

/// Check the signed-in role; returns Err(AppError) if it differs.
pub fn require_role(session: &Session, role: Role) -> Result<Identity, AppError> {
    let identity = get_identity(session)?;
    if identity.role == role {
        Ok(identity)
    } else {
        Err(AppError::PermissionDenied(format!("{role} only")))
    }
}

pub fn set_flash(session: &Session, notice: &Notice) {
    if let Err(e) = session.insert(FLASH, notice) {
        log::warn!("Failed to store flash notice: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<Notice> {
    let flash = session.get::<Notice>(FLASH).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH);
    }
    flash
}
