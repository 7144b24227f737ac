/**
 * Profile HTTP Handlers
 *
 * Handlers for the `/api/profile` routes:
 * - GET    /api/profile/me                  - Own profile
 * - POST   /api/profile                     - Create or update own profile
 * - GET    /api/profile                     - All profiles
 * - GET    /api/profile/user/{user_id}      - Profile by user id
 * - DELETE /api/profile                     - Delete posts, profile and user
 * - PUT    /api/profile/experience          - Add experience
 * - DELETE /api/profile/experience/{exp_id} - Remove experience
 * - PUT    /api/profile/education           - Add education
 * - DELETE /api/profile/education/{edu_id}  - Remove education
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::profile::db::{self, NewEducation, NewExperience, ProfileFields};
use crate::shared::validation::{non_empty, normalize_url, parse_date, Validator};
use crate::shared::{
    EducationRequest, ExperienceRequest, FieldError, Profile, ProfileRequest, Social,
};

const NO_PROFILE: &str = "There is no profile for this user";
const PROFILE_NOT_FOUND: &str = "Profile not found";

/// Parse an optional date field, recording a field error if it is present but invalid
fn date_field(
    validator: &mut Validator,
    field: &str,
    raw: Option<&str>,
    msg: &str,
) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    let parsed = parse_date(raw);
    if parsed.is_none() {
        validator.push(FieldError::body(field, msg));
    }
    parsed
}

async fn require_profile_id(pool: &SqlitePool, user_id: Uuid) -> Result<Uuid, BackendError> {
    db::find_profile_id(pool, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(NO_PROFILE))
}

async fn reload_profile(pool: &SqlitePool, user_id: Uuid) -> Result<Profile, BackendError> {
    db::get_profile_by_user(pool, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(NO_PROFILE))
}

/// Get the authenticated user's profile
pub async fn get_own_profile(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Profile>, BackendError> {
    Ok(Json(reload_profile(&pool, user.user_id).await?))
}

/// Create or update the authenticated user's profile
///
/// # Errors
///
/// * `400` with field errors - missing status or skills, invalid website
/// * `404 User not found` - the token outlived its account
pub async fn upsert_profile(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<Profile>, BackendError> {
    let Json(request) = payload?;

    let skills = request
        .skills
        .as_ref()
        .map(|s| s.normalize())
        .unwrap_or_default();

    let mut validator = Validator::new();
    validator.required("status", request.status.as_deref(), "Status is required");
    if skills.is_empty() {
        validator.push(FieldError::body("skills", "Skills is required"));
    }

    let website = match non_empty(request.website) {
        Some(raw) => {
            let normalized = normalize_url(&raw);
            if normalized.is_none() {
                validator.push(FieldError::body("website", "Please include a valid website URL"));
            }
            normalized
        }
        None => None,
    };
    validator.finish()?;

    if get_user_by_id(&pool, user.user_id).await?.is_none() {
        return Err(BackendError::not_found("User not found"));
    }

    let fields = ProfileFields {
        company: non_empty(request.company),
        website,
        location: non_empty(request.location),
        status: request.status.unwrap_or_default().trim().to_string(),
        skills,
        bio: non_empty(request.bio),
        githubusername: non_empty(request.githubusername),
        social: Social {
            youtube: non_empty(request.youtube),
            twitter: non_empty(request.twitter),
            facebook: non_empty(request.facebook),
            linkedin: non_empty(request.linkedin),
            instagram: non_empty(request.instagram),
        },
    };

    let profile = db::upsert_profile(&pool, user.user_id, &fields).await?;
    tracing::info!("Profile saved for user {}", user.user_id);
    Ok(Json(profile))
}

/// List all profiles
pub async fn list_profiles(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Profile>>, BackendError> {
    Ok(Json(db::list_profiles(&pool).await?))
}

/// Get the profile of a user by id
///
/// An id that is not a valid UUID cannot belong to any user, so it is
/// answered like any other unknown id.
pub async fn get_profile_by_user_id(
    State(pool): State<SqlitePool>,
    Path(user_id): Path<String>,
) -> Result<Json<Profile>, BackendError> {
    let user_id =
        Uuid::parse_str(&user_id).map_err(|_| BackendError::not_found(PROFILE_NOT_FOUND))?;

    db::get_profile_by_user(&pool, user_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(PROFILE_NOT_FOUND))
}

/// Delete the authenticated user's posts, profile and account
pub async fn delete_account(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Value>, BackendError> {
    db::delete_account(&pool, user.user_id).await?;
    Ok(Json(json!({ "msg": "User removed" })))
}

/// Add an experience entry to the authenticated user's profile
pub async fn add_experience(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<ExperienceRequest>, JsonRejection>,
) -> Result<Json<Profile>, BackendError> {
    let Json(request) = payload?;

    let mut validator = Validator::new();
    validator
        .required("title", request.title.as_deref(), "Title is required")
        .required("company", request.company.as_deref(), "Company is required")
        .required("from", request.from.as_deref(), "From date is required");
    let from = date_field(
        &mut validator,
        "from",
        request.from.as_deref(),
        "From date must be a valid date",
    );
    let to = date_field(
        &mut validator,
        "to",
        request.to.as_deref(),
        "To date must be a valid date",
    );
    validator.finish()?;

    let from = from.ok_or_else(|| BackendError::internal("validated date missing"))?;
    let entry = NewExperience {
        title: request.title.unwrap_or_default().trim().to_string(),
        company: request.company.unwrap_or_default().trim().to_string(),
        location: non_empty(request.location),
        from,
        to,
        current: request.current.unwrap_or(false),
        description: non_empty(request.description),
    };

    let profile_id = require_profile_id(&pool, user.user_id).await?;
    db::add_experience(&pool, profile_id, &entry).await?;
    Ok(Json(reload_profile(&pool, user.user_id).await?))
}

/// Remove an experience entry from the authenticated user's profile
pub async fn remove_experience(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, BackendError> {
    let profile_id = require_profile_id(&pool, user.user_id).await?;
    let not_found = || BackendError::not_found("Experience not found");

    let exp_id = Uuid::parse_str(&exp_id).map_err(|_| not_found())?;
    if db::remove_experience(&pool, profile_id, exp_id).await? == 0 {
        return Err(not_found());
    }

    Ok(Json(reload_profile(&pool, user.user_id).await?))
}

/// Add an education entry to the authenticated user's profile
pub async fn add_education(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<EducationRequest>, JsonRejection>,
) -> Result<Json<Profile>, BackendError> {
    let Json(request) = payload?;

    let mut validator = Validator::new();
    validator
        .required("school", request.school.as_deref(), "School is required")
        .required("degree", request.degree.as_deref(), "Degree is required")
        .required(
            "fieldofstudy",
            request.fieldofstudy.as_deref(),
            "Field of study is required",
        )
        .required("from", request.from.as_deref(), "From date is required");
    let from = date_field(
        &mut validator,
        "from",
        request.from.as_deref(),
        "From date must be a valid date",
    );
    let to = date_field(
        &mut validator,
        "to",
        request.to.as_deref(),
        "To date must be a valid date",
    );
    validator.finish()?;

    let from = from.ok_or_else(|| BackendError::internal("validated date missing"))?;
    let entry = NewEducation {
        school: request.school.unwrap_or_default().trim().to_string(),
        degree: request.degree.unwrap_or_default().trim().to_string(),
        fieldofstudy: request.fieldofstudy.unwrap_or_default().trim().to_string(),
        from,
        to,
        current: request.current.unwrap_or(false),
        description: non_empty(request.description),
    };

    let profile_id = require_profile_id(&pool, user.user_id).await?;
    db::add_education(&pool, profile_id, &entry).await?;
    Ok(Json(reload_profile(&pool, user.user_id).await?))
}

/// Remove an education entry from the authenticated user's profile
pub async fn remove_education(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, BackendError> {
    let profile_id = require_profile_id(&pool, user.user_id).await?;
    let not_found = || BackendError::not_found("Education not found");

    let edu_id = Uuid::parse_str(&edu_id).map_err(|_| not_found())?;
    if db::remove_education(&pool, profile_id, edu_id).await? == 0 {
        return Err(not_found());
    }

    Ok(Json(reload_profile(&pool, user.user_id).await?))
}
