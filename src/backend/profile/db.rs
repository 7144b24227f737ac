//! Database operations for profiles
//!
//! Profiles live in `profiles`; their experience and education entries live
//! in child tables and are always returned newest first (`seq DESC`). The
//! owning user's name and avatar are joined in on every read.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::backend::auth::users::delete_user;
use crate::backend::posts::db::delete_posts_by_user;
use crate::shared::{Education, Experience, Profile, ProfileOwner, Social};

/// Validated scalar fields of a profile, as written by an upsert
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: Social,
}

/// Validated experience entry, before it has an id
#[derive(Debug, Clone)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Validated education entry, before it has an id
#[derive(Debug, Clone)]
pub struct NewEducation {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: Uuid,
    user_name: String,
    user_avatar: String,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    status: String,
    skills: String,
    bio: Option<String>,
    githubusername: Option<String>,
    youtube: Option<String>,
    twitter: Option<String>,
    facebook: Option<String>,
    linkedin: Option<String>,
    instagram: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct ExperienceRow {
    id: Uuid,
    profile_id: Uuid,
    title: String,
    company: String,
    location: Option<String>,
    from_date: NaiveDate,
    to_date: Option<NaiveDate>,
    #[sqlx(rename = "is_current")]
    current: bool,
    description: Option<String>,
}

#[derive(sqlx::FromRow)]
struct EducationRow {
    id: Uuid,
    profile_id: Uuid,
    school: String,
    degree: String,
    fieldofstudy: String,
    from_date: NaiveDate,
    to_date: Option<NaiveDate>,
    #[sqlx(rename = "is_current")]
    current: bool,
    description: Option<String>,
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Experience {
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            from: row.from_date,
            to: row.to_date,
            current: row.current,
            description: row.description,
        }
    }
}

impl From<EducationRow> for Education {
    fn from(row: EducationRow) -> Self {
        Education {
            id: row.id,
            school: row.school,
            degree: row.degree,
            fieldofstudy: row.fieldofstudy,
            from: row.from_date,
            to: row.to_date,
            current: row.current,
            description: row.description,
        }
    }
}

const PROFILE_COLUMNS: &str = r#"
    p.id, p.user_id, u.name AS user_name, u.avatar AS user_avatar,
    p.company, p.website, p.location, p.status, p.skills, p.bio, p.githubusername,
    p.youtube, p.twitter, p.facebook, p.linkedin, p.instagram, p.created_at
"#;

const EXPERIENCE_COLUMNS: &str =
    "id, profile_id, title, company, location, from_date, to_date, is_current, description";

const EDUCATION_COLUMNS: &str =
    "id, profile_id, school, degree, fieldofstudy, from_date, to_date, is_current, description";

fn assemble(
    row: ProfileRow,
    experience: Vec<Experience>,
    education: Vec<Education>,
) -> Result<Profile, sqlx::Error> {
    let skills: Vec<String> =
        serde_json::from_str(&row.skills).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Profile {
        id: row.id,
        user: ProfileOwner {
            id: row.user_id,
            name: row.user_name,
            avatar: row.user_avatar,
        },
        company: row.company,
        website: row.website,
        location: row.location,
        status: row.status,
        skills,
        bio: row.bio,
        githubusername: row.githubusername,
        experience,
        education,
        social: Social {
            youtube: row.youtube,
            twitter: row.twitter,
            facebook: row.facebook,
            linkedin: row.linkedin,
            instagram: row.instagram,
        },
        date: row.created_at,
    })
}

/// Get the profile owned by `user_id`, with entries and owner populated
pub async fn get_profile_by_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM profiles p JOIN users u ON u.id = p.user_id WHERE p.user_id = ?1",
        PROFILE_COLUMNS
    );
    let row = sqlx::query_as::<_, ProfileRow>(&sql)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let experience = sqlx::query_as::<_, ExperienceRow>(&format!(
        "SELECT {} FROM experience WHERE profile_id = ?1 ORDER BY seq DESC",
        EXPERIENCE_COLUMNS
    ))
    .bind(row.id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(Experience::from)
    .collect();

    let education = sqlx::query_as::<_, EducationRow>(&format!(
        "SELECT {} FROM education WHERE profile_id = ?1 ORDER BY seq DESC",
        EDUCATION_COLUMNS
    ))
    .bind(row.id)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(Education::from)
    .collect();

    assemble(row, experience, education).map(Some)
}

/// List every profile, oldest first, with entries and owners populated
pub async fn list_profiles(pool: &SqlitePool) -> Result<Vec<Profile>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM profiles p JOIN users u ON u.id = p.user_id ORDER BY p.created_at, p.rowid",
        PROFILE_COLUMNS
    );
    let rows = sqlx::query_as::<_, ProfileRow>(&sql).fetch_all(pool).await?;

    let mut experience: HashMap<Uuid, Vec<Experience>> = HashMap::new();
    for row in sqlx::query_as::<_, ExperienceRow>(&format!(
        "SELECT {} FROM experience ORDER BY seq DESC",
        EXPERIENCE_COLUMNS
    ))
    .fetch_all(pool)
    .await?
    {
        experience.entry(row.profile_id).or_default().push(row.into());
    }

    let mut education: HashMap<Uuid, Vec<Education>> = HashMap::new();
    for row in sqlx::query_as::<_, EducationRow>(&format!(
        "SELECT {} FROM education ORDER BY seq DESC",
        EDUCATION_COLUMNS
    ))
    .fetch_all(pool)
    .await?
    {
        education.entry(row.profile_id).or_default().push(row.into());
    }

    rows.into_iter()
        .map(|row| {
            let exp = experience.remove(&row.id).unwrap_or_default();
            let edu = education.remove(&row.id).unwrap_or_default();
            assemble(row, exp, edu)
        })
        .collect()
}

/// Create the user's profile, or overwrite its scalar fields if it exists
///
/// Experience and education entries are left untouched. The social record
/// is replaced as a whole.
pub async fn upsert_profile(
    pool: &SqlitePool,
    user_id: Uuid,
    fields: &ProfileFields,
) -> Result<Profile, sqlx::Error> {
    let skills =
        serde_json::to_string(&fields.skills).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO profiles (
            id, user_id, company, website, location, status, skills, bio, githubusername,
            youtube, twitter, facebook, linkedin, instagram, created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?15)
        ON CONFLICT(user_id) DO UPDATE SET
            company = excluded.company,
            website = excluded.website,
            location = excluded.location,
            status = excluded.status,
            skills = excluded.skills,
            bio = excluded.bio,
            githubusername = excluded.githubusername,
            youtube = excluded.youtube,
            twitter = excluded.twitter,
            facebook = excluded.facebook,
            linkedin = excluded.linkedin,
            instagram = excluded.instagram,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&fields.company)
    .bind(&fields.website)
    .bind(&fields.location)
    .bind(&fields.status)
    .bind(skills)
    .bind(&fields.bio)
    .bind(&fields.githubusername)
    .bind(&fields.social.youtube)
    .bind(&fields.social.twitter)
    .bind(&fields.social.facebook)
    .bind(&fields.social.linkedin)
    .bind(&fields.social.instagram)
    .bind(now)
    .execute(pool)
    .await?;

    get_profile_by_user(pool, user_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// Id of the profile owned by `user_id`, if any
pub async fn find_profile_id(pool: &SqlitePool, user_id: Uuid) -> Result<Option<Uuid>, sqlx::Error> {
    let row: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM profiles WHERE user_id = ?1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(id,)| id))
}

/// Add an experience entry; it becomes the first entry of the list
pub async fn add_experience(
    pool: &SqlitePool,
    profile_id: Uuid,
    entry: &NewExperience,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO experience (id, profile_id, title, company, location, from_date, to_date, is_current, description)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(id)
    .bind(profile_id)
    .bind(&entry.title)
    .bind(&entry.company)
    .bind(&entry.location)
    .bind(entry.from)
    .bind(entry.to)
    .bind(entry.current)
    .bind(&entry.description)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Add an education entry; it becomes the first entry of the list
pub async fn add_education(
    pool: &SqlitePool,
    profile_id: Uuid,
    entry: &NewEducation,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO education (id, profile_id, school, degree, fieldofstudy, from_date, to_date, is_current, description)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(id)
    .bind(profile_id)
    .bind(&entry.school)
    .bind(&entry.degree)
    .bind(&entry.fieldofstudy)
    .bind(entry.from)
    .bind(entry.to)
    .bind(entry.current)
    .bind(&entry.description)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Remove one experience entry of a profile; returns rows removed (0 or 1)
pub async fn remove_experience(
    pool: &SqlitePool,
    profile_id: Uuid,
    entry_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM experience WHERE id = ?1 AND profile_id = ?2")
        .bind(entry_id)
        .bind(profile_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Remove one education entry of a profile; returns rows removed (0 or 1)
pub async fn remove_education(
    pool: &SqlitePool,
    profile_id: Uuid,
    entry_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM education WHERE id = ?1 AND profile_id = ?2")
        .bind(entry_id)
        .bind(profile_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Delete the profile owned by `user_id` together with its entries
pub async fn delete_profile(conn: &mut SqliteConnection, user_id: Uuid) -> Result<u64, sqlx::Error> {
    sqlx::query(
        "DELETE FROM experience WHERE profile_id IN (SELECT id FROM profiles WHERE user_id = ?1)",
    )
    .bind(user_id)
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        "DELETE FROM education WHERE profile_id IN (SELECT id FROM profiles WHERE user_id = ?1)",
    )
    .bind(user_id)
    .execute(&mut *conn)
    .await?;

    let result = sqlx::query("DELETE FROM profiles WHERE user_id = ?1")
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

/// Delete an account: posts, then profile, then user
///
/// The three steps share one transaction, so a failure part-way leaves
/// everything in place.
pub async fn delete_account(pool: &SqlitePool, user_id: Uuid) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let posts = delete_posts_by_user(&mut *tx, user_id).await?;
    let profiles = delete_profile(&mut *tx, user_id).await?;
    let users = delete_user(&mut *tx, user_id).await?;

    tx.commit().await?;
    tracing::info!(
        "Deleted account {} ({} posts, {} profile, {} user)",
        user_id,
        posts,
        profiles,
        users
    );
    Ok(())
}
