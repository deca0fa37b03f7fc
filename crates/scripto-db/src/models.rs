//! Database row types. These map directly to SQLite rows and are distinct
//! from the scripto-types models.

pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
}

pub struct ProfileRow {
    pub id: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub updated_at: String,
}

pub struct ContentRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub platform: Option<String>,
    pub created_at: String,
}

/// Insert payload for `user_content`.
pub struct NewContent<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub content_type: &'a str,
    pub platform: Option<&'a str>,
}
