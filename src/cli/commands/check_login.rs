use anyhow::{Result, bail};
use model::entities::{prelude::User, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::{info, warn};

use crate::config::connect;
use crate::password::verify_password;

pub async fn check_login(database_url: &str, username: &str, password: &str) -> Result<()> {
    let db = connect(database_url).await?;

    if credentials_match(&db, username, password).await? {
        println!("✅ Credentials for '{}' are valid", username);
        Ok(())
    } else {
        bail!("Invalid credentials for '{}'", username)
    }
}

/// True when `username` exists, is active, and `password` matches its hash.
pub async fn credentials_match(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<bool> {
    let Some(account) = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?
    else {
        warn!("No account named '{}'", username);
        return Ok(false);
    };

    if !account.is_active {
        warn!("Account '{}' is inactive", username);
        return Ok(false);
    }

    let matches = verify_password(account.password, password.to_string()).await?;
    info!(username, matches, "Checked credentials");
    Ok(matches)
}
