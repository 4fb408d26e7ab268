use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use model::entities::{prelude::User, user};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;
use tracing::debug;

use crate::config::connect;

/// Account row as shown to operators. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: &'static str,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl From<user::Model> for AccountSummary {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            role: model.role_label(),
            username: model.username,
            email: model.email,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
            is_active: model.is_active,
            date_joined: model.date_joined,
        }
    }
}

pub async fn list_accounts(database_url: &str, json: bool) -> Result<()> {
    let db = connect(database_url).await?;
    let accounts = fetch_accounts(&db).await?;

    let output = if json {
        serde_json::to_string_pretty(&accounts).context("Failed to serialize accounts")?
    } else {
        render_table(&accounts)
    };
    println!("{output}");

    Ok(())
}

pub async fn fetch_accounts(db: &DatabaseConnection) -> Result<Vec<AccountSummary>> {
    let users = User::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await
        .context("Failed to load accounts")?;
    debug!("Loaded {} accounts", users.len());

    Ok(users.into_iter().map(AccountSummary::from).collect())
}

fn render_table(accounts: &[AccountSummary]) -> String {
    if accounts.is_empty() {
        return "No accounts found".to_string();
    }

    let mut lines = vec![format!(
        "{:<5} {:<20} {:<30} {:<10} {}",
        "ID", "USERNAME", "EMAIL", "ROLE", "ACTIVE"
    )];
    for account in accounts {
        lines.push(format!(
            "{:<5} {:<20} {:<30} {:<10} {}",
            account.id,
            account.username,
            account.email,
            account.role,
            if account.is_active { "yes" } else { "no" }
        ));
    }
    lines.join("\n")
}
