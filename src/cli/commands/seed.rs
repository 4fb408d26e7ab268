use std::io::Write;

use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use tracing::{info, trace};

use super::initdb::run_migrations;
use crate::config::connect;
use crate::provision::{
    ProvisionOutcome, ProvisionReport, default_accounts, provision_account, render_footer,
};

pub async fn seed(database_url: &str, migrate: bool) -> Result<()> {
    trace!("Entering seed function");

    let db = connect(database_url).await?;
    if migrate {
        run_migrations(&db).await?;
    }

    seed_and_report(&db, &mut std::io::stdout()).await?;

    Ok(())
}

/// Provision the default accounts, writing each account's block to `out` as
/// soon as it is committed. The closing rule is only written when every
/// account succeeded.
pub async fn seed_and_report<W: Write>(
    db: &DatabaseConnection,
    out: &mut W,
) -> Result<Vec<ProvisionReport>> {
    let mut reports = Vec::new();
    for spec in default_accounts() {
        let report = provision_account(db, &spec)
            .await
            .with_context(|| format!("Failed to provision account '{}'", spec.username))?;
        info!(id = report.account.id, username = %report.account.username, "Reporting account");

        write!(out, "{report}\n\n")?;
        out.flush()?;
        reports.push(report);
    }

    let created = reports
        .iter()
        .filter(|r| r.outcome == ProvisionOutcome::Created)
        .count();
    info!(
        created,
        reset = reports.len() - created,
        "User seeding finished"
    );

    write!(out, "{}", render_footer())?;
    out.flush()?;

    Ok(reports)
}
