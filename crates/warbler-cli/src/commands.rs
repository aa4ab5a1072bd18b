use anyhow::{Context, Result};
use warbler_storage::UserStore;

use crate::config::AppConfig;

async fn open_store(config: &AppConfig) -> Result<UserStore> {
    UserStore::new(&config.database)
        .await
        .with_context(|| format!("open user store at '{}'", config.database.url))
}

fn parse_user_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .map_err(|e| anyhow::anyhow!("Invalid user id '{}': {}", raw, e))
}

/// Connects and applies pending migrations.
pub async fn run_migrate(config: &AppConfig) -> Result<()> {
    let store = open_store(config).await?;
    let session = store.begin().await?;
    let count = session.count_users().await?;
    session.commit().await?;
    tracing::info!(count, "Database is up to date");
    store.close().await?;
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn run_signup(
    config: &AppConfig,
    username: &str,
    email: &str,
    password: &str,
    image_url: Option<&str>,
) -> Result<()> {
    let store = open_store(config).await?;
    let session = store.begin().await?;
    let user = session
        .signup(username, email, password, image_url)
        .await
        .context("signup")?;
    session.commit().await.context("commit signup")?;
    println!("{user}");
    store.close().await?;
    Ok(())
}

pub async fn run_follow(config: &AppConfig, follower_id: &str, followed_id: &str) -> Result<()> {
    let follower_id = parse_user_id(follower_id)?;
    let followed_id = parse_user_id(followed_id)?;

    let store = open_store(config).await?;
    let session = store.begin().await?;
    let follower = session.require_user(follower_id).await?;
    let followed = session.require_user(followed_id).await?;
    if session.is_following(&follower, &followed).await? {
        tracing::info!(follower_id, followed_id, "Already following, nothing to do");
        return Ok(());
    }
    session.follow(&follower, &followed).await?;
    session.commit().await.context("commit follow")?;
    store.close().await?;
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn run_show(config: &AppConfig, user_id: &str) -> Result<()> {
    let user_id = parse_user_id(user_id)?;

    let store = open_store(config).await?;
    let session = store.begin().await?;
    let user = session.require_user(user_id).await?;
    let followers = session.followers(&user).await?;
    let following = session.following(&user).await?;
    let messages = session.messages(&user).await?;
    let liked = session.liked_messages(&user).await?;

    println!("{user}");
    println!("  image:     {}", user.image_url);
    println!("  followers: {}", followers.len());
    println!("  following: {}", following.len());
    println!("  messages:  {}", messages.len());
    println!("  likes:     {}", liked.len());

    session.rollback().await?;
    store.close().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use warbler_storage::StoreConfig;

    fn temp_config(dir: &tempfile::TempDir) -> AppConfig {
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("warbler.db").display());
        AppConfig {
            database: StoreConfig {
                bcrypt_cost: 4,
                ..StoreConfig::with_url(url)
            },
        }
    }

    async fn user_id(config: &AppConfig, username: &str) -> i32 {
        let store = open_store(config).await.unwrap();
        let session = store.begin().await.unwrap();
        let id = session
            .get_user_by_username(username)
            .await
            .unwrap()
            .unwrap()
            .id;
        session.rollback().await.unwrap();
        store.close().await.unwrap();
        id
    }

    #[test]
    fn user_ids_must_be_integers() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert!(parse_user_id("u1").is_err());
    }

    #[tokio::test]
    async fn signup_follow_twice_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);

        run_migrate(&config).await.unwrap();
        run_signup(&config, "u1", "u1@email.com", "password", None)
            .await
            .unwrap();
        run_signup(&config, "u2", "u2@email.com", "password", None)
            .await
            .unwrap();

        let u1 = user_id(&config, "u1").await.to_string();
        let u2 = user_id(&config, "u2").await.to_string();

        run_follow(&config, &u1, &u2).await.unwrap();
        // 重复关注不报错
        run_follow(&config, &u1, &u2).await.unwrap();
        run_show(&config, &u1).await.unwrap();

        let store = open_store(&config).await.unwrap();
        let session = store.begin().await.unwrap();
        let follower = session.require_user(u1.parse().unwrap()).await.unwrap();
        let followed = session.require_user(u2.parse().unwrap()).await.unwrap();
        assert!(session.is_following(&follower, &followed).await.unwrap());
        assert_eq!(session.following(&follower).await.unwrap().len(), 1);
        assert_eq!(session.followers(&followed).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn follow_unknown_user_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(&dir);

        run_signup(&config, "u1", "u1@email.com", "password", None)
            .await
            .unwrap();
        let u1 = user_id(&config, "u1").await.to_string();

        assert!(run_follow(&config, &u1, "9999").await.is_err());
        assert!(run_show(&config, "9999").await.is_err());
    }
}
