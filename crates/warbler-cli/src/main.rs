use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::AppConfig;

#[allow(clippy::print_stderr)]
fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  warbler migrate <config.toml>                                        Create or upgrade the schema");
    eprintln!("  warbler signup <config.toml> <username> <email> <password> [image]   Create a user account");
    eprintln!("  warbler follow <config.toml> <follower_id> <followed_id>             Add a follow edge");
    eprintln!("  warbler show <config.toml> <user_id>                                 Print a user and its counts");
    eprintln!();
    eprintln!("DATABASE_URL overrides [database].url from the config file.");
}

fn arg<'a>(args: &'a [String], idx: usize, what: &str) -> Result<&'a str> {
    args.get(idx).map(String::as_str).ok_or_else(|| {
        print_usage();
        anyhow::anyhow!("missing {what} argument")
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warbler=info".parse()?))
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("migrate") => {
            let config = AppConfig::load(arg(&args, 2, "<config.toml>")?)?;
            commands::run_migrate(&config).await
        }
        Some("signup") => {
            let config = AppConfig::load(arg(&args, 2, "<config.toml>")?)?;
            let username = arg(&args, 3, "<username>")?;
            let email = arg(&args, 4, "<email>")?;
            let password = arg(&args, 5, "<password>")?;
            commands::run_signup(
                &config,
                username,
                email,
                password,
                args.get(6).map(String::as_str),
            )
            .await
        }
        Some("follow") => {
            let config = AppConfig::load(arg(&args, 2, "<config.toml>")?)?;
            let follower_id = arg(&args, 3, "<follower_id>")?;
            let followed_id = arg(&args, 4, "<followed_id>")?;
            commands::run_follow(&config, follower_id, followed_id).await
        }
        Some("show") => {
            let config = AppConfig::load(arg(&args, 2, "<config.toml>")?)?;
            let user_id = arg(&args, 3, "<user_id>")?;
            commands::run_show(&config, user_id).await
        }
        Some("--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("unknown command '{other}'")
        }
        None => {
            print_usage();
            Ok(())
        }
    }
}
