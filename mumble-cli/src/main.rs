use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, Context};
use mumble_api::{extract_post, MumbleApi, Session, User};
use mumble_config::Configuration;
use mumble_type::NewPost;
use std::path::PathBuf;

#[derive(Subcommand)]
enum AppSubcommand {
    /// Print the configuration of a user
    Config { username: String },

    /// List the posts in the outbox of a user
    Outbox { username: String },

    /// Submit a post to the outbox of a user
    Post {
        username: String,
        content: String,

        /// Address the post to the public collection
        #[clap(long)]
        public: bool,
    },
}

/// CLI for the Mumble API
#[derive(Parser)]
#[command(about, author, version)]
struct App {
    /// Path to the configuration file
    #[clap(long, short, default_value = "config.toml")]
    config: PathBuf,

    /// Identity token of the signed-in user
    #[clap(long, env = "MUMBLE_ID_TOKEN", hide_env_values = true)]
    id_token: Option<String>,

    #[clap(subcommand)]
    subcommand: AppSubcommand,
}

impl App {
    fn user(&self, username: &str) -> User {
        let user = User::new(username);
        match self.id_token {
            Some(ref id_token) => user.with_session(Session::new(id_token.as_str())),
            None => user,
        }
    }
}

async fn boot() -> eyre::Result<()> {
    let app = App::parse();
    let config = Configuration::load(&app.config)
        .await
        .wrap_err_with(|| format!("Failed to load {}", app.config.display()))?;
    let dispatch = mumble_observability::initialise(&config.logging)?;

    let api = MumbleApi::builder()
        .config(config.api)
        .dispatch(dispatch)
        .build();

    match app.subcommand {
        AppSubcommand::Config { ref username } => {
            let user_config = api.get_user_config(&app.user(username)).await?;
            println!("objects bucket: {}", user_config.objects_bucket_name);
        }
        AppSubcommand::Outbox { ref username } => {
            let outbox = api.get_outbox(&app.user(username)).await?;
            let page = outbox.get_first_page().await?;

            for post in page.extract_items(extract_post).await {
                println!("{} [{}]", post.id, post.published);
                println!("{}", post.content);
                for attachment in post.attachment.iter().flatten() {
                    println!(
                        "  {} ({}): {}",
                        attachment.r#type, attachment.media_type, attachment.url
                    );
                }
                println!();
            }
        }
        AppSubcommand::Post {
            ref username,
            ref content,
            public,
        } => {
            let post = if public {
                NewPost::public(content.as_str())
            } else {
                NewPost::builder().content(content.as_str()).build()
            };

            api.submit_post(&app.user(username), &post).await?;
            println!("submitted");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    boot().await
}

#[cfg(test)]
mod test {
    use super::{App, AppSubcommand};
    use clap::{CommandFactory, Parser};
    use std::path::Path;

    #[test]
    fn arguments_are_consistent() {
        App::command().debug_assert();
    }

    #[test]
    fn post_subcommand() {
        let app = App::try_parse_from([
            "mumble-cli",
            "--config",
            "mumble.toml",
            "--id-token",
            "alice.id.token",
            "post",
            "alice",
            "Hello, Mumble!",
            "--public",
        ])
        .unwrap();

        assert_eq!(app.config, Path::new("mumble.toml"));
        assert_eq!(app.id_token.as_deref(), Some("alice.id.token"));

        let AppSubcommand::Post {
            ref username,
            ref content,
            public,
        } = app.subcommand
        else {
            panic!("expected the post subcommand");
        };
        assert_eq!(username, "alice");
        assert_eq!(content, "Hello, Mumble!");
        assert!(public);

        let user = app.user(username);
        assert_eq!(user.username(), "alice");
        assert!(user.active_session().is_some());
    }

    #[test]
    fn config_defaults_to_working_directory() {
        let app = App::try_parse_from(["mumble-cli", "outbox", "alice"]).unwrap();
        assert_eq!(app.config, Path::new("config.toml"));
        assert!(matches!(app.subcommand, AppSubcommand::Outbox { ref username } if username == "alice"));
    }

    #[test]
    fn username_is_required() {
        assert!(App::try_parse_from(["mumble-cli", "config"]).is_err());
    }
}
