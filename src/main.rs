use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

use forum_client::api::VoteKind;
use forum_client::config::Config;
use forum_client::controllers::SessionController;
use forum_client::lifetime::Scope;
use forum_client::logging::init_logging;
use forum_client::selectors;
use forum_client::state::posts::FEED_KEY;
use forum_client::state::user::{login_action, User};
use forum_client::Forum;

#[derive(Parser)]
#[command(name = "forum-client")]
#[command(about = "Command-line driver for the forum client", long_about = None)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override `api.base_url`
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override `api.timeout_seconds`
    #[arg(long, global = true)]
    timeout: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

/// How an authenticated command obtains a session.
#[derive(Args)]
struct Credentials {
    /// Existing session token
    #[arg(long)]
    token: Option<String>,

    /// User id that goes with `--token`
    #[arg(long)]
    user_id: Option<String>,

    /// Sign in inline instead of passing a token
    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    password: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and print the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and print the session
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to `--password`
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// End a session
    Logout {
        #[command(flatten)]
        auth: Credentials,
    },

    /// List groups
    Groups {
        #[command(flatten)]
        auth: Credentials,
    },

    /// Show one group's details
    Group {
        name: String,
        #[command(flatten)]
        auth: Credentials,
    },

    /// Create a group
    CreateGroup {
        name: String,
        #[arg(long)]
        description: String,
        #[command(flatten)]
        auth: Credentials,
    },

    /// Show the home feed, or a group's posts with `--group`
    Feed {
        #[arg(long)]
        group: Option<String>,
        #[command(flatten)]
        auth: Credentials,
    },

    /// Post to a group
    CreatePost {
        #[arg(long)]
        group: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[command(flatten)]
        auth: Credentials,
    },

    /// Join a group
    Join {
        group: String,
        #[command(flatten)]
        auth: Credentials,
    },

    /// Leave a group
    Leave {
        group: String,
        #[command(flatten)]
        auth: Credentials,
    },

    /// Upvote a post
    Upvote {
        post_id: String,
        #[command(flatten)]
        auth: Credentials,
    },

    /// Downvote a post
    Downvote {
        post_id: String,
        #[command(flatten)]
        auth: Credentials,
    },

    /// List responses to a post
    Responses {
        post_id: String,
        #[command(flatten)]
        auth: Credentials,
    },

    /// Respond to a post
    Respond {
        post_id: String,
        #[arg(long)]
        text: String,
        #[command(flatten)]
        auth: Credentials,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let forum = Forum::new(&config).context("Failed to build gateway clients")?;
    let scope = Scope::new();

    let result = run(&forum, &scope, cli.command).await;

    for (kind, message) in selectors::active_alerts(&forum.store().state()) {
        eprintln!("{}: {}", kind, message);
    }

    let output = result?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_seconds = timeout;
    }

    config.validate()?;
    Ok(config)
}

async fn sign_in(session: &SessionController, forum: &Forum, auth: Credentials) -> Result<()> {
    if let Some(token) = auth.token {
        let user = User {
            user_id: auth.user_id.unwrap_or_default(),
            ..User::default()
        };
        forum.store().dispatch(login_action(user, token));
        return Ok(());
    }

    match (auth.email, auth.password) {
        (Some(email), Some(password)) => {
            session.login(&email, &password).await?;
            Ok(())
        }
        _ => bail!("This command needs --token, or --email and --password"),
    }
}

async fn run(forum: &Forum, scope: &Scope, command: Command) -> Result<Value> {
    let session = forum.session(scope.handle());

    let output = match command {
        Command::Login { email, password } => {
            session.login(&email, &password).await?;
            json!(forum.store().state().user)
        }

        Command::Register {
            username,
            email,
            password,
            confirm_password,
        } => {
            let confirm = confirm_password.unwrap_or_else(|| password.clone());
            session.register(&username, &email, &password, &confirm).await?;
            json!(forum.store().state().user)
        }

        Command::Logout { auth } => {
            sign_in(&session, forum, auth).await?;
            let ended = session.logout().await?;
            json!({ "loggedOut": ended })
        }

        Command::Groups { auth } => {
            sign_in(&session, forum, auth).await?;
            forum.groups(scope.handle()).load_groups().await?;
            json!(selectors::groups(&forum.store().state()))
        }

        Command::Group { name, auth } => {
            sign_in(&session, forum, auth).await?;
            let detail = forum.groups(scope.handle()).fetch_detail(&name).await?;
            json!(detail)
        }

        Command::CreateGroup {
            name,
            description,
            auth,
        } => {
            sign_in(&session, forum, auth).await?;
            let group = forum
                .groups(scope.handle())
                .create_group(&name, &description)
                .await?;
            json!(group)
        }

        Command::Feed { group, auth } => {
            sign_in(&session, forum, auth).await?;
            let key = group.as_deref().unwrap_or(FEED_KEY);
            forum.feed(scope.handle()).load(key).await?;
            json!(selectors::posts_newest_first(&forum.store().state(), key))
        }

        Command::CreatePost {
            group,
            title,
            body,
            auth,
        } => {
            sign_in(&session, forum, auth).await?;
            let post = forum
                .feed(scope.handle())
                .create_post(&group, &title, &body)
                .await?;
            json!(post)
        }

        Command::Join { group, auth } => {
            sign_in(&session, forum, auth).await?;
            set_membership(forum, &group, true).await?
        }

        Command::Leave { group, auth } => {
            sign_in(&session, forum, auth).await?;
            set_membership(forum, &group, false).await?
        }

        Command::Upvote { post_id, auth } => {
            sign_in(&session, forum, auth).await?;
            vote(forum, VoteKind::Upvote, &post_id).await?
        }

        Command::Downvote { post_id, auth } => {
            sign_in(&session, forum, auth).await?;
            vote(forum, VoteKind::Downvote, &post_id).await?
        }

        Command::Responses { post_id, auth } => {
            sign_in(&session, forum, auth).await?;
            let responses = forum.responses(scope.handle(), post_id).load().await?;
            json!(responses)
        }

        Command::Respond {
            post_id,
            text,
            auth,
        } => {
            sign_in(&session, forum, auth).await?;
            let response = forum.responses(scope.handle(), post_id).respond(&text).await?;
            json!(response)
        }
    };

    Ok(output)
}

async fn set_membership(forum: &Forum, group: &str, join: bool) -> Result<Value> {
    let state = forum.store().state();
    let user_id = selectors::current_user(&state).map(|user| user.user_id.as_str());
    if user_id.map_or(true, str::is_empty) {
        bail!("Membership commands need --user-id when signing in with --token");
    }
    let toggle = forum.membership_toggle(group);
    let before = toggle.refresh().await?;
    let after = if before == join {
        before
    } else {
        toggle.toggle().await?
    };

    if after != join {
        bail!("Membership change for '{}' was not accepted", group);
    }
    Ok(json!({ "groupName": group, "isMember": after }))
}

async fn vote(forum: &Forum, kind: VoteKind, post_id: &str) -> Result<Value> {
    let toggle = forum.vote_toggle(kind, post_id);
    toggle.load_count().await;
    let state = toggle.toggle().await?;
    Ok(json!({
        "postId": post_id,
        "kind": kind.segment(),
        "on": state.on,
        "count": state.count,
    }))
}
