//! Login, logout, whoami.

use std::io::Write;

use clap::Args;

use lunas_client::{ApiClient, Session, SessionStore};

/// Arguments for `lunas login`.
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Login email.
    pub email: String,
    /// Password. Prompted for when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

/// Signs in and persists the session.
pub async fn login(api: &ApiClient, store: &SessionStore, args: LoginArgs) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let login = api.auth().login(&args.email, &password).await?;
    store.save(&Session {
        auth_token: login.token,
        user_profile: login.user.clone(),
    })?;

    println!("Signed in as {} ({})", login.user.name, login.user.role);
    Ok(())
}

/// Drops the stored session.
pub fn logout(store: &SessionStore) -> anyhow::Result<()> {
    store.clear()?;
    println!("Signed out");
    Ok(())
}

/// Shows the signed-in user from the session file.
pub fn whoami(session: Option<&Session>) -> anyhow::Result<()> {
    match session {
        Some(session) => {
            let user = &session.user_profile;
            println!("{} <{}> role={}", user.name, user.email, user.role);
            Ok(())
        }
        None => anyhow::bail!("not signed in; run `lunas login <email>` first"),
    }
}

fn prompt_password() -> anyhow::Result<String> {
    print!("Password: ");
    std::io::stdout().flush()?;
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}
