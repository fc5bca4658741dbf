//! Account commands: login, logout, whoami.

use anyhow::Result;
use clap::Args;
use curio_auth::{AuthService, SignupProfile};

use crate::output::Output;

/// Arguments for `curio login`.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address to sign in with
    pub email: String,

    /// Password (any value is accepted by the mock backend)
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// First name; providing a name registers a new account
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name for registration
    #[arg(long)]
    pub last_name: Option<String>,
}

pub fn run_login(args: LoginArgs, auth: &AuthService, output: &Output) -> Result<()> {
    let user = match (args.first_name, args.last_name) {
        (Some(first_name), last_name) => auth.signup(SignupProfile {
            email: args.email,
            first_name,
            last_name: last_name.unwrap_or_default(),
        }),
        _ => auth.login(args.email, &args.password),
    };
    output.success(&format!("Signed in as {} <{}>", user.display_name(), user.email));
    Ok(())
}

pub fn run_logout(auth: &AuthService, output: &Output) -> Result<()> {
    auth.logout();
    output.success("Signed out");
    Ok(())
}

pub fn run_whoami(auth: &AuthService, output: &Output) -> Result<()> {
    match auth.current_user() {
        Some(user) => {
            output.info(&format!("{} <{}>", user.display_name(), user.email));
            output.detail(&format!("id: {}", user.id.as_str()));
        }
        None => output.info("Not signed in"),
    }
    Ok(())
}
