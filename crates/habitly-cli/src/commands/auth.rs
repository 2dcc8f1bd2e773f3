//! Session management commands for CLI.
//!
//! The auth provider is external; `login` stores the token it issued
//! alongside the user's profile, and that is the whole session.

use clap::Subcommand;
use habitly_core::{AuthSession, UserProfile};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the provider-issued token and sign in
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Bearer token issued by the auth provider
        #[arg(long)]
        token: String,
    },
    /// Remove the stored session
    Logout,
    /// Show the signed-in user
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::Login { email, name, token } => {
            let profile = UserProfile {
                email,
                display_name: name,
            };
            let session = AuthSession::sign_in(profile, &token)?;
            let user = session.current_user();
            println!("Signed in as {} <{}>", user.display_name, user.email);
        }
        AuthAction::Logout => match AuthSession::load()? {
            Some(session) => {
                session.sign_out()?;
                println!("Signed out");
            }
            None => println!("Not signed in"),
        },
        AuthAction::Status => match AuthSession::load()? {
            Some(session) => {
                println!("{}", serde_json::to_string_pretty(session.current_user())?);
            }
            None => println!("Not signed in"),
        },
    }
    Ok(())
}
