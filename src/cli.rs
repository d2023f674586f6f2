use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::model::{PageId, UserRole};
use crate::paths::Paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Buyer,
    Seller,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Buyer => UserRole::Buyer,
            RoleArg::Seller => UserRole::Seller,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "agora-tui")]
#[command(about = "Terminal client for the agora marketplace", long_about = None)]
pub struct Cli {
    /// Page to open, by name (`party-detail`) or path (`/wallet`)
    #[arg(short, long, default_value = "home")]
    pub page: String,

    /// Start signed in with this role
    #[arg(short, long, value_enum)]
    pub role: Option<RoleArg>,

    /// Data set JSON (defaults to ~/.local/share/agora-tui/dataset.json)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Log file (defaults to ~/.local/share/agora-tui/agora-tui.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Artificial delay before a lazy view finishes loading
    #[arg(long, default_value_t = 0)]
    pub load_delay_ms: u64,
}

impl Cli {
    /// The requested page; unknown names resolve to home.
    pub fn requested_page(&self) -> PageId {
        if self.page.starts_with('/') {
            PageId::from_path(&self.page)
        } else {
            PageId::resolve(&self.page)
        }
    }

    pub fn user_role(&self) -> Option<UserRole> {
        self.role.map(UserRole::from)
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn dataset_path(&self, paths: &Paths) -> PathBuf {
        self.data.clone().unwrap_or_else(|| paths.dataset.clone())
    }

    pub fn log_path(&self, paths: &Paths) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| paths.log_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("agora-tui").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.requested_page(), PageId::Home);
        assert_eq!(cli.user_role(), None);
        assert_eq!(cli.load_delay(), Duration::ZERO);
    }

    #[test]
    fn page_accepts_names_and_paths() {
        assert_eq!(parse(&["--page", "party-detail"]).requested_page(), PageId::PartyDetail);
        assert_eq!(parse(&["-p", "/wallet"]).requested_page(), PageId::Wallet);
        assert_eq!(parse(&["-p", "nowhere"]).requested_page(), PageId::Home);
    }

    #[test]
    fn role_and_delay() {
        let cli = parse(&["--role", "seller", "--load-delay-ms", "300"]);
        assert_eq!(cli.user_role(), Some(UserRole::Seller));
        assert_eq!(cli.load_delay(), Duration::from_millis(300));
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Cli::try_parse_from(["agora-tui", "--role", "admin"]).is_err());
    }

    #[test]
    fn explicit_paths_override_defaults() {
        let paths = Paths::resolve(Path::new("/home/u"));
        let cli = parse(&["--data", "/tmp/d.json"]);
        assert_eq!(cli.dataset_path(&paths), Path::new("/tmp/d.json"));
        assert_eq!(cli.log_path(&paths), paths.log_file);
    }
}
