//! Command-line interface.

pub mod completions;
pub mod output;
pub mod update;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::PROFILE_ENV;
use crate::core::validation::{Mode, Options};

/// Update 1password and SecretsManager token.
///
/// Without a subcommand, writes the 1password item and then the
/// SecretsManager secret. Every command is a dry-run unless `-a` is given.
#[derive(Parser)]
#[command(
    name = "update-secrets",
    about = "Update 1password and SecretsManager token.",
    version,
    args_conflicts_with_subcommands = true,
    after_help = "Show help with [-h] option."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub update: UpdateArgs,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Update SecretsManager token, region taken from the AWS profile
    #[command(
        after_help = "Example:\n  update-secrets secret -e dev -f testtoken.yaml -s arn:aws:secretsmanager:ap-northeast-1:xxx"
    )]
    Secret(SecretArgs),

    /// Update SecretsManager token
    #[command(
        name = "aws-secrets-manager",
        alias = "aws",
        after_help = "Example:\n  update-secrets aws-secrets-manager -e dev -f testtoken.yaml -s arn:aws:secretsmanager:ap-northeast-1:xxx"
    )]
    SecretsManager(SecretsManagerArgs),

    /// Update 1password item
    #[command(name = "1password", alias = "op")]
    OnePassword(OnePasswordArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Flags every command shares.
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// Apply the change (default: dry-run)
    #[arg(short, long)]
    pub apply: bool,

    /// Show the unmasked secret reference and file contents in the dry-run
    #[arg(long)]
    pub reveal: bool,

    /// File path defined token information
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Flags selecting the SecretsManager secret.
#[derive(Args, Debug, Default)]
pub struct CloudArgs {
    /// Environment [dev, stg, prd]
    #[arg(short, long)]
    pub env: Option<String>,

    /// Secret name or ARN
    #[arg(short, long)]
    pub secret: Option<String>,

    /// AWS profile; must contain the environment name
    #[arg(short, long, env = PROFILE_ENV)]
    pub profile: Option<String>,
}

/// Flags selecting the 1password item.
#[derive(Args, Debug, Default)]
pub struct VaultArgs {
    /// Vault name, or a comma-separated list of vaults
    #[arg(short, long)]
    pub vault: Option<String>,

    /// Title of item
    #[arg(short, long)]
    pub title: Option<String>,

    /// Select edit or create
    #[arg(short, long, default_value = "edit")]
    pub operation: String,
}

/// `secret` flags.
#[derive(Args, Debug)]
pub struct SecretArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub cloud: CloudArgs,
}

/// `aws-secrets-manager` flags.
#[derive(Args, Debug)]
pub struct SecretsManagerArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub cloud: CloudArgs,

    /// AWS region [default: ap-northeast-1]
    #[arg(short, long)]
    pub region: Option<String>,
}

/// `1password` flags.
#[derive(Args, Debug)]
pub struct OnePasswordArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub vault: VaultArgs,
}

/// Root command flags: the union of the above.
#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub cloud: CloudArgs,
    #[command(flatten)]
    pub vault: VaultArgs,

    /// AWS region [default: ap-northeast-1]
    #[arg(short, long)]
    pub region: Option<String>,
}

impl CommonArgs {
    fn fill(&self, opts: &mut Options) {
        opts.apply = self.apply;
        opts.reveal = self.reveal;
        opts.file = self.file.clone().unwrap_or_default();
    }
}

impl CloudArgs {
    fn fill(&self, opts: &mut Options) {
        opts.env = self.env.clone().unwrap_or_default();
        opts.secret = self.secret.clone().unwrap_or_default();
        opts.profile = self.profile.clone().unwrap_or_default();
    }
}

impl VaultArgs {
    fn fill(&self, opts: &mut Options) {
        opts.vault = self.vault.clone().unwrap_or_default();
        opts.title = self.title.clone().unwrap_or_default();
        opts.operation = self.operation.clone();
    }
}

impl SecretArgs {
    pub fn options(&self) -> Options {
        let mut opts = Options::default();
        self.common.fill(&mut opts);
        self.cloud.fill(&mut opts);
        opts
    }
}

impl SecretsManagerArgs {
    pub fn options(&self) -> Options {
        let mut opts = Options::default();
        self.common.fill(&mut opts);
        self.cloud.fill(&mut opts);
        opts.region = self.region.clone();
        opts
    }
}

impl OnePasswordArgs {
    pub fn options(&self) -> Options {
        let mut opts = Options::default();
        self.common.fill(&mut opts);
        self.vault.fill(&mut opts);
        opts
    }
}

impl UpdateArgs {
    pub fn options(&self) -> Options {
        let mut opts = Options::default();
        self.common.fill(&mut opts);
        self.cloud.fill(&mut opts);
        self.vault.fill(&mut opts);
        opts.region = self.region.clone();
        opts
    }
}

/// Execute a command. No subcommand runs the combined update.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    match cli.command {
        Some(Command::Secret(args)) => update::run(Mode::Secret, args.options()),
        Some(Command::SecretsManager(args)) => update::run(Mode::SecretsManager, args.options()),
        Some(Command::OnePassword(args)) => update::run(Mode::OnePassword, args.options()),
        Some(Command::Completions { shell }) => completions::execute(shell),
        None => update::run(Mode::Combined, cli.update.options()),
    }
}
