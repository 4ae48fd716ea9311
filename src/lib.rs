//! update-secrets - push a local file into AWS Secrets Manager and 1Password.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── update        # Shared dry-run / apply flow for every command
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── validation    # Options -> Plan
//!     ├── plan          # Immutable invocation parameters
//!     ├── payload       # File contents loader
//!     ├── cloud/        # SecretStore trait
//!     │   └── aws       # AWS Secrets Manager implementation
//!     ├── vault/        # DocumentVault trait
//!     │   └── op        # 1Password CLI implementation
//!     ├── update        # Apply flow
//!     ├── report        # Dry-run summaries
//!     └── config        # Optional TOML config file
//! ```
//!
//! Every command follows the same contract: validate, load the file, then
//! either print what would happen or do it.

pub mod cli;
pub mod core;
pub mod error;
