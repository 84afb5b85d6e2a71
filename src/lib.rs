//! Password strength analysis library
//!
//! Scores a password 0-100 from independent checks (length, entropy,
//! composition, pattern penalties) under a length-derived cap, after first
//! screening it against a breach corpus through a k-anonymity range lookup.
//! Leet-speak obfuscation is defeated by expanding the password into every
//! plausible unsubstituted original before the corpus check.
//!
//! # Features
//!
//! - `client` (default): Bundled reqwest-backed breach-corpus client
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_analyser::{evaluate_password_strength, BreachApiClient};
//! use secrecy::SecretString;
//!
//! # async fn run() -> Result<(), pwd_analyser::LookupError> {
//! let client = BreachApiClient::new()?;
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let report = evaluate_password_strength(&password, &client, None).await;
//!
//! println!("Score: {:?}", report.score);
//! println!("Strength: {:?}", report.strength());
//! # Ok(())
//! # }
//! ```

// Internal modules
mod blocklist;
mod evaluator;
mod hibp;
mod sections;
mod substitutions;
mod types;

// Public API
pub use blocklist::is_blocked;
pub use evaluator::{evaluate_password_strength, evaluate_password_strength_tx};
#[cfg(feature = "client")]
pub use hibp::BreachApiClient;
pub use hibp::{LookupError, RangeLookup};
pub use substitutions::{expand, MAX_CANDIDATES};
pub use types::{ScoreBreakdown, ScoreReport, Strength};
