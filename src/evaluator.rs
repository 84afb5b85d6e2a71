//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::blocklist::is_blocked;
use crate::hibp::RangeLookup;
use crate::sections::{composition_section, entropy_section, length_section, pattern_section};
use crate::types::{ScoreBreakdown, ScoreReport};

/// Evaluates password strength and returns a detailed report.
///
/// A password found in the breach corpus scores 0 outright; otherwise the
/// length, entropy, composition and pattern sections run independently and
/// their sum is clamped to the length check's cap. Corpus unavailability
/// never fails the evaluation.
///
/// # Arguments
/// * `password` - The password to evaluate (pre-validated to 64 characters
///   or fewer by the caller)
/// * `client` - Breach-corpus lookup capability
/// * `token` - Optional cancellation token; a cancelled evaluation reports
///   no score
pub async fn evaluate_password_strength<C>(
    password: &SecretString,
    client: &C,
    token: Option<CancellationToken>,
) -> ScoreReport
where
    C: RangeLookup + ?Sized,
{
    let token = token.unwrap_or_default();
    let pwd = password.expose_secret();

    if token.is_cancelled() {
        return cancelled_report();
    }

    // Blocklist hit overrides everything else.
    if is_blocked(pwd, client, &token).await {
        #[cfg(feature = "tracing")]
        tracing::info!("password found in breach corpus");
        return ScoreReport {
            score: Some(0),
            cap: 0,
            blocked: true,
            breakdown: None,
            reasons: vec!["Password appears in a known data breach".to_string()],
        };
    }

    if token.is_cancelled() {
        return cancelled_report();
    }

    let length = length_section(pwd);
    let entropy = entropy_section(pwd);
    let composition = composition_section(pwd);
    let penalty = pattern_section(pwd);

    let raw = i64::from(length.points) + i64::from(entropy.points) + i64::from(composition)
        - i64::from(penalty.points);
    let score = raw.clamp(0, i64::from(length.cap)) as u32;

    let mut reasons = Vec::new();
    if length.points == 0 {
        reasons.push("Password is shorter than 8 characters".to_string());
    }
    if entropy.points == 0 {
        reasons.push(format!(
            "Search space is only {:.1} bits; aim for 60 or more",
            entropy.bits
        ));
    }
    if composition == 0 {
        reasons.push("Mix upper and lower case with digits or symbols".to_string());
    }
    reasons.extend(penalty.reasons.iter().map(|r| (*r).to_string()));

    ScoreReport {
        score: Some(score),
        cap: length.cap,
        blocked: false,
        breakdown: Some(ScoreBreakdown {
            length_points: length.points,
            entropy_points: entropy.points,
            composition_points: composition,
            pattern_penalty: penalty.points,
            entropy_bits: entropy.bits,
            combinations: entropy.combinations,
        }),
        reasons,
    }
}

/// Async variant that sends the finished report via channel.
pub async fn evaluate_password_strength_tx<C>(
    password: &SecretString,
    client: &C,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreReport>,
) where
    C: RangeLookup + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    let report = evaluate_password_strength(password, client, Some(token)).await;

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

fn cancelled_report() -> ScoreReport {
    ScoreReport {
        score: None,
        cap: 0,
        blocked: false,
        breakdown: None,
        reasons: vec!["Evaluation cancelled".to_string()],
    }
}
