use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;
use std::time::Duration;
use v_password_generator::common::clipboard::ClipboardWriter;
use v_password_generator::common::error::ClipboardError;
use v_password_generator::common::generator::PasswordOptions;
use v_password_generator::common::session::{
    CopyIndicator, CopyOutcome, PasswordSession, PasswordState, ResetPolicy,
};

#[derive(Default)]
struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_owned());
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardWriter for BrokenClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no display".to_string()))
    }
}

fn mounted_session(policy: ResetPolicy) -> PasswordSession<ChaCha8Rng> {
    let mut session = PasswordSession::with_rng(
        PasswordOptions::default(),
        CopyIndicator::new(Duration::from_millis(2000), policy),
        ChaCha8Rng::seed_from_u64(2024),
    );
    session.mount();
    session
}

#[tokio::test(start_paused = true)]
async fn copy_writes_exact_password_and_flags_for_two_seconds() {
    let mut session = mounted_session(ResetPolicy::Independent);
    let clipboard = RecordingClipboard::default();

    assert!(!session.is_copied());
    let outcome = session.copy_password("aB3$kZ9!", &clipboard).await;
    assert_eq!(outcome, CopyOutcome::Copied);
    assert!(session.is_copied());
    assert_eq!(clipboard.writes(), vec!["aB3$kZ9!".to_string()]);

    tokio::time::sleep(Duration::from_millis(1990)).await;
    assert!(session.is_copied());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!session.is_copied());
}

#[tokio::test(start_paused = true)]
async fn failed_copy_changes_nothing() {
    let mut session = mounted_session(ResetPolicy::Independent);
    let before = session.password().unwrap().to_owned();

    let outcome = session.copy_current_password(&BrokenClipboard).await;
    assert_eq!(outcome, CopyOutcome::Failed);
    assert!(!session.is_copied());
    assert_eq!(session.password().unwrap(), before);
}

#[tokio::test(start_paused = true)]
async fn copy_before_mount_fails() {
    let mut session = PasswordSession::with_rng(
        PasswordOptions::default(),
        CopyIndicator::default(),
        ChaCha8Rng::seed_from_u64(1),
    );
    let clipboard = RecordingClipboard::default();

    assert_eq!(session.state(), &PasswordState::Idle);
    assert_eq!(
        session.copy_current_password(&clipboard).await,
        CopyOutcome::Failed
    );
    assert!(clipboard.writes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn rapid_copies_keep_the_first_reset() {
    let mut session = mounted_session(ResetPolicy::Independent);
    let clipboard = RecordingClipboard::default();

    session.copy_current_password(&clipboard).await;
    tokio::time::sleep(Duration::from_millis(1000)).await;
    session.copy_current_password(&clipboard).await;

    //The reset scheduled by the first copy still fires at 2000ms
    tokio::time::sleep(Duration::from_millis(1010)).await;
    assert!(!session.is_copied());
    assert_eq!(clipboard.writes().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn restart_policy_keeps_flag_until_last_window_ends() {
    let mut session = mounted_session(ResetPolicy::Restart);
    let clipboard = RecordingClipboard::default();

    session.copy_current_password(&clipboard).await;
    tokio::time::sleep(Duration::from_millis(1000)).await;
    session.copy_current_password(&clipboard).await;

    tokio::time::sleep(Duration::from_millis(1010)).await;
    assert!(session.is_copied());

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(!session.is_copied());
}

#[tokio::test(start_paused = true)]
async fn copy_follows_regenerated_password() {
    let mut session = mounted_session(ResetPolicy::Independent);
    let clipboard = RecordingClipboard::default();

    session.set_length(16);
    session.toggle_symbols();
    let current = session.password().unwrap().to_owned();
    assert_eq!(current.len(), 16);

    session.copy_current_password(&clipboard).await;
    assert_eq!(clipboard.writes(), vec![current]);
}
