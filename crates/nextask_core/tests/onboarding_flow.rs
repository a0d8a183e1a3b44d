use nextask_core::db::open_db_in_memory;
use nextask_core::{
    default_slides, OnboardingFlow, OnboardingState, RepoResult, SettingsRepository, Slide,
    SqliteSettingsRepository, HAS_ONBOARDED_KEY,
};

/// Repository whose writes always fail, for exercising the non-blocking
/// persistence contract.
struct BrokenSettings;

impl SettingsRepository for BrokenSettings {
    fn get(&self, _key: &str) -> RepoResult<Option<String>> {
        Err(rusqlite::Error::InvalidQuery.into())
    }

    fn set(&self, _key: &str, _value: &str) -> RepoResult<()> {
        Err(rusqlite::Error::InvalidQuery.into())
    }
}

fn two_slides() -> Vec<Slide> {
    vec![Slide::new("One", "first"), Slide::new("Two", "second")]
}

#[test]
fn advance_walks_slides_then_completes_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);
    let mut flow = OnboardingFlow::start(repo, default_slides());

    assert_eq!(flow.state(), OnboardingState::Slide(0));
    assert!(flow.advance().is_none());
    assert!(flow.advance().is_none());
    assert_eq!(flow.state(), OnboardingState::Slide(2));

    let outcome = flow.advance().expect("last advance completes the flow");
    assert!(outcome.persisted);
    assert!(flow.is_completed());

    let repo = SqliteSettingsRepository::new(&conn);
    assert_eq!(repo.get(HAS_ONBOARDED_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn skip_completes_from_any_slide_with_same_persistence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);
    let mut flow = OnboardingFlow::start(repo, default_slides());
    flow.advance();

    let outcome = flow.skip().expect("skip completes the flow");
    assert!(outcome.persisted);
    assert!(flow.is_completed());

    let repo = SqliteSettingsRepository::new(&conn);
    assert_eq!(repo.get(HAS_ONBOARDED_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn persisted_flag_fast_forwards_next_start() {
    let conn = open_db_in_memory().unwrap();

    let mut flow = OnboardingFlow::start(SqliteSettingsRepository::new(&conn), two_slides());
    flow.skip().unwrap();

    // Next "launch" against the same storage goes straight to the task
    // screen.
    let flow = OnboardingFlow::start(SqliteSettingsRepository::new(&conn), two_slides());
    assert_eq!(flow.state(), OnboardingState::Completed);
}

#[test]
fn completed_state_is_terminal() {
    let conn = open_db_in_memory().unwrap();
    let mut flow = OnboardingFlow::start(SqliteSettingsRepository::new(&conn), two_slides());

    flow.skip().unwrap();
    assert!(flow.advance().is_none());
    assert!(flow.skip().is_none());
    assert!(flow.is_completed());
}

#[test]
fn persistence_failure_is_reported_but_never_blocks() {
    let mut flow = OnboardingFlow::start(BrokenSettings, two_slides());
    // start() could not read the flag; the slides still show.
    assert_eq!(flow.state(), OnboardingState::Slide(0));

    let outcome = flow.skip().expect("skip still completes");
    assert!(!outcome.persisted);
    assert!(flow.is_completed());
}

#[test]
fn advance_and_skip_gate_identically_on_broken_storage() {
    let mut advanced = OnboardingFlow::new(BrokenSettings, two_slides());
    advanced.advance();
    let advance_outcome = advanced.advance().unwrap();

    let mut skipped = OnboardingFlow::new(BrokenSettings, two_slides());
    let skip_outcome = skipped.skip().unwrap();

    assert_eq!(advance_outcome, skip_outcome);
    assert!(!advance_outcome.persisted);
}
