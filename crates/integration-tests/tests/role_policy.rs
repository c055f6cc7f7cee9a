//! Cross-crate checks that need no live services: the role policy table,
//! post status transitions, and credential encryption through the public
//! API of the admin crate.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use brightwater_admin::config::CredentialKey;
use brightwater_admin::services::CredentialCipher;
use brightwater_core::policy::{self, PanelSection};
use brightwater_core::{AdminRole, PostStatus};

#[test]
fn test_role_policy_table() {
    use PanelSection::{Admins, Analytics, Dashboard, Posts, Social};

    assert_eq!(
        policy::sections_for(AdminRole::SuperAdmin),
        &[Dashboard, Social, Posts, Analytics, Admins]
    );
    assert_eq!(
        policy::sections_for(AdminRole::ContentAdmin),
        &[Dashboard, Posts]
    );
    assert_eq!(
        policy::sections_for(AdminRole::AnalyticsAdmin),
        &[Dashboard, Analytics]
    );
    assert_eq!(
        policy::sections_for(AdminRole::SocialAdmin),
        &[Dashboard, Social, Posts]
    );
}

#[test]
fn test_unknown_role_string_is_dashboard_only() {
    assert_eq!(
        policy::sections_for_str("janitor"),
        &[PanelSection::Dashboard]
    );
}

#[test]
fn test_every_role_sees_the_dashboard() {
    for role in AdminRole::ALL {
        assert!(policy::can_access(role, PanelSection::Dashboard));
    }
}

#[test]
fn test_post_status_transitions() {
    use PostStatus::{Draft, Failed, Published, Scheduled};

    assert!(Draft.can_transition_to(Scheduled));
    assert!(Scheduled.can_transition_to(Published));
    assert!(Draft.can_transition_to(Failed));
    assert!(Scheduled.can_transition_to(Failed));
    assert!(Published.can_transition_to(Failed));

    assert!(!Draft.can_transition_to(Published));
    assert!(!Published.can_transition_to(Draft));
    assert!(!Published.can_transition_to(Scheduled));
    assert!(!Failed.can_transition_to(Published));
}

#[test]
fn test_credential_cipher_through_public_api() {
    let encoded = BASE64.encode([42u8; 32]);
    let key = CredentialKey::from_base64("TEST_KEY", &encoded).expect("valid key");
    let cipher = CredentialCipher::new(&key);

    let token = "EAAB-platform-access-token-123";
    let sealed = cipher.encrypt(token).expect("encrypt");
    assert_ne!(sealed, token);
    assert_eq!(cipher.decrypt(&sealed).expect("decrypt"), token);
}
