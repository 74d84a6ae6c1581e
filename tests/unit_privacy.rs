use campusgrid::campusgrid_models::{
    BlockReason, PrivacyLevel, ViewerPrivacy, Visibility, evaluate_visibility,
};

fn viewer(is_owner: bool, own_level: PrivacyLevel) -> ViewerPrivacy {
    ViewerPrivacy {
        is_owner,
        own_level,
    }
}

#[test]
fn test_public_is_visible_to_everyone() {
    assert_eq!(
        evaluate_visibility(PrivacyLevel::Public, None),
        Visibility::Visible
    );
    assert_eq!(
        evaluate_visibility(
            PrivacyLevel::Public,
            Some(&viewer(false, PrivacyLevel::Private))
        ),
        Visibility::Visible
    );
}

#[test]
fn test_private_is_owner_only() {
    assert_eq!(
        evaluate_visibility(PrivacyLevel::Private, None),
        Visibility::Blocked(BlockReason::Private)
    );
    assert_eq!(
        evaluate_visibility(
            PrivacyLevel::Private,
            Some(&viewer(false, PrivacyLevel::Public))
        ),
        Visibility::Blocked(BlockReason::Private)
    );
    assert_eq!(
        evaluate_visibility(
            PrivacyLevel::Private,
            Some(&viewer(true, PrivacyLevel::Private))
        ),
        Visibility::Visible
    );
}

#[test]
fn test_mutual_requires_login() {
    assert_eq!(
        evaluate_visibility(PrivacyLevel::Mutual, None),
        Visibility::Blocked(BlockReason::LoginRequired)
    );
}

#[test]
fn test_mutual_blocks_private_viewers() {
    assert_eq!(
        evaluate_visibility(
            PrivacyLevel::Mutual,
            Some(&viewer(false, PrivacyLevel::Private))
        ),
        Visibility::Blocked(BlockReason::ViewerTooRestrictive)
    );
}

#[test]
fn test_mutual_admits_non_private_viewers() {
    assert_eq!(
        evaluate_visibility(
            PrivacyLevel::Mutual,
            Some(&viewer(false, PrivacyLevel::Public))
        ),
        Visibility::Visible
    );
    assert_eq!(
        evaluate_visibility(
            PrivacyLevel::Mutual,
            Some(&viewer(false, PrivacyLevel::Mutual))
        ),
        Visibility::Visible
    );
}

#[test]
fn test_block_reasons_have_distinct_messages() {
    let messages = [
        BlockReason::Private.message(),
        BlockReason::LoginRequired.message(),
        BlockReason::ViewerTooRestrictive.message(),
    ];

    for (i, a) in messages.iter().enumerate() {
        for b in messages.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_stored_level_round_trip() {
    for level in [
        PrivacyLevel::Public,
        PrivacyLevel::Mutual,
        PrivacyLevel::Private,
    ] {
        assert_eq!(PrivacyLevel::from_stored(level.as_stored()), Some(level));
    }
    assert_eq!(PrivacyLevel::from_stored(3), None);
}
