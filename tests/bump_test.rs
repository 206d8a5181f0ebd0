// tests/bump_test.rs
use semver_bump::domain::{
    BumpDirective, BumpKind, Prerelease, PrereleaseIdentifier, SemanticVersion,
};
use semver_bump::{bump, BumpError};

fn directive(kind: BumpKind, prerelease: bool) -> BumpDirective {
    BumpDirective::new(kind, prerelease)
}

fn sample_releases() -> Vec<SemanticVersion> {
    vec![
        SemanticVersion::new(0, 0, 0),
        SemanticVersion::new(0, 1, 0),
        SemanticVersion::new(1, 2, 3),
        SemanticVersion::new(10, 20, 30),
        SemanticVersion::new(1, 0, 9).with_build("exp.sha.5114f85"),
    ]
}

#[test]
fn test_patch_bump_law() {
    for v in sample_releases() {
        let next = bump(v.clone(), &directive(BumpKind::Patch, false)).unwrap();
        assert_eq!(next.patch, v.patch + 1);
        assert_eq!((next.major, next.minor), (v.major, v.minor));
        assert!(next.prerelease.is_empty());
    }
}

#[test]
fn test_minor_bump_law() {
    for v in sample_releases() {
        let next = bump(v.clone(), &directive(BumpKind::Minor, false)).unwrap();
        assert_eq!(next.major, v.major);
        assert_eq!(next.minor, v.minor + 1);
        assert_eq!(next.patch, 0);
    }
}

#[test]
fn test_major_bump_law() {
    for v in sample_releases() {
        let next = bump(v.clone(), &directive(BumpKind::Major, false)).unwrap();
        assert_eq!(next.major, v.major + 1);
        assert_eq!(next.minor, 0);
        assert_eq!(next.patch, 0);
    }
}

#[test]
fn test_finalize_law() {
    let prereleases = ["1.2.3-rc.1", "0.1.0-5", "2.0.0-alpha.beta.gamma", "3.0.0-x"];
    for raw in prereleases {
        let v = SemanticVersion::parse(raw).unwrap();
        for kind in BumpKind::ALL {
            let next = bump(v.clone(), &directive(kind, false)).unwrap();
            assert!(next.prerelease.is_empty(), "{} should finalize", raw);
            assert_eq!(
                (next.major, next.minor, next.patch),
                (v.major, v.minor, v.patch)
            );
        }
    }
}

#[test]
fn test_prerelease_increment_law() {
    let v = SemanticVersion::new(1, 2, 3).with_prerelease(Prerelease::train("rc"));
    let next = bump(v, &directive(BumpKind::Patch, true)).unwrap();
    assert_eq!(
        next,
        SemanticVersion::new(1, 2, 3).with_prerelease(vec![
            PrereleaseIdentifier::alphanumeric("rc"),
            PrereleaseIdentifier::numeric(2),
        ])
    );
}

#[test]
fn test_numeric_only_prerelease_increment() {
    let v = SemanticVersion::new(0, 1, 0).with_prerelease(vec![PrereleaseIdentifier::numeric(5)]);
    let next = bump(v, &directive(BumpKind::Major, true)).unwrap();
    assert_eq!(
        next,
        SemanticVersion::new(0, 1, 0).with_prerelease(vec![PrereleaseIdentifier::numeric(6)])
    );
}

#[test]
fn test_new_prerelease_train() {
    let next = bump(
        SemanticVersion::new(1, 2, 3),
        &directive(BumpKind::Minor, true),
    )
    .unwrap();
    assert_eq!(
        next,
        SemanticVersion::new(1, 3, 0).with_prerelease(Prerelease::train("rc"))
    );
    assert_eq!(next.to_string(), "1.3.0-rc.1");
}

#[test]
fn test_unsupported_shape_failure() {
    let v = SemanticVersion::new(1, 0, 0).with_prerelease(vec![
        PrereleaseIdentifier::alphanumeric("alpha"),
        PrereleaseIdentifier::alphanumeric("beta"),
        PrereleaseIdentifier::numeric(1),
    ]);
    let err = bump(v, &directive(BumpKind::Patch, true)).unwrap_err();
    assert!(matches!(err, BumpError::UnsupportedPrereleaseFormat(_)));
}

#[test]
fn test_non_numeric_trailing_identifier_failure() {
    let v = SemanticVersion::parse("1.0.0-rc.final").unwrap();
    let err = bump(v, &directive(BumpKind::Patch, true)).unwrap_err();
    assert!(matches!(err, BumpError::UnsupportedPrereleaseFormat(_)));
}

#[test]
fn test_invalid_kind() {
    let err = BumpDirective::parse("bogus", false).unwrap_err();
    assert!(matches!(err, BumpError::InvalidBumpKind(ref k) if k == "bogus"));
}

#[test]
fn test_bump_always_raises_precedence() {
    let inputs = ["0.0.0", "1.2.3", "1.2.3-rc.1", "1.2.3-7", "4.5.6-beta.9+meta"];
    for raw in inputs {
        let v = SemanticVersion::parse(raw).unwrap();
        for kind in BumpKind::ALL {
            for prerelease in [false, true] {
                let next = bump(v.clone(), &directive(kind, prerelease)).unwrap();
                assert!(
                    next > v,
                    "{} bumped ({}, pre={}) gave {} which does not rank higher",
                    raw,
                    kind,
                    prerelease,
                    next
                );
            }
        }
    }
}

#[test]
fn test_build_metadata_is_never_mutated() {
    let v = SemanticVersion::parse("1.2.3-rc.1+ci.42").unwrap();
    for prerelease in [false, true] {
        let next = bump(v.clone(), &directive(BumpKind::Minor, prerelease)).unwrap();
        assert_eq!(next.build, "ci.42");
    }
}
