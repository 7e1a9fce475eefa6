use frame_directive::{FrameDirective, resolve};

#[test]
fn test_frame_with_folio_keyword() {
    let directive = resolve("quiero el marco con folio", false, false);
    assert_eq!(
        directive,
        FrameDirective {
            apply_front: true,
            apply_rear: true,
            apply_folio: true,
            only_first_page: false,
        }
    );
}

#[test]
fn test_frame_with_folio_hint() {
    let directive = resolve("ponle el marco", true, false);
    assert!(directive.apply_front);
    assert!(directive.apply_rear);
    assert!(directive.apply_folio);
}

#[test]
fn test_first_page_and_front_only() {
    let directive = resolve("solo primera página, marco delantero", false, false);
    // "marco" also fires here, so rear comes along with front.
    assert!(directive.apply_front);
    assert!(directive.apply_rear);
    assert!(directive.only_first_page);

    // Without the generic keyword, front stays front-only.
    let directive = resolve("solo primera página, delantero", false, false);
    assert_eq!(
        directive,
        FrameDirective {
            apply_front: true,
            apply_rear: false,
            apply_folio: false,
            only_first_page: true,
        }
    );
}

#[test]
fn test_rear_triggers() {
    for intent in ["trasero", "el posterior por favor"] {
        let directive = resolve(intent, false, false);
        assert!(!directive.apply_front, "intent: {intent}");
        assert!(directive.apply_rear, "intent: {intent}");
    }
}

#[test]
fn test_auto_frame_overrides_text() {
    // Auto-frame sources never consult the text, even when it conflicts.
    for intent in ["", "sin marco por favor", "solo primera página"] {
        let directive = resolve(intent, true, true);
        assert_eq!(
            directive,
            FrameDirective {
                apply_front: true,
                apply_rear: true,
                apply_folio: true,
                only_first_page: false,
            },
            "intent: {intent}"
        );
    }

    let directive = resolve("marco con folio", false, true);
    assert!(!directive.apply_folio, "folio follows the hint, not the text");
}

#[test]
fn test_flags_are_monotonic() {
    // Extra unrelated text never turns a matched flag back off.
    let base = resolve("marco", false, false);
    let noisy = resolve("hola, quiero el marco de siempre, gracias", false, false);
    assert!(base.apply_front && noisy.apply_front);
    assert!(base.apply_rear && noisy.apply_rear);
}

#[test]
fn test_resolution_is_idempotent() {
    let inputs = [
        ("marco con folio", false, false),
        ("delantero y trasero", true, false),
        ("", true, true),
        ("primera página", false, false),
    ];
    for (intent, folio_hint, auto) in inputs {
        assert_eq!(
            resolve(intent, folio_hint, auto),
            resolve(intent, folio_hint, auto)
        );
    }
}

#[test]
fn test_nonsense_input_yields_default() {
    for intent in ["", "   ", "¿qué tal?", "frame me please"] {
        let directive = resolve(intent, false, false);
        assert_eq!(directive, FrameDirective::default(), "intent: {intent}");
        assert!(directive.is_empty());
    }
}

#[test]
fn test_has_frames() {
    assert!(!FrameDirective::default().has_frames());
    assert!(resolve("frontal", false, false).has_frames());
    assert!(resolve("posterior", false, false).has_frames());
}

#[cfg(feature = "serde")]
#[test]
fn test_directive_serializes() {
    let directive = resolve("marco con folio", false, false);
    let json = serde_json::to_string(&directive).unwrap();
    let back: FrameDirective = serde_json::from_str(&json).unwrap();
    assert_eq!(directive, back);
}
