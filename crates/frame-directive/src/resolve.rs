use crate::directive::FrameDirective;

/// Effect a matched trigger phrase has on the directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Generic "frame" request: front and rear together. The only trigger
    /// that can also enable the folio stamp (when the text mentions "folio"
    /// or the folio hint is set).
    FullFrame,
    /// Front background only.
    Front,
    /// Rear stamp frames only.
    Rear,
    /// Restrict overlays to the first page.
    FirstPageOnly,
}

/// Trigger vocabulary, matched as substrings of the lowercased intent text.
///
/// Entries are evaluated independently and are not mutually exclusive; a
/// single message can fire several. Matches only ever turn flags on.
pub const TRIGGERS: &[(&str, Trigger)] = &[
    ("marco", Trigger::FullFrame),
    ("solo primera", Trigger::FirstPageOnly),
    ("primera página", Trigger::FirstPageOnly),
    ("delantero", Trigger::Front),
    ("frontal", Trigger::Front),
    ("trasero", Trigger::Rear),
    ("posterior", Trigger::Rear),
];

/// Resolve a free-text intent plus explicit hints into a directive.
///
/// Total function: every input, including empty or nonsensical text, yields
/// a well-formed directive. An auto-frame source short-circuits text
/// analysis entirely: that channel always gets full framing, with the
/// folio stamp controlled solely by `folio_hint`.
pub fn resolve(intent: &str, folio_hint: bool, auto_frame_source: bool) -> FrameDirective {
    if auto_frame_source {
        return FrameDirective::auto_frame(folio_hint);
    }

    let text = intent.to_lowercase();
    let mut directive = FrameDirective::default();

    for (phrase, trigger) in TRIGGERS {
        if !text.contains(phrase) {
            continue;
        }
        match trigger {
            Trigger::FullFrame => {
                directive.apply_front = true;
                directive.apply_rear = true;
                if text.contains("folio") || folio_hint {
                    directive.apply_folio = true;
                }
            }
            Trigger::Front => directive.apply_front = true,
            Trigger::Rear => directive.apply_rear = true,
            Trigger::FirstPageOnly => directive.only_first_page = true,
        }
    }

    directive
}
