use super::Candidate;

/// Validates collector output against the text it was collected from.
///
/// Asserts that:
/// - Every span is within the text and slices back to `source_slice`
/// - Every candidate is an element or fragment
/// - Orders are `0..n` and starts never go backwards (pre-order walk)
/// - Any two candidates are either nested or disjoint
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, candidates: &[Candidate]) {
    for (i, c) in candidates.iter().enumerate() {
        assert!(
            c.span.start <= c.span.end && c.span.end <= text.len(),
            "candidate span out of bounds: {:?} (text len: {})",
            c.span,
            text.len()
        );
        assert_eq!(
            c.span.slice(text),
            Some(c.source_slice.as_str()),
            "candidate slice does not match its span: {:?}",
            c.span
        );
        assert!(
            c.kind.is_wrappable(),
            "collector emitted a non-wrappable node: {c:?}"
        );
        assert_eq!(c.order, i, "candidate order out of sequence at {i}");
    }

    for pair in candidates.windows(2) {
        assert!(
            pair[0].span.start <= pair[1].span.start,
            "candidates not in document order: {:?} then {:?}",
            pair[0].span,
            pair[1].span
        );
    }

    for a in candidates {
        for b in candidates {
            let disjoint = a.span.end <= b.span.start || b.span.end <= a.span.start;
            assert!(
                disjoint || a.span.encloses(b.span) || b.span.encloses(a.span),
                "candidates partially overlap: {:?} and {:?}",
                a.span,
                b.span
            );
        }
    }
}
