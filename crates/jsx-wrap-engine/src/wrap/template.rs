use crate::parsing::rope::Span;

/// Identifier of the linked tag-name placeholder in rendered snippets.
pub const TAG_PLACEHOLDER: u32 = 1;

/// One piece of a [`WrapTemplate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text produced by the template itself
    Text(String),
    /// The wrapped node's original text, never altered
    Original(String),
    /// Linked, initially empty tag name; every occurrence edits together
    TagName,
    /// Where the cursor lands once the placeholders are done
    FinalStop,
}

/// Opening tag, the original node one level deeper, closing tag, final stop.
///
/// ```text
/// <TAG>
/// {base}{unit}{original}
/// {base}</TAG>$0
/// ```
///
/// `base` is the indentation of the line the node starts on. Every line of the
/// original text moves one `unit` deeper: the unit is a [`Segment::Text`]
/// placed before each line, so the [`Segment::Original`] pieces still join up
/// to the node's exact source. Blank lines get no unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapTemplate {
    segments: Vec<Segment>,
}

/// A template expanded at a document offset with a concrete tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    pub text: String,
    /// Absolute spans of each tag-name occurrence, opening tag first
    pub tag_slots: Vec<Span>,
    /// Absolute offset of the final stop
    pub final_stop: usize,
}

impl WrapTemplate {
    pub fn new(original: &str, base_indent: &str, indent_unit: &str) -> Self {
        let mut segments = vec![
            Segment::Text("<".to_string()),
            Segment::TagName,
            Segment::Text(format!(">\n{base_indent}")),
        ];
        for line in original.split_inclusive('\n') {
            if !line.trim().is_empty() {
                segments.push(Segment::Text(indent_unit.to_string()));
            }
            segments.push(Segment::Original(line.to_string()));
        }
        segments.extend([
            Segment::Text(format!("\n{base_indent}</")),
            Segment::TagName,
            Segment::Text(">".to_string()),
            Segment::FinalStop,
        ]);
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The original node text carried by the template.
    pub fn original(&self) -> String {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Original(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Render in LSP/TextMate snippet syntax: `${1}` for the tag name, `$0`
    /// for the final stop, with `\`, `$` and `}` escaped in literal text.
    pub fn to_snippet(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) | Segment::Original(text) => escape_snippet_text(text, &mut out),
                Segment::TagName => out.push_str(&format!("${{{TAG_PLACEHOLDER}}}")),
                Segment::FinalStop => out.push_str("$0"),
            }
        }
        out
    }

    /// Expand at `at` with `tag` filled into every tag slot.
    pub fn layout(&self, at: usize, tag: &str) -> TemplateLayout {
        let mut text = String::new();
        let mut tag_slots = Vec::new();
        let mut final_stop = None;

        for segment in &self.segments {
            match segment {
                Segment::Text(s) | Segment::Original(s) => text.push_str(s),
                Segment::TagName => {
                    let start = at + text.len();
                    text.push_str(tag);
                    tag_slots.push(Span::new(start, at + text.len()));
                }
                Segment::FinalStop => final_stop = Some(at + text.len()),
            }
        }

        TemplateLayout {
            final_stop: final_stop.unwrap_or(at + text.len()),
            text,
            tag_slots,
        }
    }
}

fn escape_snippet_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        if matches!(ch, '\\' | '$' | '}') {
            out.push('\\');
        }
        out.push(ch);
    }
}
