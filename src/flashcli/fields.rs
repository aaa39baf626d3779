//! # Field Extraction
//!
//! Flashcard commands take free text carrying tagged fields:
//!
//! ```text
//! /q What is Java? /a A programming language. /c class Main {}
//! ```
//!
//! A [`FieldSpec`] names the tags a command recognizes and which of them are
//! required. Required tags must appear in their listed order; an optional tag
//! such as `/c` may sit anywhere after the first required one. Extraction walks the **first**
//! occurrence of each recognized tag; a field runs from just after its tag up
//! to the next first-occurrence of a different tag, or to the end of input.
//!
//! Repeating a tag does not start a new field. The repeated marker stays in the
//! text of the field it appears in, so `/q What is /q? /a ...` yields the
//! question `What is /q?`.

use crate::error::{FlashError, Result};
use std::fmt;

const CODE_INDENT: &str = "   ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Question,
    Answer,
    Code,
}

impl Tag {
    pub fn marker(&self) -> &'static str {
        match self {
            Tag::Question => "/q",
            Tag::Answer => "/a",
            Tag::Code => "/c",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// An ordered list of tags, used in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagList(pub Vec<Tag>);

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers: Vec<&str> = self.0.iter().map(Tag::marker).collect();
        write!(f, "{}", markers.join(" or "))
    }
}

/// Which tags a command accepts, in their required relative order.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub required: &'static [Tag],
    pub optional: &'static [Tag],
}

/// `add`: question and answer, optionally followed by a code snippet.
pub const CARD_FIELDS: FieldSpec = FieldSpec {
    required: &[Tag::Question, Tag::Answer],
    optional: &[Tag::Code],
};

/// `edit`: question and answer only.
pub const EDIT_FIELDS: FieldSpec = FieldSpec {
    required: &[Tag::Question, Tag::Answer],
    optional: &[],
};

/// `insert_code`: the code snippet only.
pub const CODE_FIELDS: FieldSpec = FieldSpec {
    required: &[Tag::Code],
    optional: &[],
};

/// `search`: either filter may be omitted, but at least one must be given.
pub const SEARCH_FIELDS: FieldSpec = FieldSpec {
    required: &[],
    optional: &[Tag::Question, Tag::Answer],
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub code: Option<String>,
}

impl Fields {
    pub fn get(&self, tag: Tag) -> Option<&str> {
        match tag {
            Tag::Question => self.question.as_deref(),
            Tag::Answer => self.answer.as_deref(),
            Tag::Code => self.code.as_deref(),
        }
    }

    /// Returns a field its [`FieldSpec`] marks as required.
    pub fn require(&self, tag: Tag) -> Result<&str> {
        self.get(tag)
            .ok_or_else(|| FlashError::MissingField(TagList(vec![tag])))
    }

    fn set(&mut self, tag: Tag, text: String) {
        match tag {
            Tag::Question => self.question = Some(text),
            Tag::Answer => self.answer = Some(text),
            Tag::Code => self.code = Some(text),
        }
    }
}

impl FieldSpec {
    fn recognized(&self) -> Vec<Tag> {
        self.required
            .iter()
            .chain(self.optional.iter())
            .copied()
            .collect()
    }

    /// Required tags keep their relative order and the first of them leads;
    /// optional tags may follow anywhere after it. Without required tags the
    /// optional ones are ordered instead.
    fn in_order(&self, found: &[(usize, Tag)]) -> bool {
        let ordered = if self.required.is_empty() {
            self.optional
        } else {
            self.required
        };
        let actual: Vec<Tag> = found
            .iter()
            .map(|(_, t)| *t)
            .filter(|t| ordered.contains(t))
            .collect();
        let expected: Vec<Tag> = ordered
            .iter()
            .copied()
            .filter(|t| actual.contains(t))
            .collect();
        if actual != expected {
            return false;
        }
        match (self.required.first(), found.first()) {
            (Some(first), Some((_, leading))) => leading == first,
            _ => true,
        }
    }

    /// Splits `raw` into its tagged fields.
    ///
    /// Checks run in this order: missing tags, tag order, leading text, blank
    /// fields. The first failing check decides the error.
    pub fn extract(&self, raw: &str) -> Result<Fields> {
        let input = raw.trim();
        let recognized = self.recognized();

        let mut found: Vec<(usize, Tag)> = recognized
            .iter()
            .filter_map(|tag| input.find(tag.marker()).map(|pos| (pos, *tag)))
            .collect();

        let missing_required = self
            .required
            .iter()
            .any(|tag| !found.iter().any(|(_, t)| t == tag));
        if found.is_empty() || missing_required {
            let expected = if self.required.is_empty() {
                recognized
            } else {
                self.required.to_vec()
            };
            return Err(FlashError::MissingField(TagList(expected)));
        }

        found.sort_by_key(|(pos, _)| *pos);

        let expected_order: Vec<Tag> = recognized
            .iter()
            .filter(|tag| found.iter().any(|(_, t)| t == *tag))
            .copied()
            .collect();
        if !self.in_order(&found) {
            return Err(FlashError::InvalidOrder(TagList(expected_order)));
        }

        if found[0].0 > 0 {
            return Err(FlashError::InvalidInput(TagList(recognized)));
        }

        let mut fields = Fields::default();
        for (i, (pos, tag)) in found.iter().enumerate() {
            let start = pos + tag.marker().len();
            let end = found.get(i + 1).map(|(next, _)| *next).unwrap_or(input.len());
            let text = input[start..end].trim();
            if text.is_empty() {
                return Err(FlashError::MissingDescription(tag.marker()));
            }
            fields.set(*tag, text.to_string());
        }

        Ok(fields)
    }
}

/// Lays a one-line code snippet out over several lines.
///
/// `{` opens an indented block, `}` closes it on a fresh line, `;` ends a
/// statement line. All other characters, including `...` placeholders and the
/// original spacing, are copied through.
pub fn format_code_snippet(code: &str) -> String {
    let mut out = String::with_capacity(code.len() * 2);
    let mut depth: usize = 0;

    for c in code.trim().chars() {
        match c {
            '{' => {
                depth += 1;
                out.push('{');
                push_line_break(&mut out, depth);
            }
            '}' => {
                depth = depth.saturating_sub(1);
                push_line_break(&mut out, depth);
                out.push('}');
            }
            ';' => {
                out.push(';');
                push_line_break(&mut out, depth);
            }
            other => out.push(other),
        }
    }

    out.trim().to_string()
}

fn push_line_break(out: &mut String, depth: usize) {
    out.push('\n');
    out.push_str(&CODE_INDENT.repeat(depth));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_question_and_answer() {
        let fields = CARD_FIELDS
            .extract("/q What is Java? /a A programming language.")
            .unwrap();
        assert_eq!(fields.question.as_deref(), Some("What is Java?"));
        assert_eq!(fields.answer.as_deref(), Some("A programming language."));
        assert_eq!(fields.code, None);
    }

    #[test]
    fn extracts_optional_code() {
        let fields = CARD_FIELDS
            .extract("/q Entry point? /a main /c fn main() {}")
            .unwrap();
        assert_eq!(fields.answer.as_deref(), Some("main"));
        assert_eq!(fields.code.as_deref(), Some("fn main() {}"));
    }

    #[test]
    fn blank_or_partial_input_is_missing_field() {
        for input in ["  ", "/q", "/a", "/q What is Java? ", "/a A programming language."] {
            let err = CARD_FIELDS.extract(input).unwrap_err();
            assert!(
                matches!(err, FlashError::MissingField(_)),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn blank_field_is_missing_description() {
        for input in [
            "/q /a A programming language.",
            "/q       /a A programming language.",
            "/q What is Java? /a",
            "/q What is Java? /a     ",
            "/q /a",
        ] {
            let err = CARD_FIELDS.extract(input).unwrap_err();
            assert!(
                matches!(err, FlashError::MissingDescription(_)),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn answer_before_question_is_invalid_order() {
        for input in ["/a A programming language. /q What is Java?", "/a /q"] {
            let err = CARD_FIELDS.extract(input).unwrap_err();
            assert!(matches!(err, FlashError::InvalidOrder(_)), "{input:?}");
        }
    }

    #[test]
    fn code_may_sit_between_question_and_answer() {
        let fields = CARD_FIELDS.extract("/q Q /c x; /a A").unwrap();
        assert_eq!(fields.question.as_deref(), Some("Q"));
        assert_eq!(fields.code.as_deref(), Some("x;"));
        assert_eq!(fields.answer.as_deref(), Some("A"));
    }

    #[test]
    fn code_before_question_is_invalid_order() {
        let err = CARD_FIELDS.extract("/c x; /q Q /a A").unwrap_err();
        assert!(matches!(err, FlashError::InvalidOrder(_)));
    }

    #[test]
    fn search_filters_keep_their_order() {
        let err = SEARCH_FIELDS.extract("/a A /q Q").unwrap_err();
        assert!(matches!(err, FlashError::InvalidOrder(_)));
    }

    #[test]
    fn leading_text_is_invalid_input() {
        let err = CARD_FIELDS
            .extract("afljafja/q What is Java? /a A programming language.")
            .unwrap_err();
        assert!(matches!(err, FlashError::InvalidInput(_)));
    }

    #[test]
    fn repeated_tag_stays_in_field_text() {
        let fields = CARD_FIELDS
            .extract("/q What is Java? /q Extra question /a A programming language.")
            .unwrap();
        assert_eq!(
            fields.question.as_deref(),
            Some("What is Java? /q Extra question")
        );
        assert_eq!(fields.answer.as_deref(), Some("A programming language."));
    }

    #[test]
    fn search_accepts_either_filter() {
        let only_q = SEARCH_FIELDS.extract("/q Java").unwrap();
        assert_eq!(only_q.question.as_deref(), Some("Java"));
        assert_eq!(only_q.answer, None);

        let only_a = SEARCH_FIELDS.extract("/a language").unwrap();
        assert_eq!(only_a.question, None);
        assert_eq!(only_a.answer.as_deref(), Some("language"));

        assert!(matches!(
            SEARCH_FIELDS.extract("").unwrap_err(),
            FlashError::MissingField(_)
        ));
    }

    #[test]
    fn code_fields_ignore_other_markers() {
        let fields = CODE_FIELDS.extract("/c let r = x/a;").unwrap();
        assert_eq!(fields.code.as_deref(), Some("let r = x/a;"));

        assert!(matches!(
            CODE_FIELDS.extract("/c ").unwrap_err(),
            FlashError::MissingDescription("/c")
        ));
        assert!(matches!(
            CODE_FIELDS.extract(" ").unwrap_err(),
            FlashError::MissingField(_)
        ));
    }

    #[test]
    fn missing_field_message_names_tags() {
        let err = CARD_FIELDS.extract("").unwrap_err();
        assert_eq!(err.to_string(), "Missing /q or /a in input.");
    }

    #[test]
    fn formats_nested_blocks() {
        assert_eq!(
            format_code_snippet("Class Java { void method() {...} }"),
            "Class Java {\n    void method() {\n      ...\n   } \n}"
        );
    }

    #[test]
    fn formats_statements() {
        assert_eq!(
            format_code_snippet("int a = 1; int b = 2;"),
            "int a = 1;\n int b = 2;"
        );
    }

    #[test]
    fn unbalanced_close_does_not_underflow() {
        assert_eq!(format_code_snippet("}}"), "}\n}");
    }
}
