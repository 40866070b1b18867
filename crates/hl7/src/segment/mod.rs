//! Position-addressable HL7 segment model

mod orc;

pub use orc::OrcSegment;

use crate::encoding::EncodingCharacters;
use crate::error::Hl7Error;

/// A position-addressable HL7 segment
///
/// Fields and components are 1-based as in HL7 notation (ORC-7.4 is
/// field 7, component 4). Unset slots read as the empty string.
#[derive(Debug, Clone)]
pub struct Segment {
    id: String,
    fields: Vec<Vec<String>>,
}

impl Segment {
    /// Create a segment with `field_count` empty fields
    pub fn new(id: impl Into<String>, field_count: usize) -> Self {
        Self {
            id: id.into(),
            fields: vec![vec![String::new()]; field_count],
        }
    }

    /// Segment identifier, e.g. "ORC"
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Read a component; the empty string when unset or out of range
    pub fn component(&self, field: usize, component: usize) -> &str {
        field
            .checked_sub(1)
            .and_then(|f| self.fields.get(f))
            .and_then(|f| component.checked_sub(1).and_then(|c| f.get(c)))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Overwrite a component, growing the field's component list as needed
    ///
    /// Fails when `value` contains an encoding character or the position
    /// lies outside the segment.
    pub fn set_component(
        &mut self,
        field: usize,
        component: usize,
        value: &str,
    ) -> Result<(), Hl7Error> {
        let encoding = EncodingCharacters::standard();
        if let Some(bad) = value.chars().find(|c| encoding.is_delimiter(*c)) {
            return Err(Hl7Error::DataType {
                location: format!("{}-{}.{}", self.id, field, component),
                reason: format!("value contains encoding character '{bad}'"),
            });
        }

        let slot = field
            .checked_sub(1)
            .and_then(|f| self.fields.get_mut(f))
            .filter(|_| component >= 1)
            .ok_or_else(|| Hl7Error::DataType {
                location: format!("{}-{}.{}", self.id, field, component),
                reason: "position outside segment".to_string(),
            })?;
        if slot.len() < component {
            slot.resize(component, String::new());
        }
        slot[component - 1] = value.to_string();

        Ok(())
    }

    /// Pipe/caret encode the segment
    ///
    /// Trailing empty components within a field and trailing empty fields
    /// within the segment are trimmed, so a fresh segment encodes to just
    /// its identifier.
    pub fn encode(&self, encoding: &EncodingCharacters) -> String {
        let component_sep = encoding.component.to_string();
        let mut fields: Vec<String> = self
            .fields
            .iter()
            .map(|components| {
                let used = components
                    .iter()
                    .rposition(|c| !c.is_empty())
                    .map_or(0, |i| i + 1);
                components[..used].join(&component_sep)
            })
            .collect();
        while fields.last().is_some_and(String::is_empty) {
            fields.pop();
        }

        let mut out = self.id.clone();
        for field in &fields {
            out.push(encoding.field);
            out.push_str(field);
        }
        out
    }
}
