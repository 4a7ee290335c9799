//! services/client/src/report.rs
//!
//! Turns a validated analysis result into the structured display document.
//! The document is an ordered tree of blocks, not markup; generating actual
//! markup from it is the presentation shell's concern.

use health_advisor_core::domain::{AnalysisResult, SectionAdvice};

/// The placeholder entry rendered in place of an empty list.
pub const FALLBACK_ENTRY: &str = "None";

const REPORT_TITLE: &str = "Health Analysis";
const LIFESTYLE_LABEL: &str = "Lifestyle Changes";
const MEDICATIONS_LABEL: &str = "Medications";

//=========================================================================================
// Display Document Types
//=========================================================================================

/// One display block of the advisory report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A section heading together with its advisory message line.
    Section { heading: String, message: String },
    /// A labelled list. Always has at least one item: an empty source list is
    /// rendered as the single literal entry `"None"`.
    ItemList { label: String, items: Vec<String> },
    /// One entry per recognised fever type. Omitted entirely, rather than
    /// rendered empty, when the result carried no fever types.
    FeverTypes(Vec<FeverTypeEntry>),
}

/// A single fever type inside a `Block::FeverTypes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeverTypeEntry {
    pub name: String,
    pub description: String,
    /// The comma-joined rendering of the type's common symptoms.
    pub common_symptoms: String,
}

/// The full, ordered advisory report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

//=========================================================================================
// Rendering
//=========================================================================================

/// Renders an analysis result into its display document.
///
/// Pure and deterministic: the same result always yields the same document.
pub fn render(result: &AnalysisResult) -> Document {
    let mut blocks = Vec::new();

    push_vital_section(&mut blocks, "Blood Pressure", &result.blood_pressure);
    push_vital_section(&mut blocks, "Blood Sugar", &result.blood_sugar);
    push_vital_section(&mut blocks, "Body Temperature", &result.body_temperature.advice);

    if let Some(types) = &result.body_temperature.fever_types {
        blocks.push(Block::FeverTypes(
            types
                .iter()
                .map(|t| FeverTypeEntry {
                    name: t.name.clone(),
                    description: t.description.clone(),
                    common_symptoms: t.common_symptoms.join(", "),
                })
                .collect(),
        ));
    }

    // Symptom analysis contributes only its medications list.
    blocks.push(Block::ItemList {
        label: "Symptom Analysis".to_string(),
        items: items_or_fallback(&result.symptom_analysis.medications),
    });

    Document {
        title: REPORT_TITLE.to_string(),
        blocks,
    }
}

fn push_vital_section(blocks: &mut Vec<Block>, heading: &str, advice: &SectionAdvice) {
    blocks.push(Block::Section {
        heading: heading.to_string(),
        message: advice.message.clone(),
    });
    blocks.push(Block::ItemList {
        label: LIFESTYLE_LABEL.to_string(),
        items: items_or_fallback(&advice.lifestyle),
    });
    blocks.push(Block::ItemList {
        label: MEDICATIONS_LABEL.to_string(),
        items: items_or_fallback(&advice.medications),
    });
}

fn items_or_fallback(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        vec![FALLBACK_ENTRY.to_string()]
    } else {
        items.to_vec()
    }
}
