//! Prompt builders.
//!
//! Every prompt asks for headings and bullet lists so the reply renders
//! through `weldify-markup`.

use std::fmt::Display;

use weldify_calc::WeldingParameters;

/// Placeholder for a value the user did not provide.
pub const NOT_SPECIFIED: &str = "Not specified";

fn or_not_specified<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_SPECIFIED.to_owned(), |v| v.to_string())
}

fn text_or_not_specified(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() { NOT_SPECIFIED } else { value }
}

fn millimeters(value: Option<f64>) -> String {
    or_not_specified(value.map(|v| format!("{v} mm")))
}

/// Ask for starting machine settings for a welding setup.
#[must_use]
pub fn parameter_suggestion_prompt(params: &WeldingParameters) -> String {
    let process = or_not_specified(params.process);
    let material = or_not_specified(params.material);
    let thickness = millimeters(params.thickness);
    let joint = text_or_not_specified(params.joint_type.as_deref().unwrap_or_default());
    let diameter = millimeters(params.electrode_diameter.or(params.wire_diameter));
    let gas = text_or_not_specified(params.gas_type.as_deref().unwrap_or_default());

    format!(
        r"
You are Weldify, an expert welding assistant. A welder needs to set up their equipment.
Process: {process}
Material: {material}
Thickness: {thickness}
Joint type: {joint}
Wire/electrode diameter: {diameter}
Shielding gas (if applicable): {gas}

Provide the recommended starting parameters for this setup. Include:
- Amperage (A)
- Voltage (V) (if applicable)
- Wire speed (m/min or similar) (if applicable for MIG/MAG, FCAW)
- Polarity (e.g. DCEN, DCEP, AC)
- Specific electrode or wire type and diameter (e.g. E6013 3.2mm, ER70S-6 0.9mm)
- Gas flow rate (L/min or CFH) (if applicable)
- Additional tips or important considerations for this weld.

If crucial information for a good recommendation is missing (e.g. the electrode type for SMAW), say so and ask for it.
Format your answer clearly, with a heading and one bullet per parameter.
Example format:
### Recommended Parameters for {{Process}} on {{Material}} at {{Thickness}}mm

* **Amperage:** XX-YY A
* **Voltage:** XX-YY V
* **Wire Speed:** X.X m/min
* **Polarity:** DCEP
* **Electrode/Wire:** ER70S-6, 0.9mm
* **Shielding Gas:** Ar 80% / CO2 20% mix
* **Gas Flow:** 10-15 L/min
* **Additional Notes:** Clean the base metal thoroughly. Consider preheating for thick sections.
"
    )
}

/// Ask for causes, fixes and prevention of a weld defect.
#[must_use]
pub fn defect_analysis_prompt(description: &str, material: &str, process: &str) -> String {
    let description = description.trim();
    let material = text_or_not_specified(material);
    let process = text_or_not_specified(process);

    format!(
        r#"
You are Weldify, an expert in diagnosing welding defects.
A welder has found the following defect: "{description}".
The material being welded is: {material}.
The welding process used is: {process}.

Analyse this defect and provide:
1. **Most Likely Causes:** Explain why this defect may have occurred (e.g. wrong material or gas selection, incorrect technique, travel speed, temperature, surface preparation).
2. **Recommended Solutions:** Give practical, detailed fixes to correct this defect. For example, for cracks in aluminium you might mention a specific filler metal such as AlSi5 or a parameter adjustment.
3. **Preventive Actions:** Advice to stop this defect from happening again.

Format your answer clearly, with a heading for each section (Causes, Solutions, Prevention).
"#
    )
}

/// Ask a free-form welding question.
#[must_use]
pub fn general_question_prompt(question: &str) -> String {
    let question = question.trim();
    format!(
        r#"
You are Weldify, a highly knowledgeable welding instructor.
Answer the following user question as clearly, concisely and helpfully as possible. The question is:
"{question}"

Give an educational, practical answer. If the question is very broad, focus on the aspects most relevant to a welder.
"#
    )
}
