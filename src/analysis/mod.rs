pub mod color;
pub mod prediction;
pub mod text;

/// Appended verbatim to every analysis result, whatever the branch.
pub const DISCLAIMER: &str =
    "This app provides wellness guidance only and does not replace medical consultation.";
