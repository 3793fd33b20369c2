// Sozluk Embedded Data
// Sample dictionary document compiled into the binary

/// Embedded sample dictionary document (JSON, headword → entry)
///
/// A small cut of the deployed `semantic.json`, used as the CLI's default
/// dictionary and by the benchmark harness.
pub const SAMPLE_DICT: &str = include_str!("../data/semantic.json");
