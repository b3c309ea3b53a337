//! Trigger detection — categorized phrase tables and the analyzer that
//! scores an opponent's argument against them.

pub mod analyzer;
pub mod category;

pub use analyzer::{Analysis, DetectedTrigger, TriggerAnalyzer, TriggerScan};
pub use category::{TriggerCategory, TRIGGER_PATTERNS};
