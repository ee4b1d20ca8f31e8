//! Fixed report text: headings, labels, static commentary and fallbacks.

pub const PLACEHOLDER: &str = "Paste regulation text or a question, then click Generate.";

pub const DISCLAIMER_FULL: &str = "Reminder: informational only — not legal/tax/financial advice.";
pub const DISCLAIMER_SHORT: &str = "Reminder: informational only.";

/// Common misreadings; mode-independent.
pub const NOT_SAID: [&str; 3] = [
    "It does not guarantee how enforcement will treat every edge case.",
    "It does not confirm your specific action is compliant — that requires professional advice.",
    "It may not state thresholds, dates, or definitions unless explicitly included in the text.",
];

pub mod neutral {
    pub const HEADING: &str = "NEUTRAL INTERPRETATION (informational)";
    pub const SAYS: &str = "What it says (high level):";
    pub const OBLIGATIONS: &str = "Key obligations (from bullets / enumerations):";
    pub const NOT_SAID: &str = "What it does NOT say (common misread):";
    pub const UNCLEAR: &str = "Unclear / needs context:";
    pub const WATCHPOINTS: &str = "Watchpoints (non-advice):";

    pub const NO_BULLETS: &str = "No bullet or numbered list items were found in the pasted text.";
    pub const NO_AMBIGUITY: &str =
        "Depends on missing definitions, updates to guidance, and enforcement practice.";

    pub const WATCHPOINT_ITEMS: [&str; 3] = [
        "Confirm scope definitions and which entities/activities are captured.",
        "Track reporting/record retention obligations, timing, and data requirements.",
        "Note any 'may/subject to' language — interpretation can differ.",
    ];
}

pub mod simple {
    pub const HEADING: &str = "SIMPLE EXPLANATION (informational)";
    pub const KEY_POINTS: &str = "Key points:";
    pub const WATCH: &str = "What to watch:";
    /// How many of the not-said caveats the simple view shows.
    pub const WATCH_COUNT: usize = 2;
}

pub mod trader {
    pub const HEADING: &str = "TRADER VIEW (informational)";
    pub const CHANGES: &str = "What changes (high level):";
    pub const IMPACTS: &str = "Likely practical impacts (non-advice):";
    pub const UNCLEAR: &str = "What remains unclear:";

    pub const NO_AMBIGUITY: &str =
        "Ambiguity depends on missing definitions, guidance updates, and enforcement practice.";

    pub const IMPACT_ITEMS: [&str; 3] = [
        "More reporting / record-keeping burden for platforms and service providers.",
        "Greater focus on definitions (scope) and customer classification.",
        "Documentation and audit trails become more important during reviews.",
    ];
}

pub mod risks {
    pub const HEADING: &str = "RISK FRAMING (informational, non-advice)";
    pub const COMPLIANCE: &str = "Compliance risk:";
    pub const OPERATIONAL: &str = "Operational risk:";
    pub const ENFORCEMENT: &str = "Enforcement / interpretation risk:";
    pub const SIGNALS: &str = "Signals from the text you pasted:";
    pub const TRIGGERS: &str = "Ambiguity triggers detected:";

    pub const NO_AMBIGUITY: &str = "No obvious ambiguity triggers detected in the pasted text.";

    pub const COMPLIANCE_ITEMS: [&str; 2] = [
        "Misreading scope/definitions; failing stated reporting or record obligations.",
        "Weak documentation: inability to evidence compliance decisions.",
    ];
    pub const OPERATIONAL_ITEMS: [&str; 2] = [
        "Data retention, customer data collection, audit logging, vendor dependencies.",
        "Process changes: onboarding controls and internal review workflows.",
    ];
    pub const ENFORCEMENT_ITEMS: [&str; 2] = [
        "Different interpretations across firms until further guidance emerges.",
        "Rules can tighten through clarifications, casework, or supervisory focus.",
    ];
}
