use strum::{AsRefStr, Display as StrumDisplay};

/// Display class of a signed change. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, StrumDisplay)]
pub enum SignClass {
    #[strum(serialize = "positive")]
    Positive,
    #[strum(serialize = "negative")]
    Negative,
}

impl SignClass {
    /// `NaN` is not `>= 0` and classifies as negative.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 { SignClass::Positive } else { SignClass::Negative }
    }

    /// Full class attribute of a change slot
    pub fn class_name(&self) -> String {
        format!("change {}", self.as_ref())
    }
}

/// A percentage change paired with its display class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedChange {
    pub pct: f64,
    pub class: SignClass,
}

impl SignedChange {
    pub fn new(pct: f64) -> Self {
        Self { pct, class: SignClass::of(pct) }
    }
}
